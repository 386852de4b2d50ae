pub mod gallerydtos;
pub mod propertydtos;
pub mod userdtos;
pub mod visitdtos;
