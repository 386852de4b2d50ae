pub mod gallerymodel;
pub mod propertymodel;
pub mod usermodel;
pub mod visitmodel;
