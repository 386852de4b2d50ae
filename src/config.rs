#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed page size used by the public listing grid.
    pub listing_page_size: usize,
    /// Upload ceiling for property and gallery images, in bytes.
    pub max_image_upload_bytes: usize,
    /// Upload ceiling for video media, in bytes.
    pub max_video_upload_bytes: usize,
}

impl Config {
    pub fn init() -> Config {
        let listing_page_size = std::env::var("LISTING_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(6);
        let max_image_upload_bytes = std::env::var("MAX_IMAGE_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);
        let max_video_upload_bytes = std::env::var("MAX_VIDEO_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(500 * 1024 * 1024);

        Config {
            listing_page_size,
            max_image_upload_bytes,
            max_video_upload_bytes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listing_page_size: 6,
            max_image_upload_bytes: 10 * 1024 * 1024,
            max_video_upload_bytes: 500 * 1024 * 1024,
        }
    }
}
