/// One page of an ordered, already-filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Slice `items` into fixed-size pages and return the requested one with
/// page metadata.
///
/// An out-of-range page yields an empty slice, not an error; a zero page
/// number or page size is a caller bug and is rejected. Callers must reset
/// to page 1 whenever the filter producing `items` changes, so a stale page
/// number is never silently clamped against a shorter set.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>, String> {
    if page_size == 0 {
        return Err("Page size must be greater than zero".to_string());
    }
    if page == 0 {
        return Err("Page number must be greater than zero".to_string());
    }

    let total_pages = if items.is_empty() {
        0
    } else {
        (items.len() + page_size - 1) / page_size
    };

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Ok(Page {
        items: items[start..end].to_vec(),
        total_pages,
        current_page: page,
    })
}
