use serde::Serialize;

/// One page of an ordered list plus the metadata a pager needs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

/// Slice `ordered` into the requested page
///
/// `total_pages` is at least 1 even for an empty list. A page past the end
/// yields no items rather than an error, and the requested page number is
/// reported back unchanged. Page 0 and a page size of 0 are read as 1.
pub fn paginate<T: Clone>(ordered: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = requested_page.max(1);
    let total_count = ordered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);

    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    Page {
        items: ordered[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_count,
    }
}
