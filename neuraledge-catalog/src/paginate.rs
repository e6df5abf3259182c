//! Pagination

use neuraledge_core::dto::workflow::PaginatedResult;

/// Page size used when the request does not name one
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Slice `items` into the requested page
///
/// Total pages is `ceil(len / page_size)` but never less than 1, so an empty
/// input still reports page 1 of 1. The requested page is clamped into
/// `[1, total_pages]`; zero, negative and out-of-range pages never fail.
/// A `page_size` of zero is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> PaginatedResult<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);

    let current_page = page.clamp(1, total_pages as i64) as usize;

    let start = ((current_page - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    PaginatedResult {
        workflows: items[start..end].to_vec(),
        total_pages,
        current_page,
        total_count,
    }
}
