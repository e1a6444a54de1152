use crate::models::Pagination;

/// Slice one page out of the full result set.
///
/// Out-of-range pages return an empty slice, never an error: a client
/// paging past the end just sees no results.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> (Vec<T>, Pagination) {
    let total = items.len();
    let limit_usize = limit.max(1) as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(limit_usize);
    let end = start.saturating_add(limit_usize).min(total);

    let slice: Vec<T> = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(limit_usize).collect()
    };

    let total_pages = total.div_ceil(limit_usize) as u32;

    let meta = Pagination {
        current_page: page,
        total_pages,
        total_results: total,
        has_more: end < total,
        limit,
    };

    (slice, meta)
}
