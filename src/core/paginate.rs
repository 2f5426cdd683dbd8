/// Slice a ranked list into one page.
///
/// `page` and `limit` are 1-based and assumed validated by the caller.
/// An offset at or beyond the end of the list yields an empty page, not
/// an error; the total count is reported separately by the engine.
pub fn paginate<T>(items: Vec<T>, page: u32, limit: u32) -> Vec<T> {
    let offset = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    if offset >= items.len() {
        return Vec::new();
    }

    items
        .into_iter()
        .skip(offset)
        .take(limit as usize)
        .collect()
}
