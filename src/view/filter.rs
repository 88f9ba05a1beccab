use crate::store::Category;

/// Filter categories by a user-entered search term.
///
/// A category is retained iff its name or description, lowercased, contains
/// the lowercased term as a substring. The empty term matches everything.
/// Pure function of its inputs; relative order is preserved.
pub fn filter_categories(categories: &[Category], search_term: &str) -> Vec<Category> {
    let term = search_term.to_lowercase();

    categories
        .iter()
        .filter(|category| {
            category.name.to_lowercase().contains(&term)
                || category.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}
