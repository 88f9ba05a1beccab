//! Category listing view, modeled as an explicit state machine.
//!
//! Loading is a one-shot asynchronous operation driven by a
//! [`CategoryFetcher`]; filtering is derived on read from the loaded list
//! and the current search term; rendering produces a typed card model that
//! the presentation layer draws from.

pub mod fetch;
pub mod filter;

pub use fetch::{CategoryFetcher, FetchError, HttpCategoryFetcher};
pub use filter::filter_categories;

use crate::store::Category;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::error;

/// Number of placeholder cards shown before the fetch resolves.
pub const PLACEHOLDER_CARD_COUNT: usize = 6;

/// Static apply call-to-action, rendered below the grid regardless of
/// data, loading, or filter state.
pub const APPLY_HREF: &str = "/apply";
pub const APPLY_TITLE: &str = "Want to participate as a candidate?";
pub const APPLY_BODY: &str =
    "Apply now to be featured in our award election and get a chance to win!";

pub const EMPTY_STATE_TITLE: &str = "No categories found";
pub const EMPTY_STATE_BODY: &str = "No categories match your search criteria.";

// Query-component charset: keep the unreserved marks, encode the rest
// (spaces and separators must not break the query string).
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Observable load states of the view.
///
/// Failure stays distinguishable from an empty result here even though the
/// rendering of the two is identical.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Vec<Category>),
    Failed(String),
}

/// One rendered category card.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub name: String,
    pub description: String,
    /// Count badge text, singular iff the count is exactly 1.
    pub count_badge: String,
    /// "Leading: {name} ({votes})", present iff a top candidate exists.
    pub leading: Option<String>,
    /// Candidates listing scoped to this category, name URL-encoded.
    pub candidates_href: String,
}

impl CategoryCard {
    fn from_category(category: &Category) -> Self {
        let noun = if category.candidate_count == 1 {
            "Candidate"
        } else {
            "Candidates"
        };

        let leading = category.top_candidate_name.as_ref().map(|name| {
            format!(
                "Leading: {} ({})",
                name,
                category.top_candidate_votes.unwrap_or(0)
            )
        });

        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            count_badge: format!("{} {}", category.candidate_count, noun),
            leading,
            candidates_href: format!(
                "/candidates?category={}",
                utf8_percent_encode(&category.name, QUERY_COMPONENT)
            ),
        }
    }
}

/// Contents of the category grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    /// Fixed-count placeholders while the fetch is in flight.
    Placeholders(usize),
    /// Single empty-state card when nothing matches.
    Empty,
    /// One card per filtered category.
    Cards(Vec<CategoryCard>),
}

/// Full render model of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub grid: GridContent,
    pub apply_href: &'static str,
}

/// The category listing view.
///
/// Holds the fetched list and the search term; the filtered list is always
/// derived from those two on read, never stored independently.
#[derive(Debug, Clone)]
pub struct CategoryListView {
    load_state: LoadState,
    search_term: String,
}

impl CategoryListView {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Idle,
            search_term: String::new(),
        }
    }

    /// Run the one-shot load.
    ///
    /// A fetch failure is logged and recorded; the rendered output is the
    /// same as an empty result, so the user sees no error banner.
    pub async fn load<F: CategoryFetcher>(&mut self, fetcher: &F) {
        self.load_state = LoadState::Loading;

        match fetcher.fetch_categories().await {
            Ok(categories) => {
                self.load_state = LoadState::Loaded(categories);
            }
            Err(err) => {
                error!("Error fetching categories: {}", err);
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The full fetched list; empty unless loaded.
    pub fn categories(&self) -> &[Category] {
        match &self.load_state {
            LoadState::Loaded(categories) => categories,
            _ => &[],
        }
    }

    /// The list as filtered by the current search term.
    pub fn filtered(&self) -> Vec<Category> {
        filter_categories(self.categories(), &self.search_term)
    }

    /// Produce the render model for the current state.
    pub fn render(&self) -> PageView {
        let grid = match &self.load_state {
            LoadState::Idle | LoadState::Loading => {
                GridContent::Placeholders(PLACEHOLDER_CARD_COUNT)
            }
            LoadState::Loaded(_) | LoadState::Failed(_) => {
                let filtered = self.filtered();
                if filtered.is_empty() {
                    GridContent::Empty
                } else {
                    GridContent::Cards(filtered.iter().map(CategoryCard::from_category).collect())
                }
            }
        };

        PageView {
            grid,
            apply_href: APPLY_HREF,
        }
    }
}

impl Default for CategoryListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeFetcher {
        result: Result<Vec<Category>, u16>,
    }

    impl CategoryFetcher for FakeFetcher {
        async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
            match &self.result {
                Ok(categories) => Ok(categories.clone()),
                Err(status) => Err(FetchError::Status(*status)),
            }
        }
    }

    fn category(name: &str, count: i64) -> Category {
        Category {
            id: name.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            candidate_count: count,
            top_candidate_name: None,
            top_candidate_votes: None,
        }
    }

    #[tokio::test]
    async fn renders_six_placeholders_before_load_resolves() {
        let view = CategoryListView::new();

        assert_eq!(view.render().grid, GridContent::Placeholders(6));
    }

    #[tokio::test]
    async fn successful_load_renders_one_card_per_category() {
        let fetcher = FakeFetcher {
            result: Ok(vec![category("Best Actor", 3), category("Best Director", 2)]),
        };

        let mut view = CategoryListView::new();
        view.load(&fetcher).await;

        match view.render().grid {
            GridContent::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].name, "Best Actor");
                assert_eq!(cards[1].name, "Best Director");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_term_narrows_rendered_cards() {
        let fetcher = FakeFetcher {
            result: Ok(vec![category("Best Actor", 3), category("Best Director", 2)]),
        };

        let mut view = CategoryListView::new();
        view.load(&fetcher).await;
        view.set_search_term("act");

        match view.render().grid {
            GridContent::Cards(cards) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].name, "Best Actor");
            }
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_result_renders_empty_state() {
        let fetcher = FakeFetcher { result: Ok(vec![]) };

        let mut view = CategoryListView::new();
        view.load(&fetcher).await;

        assert_eq!(view.render().grid, GridContent::Empty);
        assert_eq!(EMPTY_STATE_TITLE, "No categories found");
    }

    #[tokio::test]
    async fn failed_load_renders_like_empty_but_state_stays_observable() {
        let fetcher = FakeFetcher { result: Err(500) };

        let mut view = CategoryListView::new();
        view.load(&fetcher).await;

        assert!(matches!(view.load_state(), LoadState::Failed(_)));
        assert_eq!(view.render().grid, GridContent::Empty);
        assert!(view.categories().is_empty());
    }

    #[tokio::test]
    async fn apply_cta_is_rendered_in_every_state() {
        let mut view = CategoryListView::new();
        assert_eq!(view.render().apply_href, APPLY_HREF);

        let fetcher = FakeFetcher { result: Ok(vec![]) };
        view.load(&fetcher).await;
        assert_eq!(view.render().apply_href, APPLY_HREF);
    }

    #[test]
    fn count_badge_is_singular_only_for_exactly_one() {
        assert_eq!(
            CategoryCard::from_category(&category("A", 1)).count_badge,
            "1 Candidate"
        );
        assert_eq!(
            CategoryCard::from_category(&category("A", 0)).count_badge,
            "0 Candidates"
        );
        assert_eq!(
            CategoryCard::from_category(&category("A", 3)).count_badge,
            "3 Candidates"
        );
    }

    #[test]
    fn leading_indicator_present_iff_top_candidate_exists() {
        let mut with_top = category("Best Actor", 3);
        with_top.top_candidate_name = Some("Alice".to_string());
        with_top.top_candidate_votes = Some(42);

        assert_eq!(
            CategoryCard::from_category(&with_top).leading.as_deref(),
            Some("Leading: Alice (42)")
        );
        assert_eq!(CategoryCard::from_category(&category("A", 0)).leading, None);
    }

    #[test]
    fn candidates_link_url_encodes_the_name() {
        assert_eq!(
            CategoryCard::from_category(&category("Best Actor", 3)).candidates_href,
            "/candidates?category=Best%20Actor"
        );
        assert_eq!(
            CategoryCard::from_category(&category("Sci-Fi & Fantasy", 0)).candidates_href,
            "/candidates?category=Sci-Fi%20%26%20Fantasy"
        );
    }
}
