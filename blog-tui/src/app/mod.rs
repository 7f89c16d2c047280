mod state;

pub use state::{Focus, TextInput};

use blogapi::domain::{Article, ArticleFilter, CategoryTaxonomy};
use chrono::NaiveDate;

/// Fixed user-facing message for a failed search. Matches the text the
/// scraper's web frontend shows for the same failure.
pub const SEARCH_FAILED_MESSAGE: &str = "Impossible de récupérer les articles.";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything the user has typed or selected in the filter form.
///
/// Category and sub-category are selections over the loaded taxonomy,
/// with the empty string meaning "all". A sub-category is scoped to its
/// category, so changing the category clears it in the same transition;
/// there is no observable state where a stale sub-category survives a
/// category change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub date_start: TextInput,
    pub date_end: TextInput,
    pub author: TextInput,
    pub category: String,
    pub sub_category: String,
    pub title: TextInput,
}

impl FilterForm {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.sub_category.clear();
    }

    pub fn set_sub_category(&mut self, sub_category: impl Into<String>) {
        self.sub_category = sub_category.into();
    }

    /// Build the wire filter. Empty inputs mean "no constraint";
    /// a date input that doesn't parse is treated as unset (the UI
    /// flags it, see [`FilterForm::date_input_invalid`]).
    pub fn to_filter(&self) -> ArticleFilter {
        ArticleFilter {
            date_start: parse_date(&self.date_start.value),
            date_end: parse_date(&self.date_end.value),
            author: non_empty(&self.author.value),
            category: non_empty(&self.category),
            sub_category: non_empty(&self.sub_category),
            title: non_empty(&self.title.value),
        }
    }

    /// True when the given date input holds text that is not a valid
    /// `YYYY-MM-DD` date.
    pub fn date_input_invalid(&self, input: &TextInput) -> bool {
        !input.value.trim().is_empty() && parse_date(&input.value).is_none()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Application state: the filter form, the once-loaded taxonomy, and
/// the current result set. Mutated only from the event-loop task.
pub struct App {
    pub running: bool,
    pub is_loading: bool,
    pub focus: Focus,
    pub form: FilterForm,
    pub taxonomy: CategoryTaxonomy,
    pub articles: Vec<Article>,
    pub error: Option<String>,
    /// Whether at least one search has completed, so an empty result
    /// list renders as "no results" rather than the initial hint.
    pub searched: bool,
    pub selected: usize,
    pub detail_open: bool,
    next_seq: u64,
    applied_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            is_loading: false,
            focus: Focus::DateStart,
            form: FilterForm::default(),
            taxonomy: CategoryTaxonomy::default(),
            articles: Vec::new(),
            error: None,
            searched: false,
            selected: 0,
            detail_open: false,
            next_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn set_taxonomy(&mut self, taxonomy: CategoryTaxonomy) {
        self.taxonomy = taxonomy;
    }

    /// Allocate the sequence number for a search about to be dispatched.
    pub fn begin_search(&mut self) -> u64 {
        self.next_seq += 1;
        self.is_loading = true;
        self.next_seq
    }

    /// Apply a finished search. Only a response newer than everything
    /// applied so far wins; responses from superseded requests are
    /// discarded, so overlapping searches always settle on the latest
    /// user intent.
    ///
    /// On failure the previous result set is kept and the fixed error
    /// message is shown; on success the results are replaced wholesale
    /// and the error cleared.
    pub fn apply_search(&mut self, seq: u64, outcome: Result<Vec<Article>, String>) {
        if seq <= self.applied_seq {
            return;
        }
        self.applied_seq = seq;
        if seq == self.next_seq {
            self.is_loading = false;
        }

        match outcome {
            Ok(articles) => {
                self.articles = articles;
                self.error = None;
                self.searched = true;
                self.selected = 0;
                self.detail_open = false;
            }
            Err(_) => {
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Category choices: "all" (empty string) followed by the taxonomy
    /// keys in backend order.
    pub fn category_choices(&self) -> Vec<&str> {
        std::iter::once("").chain(self.taxonomy.categories()).collect()
    }

    /// Sub-category choices scoped to the currently selected category.
    pub fn sub_category_choices(&self) -> Vec<&str> {
        std::iter::once("")
            .chain(
                self.taxonomy
                    .sub_categories(&self.form.category)
                    .iter()
                    .map(String::as_str),
            )
            .collect()
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let next = cycle(&self.category_choices(), &self.form.category, forward);
        self.form.set_category(next);
    }

    pub fn cycle_sub_category(&mut self, forward: bool) {
        let next = cycle(&self.sub_category_choices(), &self.form.sub_category, forward);
        self.form.set_sub_category(next);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.articles.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle(choices: &[&str], current: &str, forward: bool) -> String {
    let len = choices.len();
    let idx = choices.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    choices[next].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_taxonomy() -> CategoryTaxonomy {
        serde_json::from_str(r#"{"Tech": ["AI", "Web"], "Sport": []}"#).unwrap()
    }

    fn sample_article(title: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "url": format!("https://blog.example/posts/{title}"),
            "titre": title,
            "auteur": "Ana",
            "date_publication": "2024-01-01",
            "categorie": "Tech"
        }))
        .unwrap()
    }

    #[test]
    fn changing_category_always_clears_sub_category() {
        let mut form = FilterForm::default();
        form.set_category("Tech");
        form.set_sub_category("AI");
        assert_eq!(form.sub_category, "AI");

        form.set_category("Sport");
        assert_eq!(form.sub_category, "");

        form.set_sub_category("Web");
        form.set_category("Tech");
        assert_eq!(form.sub_category, "");
    }

    #[test]
    fn empty_form_builds_unconstrained_filter() {
        let filter = FilterForm::default().to_filter();
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn form_inputs_map_to_filter_fields() {
        let mut form = FilterForm::default();
        for c in "2024-03-01".chars() {
            form.date_start.insert(c);
        }
        for c in "dupont".chars() {
            form.author.insert(c);
        }
        form.set_category("Tech");
        form.set_sub_category("AI");

        let filter = form.to_filter();
        assert_eq!(filter.date_start, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(filter.author.as_deref(), Some("dupont"));
        assert_eq!(filter.category.as_deref(), Some("Tech"));
        assert_eq!(filter.sub_category.as_deref(), Some("AI"));
        assert_eq!(filter.title, None);
    }

    #[test]
    fn malformed_date_input_is_flagged_and_unset() {
        let mut form = FilterForm::default();
        for c in "03/01/2024".chars() {
            form.date_start.insert(c);
        }
        assert!(form.date_input_invalid(&form.date_start));
        assert_eq!(form.to_filter().date_start, None);
        assert!(!form.date_input_invalid(&form.date_end));
    }

    #[test]
    fn successful_search_replaces_results_and_clears_error() {
        let mut app = App::new();
        app.error = Some(SEARCH_FAILED_MESSAGE.to_string());

        let seq = app.begin_search();
        app.apply_search(seq, Ok(vec![sample_article("a"), sample_article("b")]));

        assert_eq!(app.articles.len(), 2);
        assert_eq!(app.error, None);
        assert!(app.searched);
        assert!(!app.is_loading);
    }

    #[test]
    fn failed_search_keeps_previous_results_and_sets_fixed_message() {
        let mut app = App::new();
        let seq = app.begin_search();
        app.apply_search(seq, Ok(vec![sample_article("kept")]));

        let seq = app.begin_search();
        app.apply_search(seq, Err("connection refused".to_string()));

        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.articles[0].title, "kept");
        assert_eq!(app.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
    }

    #[test]
    fn empty_result_set_is_a_real_result() {
        let mut app = App::new();
        let seq = app.begin_search();
        app.apply_search(seq, Ok(vec![sample_article("old")]));

        let seq = app.begin_search();
        app.apply_search(seq, Ok(vec![]));

        assert!(app.articles.is_empty());
        assert!(app.searched);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut app = App::new();
        let first = app.begin_search();
        let second = app.begin_search();

        app.apply_search(second, Ok(vec![sample_article("new")]));
        app.apply_search(first, Ok(vec![sample_article("old")]));

        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.articles[0].title, "new");
    }

    #[test]
    fn loading_persists_until_newest_search_lands() {
        let mut app = App::new();
        let first = app.begin_search();
        let _second = app.begin_search();

        app.apply_search(first, Ok(vec![]));
        assert!(app.is_loading);
    }

    #[test]
    fn category_choices_follow_taxonomy_order() {
        let mut app = App::new();
        app.set_taxonomy(sample_taxonomy());
        assert_eq!(app.category_choices(), vec!["", "Tech", "Sport"]);

        app.cycle_category(true);
        assert_eq!(app.form.category, "Tech");
        assert_eq!(app.sub_category_choices(), vec!["", "AI", "Web"]);

        app.cycle_category(true);
        assert_eq!(app.form.category, "Sport");
        assert_eq!(app.sub_category_choices(), vec![""]);

        app.cycle_category(true);
        assert_eq!(app.form.category, "");
        app.cycle_category(false);
        assert_eq!(app.form.category, "Sport");
    }

    #[test]
    fn cycling_category_resets_sub_category_selection() {
        let mut app = App::new();
        app.set_taxonomy(sample_taxonomy());
        app.cycle_category(true);
        app.cycle_sub_category(true);
        assert_eq!(app.form.sub_category, "AI");

        app.cycle_category(true);
        assert_eq!(app.form.sub_category, "");
    }

    #[test]
    fn empty_taxonomy_leaves_form_usable_without_categories() {
        let mut app = App::new();
        assert_eq!(app.category_choices(), vec![""]);
        app.cycle_category(true);
        assert_eq!(app.form.category, "");
        assert!(app.form.to_filter().is_unconstrained());
    }
}
