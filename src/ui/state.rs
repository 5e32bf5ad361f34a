//! Explicit view state for the interactive browser
//!
//! `ViewState` holds everything the screens need: the search inputs, the last
//! search result, the selection and scroll offsets and which screen is shown.
//! It only changes through `apply`, so the whole UI flow can be driven in
//! tests without a terminal.

use crate::config::FacetConfig;
use crate::core::data::{Facet, FacetKind, RecipeCatalog, RecipeQuery};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Listing,
    /// Detail of the recipe at this catalog index
    Detail(usize),
}

/// Which Listing control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Facet(FacetKind),
    Results,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Search,
        Focus::Facet(FacetKind::Difficulty),
        Focus::Facet(FacetKind::Cuisine),
        Focus::Facet(FacetKind::Dietary),
        Focus::Results,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// User intents, already resolved against the current screen and focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(char),
    Backspace,
    Search,
    FocusNext,
    FocusPrev,
    NextOption,
    PrevOption,
    SelectNext,
    SelectPrevious,
    SelectPageDown,
    SelectPageUp,
    SelectFirst,
    SelectLast,
    OpenDetail,
    ScrollDown,
    ScrollUp,
    ScrollPageDown,
    ScrollPageUp,
    Dismiss,
    Quit,
}

/// A facet dropdown: its options and the current choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetSelector {
    kind: FacetKind,
    options: Vec<String>,
    index: usize,
}

impl FacetSelector {
    pub fn new(kind: FacetKind, options: Vec<String>) -> Self {
        Self {
            kind,
            options,
            index: 0,
        }
    }

    pub fn kind(&self) -> FacetKind {
        self.kind
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Currently chosen option; the first option is "All"
    pub fn current(&self) -> &str {
        self.options
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(crate::core::data::ALL)
    }

    pub fn facet(&self) -> Facet {
        Facet::from_selection(self.current())
    }

    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.index = (self.index + self.options.len() - 1) % self.options.len();
        }
    }

    /// Choose an option by value; returns false if it is not offered
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}

/// Screen geometry the state needs for paging and scroll limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Cards that fit in the result area at once
    pub cards_per_page: usize,
    /// Rows the detail body can be scrolled by
    pub detail_max_scroll: usize,
    /// Rows of detail body visible at once
    pub detail_page: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cards_per_page: 1,
            detail_max_scroll: 0,
            detail_page: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    search_text: String,
    difficulty: FacetSelector,
    cuisine: FacetSelector,
    dietary: FacetSelector,
    focus: Focus,
    results: Vec<usize>,
    selected: usize,
    list_scroll: usize,
    detail_scroll: usize,
    screen: Screen,
    layout: Layout,
    should_quit: bool,
}

impl ViewState {
    /// Initial Listing state showing the whole catalog
    pub fn new(catalog: &RecipeCatalog, facets: &FacetConfig) -> Self {
        Self {
            search_text: String::new(),
            difficulty: FacetSelector::new(FacetKind::Difficulty, facets.options(FacetKind::Difficulty)),
            cuisine: FacetSelector::new(FacetKind::Cuisine, facets.options(FacetKind::Cuisine)),
            dietary: FacetSelector::new(FacetKind::Dietary, facets.options(FacetKind::Dietary)),
            focus: Focus::Search,
            results: (0..catalog.len()).collect(),
            selected: 0,
            list_scroll: 0,
            detail_scroll: 0,
            screen: Screen::Listing,
            layout: Layout::default(),
            should_quit: false,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selector(&self, kind: FacetKind) -> &FacetSelector {
        match kind {
            FacetKind::Difficulty => &self.difficulty,
            FacetKind::Cuisine => &self.cuisine,
            FacetKind::Dietary => &self.dietary,
        }
    }

    pub fn selector_mut(&mut self, kind: FacetKind) -> &mut FacetSelector {
        match kind {
            FacetKind::Difficulty => &mut self.difficulty,
            FacetKind::Cuisine => &mut self.cuisine,
            FacetKind::Dietary => &mut self.dietary,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Catalog indices from the last search, in catalog order
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    /// Position of the selected card within `results`
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible card within `results`
    pub fn list_scroll(&self) -> usize {
        self.list_scroll
    }

    pub fn detail_scroll(&self) -> usize {
        self.detail_scroll
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Query built from the current inputs
    pub fn query(&self) -> RecipeQuery {
        RecipeQuery::new(&self.search_text)
            .with_facet(FacetKind::Difficulty, self.difficulty.facet())
            .with_facet(FacetKind::Cuisine, self.cuisine.facet())
            .with_facet(FacetKind::Dietary, self.dietary.facet())
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = Layout {
            cards_per_page: layout.cards_per_page.max(1),
            detail_max_scroll: layout.detail_max_scroll,
            detail_page: layout.detail_page.max(1),
        };
        self.detail_scroll = self.detail_scroll.min(self.layout.detail_max_scroll);
        self.ensure_selection_visible();
    }

    pub fn apply(&mut self, action: Action, catalog: &RecipeCatalog) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Listing => self.apply_listing(action, catalog),
            Screen::Detail(_) => self.apply_detail(action),
        }
    }

    fn apply_listing(&mut self, action: Action, catalog: &RecipeCatalog) {
        match action {
            Action::Input(c) => {
                if self.focus == Focus::Search {
                    self.search_text.push(c);
                }
            }
            Action::Backspace => {
                if self.focus == Focus::Search {
                    self.search_text.pop();
                }
            }
            Action::Search => self.run_search(catalog),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::NextOption => {
                if let Focus::Facet(kind) = self.focus {
                    self.selector_mut(kind).next();
                }
            }
            Action::PrevOption => {
                if let Focus::Facet(kind) = self.focus {
                    self.selector_mut(kind).prev();
                }
            }
            Action::SelectNext => self.move_selection(1),
            Action::SelectPrevious => self.move_selection(-1),
            Action::SelectPageDown => self.move_selection(self.layout.cards_per_page as isize),
            Action::SelectPageUp => self.move_selection(-(self.layout.cards_per_page as isize)),
            Action::SelectFirst => self.move_selection(isize::MIN),
            Action::SelectLast => self.move_selection(isize::MAX),
            Action::OpenDetail => self.open_detail(),
            Action::ScrollDown
            | Action::ScrollUp
            | Action::ScrollPageDown
            | Action::ScrollPageUp
            | Action::Dismiss
            | Action::Quit => {}
        }
    }

    fn apply_detail(&mut self, action: Action) {
        let max = self.layout.detail_max_scroll;
        let page = self.layout.detail_page;
        match action {
            Action::ScrollDown => self.detail_scroll = (self.detail_scroll + 1).min(max),
            Action::ScrollUp => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            Action::ScrollPageDown => self.detail_scroll = (self.detail_scroll + page).min(max),
            Action::ScrollPageUp => self.detail_scroll = self.detail_scroll.saturating_sub(page),
            Action::Dismiss => {
                tracing::debug!("Closing recipe detail");
                self.screen = Screen::Listing;
                self.detail_scroll = 0;
            }
            _ => {}
        }
    }

    /// Re-run the filter with the current inputs and go back to the top
    fn run_search(&mut self, catalog: &RecipeCatalog) {
        let query = self.query();
        self.results = catalog.filter_indices(&query);
        self.selected = 0;
        self.list_scroll = 0;

        tracing::info!(
            keywords = ?query.keywords,
            difficulty = query.difficulty.as_str(),
            cuisine = query.cuisine.as_str(),
            dietary = query.dietary.as_str(),
            matches = self.results.len(),
            "Search"
        );
    }

    fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.ensure_selection_visible();
    }

    fn ensure_selection_visible(&mut self) {
        let page = self.layout.cards_per_page;
        if self.selected < self.list_scroll {
            self.list_scroll = self.selected;
        } else if self.selected >= self.list_scroll + page {
            self.list_scroll = self.selected + 1 - page;
        }
    }

    fn open_detail(&mut self) {
        if let Some(&index) = self.results.get(self.selected) {
            tracing::debug!(index, "Opening recipe detail");
            self.detail_scroll = 0;
            self.screen = Screen::Detail(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::BuiltinRecipes;

    fn setup() -> (RecipeCatalog, ViewState) {
        let catalog = RecipeCatalog::from_source(&BuiltinRecipes);
        let state = ViewState::new(&catalog, &FacetConfig::default());
        (catalog, state)
    }

    fn type_text(state: &mut ViewState, catalog: &RecipeCatalog, text: &str) {
        for c in text.chars() {
            state.apply(Action::Input(c), catalog);
        }
    }

    #[test]
    fn test_initial_state_lists_everything() {
        let (catalog, state) = setup();
        assert_eq!(state.screen(), Screen::Listing);
        assert_eq!(state.results().len(), 14);
        assert_eq!(state.focus(), Focus::Search);
        for kind in [FacetKind::Difficulty, FacetKind::Cuisine, FacetKind::Dietary] {
            assert_eq!(state.selector(kind).current(), "All");
        }
        assert_eq!(state.results(), (0..catalog.len()).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_typing_does_not_filter_until_search() {
        let (catalog, mut state) = setup();
        type_text(&mut state, &catalog, "chicken");
        assert_eq!(state.search_text(), "chicken");
        assert_eq!(state.results().len(), 14);

        state.apply(Action::Search, &catalog);
        assert_eq!(state.results(), &[2, 3]);
    }

    #[test]
    fn test_backspace_edits_search_text() {
        let (catalog, mut state) = setup();
        type_text(&mut state, &catalog, "rices");
        state.apply(Action::Backspace, &catalog);
        assert_eq!(state.search_text(), "rice");
    }

    #[test]
    fn test_facet_change_applies_on_search() {
        let (catalog, mut state) = setup();
        state.apply(Action::FocusNext, &catalog);
        assert_eq!(state.focus(), Focus::Facet(FacetKind::Difficulty));

        state.apply(Action::NextOption, &catalog);
        assert_eq!(state.selector(FacetKind::Difficulty).current(), "Easy");
        assert_eq!(state.results().len(), 14);

        state.apply(Action::Search, &catalog);
        assert_eq!(state.results().len(), 6);
    }

    #[test]
    fn test_facet_options_wrap_around() {
        let (catalog, mut state) = setup();
        state.apply(Action::FocusNext, &catalog);
        state.apply(Action::FocusNext, &catalog);
        assert_eq!(state.focus(), Focus::Facet(FacetKind::Cuisine));

        state.apply(Action::PrevOption, &catalog);
        assert_eq!(state.selector(FacetKind::Cuisine).current(), "Mexican");
        state.apply(Action::NextOption, &catalog);
        assert_eq!(state.selector(FacetKind::Cuisine).current(), "All");
    }

    #[test]
    fn test_input_ignored_outside_search_focus() {
        let (catalog, mut state) = setup();
        state.apply(Action::FocusPrev, &catalog);
        assert_eq!(state.focus(), Focus::Results);
        state.apply(Action::Input('x'), &catalog);
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn test_search_scrolls_back_to_top() {
        let (catalog, mut state) = setup();
        state.set_layout(Layout {
            cards_per_page: 3,
            ..Layout::default()
        });
        state.apply(Action::SelectLast, &catalog);
        assert_eq!(state.selected(), 13);
        assert_eq!(state.list_scroll(), 11);

        state.apply(Action::Search, &catalog);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.list_scroll(), 0);
    }

    #[test]
    fn test_selection_paging_stays_in_bounds() {
        let (catalog, mut state) = setup();
        state.set_layout(Layout {
            cards_per_page: 4,
            ..Layout::default()
        });

        state.apply(Action::SelectPrevious, &catalog);
        assert_eq!(state.selected(), 0);

        state.apply(Action::SelectPageDown, &catalog);
        assert_eq!(state.selected(), 4);
        assert_eq!(state.list_scroll(), 1);

        state.apply(Action::SelectPageUp, &catalog);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.list_scroll(), 0);

        for _ in 0..20 {
            state.apply(Action::SelectNext, &catalog);
        }
        assert_eq!(state.selected(), 13);
    }

    #[test]
    fn test_open_detail_and_dismiss_preserves_listing() {
        let (catalog, mut state) = setup();
        type_text(&mut state, &catalog, "garlic");
        state.apply(Action::Search, &catalog);
        let results_before = state.results().to_vec();

        state.apply(Action::SelectNext, &catalog);
        state.apply(Action::OpenDetail, &catalog);
        assert_eq!(state.screen(), Screen::Detail(results_before[1]));

        // Listing actions have no effect while the detail is open
        state.apply(Action::Input('z'), &catalog);
        state.apply(Action::Search, &catalog);

        state.apply(Action::Dismiss, &catalog);
        assert_eq!(state.screen(), Screen::Listing);
        assert_eq!(state.results(), results_before.as_slice());
        assert_eq!(state.search_text(), "garlic");
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn test_open_detail_with_no_results_stays_listing() {
        let (catalog, mut state) = setup();
        type_text(&mut state, &catalog, "durian");
        state.apply(Action::Search, &catalog);
        state.apply(Action::OpenDetail, &catalog);
        assert_eq!(state.screen(), Screen::Listing);
    }

    #[test]
    fn test_dismiss_only_from_detail() {
        let (catalog, mut state) = setup();
        state.apply(Action::Dismiss, &catalog);
        assert_eq!(state.screen(), Screen::Listing);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_detail_scroll_is_clamped_and_reset() {
        let (catalog, mut state) = setup();
        state.set_layout(Layout {
            cards_per_page: 2,
            detail_max_scroll: 5,
            detail_page: 3,
        });
        state.apply(Action::OpenDetail, &catalog);

        state.apply(Action::ScrollPageDown, &catalog);
        assert_eq!(state.detail_scroll(), 3);
        state.apply(Action::ScrollPageDown, &catalog);
        assert_eq!(state.detail_scroll(), 5);
        state.apply(Action::ScrollUp, &catalog);
        assert_eq!(state.detail_scroll(), 4);

        state.apply(Action::Dismiss, &catalog);
        state.apply(Action::OpenDetail, &catalog);
        assert_eq!(state.detail_scroll(), 0);
    }

    #[test]
    fn test_quit_from_any_screen() {
        let (catalog, mut state) = setup();
        state.apply(Action::OpenDetail, &catalog);
        state.apply(Action::Quit, &catalog);
        assert!(state.should_quit());
    }

    #[test]
    fn test_query_reflects_inputs() {
        let (catalog, mut state) = setup();
        type_text(&mut state, &catalog, "Rice, Garlic");
        assert!(state.selector_mut(FacetKind::Dietary).select("Vegan"));
        assert!(!state.selector_mut(FacetKind::Dietary).select("Paleo"));

        let query = state.query();
        assert_eq!(query.keywords, vec!["rice", "garlic"]);
        assert_eq!(query.dietary, Facet::Only("Vegan".to_string()));
        assert_eq!(query.cuisine, Facet::All);
    }
}
