//! Page navigation state
//!
//! The site has three pages toggled client-side. State lives in explicit
//! values owned by the dashboard rather than anywhere global, so the whole
//! switching contract is testable without a UI host: [`PageState`] tracks
//! the active page and the tab title, and [`ChartLoadLatch`] arms the
//! one-shot chart load for the televisions page.

/// Default tab title when no page is active or the name is unmapped
pub const DEFAULT_TITLE: &str = "PowerSmart";

/// The three site pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Televisions,
    About,
}

impl Page {
    /// Every page, in nav order
    pub const ALL: [Page; 3] = [Page::Home, Page::Televisions, Page::About];

    /// Parse a page name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "home" => Some(Page::Home),
            "televisions" => Some(Page::Televisions),
            "about" => Some(Page::About),
            _ => None,
        }
    }

    /// Stable name used in element ids and transition requests
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Televisions => "televisions",
            Page::About => "about",
        }
    }

    /// Text of this page's nav link
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Televisions => "Televisions",
            Page::About => "About Us",
        }
    }

    /// Browser tab title while this page is active
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "PowerSmart - Home",
            Page::Televisions => "PowerSmart - Televisions",
            Page::About => "PowerSmart - About Us",
        }
    }
}

/// Which page is currently visible. Starts on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    active: Option<Page>,
}

impl PageState {
    pub fn new() -> PageState {
        Self {
            active: Some(Page::Home),
        }
    }

    /// Switch to the named page. Every page is deactivated first, so an
    /// unknown name is a silent no-op that leaves nothing active.
    pub fn show(&mut self, name: &str) {
        self.active = Page::from_name(name);
    }

    pub fn active(&self) -> Option<Page> {
        self.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == Some(page)
    }

    /// Tab title for the current state
    pub fn document_title(&self) -> &'static str {
        self.active.map(Page::title).unwrap_or(DEFAULT_TITLE)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot guard for the chart pipeline.
///
/// `should_load` answers true exactly once, the first time it observes the
/// televisions page active; after that the observer is spent and every
/// later activation is a no-op. Manual reloads bypass the latch entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartLoadLatch {
    fired: bool,
}

impl ChartLoadLatch {
    pub fn new() -> ChartLoadLatch {
        Self::default()
    }

    /// Observe a page activation; true means "run the pipeline now".
    pub fn should_load(&mut self, active: Option<Page>) -> bool {
        if self.fired || active != Some(Page::Televisions) {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_starts_on_home() {
        let state = PageState::new();
        assert!(state.is_active(Page::Home));
        assert_eq!(state.document_title(), "PowerSmart - Home");
    }

    #[test]
    fn test_switching_leaves_exactly_one_page_active() {
        let mut state = PageState::new();
        state.show("televisions");
        state.show("about");

        let active: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|&page| state.is_active(page))
            .collect();
        assert_eq!(active, vec![Page::About]);
        assert_eq!(state.document_title(), "PowerSmart - About Us");
    }

    #[test]
    fn test_unknown_page_name_deactivates_everything() {
        let mut state = PageState::new();
        state.show("pricing");

        assert_eq!(state.active(), None);
        assert!(Page::ALL.into_iter().all(|page| !state.is_active(page)));
        assert_eq!(state.document_title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_latch_fires_once_for_televisions() {
        let mut state = PageState::new();
        let mut latch = ChartLoadLatch::new();

        assert!(!latch.should_load(state.active()));

        state.show("televisions");
        assert!(latch.should_load(state.active()));

        // second activation of the same page must not re-trigger
        state.show("home");
        state.show("televisions");
        assert!(!latch.should_load(state.active()));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_latch_ignores_other_pages_then_fires() {
        let mut state = PageState::new();
        let mut latch = ChartLoadLatch::new();

        state.show("about");
        assert!(!latch.should_load(state.active()));
        assert!(!latch.has_fired());

        state.show("televisions");
        assert!(latch.should_load(state.active()));
    }

    #[test]
    fn test_page_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
        }
        assert_eq!(Page::from_name("Home"), None);
    }
}
