//! DOM contract shared with the page markup.
//!
//! The ids are a fixed interface: the page template owns the elements and
//! the viewer only looks them up. Two different form ids are in use,
//! `search-formQQQ` for the submit listener and `search-form` as the target
//! of quick-link dispatch; both are kept as the markup has them.

/// Every element id the viewer binds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Form whose submit runs a search
    SearchForm,
    /// Text input holding the oid
    OidInput,
    /// Receives the placeholder right after a search is issued
    ResultContainer,
    /// Receives the rendered relations table and score list
    Result,
    /// Input filled by company quick-links
    CompanyInput,
    /// Form that company quick-links dispatch `submit` on
    QuickSearchForm,
    /// Container for trusted company cards
    TrustedList,
    /// Presence enables the auto-refresh countdown; shows its label
    AutoRefreshButton,
    /// Submit button unlocked by the verification widget
    SubmitButton,
    /// Link that toggles the collapsible panel
    ToggleLink,
    /// Collapsible panel
    RecalcBox,
}

impl ElementId {
    /// All ids, in binding order.
    pub const ALL: [ElementId; 11] = [
        ElementId::SearchForm,
        ElementId::OidInput,
        ElementId::ResultContainer,
        ElementId::Result,
        ElementId::CompanyInput,
        ElementId::QuickSearchForm,
        ElementId::TrustedList,
        ElementId::AutoRefreshButton,
        ElementId::SubmitButton,
        ElementId::ToggleLink,
        ElementId::RecalcBox,
    ];

    /// The literal `id` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementId::SearchForm => "search-formQQQ",
            ElementId::OidInput => "oid",
            ElementId::ResultContainer => "result-container",
            ElementId::Result => "result",
            ElementId::CompanyInput => "company-input",
            ElementId::QuickSearchForm => "search-form",
            ElementId::TrustedList => "trusted2",
            ElementId::AutoRefreshButton => "auto_refresh_btn",
            ElementId::SubmitButton => "submit_btn",
            ElementId::ToggleLink => "toggle-link",
            ElementId::RecalcBox => "recalc-box",
        }
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class marking company quick-links.
pub const COMPANY_LINK_CLASS: &str = "company-link";

/// Query a quick-link puts into the search input: the first
/// whitespace-separated token of its text, or empty.
pub fn quick_link_query(link_text: &str) -> &str {
    link_text.split(' ').next().unwrap_or_default()
}
