//! Typed handles to every element the viewer touches.
//!
//! Looked up once at startup. An absent element is not an error: the
//! feature that needs it is simply not wired, which is how the page opts
//! in or out of auto-refresh and the panel toggle.

use af2_report::dom::ElementId;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::console;
use crate::error::ViewerError;

/// Element handles resolved from the page.
#[derive(Clone, Debug, Default)]
pub struct ViewBindings {
    pub search_form: Option<Element>,
    pub oid_input: Option<HtmlInputElement>,
    pub result_container: Option<Element>,
    pub result: Option<Element>,
    pub company_input: Option<HtmlInputElement>,
    pub quick_search_form: Option<Element>,
    pub trusted_list: Option<Element>,
    pub auto_refresh_btn: Option<HtmlElement>,
    pub submit_btn: Option<Element>,
    pub toggle_link: Option<Element>,
    pub recalc_box: Option<Element>,
}

impl ViewBindings {
    /// Resolve every [`ElementId`] against `document`.
    ///
    /// Elements of the wrong kind (an `oid` that is not an `<input>`) are
    /// treated as absent.
    pub fn bind(document: &Document) -> Self {
        let element = |id: ElementId| document.get_element_by_id(id.as_str());
        let input = |id: ElementId| {
            element(id).and_then(|el| match el.dyn_into::<HtmlInputElement>() {
                Ok(input) => Some(input),
                Err(_) => {
                    console::warn(&format!("#{} is not an <input>, ignoring", id));
                    None
                }
            })
        };

        let bindings = Self {
            search_form: element(ElementId::SearchForm),
            oid_input: input(ElementId::OidInput),
            result_container: element(ElementId::ResultContainer),
            result: element(ElementId::Result),
            company_input: input(ElementId::CompanyInput),
            quick_search_form: element(ElementId::QuickSearchForm),
            trusted_list: element(ElementId::TrustedList),
            auto_refresh_btn: element(ElementId::AutoRefreshButton)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            submit_btn: element(ElementId::SubmitButton),
            toggle_link: element(ElementId::ToggleLink),
            recalc_box: element(ElementId::RecalcBox),
        };

        let missing = bindings.missing();
        if !missing.is_empty() {
            let ids: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
            console::debug(&format!("viewer: not on this page: {}", ids.join(", ")));
        }
        bindings
    }

    /// Whether the element for `id` was resolved.
    pub fn has(&self, id: ElementId) -> bool {
        match id {
            ElementId::SearchForm => self.search_form.is_some(),
            ElementId::OidInput => self.oid_input.is_some(),
            ElementId::ResultContainer => self.result_container.is_some(),
            ElementId::Result => self.result.is_some(),
            ElementId::CompanyInput => self.company_input.is_some(),
            ElementId::QuickSearchForm => self.quick_search_form.is_some(),
            ElementId::TrustedList => self.trusted_list.is_some(),
            ElementId::AutoRefreshButton => self.auto_refresh_btn.is_some(),
            ElementId::SubmitButton => self.submit_btn.is_some(),
            ElementId::ToggleLink => self.toggle_link.is_some(),
            ElementId::RecalcBox => self.recalc_box.is_some(),
        }
    }

    /// Ids that could not be resolved, in binding order.
    pub fn missing(&self) -> Vec<ElementId> {
        ElementId::ALL
            .into_iter()
            .filter(|id| !self.has(*id))
            .collect()
    }

    /// Borrow a bound element or report which one is missing.
    pub fn require<'a, T>(slot: &'a Option<T>, id: ElementId) -> Result<&'a T, ViewerError> {
        slot.as_ref().ok_or(ViewerError::MissingElement(id))
    }
}
