//! The page controller.
//!
//! One `ReportViewer` per page load owns the bindings and all UI state.
//! Listeners hold an `Rc` to it; everything runs on the main thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use af2_report::controller::{
    Countdown, PanelToggle, SearchSequence, SearchTicket, SubmitGate, Tick, countdown_label,
};
use af2_report::dom::{COMPANY_LINK_CLASS, ElementId, quick_link_query};
use af2_report::types::SearchQuery;
use af2_report::{
    ReportResponse, TrustedCompanyRecord, ViewerConfig, render_placeholder, render_report,
    render_trusted_card,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::bindings::ViewBindings;
use crate::console;
use crate::error::ViewerError;
use crate::fetch::{fetch_recent, fetch_report};

/// Controller for the report page.
pub struct ReportViewer {
    window: Window,
    document: Document,
    config: ViewerConfig,
    bindings: ViewBindings,
    countdown: RefCell<Countdown>,
    refresh_handle: Cell<Option<i32>>,
    toggle: Cell<PanelToggle>,
    gate: Cell<SubmitGate>,
    searches: RefCell<SearchSequence>,
}

impl ReportViewer {
    /// Build the controller over already-resolved bindings. Nothing is
    /// wired until [`ReportViewer::attach`].
    ///
    /// The panel toggle starts from whatever class `#recalc-box` was served with.
    pub fn new(window: Window, document: Document, config: ViewerConfig, bindings: ViewBindings) -> Rc<Self> {
        let countdown = Countdown::new(config.refresh_seconds);
        let panel_open = bindings
            .recalc_box
            .as_ref()
            .is_some_and(|panel| panel.class_list().contains(&config.toggle_class));
        Rc::new(Self {
            window,
            document,
            config,
            bindings,
            countdown: RefCell::new(countdown),
            refresh_handle: Cell::new(None),
            toggle: Cell::new(PanelToggle::new(panel_open)),
            gate: Cell::new(SubmitGate::default()),
            searches: RefCell::new(SearchSequence::default()),
        })
    }

    /// Elements resolved at startup.
    pub fn bindings(&self) -> &ViewBindings {
        &self.bindings
    }

    /// Effective page configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Whether the verification widget has unlocked `#submit_btn`.
    pub fn submit_enabled(&self) -> bool {
        self.gate.get().is_enabled()
    }

    /// Wire every listener whose element is present.
    pub fn attach(self: &Rc<Self>) -> Result<(), ViewerError> {
        if let Some(form) = &self.bindings.search_form {
            let viewer = Rc::clone(self);
            listen(form, "submit", move |event: Event| {
                event.prevent_default();
                let oid = viewer
                    .bindings
                    .oid_input
                    .as_ref()
                    .map(|input| input.value())
                    .unwrap_or_default();
                viewer.submit_search(oid);
            })?;
        }

        let links = self
            .document
            .query_selector_all(&format!(".{}", COMPANY_LINK_CLASS))?;
        for idx in 0..links.length() {
            let Some(link) = links.get(idx) else { continue };
            let viewer = Rc::clone(self);
            let text_source = link.clone();
            listen(&link, "click", move |event: Event| {
                event.prevent_default();
                let text = text_source.text_content().unwrap_or_default();
                if let Err(err) = viewer.quick_search(&text) {
                    console::error(&format!("Error: {}", err));
                }
            })?;
        }

        if let Some(link) = &self.bindings.toggle_link {
            let viewer = Rc::clone(self);
            listen(link, "click", move |event: Event| {
                event.prevent_default();
                viewer.toggle_panel();
            })?;
        }

        Ok(())
    }

    /// Issue a search for `oid`.
    ///
    /// The request goes out first, then `#result-container` is overwritten
    /// with the placeholder. When the response arrives it replaces
    /// `#result` only if no newer search was issued meanwhile.
    pub fn submit_search(self: &Rc<Self>, oid: String) {
        console::log(&format!("search {}", oid));
        let ticket = self.begin_search();
        let query = SearchQuery::new(oid.clone());

        let viewer = Rc::clone(self);
        spawn_local(async move {
            let outcome = match fetch_report(&viewer.config, &query).await {
                Ok(report) => viewer.apply_report(ticket, &report).map(|applied| {
                    if !applied {
                        console::debug(&format!("dropping stale response for {}", query.oid));
                    }
                }),
                Err(err) => Err(err),
            };
            if let Err(err) = outcome {
                console::error(&format!("Error: {}", err));
            }
        });

        if let Some(container) = &self.bindings.result_container {
            container.set_inner_html(&render_placeholder(&oid));
        }
    }

    /// Take a ticket for a new search; every earlier ticket goes stale.
    pub fn begin_search(&self) -> SearchTicket {
        self.searches.borrow_mut().issue()
    }

    /// Render `report` into `#result` if `ticket` is still the latest search.
    /// Returns `false` when the response was stale and nothing was written.
    pub fn apply_report(&self, ticket: SearchTicket, report: &ReportResponse) -> Result<bool, ViewerError> {
        if !self.searches.borrow().is_current(ticket) {
            return Ok(false);
        }
        let result = ViewBindings::require(&self.bindings.result, ElementId::Result)?;
        result.set_inner_html(&render_report(report, &self.config));
        Ok(true)
    }

    /// Quick-link click: fill `#company-input` and dispatch `submit` on
    /// `#search-form`.
    pub fn quick_search(&self, link_text: &str) -> Result<(), ViewerError> {
        let input = ViewBindings::require(&self.bindings.company_input, ElementId::CompanyInput)?;
        input.set_value(quick_link_query(link_text));
        let form = ViewBindings::require(&self.bindings.quick_search_form, ElementId::QuickSearchForm)?;
        let event = Event::new("submit")?;
        form.dispatch_event(&event)?;
        Ok(())
    }

    /// Fetch `/recent` and append one card per vetted company.
    pub fn load_recent(self: &Rc<Self>) {
        let viewer = Rc::clone(self);
        spawn_local(async move {
            let outcome = match fetch_recent(&viewer.config).await {
                Ok(recent) => viewer.append_trusted(&recent.trusted),
                Err(err) => Err(err),
            };
            if let Err(err) = outcome {
                console::error(&format!("Error: {}", err));
            }
        });
    }

    /// Append one `div.company` card per record to `#trusted2`, in order.
    /// A click on a card navigates to its report page.
    pub fn append_trusted(&self, companies: &[TrustedCompanyRecord]) -> Result<(), ViewerError> {
        let list = ViewBindings::require(&self.bindings.trusted_list, ElementId::TrustedList)?;
        for company in companies {
            let card = self.document.create_element("div")?;
            card.class_list().add_1("company")?;
            card.set_inner_html(&render_trusted_card(company));

            let href = company.report_href(&self.config.report_page_prefix);
            let window = self.window.clone();
            listen(&card, "click", move |_: Event| {
                if let Err(err) = window.location().set_href(&href) {
                    console::error(&format!("Error: {:?}", err));
                }
            })?;

            list.append_child(&card)?;
        }
        Ok(())
    }

    /// Start the reload countdown if the page has `#auto_refresh_btn`.
    pub fn start_refresh(self: &Rc<Self>) -> Result<(), ViewerError> {
        let Some(button) = &self.bindings.auto_refresh_btn else {
            return Ok(());
        };
        let Some(first) = self.countdown.borrow_mut().start() else {
            return Ok(());
        };
        button.set_text_content(Some(&countdown_label(first)));

        let viewer = Rc::clone(self);
        let tick = Closure::<dyn FnMut()>::new(move || viewer.on_tick());
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), 1000)?;
        tick.forget();
        self.refresh_handle.set(Some(handle));
        Ok(())
    }

    /// Halt the countdown without reloading.
    pub fn stop_refresh(&self) {
        self.countdown.borrow_mut().stop();
        self.clear_interval();
    }

    fn on_tick(&self) {
        let tick = self.countdown.borrow_mut().tick();
        match tick {
            Tick::Label(seconds) => self.set_refresh_label(seconds),
            Tick::Reload => {
                self.clear_interval();
                self.set_refresh_label(0);
                if let Err(err) = self.window.location().reload() {
                    console::error(&format!("Error: {:?}", err));
                }
            }
            Tick::Idle => {}
        }
    }

    fn set_refresh_label(&self, seconds: u32) {
        if let Some(button) = &self.bindings.auto_refresh_btn {
            button.set_text_content(Some(&countdown_label(seconds)));
        }
    }

    fn clear_interval(&self) {
        if let Some(handle) = self.refresh_handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }

    /// Flip the visibility class on `#recalc-box`.
    pub fn toggle_panel(&self) {
        let mut toggle = self.toggle.get();
        match &self.bindings.recalc_box {
            Some(panel) => match panel.class_list().toggle(&self.config.toggle_class) {
                Ok(open) => toggle.sync(open),
                Err(err) => console::error(&format!("Error: {:?}", err)),
            },
            None => {
                toggle.click();
            }
        }
        self.toggle.set(toggle);
    }

    /// Whether the panel is currently shown.
    pub fn panel_open(&self) -> bool {
        self.toggle.get().is_open()
    }

    /// Enable `#submit_btn`. Unconditional.
    pub fn unlock_submit(&self) {
        let mut gate = self.gate.get();
        if !gate.unlock() {
            console::debug("submit already unlocked");
        }
        self.gate.set(gate);
        if let Some(button) = &self.bindings.submit_btn {
            enable(button);
        }
    }
}

/// Remove the `disabled` attribute, whatever kind of control it is.
pub fn enable(control: &Element) {
    if let Err(err) = control.remove_attribute("disabled") {
        console::error(&format!("Error: {:?}", err));
    }
}

/// Register a listener for the page's lifetime.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ViewerError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
