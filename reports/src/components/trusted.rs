//! Trusted company cards for the "recently vetted" list.

use leptos::prelude::*;

use crate::types::TrustedCompanyRecord;

/// Tag text shown next to every vetted title.
pub const TRUSTED_TAG: &str = "Проверено";

/// Inner markup of one `div.company` card.
///
/// The browser creates the card element itself so it can attach the
/// click handler; this is what goes inside it.
#[component]
pub fn TrustedCardBody(company: TrustedCompanyRecord) -> impl IntoView {
    view! {
        <div class="company-title">
            {company.title}
            <span class="company-tag trusted-tag">{TRUSTED_TAG}</span>
        </div>
        <div class="company-address">{company.address}</div>
    }
}

/// Full card list with links, for static output.
#[component]
pub fn TrustedList(companies: Vec<TrustedCompanyRecord>, href_prefix: String) -> impl IntoView {
    view! {
        <div id="trusted2">
            {companies
                .into_iter()
                .map(|company| {
                    let href = company.report_href(&href_prefix);
                    view! {
                        <a class="company" href=href>
                            <TrustedCardBody company=company />
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
