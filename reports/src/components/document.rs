//! Standalone HTML page around a rendered fragment.

use leptos::prelude::*;

use crate::styles::REPORT_CSS;

/// Complete document with embedded styles; `body_html` is inserted as-is.
#[component]
pub fn ReportDocument(title: String, body_html: String) -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <title>{title.clone()}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <main class="report-main">
                    <h1>{title}</h1>
                    <div id="result" inner_html=body_html></div>
                </main>
            </body>
        </html>
    }
}
