//! CSS for standalone report pages.
//!
//! The live page ships its own stylesheet; these rules only cover the
//! classes the components emit so static output reads the same way.
//!
//! # Customization
//!
//! ```rust
//! use af2_report::styles::REPORT_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! ```

/// Stylesheet embedded by [`crate::components::ReportDocument`].
pub const REPORT_CSS: &str = r#"
:root {
    --bg: #fafafa;
    --text: #1f2937;
    --muted: #6b7280;
    --border: #e5e7eb;
    --danger: #dc2626;
    --ok: #16a34a;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    font-size: 14px;
}

.report-main {
    max-width: 960px;
    margin: 0 auto;
    padding: 24px;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 24px;
}

th, td {
    text-align: left;
    padding: 6px 10px;
    border-bottom: 1px solid var(--border);
}

th {
    color: var(--muted);
    font-weight: 600;
}

td.red {
    color: var(--danger);
    font-weight: 700;
}

.score-container ul {
    list-style: none;
    padding: 0;
}

.score-container li {
    padding: 2px 0;
}

.company {
    display: block;
    padding: 10px 12px;
    margin-bottom: 8px;
    border: 1px solid var(--border);
    border-radius: 6px;
    color: inherit;
    text-decoration: none;
    cursor: pointer;
}

.company:hover {
    border-color: var(--muted);
}

.company-title {
    font-weight: 600;
}

.company-address {
    color: var(--muted);
    font-size: 12px;
}

.company-tag {
    margin-left: 8px;
    padding: 1px 6px;
    border-radius: 4px;
    font-size: 11px;
}

.trusted-tag {
    background: var(--ok);
    color: #ffffff;
}
"#;
