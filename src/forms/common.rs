//! Helpers shared by the form generator.

use chrono::{Local, NaiveDate};

use super::FormId;

/// Signing date as printed on the forms (`MM/DD/YYYY`).
pub fn format_signing_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Today in the server's local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Lowercase, dash-separated file name stem. Runs of anything that is not
/// ASCII alphanumeric collapse into a single dash.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
        } else if !result.is_empty() && !result.ends_with('-') {
            result.push('-');
        }
    }

    let trimmed = result.trim_end_matches('-');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `de-111-mary-major.pdf`
pub fn form_filename(form: FormId, decedent: &str) -> String {
    format!(
        "{}-{}.pdf",
        sanitize_filename(form.as_str(), "form"),
        sanitize_filename(decedent, "estate")
    )
}
