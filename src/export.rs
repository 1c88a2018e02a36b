use crate::types::Result;
use std::fs;
use std::path::Path;
use tracing::info;
use url::form_urlencoded;

/// Subject line for the mail-compose link.
pub const EMAIL_SUBJECT: &str = "Topic Summary from Summarizer App";

const MAIL_COMPOSE_ENDPOINT: &str = "https://mail.google.com/mail/";

/// Write the rendered report to a plain-text file.
pub fn write_report(report_text: &str, path: &Path) -> Result<()> {
    fs::write(path, report_text)?;
    info!("Wrote report to {}", path.display());
    Ok(())
}

/// Build a mail-compose deep link with pre-filled subject and body.
pub fn mail_compose_link(report_text: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("to", "")
        .append_pair("su", EMAIL_SUBJECT)
        .append_pair("body", report_text)
        .finish();

    format!("{}?{}", MAIL_COMPOSE_ENDPOINT, query)
}
