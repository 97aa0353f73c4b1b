use crate::session::Reply;
use std::fmt::{Display, Write};
use surly_core::Entry;

const ORIGINAL_HEADER: &str = "Original URL";
const SHORT_HEADER: &str = "Shortened URL";

/// Renders the history as a two-column text table in insertion order.
pub fn render_history(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No URLs shortened yet.\n".to_string();
    }

    let width = entries
        .iter()
        .map(|entry| entry.original_url.chars().count())
        .max()
        .unwrap_or_default()
        .max(ORIGINAL_HEADER.len());

    let mut table = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(table, "{:<width$}  {}", ORIGINAL_HEADER, SHORT_HEADER);
    let _ = writeln!(table, "{}  {}", "-".repeat(width), "-".repeat(SHORT_HEADER.len()));
    for entry in entries {
        let _ = writeln!(table, "{:<width$}  {}", entry.original_url, entry.short_url);
    }
    table
}

impl Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Shortened { short_url } => write!(f, "Shortened URL: {}", short_url),
            Reply::Expanded { original_url } => write!(f, "Expanded URL: {}", original_url),
            Reply::NotFound { input } => write!(f, "No URL found for {}", input),
            Reply::Notice(notice) => Display::fmt(notice, f),
            Reply::Nothing => Ok(()),
        }
    }
}
