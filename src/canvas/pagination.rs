//! `Link` header parsing (RFC 5988) for Canvas collection pagination.
//!
//! Canvas sends links like:
//!
//! ```text
//! <https://canvas.example.com/api/v1/courses?page=2&per_page=10>; rel="next",
//! <https://canvas.example.com/api/v1/courses?page=1&per_page=10>; rel="first"
//! ```

use reqwest::header::{HeaderMap, LINK};

/// A single `<url>; rel="..."` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: String,
    pub rels: Vec<String>,
}

/// Parse one `Link` header value into its entries. Malformed entries are skipped.
pub fn parse_link_header(value: &str) -> Vec<LinkEntry> {
    split_entries(value)
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.trim();
            let start = entry.find('<')?;
            let end = start + entry[start..].find('>')?;
            let url = entry[start + 1..end].trim().to_string();

            let rels = entry[end + 1..]
                .split(';')
                .filter_map(|param| {
                    let (name, value) = param.split_once('=')?;
                    if name.trim().eq_ignore_ascii_case("rel") {
                        Some(value.trim().trim_matches('"').to_string())
                    } else {
                        None
                    }
                })
                .flat_map(|rel| {
                    rel.split_whitespace()
                        .map(str::to_ascii_lowercase)
                        .collect::<Vec<_>>()
                })
                .collect();

            Some(LinkEntry { url, rels })
        })
        .collect()
}

/// Find the `rel="next"` URL among all `Link` headers of a response.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(parse_link_header)
        .find(|entry| entry.rels.iter().any(|rel| rel == "next"))
        .map(|entry| entry.url)
}

/// Split on commas that are outside `<...>` (URLs may contain commas).
fn split_entries(value: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(&value[start..]);
    entries
}
