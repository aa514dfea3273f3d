//! Inline micro-grammar embedded in passage prose.
//!
//! Passage text authored in the graph editor carries two token kinds:
//!
//! - Navigation links: `[[display text|target-passage-id]]`, any number,
//!   anywhere in the text.
//! - One metadata block: a JSON object literal `{ ... }` with authoring
//!   annotations (sender, type, timing, income flag).
//!
//! Both token kinds are lifted into structured values and removed from the
//! prose. Parsing is stateless: each call takes the raw text and returns a
//! [`ParsedText`], with no retained matcher state between calls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::meta::PassageMetadata;

/// Any bracketed token, well formed or not. The two capture halves are
/// recovered by splitting on the first `|` so that a missing separator can be
/// reported instead of silently skipped.
static LINK_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

/// The inline metadata block, non-greedy.
static META_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.*?\}").unwrap());

/// An outgoing navigation reference, owned by the passage it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Text shown to the reader.
    pub text: String,
    /// Identifier of the destination passage.
    #[serde(rename = "passageId")]
    pub passage_id: String,
}

/// Result of running both sub-grammars over one passage's raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedText {
    /// Prose with all link and metadata tokens removed.
    pub text: String,
    /// Links in first-occurrence order.
    pub links: Vec<Link>,
    /// Decoded metadata block, or all defaults when the text has none.
    pub meta: PassageMetadata,
}

/// Grammar violations, reported without passage context. The extractor wraps
/// these into [`crate::ConvertError`] together with the passage id.
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// The metadata token's content did not decode as a JSON object.
    MalformedMetadata { reason: String },
    /// A `[[...]]` token with no `|` between its halves.
    MalformedLink { token: String },
}

/// Parse one passage's raw text.
///
/// Newlines are stripped before either sub-grammar is applied, so multi-line
/// authored text collapses to one line. Metadata decoding and link extraction
/// both operate on that normalized text independently; the cleaned prose has
/// both token kinds removed.
pub fn parse_inline(raw: &str) -> Result<ParsedText, GrammarError> {
    let normalized = raw.replace('\n', "");

    let links = extract_links(&normalized)?;
    let meta = extract_metadata(&normalized)?;

    let without_links = LINK_TOKEN.replace_all(&normalized, "");
    let text = META_TOKEN.replace_all(&without_links, "").into_owned();

    Ok(ParsedText { text, links, meta })
}

/// Collect links in left-to-right occurrence order.
fn extract_links(text: &str) -> Result<Vec<Link>, GrammarError> {
    let mut links = Vec::new();
    for caps in LINK_TOKEN.captures_iter(text) {
        let inner = &caps[1];
        let (display, target) = inner.split_once('|').ok_or_else(|| {
            GrammarError::MalformedLink {
                token: caps[0].to_string(),
            }
        })?;
        links.push(Link {
            text: display.to_string(),
            passage_id: target.to_string(),
        });
    }
    Ok(links)
}

/// Decode the first metadata token over the declared field defaults; absent
/// token means the defaults stand as-is.
fn extract_metadata(text: &str) -> Result<PassageMetadata, GrammarError> {
    match META_TOKEN.find(text) {
        Some(token) => serde_json::from_str(token.as_str()).map_err(|e| {
            GrammarError::MalformedMetadata {
                reason: e.to_string(),
            }
        }),
        None => Ok(PassageMetadata::default()),
    }
}
