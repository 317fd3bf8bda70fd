//! Text normalization applied to the scanned field before keyword matching.
//!
//! The pipeline order matters: entity unescaping may reintroduce `<`/`>`
//! only after tag spans are gone, and URL/email removal assumes NFKC has
//! already folded full-width punctuation. Whitespace collapsing runs last.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Map raw field text to its cleaned canonical form.
///
/// Deterministic, side-effect free, and safe to call concurrently from any
/// worker. Missing field values are the caller's concern: map them to the
/// empty string, which matches no keyword.
pub fn normalize(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");
    let text = html_escape::decode_html_entities(text.as_ref());
    let text: String = text.nfkc().collect();
    let text = URL_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
