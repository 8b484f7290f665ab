//! Bare URL detection for post and note text.
//!
//! The core only reports where links are; turning them into markup is the
//! presentation layer's job.

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("valid url regex"));

/// One detected URL as a byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    pub start: usize,
    pub end: usize,
    pub url: String,
}

/// Finds every bare `http://` or `https://` URL in `text`.
///
/// A URL runs until the next whitespace character.
pub fn link_spans(text: &str) -> Vec<LinkSpan> {
    BARE_URL_RE
        .find_iter(text)
        .map(|found| LinkSpan {
            start: found.start(),
            end: found.end(),
            url: found.as_str().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::link_spans;

    #[test]
    fn finds_http_and_https_until_whitespace() {
        let text = "see https://example.com/a?b=1 and http://x.org\nnext";
        let spans = link_spans(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].url, "https://example.com/a?b=1");
        assert_eq!(&text[spans[0].start..spans[0].end], spans[0].url);
        assert_eq!(spans[1].url, "http://x.org");
    }

    #[test]
    fn ignores_other_schemes_and_plain_text() {
        assert!(link_spans("ftp://example.com or example.com").is_empty());
    }
}
