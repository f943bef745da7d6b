use serde::{Deserialize, Serialize};

use super::error::ShortenError;

/// One submission's input, built from the text field at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenRequest {
    pub long_url: String,
}

impl ShortenRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
        }
    }
}

/// A raw entry of the service response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedLink {
    pub long: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub tiny: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// The normalized pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub short_url: String,
    pub long_url: String,
}

impl ShortenResult {
    /// Fold the first response entry into a result.
    ///
    /// `link` wins over `tiny`; both are passed through unmodified. An empty
    /// array, or a first entry with neither field, is `EmptyResponse`.
    pub fn from_response(entries: Vec<ShortenedLink>) -> Result<Self, ShortenError> {
        let first = entries
            .into_iter()
            .next()
            .ok_or(ShortenError::EmptyResponse)?;

        let short_url = first
            .link
            .filter(|url| !url.is_empty())
            .or(first.tiny.filter(|url| !url.is_empty()))
            .ok_or(ShortenError::EmptyResponse)?;

        Ok(Self {
            short_url,
            long_url: first.long,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(link: Option<&str>, tiny: Option<&str>) -> ShortenedLink {
        ShortenedLink {
            long: "https://example.com/a/very/long/path".into(),
            code: Some("ab12".into()),
            tiny: tiny.map(String::from),
            link: link.map(String::from),
        }
    }

    #[test]
    fn link_and_long_pass_through() {
        let result =
            ShortenResult::from_response(vec![entry(Some("https://tiny.test/ab12"), None)]).unwrap();
        assert_eq!(result.short_url, "https://tiny.test/ab12");
        assert_eq!(result.long_url, "https://example.com/a/very/long/path");
    }

    #[test]
    fn tiny_used_when_link_missing() {
        let result = ShortenResult::from_response(vec![entry(None, Some("tiny.test/ab12"))]).unwrap();
        assert_eq!(result.short_url, "tiny.test/ab12");
    }

    #[test]
    fn empty_link_falls_back_to_tiny() {
        let result =
            ShortenResult::from_response(vec![entry(Some(""), Some("tiny.test/ab12"))]).unwrap();
        assert_eq!(result.short_url, "tiny.test/ab12");
    }

    #[test]
    fn only_first_entry_counts() {
        let result = ShortenResult::from_response(vec![
            entry(Some("https://tiny.test/first"), None),
            entry(Some("https://tiny.test/second"), None),
        ])
        .unwrap();
        assert_eq!(result.short_url, "https://tiny.test/first");
    }

    #[test]
    fn empty_array_is_empty_response() {
        assert_eq!(
            ShortenResult::from_response(Vec::new()),
            Err(ShortenError::EmptyResponse)
        );
    }

    #[test]
    fn entry_without_short_url_is_empty_response() {
        assert_eq!(
            ShortenResult::from_response(vec![entry(None, None)]),
            Err(ShortenError::EmptyResponse)
        );
    }

    #[test]
    fn entry_deserializes_with_missing_optionals() {
        let entry: ShortenedLink =
            serde_json::from_str(r#"{"long":"https://example.com","code":"xyz"}"#).unwrap();
        assert_eq!(entry.code.as_deref(), Some("xyz"));
        assert!(entry.link.is_none());
    }
}
