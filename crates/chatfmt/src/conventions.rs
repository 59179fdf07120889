//! Formatting conventions shared by the translator and the composer.

use crate::error::ConventionError;

/// Default character that flags an inline style code (`&c`).
pub const DEFAULT_MARKER: char = '&';

/// Default delimiter bounding the interactive region (`@run@`).
pub const DEFAULT_DELIMITER: &str = "@";

/// The characters and switches a formatter works with.
///
/// # Examples
///
/// ```
/// use chatfmt::Conventions;
///
/// let conventions = Conventions::default().with_marker('~').with_delimiter("%%");
/// assert!(conventions.validate().is_ok());
///
/// assert!(Conventions::default().with_delimiter("").validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conventions {
    /// Alternate style marker replaced by the canonical escape.
    pub marker: char,
    /// Delimiter used in pairs around the interactive region.
    pub delimiter: String,
    /// Turn web addresses into `OpenUrl` fragments.
    pub link_urls: bool,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            delimiter: DEFAULT_DELIMITER.to_string(),
            link_urls: false,
        }
    }
}

impl Conventions {
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_url_links(mut self, link_urls: bool) -> Self {
        self.link_urls = link_urls;
        self
    }

    /// Check that the conventions can be used unambiguously.
    pub fn validate(&self) -> Result<(), ConventionError> {
        if self.delimiter.is_empty() {
            return Err(ConventionError::EmptyDelimiter);
        }
        if self.delimiter.contains(self.marker) {
            return Err(ConventionError::DelimiterContainsMarker {
                delimiter: self.delimiter.clone(),
                marker: self.marker,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let conventions = Conventions::default();
        assert_eq!(conventions.marker, '&');
        assert_eq!(conventions.delimiter, "@");
        assert!(!conventions.link_urls);
        assert!(conventions.validate().is_ok());
    }

    #[test]
    fn rejects_empty_delimiter() {
        let conventions = Conventions::default().with_delimiter("");
        assert_eq!(conventions.validate(), Err(ConventionError::EmptyDelimiter));
    }

    #[test]
    fn rejects_delimiter_containing_marker() {
        let conventions = Conventions::default().with_delimiter("&&");
        assert!(matches!(
            conventions.validate(),
            Err(ConventionError::DelimiterContainsMarker { marker: '&', .. })
        ));
    }
}
