//! Reference strings: `<documentId>["#" defName]`

use std::fmt;

/// Definition targeted when a reference carries no fragment
pub const DEFAULT_DEFINITION: &str = "main";

/// A parsed reference, borrowing from the source string
///
/// The string is split on the first `#`. A reference with an empty document
/// segment (`#defName`) is local to the document that declares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    raw: &'a str,
    document: &'a str,
    fragment: Option<&'a str>,
}

impl<'a> Reference<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('#') {
            Some((document, fragment)) => Self {
                raw,
                document,
                fragment: Some(fragment),
            },
            None => Self {
                raw,
                document: raw,
                fragment: None,
            },
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Candidate document id (left of the first `#`)
    pub fn document_id(&self) -> &'a str {
        self.document
    }

    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Targeted definition name; `main` when there is no fragment
    pub fn definition(&self) -> &'a str {
        self.fragment.unwrap_or(DEFAULT_DEFINITION)
    }

    pub fn is_local(&self) -> bool {
        self.document.is_empty()
    }

    /// Short label: the fragment, or the last dotted segment of the document id
    pub fn short_label(&self) -> &'a str {
        match self.fragment {
            Some(fragment) => fragment,
            None => self.raw.rsplit('.').next().unwrap_or(self.raw),
        }
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
