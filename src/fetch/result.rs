//! Fetch result records.

use serde::{Serialize, Serializer};

use crate::error_handling::FetchErrorKind;

/// Terminal state of one page fetch.
///
/// A successful fetch carries only its character count; a failed one carries
/// only its category and labeled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body was downloaded
    Loaded {
        /// Number of characters in the decoded body
        char_count: usize,
    },
    /// The fetch failed
    Failed {
        /// Failure category
        kind: FetchErrorKind,
        /// Message starting with the category prefix
        message: String,
    },
}

/// Result of fetching one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    url: String,
    outcome: FetchOutcome,
}

impl FetchResult {
    /// Creates a successful result.
    pub fn loaded(url: impl Into<String>, char_count: usize) -> Self {
        Self {
            url: url.into(),
            outcome: FetchOutcome::Loaded { char_count },
        }
    }

    /// Creates a failed result; the message is `kind`'s prefix followed by `detail`.
    pub fn failed(
        url: impl Into<String>,
        kind: FetchErrorKind,
        detail: impl std::fmt::Display,
    ) -> Self {
        Self {
            url: url.into(),
            outcome: FetchOutcome::Failed {
                kind,
                message: kind.label(detail),
            },
        }
    }

    /// The requested address.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    pub fn success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Loaded { .. })
    }

    /// Character count, present only for successful fetches.
    pub fn char_count(&self) -> Option<usize> {
        match self.outcome {
            FetchOutcome::Loaded { char_count } => Some(char_count),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Labeled error message, present only for failed fetches.
    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Loaded { .. } => None,
            FetchOutcome::Failed { message, .. } => Some(message),
        }
    }

    pub fn error_kind(&self) -> Option<FetchErrorKind> {
        match self.outcome {
            FetchOutcome::Loaded { .. } => None,
            FetchOutcome::Failed { kind, .. } => Some(kind),
        }
    }
}

#[derive(Serialize)]
struct FetchResultRecord<'a> {
    url: &'a str,
    success: bool,
    char_count: Option<usize>,
    error_message: Option<&'a str>,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FetchResultRecord {
            url: &self.url,
            success: self.success(),
            char_count: self.char_count(),
            error_message: self.error_message(),
        }
        .serialize(serializer)
    }
}
