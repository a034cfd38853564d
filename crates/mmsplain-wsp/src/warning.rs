//! Non-fatal decoding diagnostics.

use std::fmt;

/// Category of a non-fatal decoding problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A value violated its first-octet dispatch rule or its declared length.
    MalformedField,
    /// A code had no entry in its lookup table.
    UnresolvedLookup,
    /// The transcoder could not convert a charset to UTF-8.
    UnsupportedCharset,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedField => write!(f, "malformed field"),
            Self::UnresolvedLookup => write!(f, "unresolved lookup"),
            Self::UnsupportedCharset => write!(f, "unsupported charset"),
        }
    }
}

/// A recorded non-fatal decoding problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeWarning {
    /// What went wrong.
    pub kind: WarningKind,
    /// Absolute offset of the offending octet.
    pub position: usize,
    /// Human-readable detail.
    pub message: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.position, self.message)
    }
}

/// Collects warnings produced while decoding one buffer.
///
/// Every pushed warning is also emitted as a `tracing` event.
#[derive(Debug, Clone, Default)]
pub struct Warnings {
    items: Vec<DecodeWarning>,
}

impl Warnings {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn push(&mut self, kind: WarningKind, position: usize, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%kind, position, "{message}");
        self.items.push(DecodeWarning {
            kind,
            position,
            message,
        });
    }

    /// Records a malformed-field warning.
    pub fn malformed(&mut self, position: usize, message: impl Into<String>) {
        self.push(WarningKind::MalformedField, position, message);
    }

    /// Returns the recorded warnings in order.
    #[must_use]
    pub fn as_slice(&self) -> &[DecodeWarning] {
        &self.items
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if any warning of the given kind was recorded.
    #[must_use]
    pub fn contains(&self, kind: WarningKind) -> bool {
        self.items.iter().any(|w| w.kind == kind)
    }

    /// Consumes the collection, returning the warnings.
    #[must_use]
    pub fn into_vec(self) -> Vec<DecodeWarning> {
        self.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut warnings = Warnings::new();
        warnings.malformed(3, "first");
        warnings.push(WarningKind::UnresolvedLookup, 7, "second");

        let items = warnings.as_slice();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].position, 3);
        assert_eq!(items[1].kind, WarningKind::UnresolvedLookup);
        assert!(warnings.contains(WarningKind::MalformedField));
        assert!(!warnings.contains(WarningKind::UnsupportedCharset));
    }

    #[test]
    fn test_display() {
        let warning = DecodeWarning {
            kind: WarningKind::UnsupportedCharset,
            position: 12,
            message: "x-unknown".to_string(),
        };
        assert_eq!(warning.to_string(), "unsupported charset at 12: x-unknown");
    }
}
