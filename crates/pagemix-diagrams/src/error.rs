//! Error types for diagram scanning.

/// Error building a [`DiagramScanner`](crate::DiagramScanner) from configuration.
///
/// Scanning itself never fails; only invalid configuration is rejected.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ScanError {
    /// Fence language tag is empty.
    #[error("diagram language tag cannot be empty")]
    EmptyLanguage,

    /// Subtype keyword contains characters other than ASCII letters and digits.
    #[error("invalid diagram subtype keyword '{0}' (expected ASCII letters and digits)")]
    InvalidSubtype(String),

    /// No subtype keywords configured.
    #[error("at least one diagram subtype keyword is required")]
    NoSubtypes,

    /// Pattern compilation failed.
    #[error("pattern error")]
    Pattern(#[from] regex::Error),
}
