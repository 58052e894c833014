//! Error types for meeting-resolver value construction.

use thiserror::Error;

/// Errors raised when building resolver inputs at the boundary.
///
/// The resolver itself is total over well-formed inputs; these only surface
/// from constructors and deserialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// Bounds violate `0 <= start <= end <= 1440`.
    #[error("Invalid time range: [{start}, {end}) is not within a 1440-minute day")]
    InvalidRange { start: u32, end: u32 },
}

/// Convenience alias used throughout meeting-resolver.
pub type Result<T> = std::result::Result<T, ResolverError>;
