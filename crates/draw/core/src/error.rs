//! Common error infrastructure for draw-core.
//!
//! Domain-specific errors (e.g., `CatalogError`, `StartError`) are defined in
//! their respective modules alongside the operations they validate. This
//! module provides the shared classification used across all of them.

/// Severity level of an error, used for categorization and log routing.
///
/// - **Validation**: Invalid input or a command issued in the wrong phase;
///   reject without retry.
/// - **Internal**: An invariant the core guarantees by construction did not
///   hold. These indicate bugs and should be investigated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty catalog, negative weight, finish without a spin
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: computed landing outside the winner's sector
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all draw-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must act: the caller (Validation) or
///   the maintainer (Internal)
pub trait DrawError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// Consumers map severity to log levels and recovery strategies.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
