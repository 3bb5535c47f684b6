//! Typed error handling for field collection
//!
//! Collection has very few ways to fail, and almost all of them mean that an
//! upstream stage (parsing, validation, variable coercion) let something through
//! that it should have rejected. Those failures abort the whole collection call:
//! there is no partial result and nothing to retry.
//!
//! # Error Categories
//!
//! - Invariant violations ([`CollectError::is_internal`] returns `true`):
//!   [`CollectError::MalformedDirective`], [`CollectError::MissingFragment`],
//!   [`CollectError::MalformedLiteral`], [`CollectError::RecursionLimitExceeded`]
//! - Request errors: [`CollectError::Parse`], [`CollectError::OperationNotFound`]
//!
//! # Example
//!
//! ```rust,ignore
//! use field_collector::prelude::*;
//!
//! match ctx.collect_fields(selections, &["Dog", "Pet"]) {
//!     Ok(fields) => resolve(fields),
//!     Err(e) if e.is_internal() => respond_internal_error(e.error_code()),
//!     Err(e) => respond_bad_request(e.to_string()),
//! }
//! ```

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, CollectError>;

/// The error type returned by collection and request setup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectError {
    /// A `@skip` / `@include` directive without a usable boolean `if` argument
    #[error("{directive}: {reason}")]
    MalformedDirective { directive: String, reason: String },

    /// A fragment spread referencing a fragment the document does not define
    #[error("missing fragment {name}")]
    MissingFragment { name: String },

    /// An argument literal that has no runtime value representation
    #[error("argument '{argument}': {reason}")]
    MalformedLiteral { argument: String, reason: String },

    /// Fragment nesting went deeper than the configured limit
    #[error("selection processing recursion limit ({limit}) exceeded")]
    RecursionLimitExceeded { limit: usize },

    /// The requested operation is not part of the document
    #[error("operation not found: {}", .name.as_deref().unwrap_or("<anonymous>"))]
    OperationNotFound { name: Option<String> },

    /// The query text is not a valid GraphQL document
    #[error("failed to parse query: {message}")]
    Parse { message: String },
}

impl CollectError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CollectError::MalformedDirective { .. } => "MALFORMED_DIRECTIVE",
            CollectError::MissingFragment { .. } => "MISSING_FRAGMENT",
            CollectError::MalformedLiteral { .. } => "MALFORMED_LITERAL",
            CollectError::RecursionLimitExceeded { .. } => "RECURSION_LIMIT_EXCEEDED",
            CollectError::OperationNotFound { .. } => "OPERATION_NOT_FOUND",
            CollectError::Parse { .. } => "PARSE_ERROR",
        }
    }

    /// Whether this error is an upstream invariant violation rather than a bad request
    ///
    /// A calling layer typically turns internal errors into a generic
    /// "internal server error" response.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            CollectError::OperationNotFound { .. } | CollectError::Parse { .. }
        )
    }

    pub(crate) fn malformed_directive(directive: &str, reason: impl Into<String>) -> Self {
        CollectError::MalformedDirective {
            directive: directive.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_literal(argument: &str, reason: impl Into<String>) -> Self {
        CollectError::MalformedLiteral {
            argument: argument.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_directive_wording() {
        let err = CollectError::malformed_directive("skip", "argument 'if' not defined");
        assert_eq!(err.to_string(), "skip: argument 'if' not defined");
    }

    #[test]
    fn test_anonymous_operation_not_found_display() {
        let err = CollectError::OperationNotFound { name: None };
        assert_eq!(err.to_string(), "operation not found: <anonymous>");

        let err = CollectError::OperationNotFound {
            name: Some("GetDog".to_string()),
        };
        assert_eq!(err.to_string(), "operation not found: GetDog");
    }

    #[test]
    fn test_internal_classification() {
        assert!(
            CollectError::MissingFragment {
                name: "F".to_string()
            }
            .is_internal()
        );
        assert!(CollectError::RecursionLimitExceeded { limit: 3 }.is_internal());
        assert!(
            !CollectError::Parse {
                message: "eof".to_string()
            }
            .is_internal()
        );
    }
}
