//! Common error infrastructure for realm-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`crate::env::OracleError`] for catalog lookups and [`ConsistencyError`] for
//! broken arithmetic invariants. [`RulesError`] is the umbrella type returned by
//! every public resolution entry point.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure family has its own enum with specific variants
//! - **Severity Classification**: errors are categorized for handling strategies
//! - **Deterministic**: the same inputs always produce the same error, so nothing
//!   here is ever retried

use crate::env::OracleError;
use crate::state::{ProductionTypeId, SkillId};

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: the request referenced data that does not exist
/// - **Internal**: rule data or caller logic broke an invariant
/// - **Fatal**: the environment is missing a required catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: unknown skill id, unknown weapon grade
    Validation,

    /// Unexpected inconsistency that indicates a defect in rule data or caller logic.
    ///
    /// Examples: odd doubled amount routed to the post-bonus bucket
    Internal,

    /// Unrecoverable misconfiguration of the resolution environment.
    ///
    /// Examples: no skill catalog supplied
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all realm-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix it, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Arithmetic invariants violated by rule data or by the caller.
///
/// These never depend on world state; they mean the rule catalog or the calling
/// code must be fixed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsistencyError {
    /// A doubled amount routed to the post-bonus bucket was not even.
    #[error("doubled amount {doubled} for '{production_type}' is odd and cannot go after percentage bonuses")]
    OddPostBonusAmount {
        production_type: ProductionTypeId,
        doubled: i32,
    },

    /// A production type that must halve exactly accumulated an odd doubled total.
    #[error("doubled total {doubled} for '{production_type}' must halve exactly")]
    InexactHalving {
        production_type: ProductionTypeId,
        doubled: i32,
    },

    /// A divisor-scaled bonus declared a divisor of zero.
    #[error("bonus from '{origin}' to skill '{target}' has a zero divisor")]
    ZeroDivisor { origin: String, target: SkillId },

    /// An intermediate value left the `i32` range.
    #[error("arithmetic overflow while resolving '{quantity}'")]
    Overflow { quantity: String },
}

impl ConsistencyError {
    pub fn overflow(quantity: impl ToString) -> Self {
        Self::Overflow {
            quantity: quantity.to_string(),
        }
    }
}

impl GameError for ConsistencyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OddPostBonusAmount { .. } => "CONSISTENCY_ODD_POST_BONUS_AMOUNT",
            Self::InexactHalving { .. } => "CONSISTENCY_INEXACT_HALVING",
            Self::ZeroDivisor { .. } => "CONSISTENCY_ZERO_DIVISOR",
            Self::Overflow { .. } => "CONSISTENCY_OVERFLOW",
        }
    }
}

/// Umbrella error returned by resolution entry points.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

impl RulesError {
    /// True when the request referenced an identifier the catalog does not know.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Oracle(e) if e.is_not_found())
    }

    /// True when rule data or caller logic broke an invariant.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Consistency(_))
    }
}

impl GameError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(e) => e.severity(),
            Self::Consistency(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(e) => e.error_code(),
            Self::Consistency(e) => e.error_code(),
        }
    }
}
