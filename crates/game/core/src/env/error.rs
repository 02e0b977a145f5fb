//! Oracle access errors.
//!
//! Errors related to catalog availability and identifier lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    AreaEffectId, ExperienceLevel, MagicRealmId, ProductionTypeId, SkillId, UnitId, UnitTypeId,
    WeaponGradeId,
};

/// Errors that occur when accessing catalog data.
///
/// Every lookup by identifier returns this type. Missing catalogs are fatal;
/// unknown identifiers mean the request referenced invalid game data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("SourceOracle not available")]
    SourcesNotAvailable,

    #[error("UnitOracle not available")]
    UnitsNotAvailable,

    #[error("ProductionOracle not available")]
    ProductionNotAvailable,

    #[error("skill '{0}' not found")]
    SkillNotFound(SkillId),

    #[error("weapon grade '{0}' not found")]
    WeaponGradeNotFound(WeaponGradeId),

    #[error("combat area effect '{0}' not found")]
    AreaEffectNotFound(AreaEffectId),

    #[error("experience level {0} not found")]
    ExperienceLevelNotFound(ExperienceLevel),

    #[error("unit '{0}' not found")]
    UnitNotFound(UnitId),

    #[error("magic realm '{0}' not found")]
    MagicRealmNotFound(MagicRealmId),

    #[error("unit type '{0}' not found")]
    UnitTypeNotFound(UnitTypeId),

    #[error("production type '{0}' not found")]
    ProductionTypeNotFound(ProductionTypeId),
}

impl OracleError {
    /// True for unknown-identifier errors, false for missing catalogs.
    pub fn is_not_found(&self) -> bool {
        use OracleError::*;
        matches!(
            self,
            SkillNotFound(_)
                | WeaponGradeNotFound(_)
                | AreaEffectNotFound(_)
                | ExperienceLevelNotFound(_)
                | UnitNotFound(_)
                | MagicRealmNotFound(_)
                | UnitTypeNotFound(_)
                | ProductionTypeNotFound(_)
        )
    }
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        if self.is_not_found() {
            ErrorSeverity::Validation
        } else {
            ErrorSeverity::Fatal
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            SourcesNotAvailable => "ORACLE_SOURCES_NOT_AVAILABLE",
            UnitsNotAvailable => "ORACLE_UNITS_NOT_AVAILABLE",
            ProductionNotAvailable => "ORACLE_PRODUCTION_NOT_AVAILABLE",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
            WeaponGradeNotFound(_) => "ORACLE_WEAPON_GRADE_NOT_FOUND",
            AreaEffectNotFound(_) => "ORACLE_AREA_EFFECT_NOT_FOUND",
            ExperienceLevelNotFound(_) => "ORACLE_EXPERIENCE_LEVEL_NOT_FOUND",
            UnitNotFound(_) => "ORACLE_UNIT_NOT_FOUND",
            MagicRealmNotFound(_) => "ORACLE_MAGIC_REALM_NOT_FOUND",
            UnitTypeNotFound(_) => "ORACLE_UNIT_TYPE_NOT_FOUND",
            ProductionTypeNotFound(_) => "ORACLE_PRODUCTION_TYPE_NOT_FOUND",
        }
    }
}

/// Adapter for the few call sites that tolerate an unknown identifier.
///
/// Lookups always return `Result`; absence is fatal unless the caller opts in
/// with [`LookupResultExt::optional`], which maps not-found to `Ok(None)` and
/// still propagates missing-catalog errors.
pub trait LookupResultExt<T> {
    fn optional(self) -> Result<Option<T>, OracleError>;
}

impl<T> LookupResultExt<T> for Result<T, OracleError> {
    fn optional(self) -> Result<Option<T>, OracleError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
