//! Deterministic unit rules resolution.
//!
//! `realm-core` turns raw unit statistics and independently sourced modifiers
//! (weapon grades, experience, combat area effects, spell-granted and hero
//! skills) into the effective values used by combat and city production.
//! Rule data is read through the oracle traits in [`env`]; per-unit queries go
//! through [`unit::ExpandedUnit`], which feeds the aggregation engine in
//! [`stats`]. City production is accumulated with [`production`].
pub mod config;
pub mod env;
pub mod error;
pub mod production;
pub mod state;
pub mod stats;
pub mod unit;

pub use config::RulesConfig;
pub use env::{
    AreaEffectRule, BonusAmount, BonusSource, CatalogSnapshot, ExperienceLevelRule,
    LookupResultExt, MagicRealmRule, OracleError, ProductionBucket, ProductionOracle,
    ProductionTypeRule, RoundingDirection, RulesEnv, SkillBonus, SkillOracle, SkillOrigin,
    SkillRule, SnapshotCatalogOracle, SourceOracle, UnitDefinition, UnitOracle, UnitTypeRule,
    WeaponGradeRule,
};
pub use error::{ConsistencyError, ErrorSeverity, GameError, RulesError};
pub use production::{CityProduction, ProductionBreakdown, ResolvedProduction};
pub use state::{
    AreaEffectId, ExperienceLevel, MagicRealmId, PossessedSkills, ProductionBonuses,
    ProductionTypeId, SkillId, UnitId, UnitSnapshot, UnitTypeId, WeaponGradeId, WorldContext,
};
pub use stats::{Shelf, ShelfTotals, SignPolicy, SkillBreakdown, UnitSources};
pub use unit::ExpandedUnit;
