//! Traits describing read-only rule catalogs.
//!
//! Oracles expose skill rules, non-skill bonus sources, unit definitions and
//! production types. The [`RulesEnv`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete implementations.
mod error;
mod production;
mod skills;
mod snapshot;
mod sources;
mod units;

pub use error::{LookupResultExt, OracleError};
pub use production::{ProductionBucket, ProductionOracle, ProductionTypeRule, RoundingDirection};
pub use skills::{BonusAmount, SkillBonus, SkillOracle, SkillOrigin, SkillRule};
pub use snapshot::{CatalogSnapshot, SnapshotCatalogOracle};
pub use sources::{
    AreaEffectRule, BonusSource, ExperienceLevelRule, SourceOracle, WeaponGradeRule,
};
pub use units::{MagicRealmRule, UnitDefinition, UnitOracle, UnitTypeRule};

/// Aggregates the read-only catalogs required by the resolution engine.
#[derive(Clone, Copy)]
pub struct RulesEnv<'a> {
    skills: Option<&'a dyn SkillOracle>,
    sources: Option<&'a dyn SourceOracle>,
    units: Option<&'a dyn UnitOracle>,
    production: Option<&'a dyn ProductionOracle>,
}

impl<'a> RulesEnv<'a> {
    pub fn new(
        skills: Option<&'a dyn SkillOracle>,
        sources: Option<&'a dyn SourceOracle>,
        units: Option<&'a dyn UnitOracle>,
        production: Option<&'a dyn ProductionOracle>,
    ) -> Self {
        Self {
            skills,
            sources,
            units,
            production,
        }
    }

    pub fn with_all(
        skills: &'a dyn SkillOracle,
        sources: &'a dyn SourceOracle,
        units: &'a dyn UnitOracle,
        production: &'a dyn ProductionOracle,
    ) -> Self {
        Self::new(Some(skills), Some(sources), Some(units), Some(production))
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            sources: None,
            units: None,
            production: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a dyn SkillOracle, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the SourceOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SourcesNotAvailable` if no source oracle was provided.
    pub fn sources(&self) -> Result<&'a dyn SourceOracle, OracleError> {
        self.sources.ok_or(OracleError::SourcesNotAvailable)
    }

    /// Returns the UnitOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnitsNotAvailable` if no unit oracle was provided.
    pub fn units(&self) -> Result<&'a dyn UnitOracle, OracleError> {
        self.units.ok_or(OracleError::UnitsNotAvailable)
    }

    /// Returns the ProductionOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ProductionNotAvailable` if no production oracle was provided.
    pub fn production(&self) -> Result<&'a dyn ProductionOracle, OracleError> {
        self.production.ok_or(OracleError::ProductionNotAvailable)
    }
}

impl core::fmt::Debug for RulesEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RulesEnv")
            .field("skills", &self.skills.is_some())
            .field("sources", &self.sources.is_some())
            .field("units", &self.units.is_some())
            .field("production", &self.production.is_some())
            .finish()
    }
}
