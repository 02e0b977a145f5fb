//! In-memory rule catalog and the oracle adapter backed by it.
//!
//! # Design
//!
//! - **Snapshot**: plain serializable lists of every rule record, as loaded from
//!   content files or built in code
//! - **Adapter**: [`SnapshotCatalogOracle`] implements every oracle trait over a
//!   borrowed snapshot

use super::{
    AreaEffectRule, ExperienceLevelRule, MagicRealmRule, OracleError, ProductionOracle,
    ProductionTypeRule, RulesEnv, SkillOracle, SkillRule, SourceOracle, UnitDefinition,
    UnitOracle, UnitTypeRule, WeaponGradeRule,
};
use crate::state::{
    AreaEffectId, ExperienceLevel, MagicRealmId, ProductionTypeId, SkillId, UnitId, UnitTypeId,
    WeaponGradeId,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Complete rule catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogSnapshot {
    pub skills: Vec<SkillRule>,
    pub weapon_grades: Vec<WeaponGradeRule>,
    pub area_effects: Vec<AreaEffectRule>,
    pub experience_levels: Vec<ExperienceLevelRule>,
    pub units: Vec<UnitDefinition>,
    pub magic_realms: Vec<MagicRealmRule>,
    pub unit_types: Vec<UnitTypeRule>,
    pub production_types: Vec<ProductionTypeRule>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skill(mut self, rule: SkillRule) -> Self {
        self.skills.push(rule);
        self
    }

    pub fn with_weapon_grade(mut self, rule: WeaponGradeRule) -> Self {
        self.weapon_grades.push(rule);
        self
    }

    pub fn with_area_effect(mut self, rule: AreaEffectRule) -> Self {
        self.area_effects.push(rule);
        self
    }

    pub fn with_experience_level(mut self, rule: ExperienceLevelRule) -> Self {
        self.experience_levels.push(rule);
        self
    }

    pub fn with_unit(mut self, unit: UnitDefinition) -> Self {
        self.units.push(unit);
        self
    }

    pub fn with_magic_realm(mut self, rule: MagicRealmRule) -> Self {
        self.magic_realms.push(rule);
        self
    }

    pub fn with_unit_type(mut self, rule: UnitTypeRule) -> Self {
        self.unit_types.push(rule);
        self
    }

    pub fn with_production_type(mut self, rule: ProductionTypeRule) -> Self {
        self.production_types.push(rule);
        self
    }

    /// Borrows this snapshot as an oracle.
    pub fn oracle(&self) -> SnapshotCatalogOracle<'_> {
        SnapshotCatalogOracle::new(self)
    }
}

// ============================================================================
// Oracle Adapter
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct SnapshotCatalogOracle<'a> {
    snapshot: &'a CatalogSnapshot,
}

impl<'a> SnapshotCatalogOracle<'a> {
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Bundles this oracle as every catalog of a [`RulesEnv`].
    pub fn as_env(&self) -> RulesEnv<'_> {
        RulesEnv::with_all(self, self, self, self)
    }
}

impl<'a> SkillOracle for SnapshotCatalogOracle<'a> {
    fn find_skill(&self, id: &SkillId) -> Result<&SkillRule, OracleError> {
        self.snapshot
            .skills
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::SkillNotFound(id.clone()))
    }

    fn skills(&self) -> Vec<&SkillRule> {
        self.snapshot.skills.iter().collect()
    }
}

impl<'a> SourceOracle for SnapshotCatalogOracle<'a> {
    fn find_weapon_grade(&self, id: &WeaponGradeId) -> Result<&WeaponGradeRule, OracleError> {
        self.snapshot
            .weapon_grades
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::WeaponGradeNotFound(id.clone()))
    }

    fn find_area_effect(&self, id: &AreaEffectId) -> Result<&AreaEffectRule, OracleError> {
        self.snapshot
            .area_effects
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::AreaEffectNotFound(id.clone()))
    }

    fn find_experience_level(
        &self,
        level: ExperienceLevel,
    ) -> Result<&ExperienceLevelRule, OracleError> {
        self.snapshot
            .experience_levels
            .iter()
            .find(|rule| rule.level == level)
            .ok_or(OracleError::ExperienceLevelNotFound(level))
    }
}

impl<'a> UnitOracle for SnapshotCatalogOracle<'a> {
    fn find_unit(&self, id: &UnitId) -> Result<&UnitDefinition, OracleError> {
        self.snapshot
            .units
            .iter()
            .find(|unit| unit.id == *id)
            .ok_or_else(|| OracleError::UnitNotFound(id.clone()))
    }

    fn find_magic_realm(&self, id: &MagicRealmId) -> Result<&MagicRealmRule, OracleError> {
        self.snapshot
            .magic_realms
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::MagicRealmNotFound(id.clone()))
    }

    fn find_unit_type(&self, id: &UnitTypeId) -> Result<&UnitTypeRule, OracleError> {
        self.snapshot
            .unit_types
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::UnitTypeNotFound(id.clone()))
    }
}

impl<'a> ProductionOracle for SnapshotCatalogOracle<'a> {
    fn find_production_type(
        &self,
        id: &ProductionTypeId,
    ) -> Result<&ProductionTypeRule, OracleError> {
        self.snapshot
            .production_types
            .iter()
            .find(|rule| rule.id == *id)
            .ok_or_else(|| OracleError::ProductionTypeNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SkillOrigin;

    #[test]
    fn lookups_report_unknown_identifiers() {
        let catalog = CatalogSnapshot::new().with_skill(SkillRule::innate("US004"));
        let oracle = catalog.oracle();

        assert_eq!(
            oracle.find_skill(&SkillId::from("US004")).map(|r| r.origin),
            Ok(SkillOrigin::Innate)
        );
        assert_eq!(
            oracle.find_skill(&SkillId::from("US005")),
            Err(OracleError::SkillNotFound(SkillId::from("US005")))
        );
        assert_eq!(
            oracle.find_experience_level(ExperienceLevel(2)),
            Err(OracleError::ExperienceLevelNotFound(ExperienceLevel(2)))
        );
        assert_eq!(oracle.skills().len(), 1);
    }
}
