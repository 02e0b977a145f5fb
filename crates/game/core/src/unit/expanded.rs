//! Effective-value facade over one unit.
//!
//! [`ExpandedUnit::expand`] performs every catalog lookup a unit needs exactly
//! once (definition, magic realm, unit type, weapon grade, experience level,
//! area effects). Queries then feed the aggregation engine with those rules.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::RulesConfig;
use crate::env::{
    AreaEffectRule, ExperienceLevelRule, MagicRealmRule, RulesEnv, UnitDefinition, UnitTypeRule,
    WeaponGradeRule,
};
use crate::error::{ConsistencyError, RulesError};
use crate::state::{ProductionTypeId, SkillId, UnitSnapshot, WorldContext};
use crate::stats::{self, Shelf, SignPolicy, SkillBreakdown, UnitSources, percent_of};

/// A unit snapshot joined with every rule that applies to it.
#[derive(Debug)]
pub struct ExpandedUnit<'a> {
    pub(super) snapshot: &'a UnitSnapshot,
    pub(super) world: &'a WorldContext,
    pub(super) definition: &'a UnitDefinition,
    pub(super) magic_realm: &'a MagicRealmRule,
    pub(super) unit_type: &'a UnitTypeRule,
    weapon_grade: Option<&'a WeaponGradeRule>,
    experience: Option<&'a ExperienceLevelRule>,
    area_effects: Vec<&'a AreaEffectRule>,
    pub(super) env: RulesEnv<'a>,
    pub(super) config: &'a RulesConfig,
}

impl<'a> ExpandedUnit<'a> {
    /// Resolves every rule the unit depends on.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown unit definition, magic realm, unit
    /// type, weapon grade, experience level or area effect, and
    /// `*NotAvailable` when a required catalog is missing from `env`.
    pub fn expand(
        snapshot: &'a UnitSnapshot,
        world: &'a WorldContext,
        env: RulesEnv<'a>,
        config: &'a RulesConfig,
    ) -> Result<Self, RulesError> {
        let units = env.units()?;
        let definition = units.find_unit(&snapshot.unit)?;
        let magic_realm = units.find_magic_realm(&definition.magic_realm)?;
        let unit_type = units.find_unit_type(&magic_realm.unit_type)?;

        let sources = env.sources()?;
        let weapon_grade = snapshot
            .weapon_grade
            .as_ref()
            .map(|grade| sources.find_weapon_grade(grade))
            .transpose()?;
        let experience = snapshot
            .experience_level
            .map(|level| sources.find_experience_level(level))
            .transpose()?;
        let area_effects = world
            .area_effects
            .iter()
            .map(|effect| sources.find_area_effect(effect))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            unit = %snapshot.unit,
            magic_realm = %magic_realm.id,
            unit_type = %unit_type.id,
            experience = ?snapshot.experience_level,
            area_effects = area_effects.len(),
            "unit expanded"
        );

        Ok(Self {
            snapshot,
            world,
            definition,
            magic_realm,
            unit_type,
            weapon_grade,
            experience,
            area_effects,
            env,
            config,
        })
    }

    pub fn snapshot(&self) -> &'a UnitSnapshot {
        self.snapshot
    }

    pub fn definition(&self) -> &'a UnitDefinition {
        self.definition
    }

    /// Bonus sources handed to the aggregation engine.
    pub fn sources(&self) -> UnitSources<'_> {
        UnitSources {
            skills: &self.snapshot.skills,
            weapon_grade: self.weapon_grade,
            experience_level: self.snapshot.experience_level,
            experience: self.experience,
            area_effects: &self.area_effects,
        }
    }

    /// Resolves one skill through a shelf filter and sign policy.
    ///
    /// `Ok(None)` means the unit does not have the skill.
    pub fn skill(
        &self,
        skill: &SkillId,
        filter: Shelf,
        sign: SignPolicy,
    ) -> Result<Option<i32>, RulesError> {
        stats::resolve(&self.sources(), skill, filter, sign, self.env.skills()?)
    }

    /// Fully modified value of a skill.
    pub fn effective_skill(&self, skill: &SkillId) -> Result<Option<i32>, RulesError> {
        self.skill(skill, Shelf::All, SignPolicy::Both)
    }

    /// Every shelf contributing to a skill, for UI breakdowns.
    pub fn skill_breakdown(&self, skill: &SkillId) -> Result<Option<SkillBreakdown>, RulesError> {
        stats::breakdown(&self.sources(), skill, self.env.skills()?)
    }

    /// Upkeep of one resource after the owner's upkeep reduction.
    ///
    /// A resource the unit does not consume is 0 and never discounted. The
    /// reduction is `floor(base * pct / 100)`, and the result never drops
    /// below zero.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `resource` is not a known production type, and
    /// `Overflow` if a negative reduction pushes upkeep past `i32::MAX`.
    pub fn upkeep(&self, resource: &ProductionTypeId) -> Result<i32, RulesError> {
        self.env.production()?.find_production_type(resource)?;

        let base = self.definition.base_upkeep(resource);
        if base == 0 {
            return Ok(0);
        }

        let percent = self
            .unit_type
            .upkeep_reduction
            .as_ref()
            .map_or(0, |reduction| self.world.production_bonuses.percentage(reduction));
        let upkeep = percent_of(base, percent)
            .and_then(|reduction| base.checked_sub(reduction))
            .ok_or_else(|| ConsistencyError::overflow(resource))?
            .max(0);

        debug!(unit = %self.snapshot.unit, %resource, base, percent, upkeep, "upkeep resolved");
        Ok(upkeep)
    }

    /// Every non-zero upkeep of the unit, by resource.
    pub fn total_upkeep(&self) -> Result<BTreeMap<ProductionTypeId, i32>, RulesError> {
        let mut upkeep = BTreeMap::new();
        for resource in self.definition.upkeep.keys() {
            let amount = self.upkeep(resource)?;
            if amount != 0 {
                upkeep.insert(resource.clone(), amount);
            }
        }
        Ok(upkeep)
    }
}
