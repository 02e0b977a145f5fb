//! Stateless queries layered on an expanded unit.

use super::ExpandedUnit;
use crate::env::{MagicRealmRule, UnitTypeRule};
use crate::error::RulesError;
use crate::state::SkillId;

impl<'a> ExpandedUnit<'a> {
    pub fn magic_realm(&self) -> &'a MagicRealmRule {
        self.magic_realm
    }

    pub fn unit_type(&self) -> &'a UnitTypeRule {
        self.unit_type
    }

    pub fn is_hero(&self) -> bool {
        self.magic_realm.id == self.config.hero_magic_realm
    }

    pub fn is_summoned(&self) -> bool {
        self.unit_type.id == self.config.summoned_unit_type
    }

    /// Basic value of a skill as combat reads it.
    ///
    /// Hero stats are stored halved in the unit data, so heroes read double
    /// their basic value. Valueless skills read as 0.
    pub fn hero_scaled_skill(&self, skill: &SkillId) -> Result<Option<i32>, RulesError> {
        self.env.skills()?.find_skill(skill)?;

        let multiplier = if self.is_hero() { 2 } else { 1 };
        Ok(self
            .snapshot
            .skills
            .get(skill)
            .map(|value| value.unwrap_or(0) * multiplier))
    }

    /// True if any possessed skill lets the unit ignore combat terrain.
    pub fn ignores_combat_terrain(&self) -> Result<bool, RulesError> {
        let skills = self.env.skills()?;
        for (id, _) in self.snapshot.skills.iter() {
            if skills.find_skill(id)?.ignores_combat_terrain {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Reputation the owner loses when this unit dies.
    ///
    /// Heroes lose `floor(experience ordinal / reputation_loss_divisor)`;
    /// heroes without experience and every other unit cost nothing.
    pub fn reputation_loss_on_death(&self) -> i32 {
        if !self.is_hero() {
            return 0;
        }

        let divisor = i32::from(self.config.reputation_loss_divisor.get());
        self.snapshot
            .experience_level
            .map_or(0, |level| level.ordinal() / divisor)
    }

    pub fn full_figure_count(&self) -> u32 {
        self.definition.figure_count
    }

    /// Figures still standing after the damage the unit has taken.
    ///
    /// Uses the effective hit points per figure; a unit without a positive
    /// hit point value loses one figure per point of damage.
    pub fn alive_figure_count(&self) -> Result<u32, RulesError> {
        let hit_points = self
            .effective_skill(&self.config.hit_points_skill)?
            .and_then(|hp| u32::try_from(hp).ok())
            .filter(|&hp| hp > 0)
            .unwrap_or(1);
        let damage = u32::try_from(self.snapshot.damage_taken).unwrap_or(0);

        Ok(self.full_figure_count().saturating_sub(damage / hit_points))
    }
}
