//! Non-skill bonus sources: weapon grades, combat area effects, experience levels.

use super::{BonusAmount, OracleError, SkillBonus, SkillRule};
use crate::state::{AreaEffectId, ExperienceLevel, SkillId, WeaponGradeId};

/// Oracle providing the rules for non-skill bonus sources.
pub trait SourceOracle: Send + Sync {
    fn find_weapon_grade(&self, id: &WeaponGradeId) -> Result<&WeaponGradeRule, OracleError>;

    fn find_area_effect(&self, id: &AreaEffectId) -> Result<&AreaEffectRule, OracleError>;

    fn find_experience_level(
        &self,
        level: ExperienceLevel,
    ) -> Result<&ExperienceLevelRule, OracleError>;
}

/// Anything that carries a list of bonuses to other skills.
pub trait BonusSource {
    /// Identifier used in logs and error messages.
    fn source_label(&self) -> String;

    fn bonuses(&self) -> &[SkillBonus];

    /// Bonuses of this source that target `target`, in declaration order.
    fn bonuses_to<'a>(&'a self, target: &'a SkillId) -> impl Iterator<Item = BonusAmount> + 'a {
        self.bonuses()
            .iter()
            .filter(move |bonus| bonus.target == *target)
            .map(|bonus| bonus.amount)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponGradeRule {
    pub id: WeaponGradeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<SkillBonus>,
}

impl WeaponGradeRule {
    pub fn new(id: impl Into<WeaponGradeId>) -> Self {
        Self {
            id: id.into(),
            bonuses: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, bonus: SkillBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaEffectRule {
    pub id: AreaEffectId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<SkillBonus>,
}

impl AreaEffectRule {
    pub fn new(id: impl Into<AreaEffectId>) -> Self {
        Self {
            id: id.into(),
            bonuses: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, bonus: SkillBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceLevelRule {
    pub level: ExperienceLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<SkillBonus>,
}

impl ExperienceLevelRule {
    pub fn new(level: ExperienceLevel) -> Self {
        Self {
            level,
            bonuses: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, bonus: SkillBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }
}

impl BonusSource for SkillRule {
    fn source_label(&self) -> String {
        self.id.to_string()
    }

    fn bonuses(&self) -> &[SkillBonus] {
        &self.bonuses
    }
}

impl BonusSource for WeaponGradeRule {
    fn source_label(&self) -> String {
        self.id.to_string()
    }

    fn bonuses(&self) -> &[SkillBonus] {
        &self.bonuses
    }
}

impl BonusSource for AreaEffectRule {
    fn source_label(&self) -> String {
        self.id.to_string()
    }

    fn bonuses(&self) -> &[SkillBonus] {
        &self.bonuses
    }
}

impl BonusSource for ExperienceLevelRule {
    fn source_label(&self) -> String {
        format!("experience {}", self.level)
    }

    fn bonuses(&self) -> &[SkillBonus] {
        &self.bonuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonuses_to_filters_by_target() {
        let grade = WeaponGradeRule::new("WEP01")
            .with_bonus(SkillBonus::fixed("US004", 1))
            .with_bonus(SkillBonus::fixed("US005", 2))
            .with_bonus(SkillBonus::fixed("US004", 3));

        let target = SkillId::from("US004");
        let amounts: Vec<BonusAmount> = grade.bonuses_to(&target).collect();
        assert_eq!(amounts, vec![BonusAmount::Fixed(1), BonusAmount::Fixed(3)]);
    }
}
