use std::num::NonZeroU8;

use crate::state::{MagicRealmId, SkillId, UnitTypeId};

/// Reserved identifiers and tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Magic realm that marks a unit as a hero.
    pub hero_magic_realm: MagicRealmId,
    /// Unit type that marks a unit as summoned.
    pub summoned_unit_type: UnitTypeId,
    /// Skill holding hit points per figure.
    pub hit_points_skill: SkillId,
    /// Experience levels per point of reputation a hero costs when it dies.
    pub reputation_loss_divisor: NonZeroU8,
}

impl RulesConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HERO_MAGIC_REALM: &'static str = "hero";
    pub const DEFAULT_SUMMONED_UNIT_TYPE: &'static str = "summoned";
    pub const DEFAULT_HIT_POINTS_SKILL: &'static str = "hit_points";
    pub const DEFAULT_REPUTATION_LOSS_DIVISOR: NonZeroU8 = NonZeroU8::new(2).unwrap();

    pub fn new() -> Self {
        Self {
            hero_magic_realm: Self::DEFAULT_HERO_MAGIC_REALM.into(),
            summoned_unit_type: Self::DEFAULT_SUMMONED_UNIT_TYPE.into(),
            hit_points_skill: Self::DEFAULT_HIT_POINTS_SKILL.into(),
            reputation_loss_divisor: Self::DEFAULT_REPUTATION_LOSS_DIVISOR,
        }
    }

    pub fn with_hero_magic_realm(mut self, realm: impl Into<MagicRealmId>) -> Self {
        self.hero_magic_realm = realm.into();
        self
    }

    pub fn with_summoned_unit_type(mut self, unit_type: impl Into<UnitTypeId>) -> Self {
        self.summoned_unit_type = unit_type.into();
        self
    }

    pub fn with_hit_points_skill(mut self, skill: impl Into<SkillId>) -> Self {
        self.hit_points_skill = skill.into();
        self
    }

    pub fn with_reputation_loss_divisor(mut self, divisor: NonZeroU8) -> Self {
        self.reputation_loss_divisor = divisor;
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
