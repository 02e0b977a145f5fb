use super::OracleError;
use crate::state::SkillId;

/// Oracle providing skill rules.
pub trait SkillOracle: Send + Sync {
    fn find_skill(&self, id: &SkillId) -> Result<&SkillRule, OracleError>;

    /// Returns every skill rule in the catalog, in declaration order.
    ///
    /// Resolution only needs [`find_skill`](Self::find_skill); content
    /// validation walks the full list.
    fn skills(&self) -> Vec<&SkillRule>;
}

/// How much a bonus contributes.
///
/// # Variants
///
/// - `Fixed`: constant amount, independent of level
/// - `DivisorScaled`: `floor(source_level / divisor)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BonusAmount {
    Fixed(i32),
    DivisorScaled { divisor: i32 },
}

/// One bonus a source grants to a target skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBonus {
    pub target: SkillId,
    pub amount: BonusAmount,
}

impl SkillBonus {
    pub fn fixed(target: impl Into<SkillId>, amount: i32) -> Self {
        Self {
            target: target.into(),
            amount: BonusAmount::Fixed(amount),
        }
    }

    pub fn scaled(target: impl Into<SkillId>, divisor: i32) -> Self {
        Self {
            target: target.into(),
            amount: BonusAmount::DivisorScaled { divisor },
        }
    }
}

/// Where a skill comes from, which decides the shelf its outgoing bonuses land on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillOrigin {
    /// Natural unit ability. Grants no bonuses to other skills.
    #[default]
    Innate,
    /// Granted by an enchantment cast on the unit.
    Spell,
    /// Innate hero skill, scaled by the hero's experience.
    Hero,
}

/// Catalog entry for a skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRule {
    pub id: SkillId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: SkillOrigin,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignores_combat_terrain: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<SkillBonus>,
}

impl SkillRule {
    pub fn new(id: impl Into<SkillId>, origin: SkillOrigin) -> Self {
        Self {
            id: id.into(),
            origin,
            ignores_combat_terrain: false,
            bonuses: Vec::new(),
        }
    }

    /// Plain innate skill with no outgoing bonuses.
    pub fn innate(id: impl Into<SkillId>) -> Self {
        Self::new(id, SkillOrigin::Innate)
    }

    pub fn with_bonus(mut self, bonus: SkillBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }

    pub fn ignoring_combat_terrain(mut self) -> Self {
        self.ignores_combat_terrain = true;
        self
    }
}
