//! Accumulation shelves and the per-skill breakdown built from them.

use crate::state::SkillId;

/// Accumulation bucket a contribution is tagged with.
///
/// Every contribution lands on exactly one non-`All` shelf. `All` is only ever
/// used as a caller-side filter meaning "sum everything".
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Shelf {
    Basic,
    WeaponGrade,
    Experience,
    CombatAreaEffect,
    SpellEffect,
    HeroSkillDerived,
    All,
}

impl Shelf {
    /// Shelves that hold bonuses (everything except `Basic` and `All`), in
    /// evaluation order.
    pub const BONUSES: [Shelf; 5] = [
        Shelf::WeaponGrade,
        Shelf::Experience,
        Shelf::CombatAreaEffect,
        Shelf::SpellEffect,
        Shelf::HeroSkillDerived,
    ];
}

/// Which direction the basic value may push the total.
///
/// Applied to the basic value only, never to bonus shelves.
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
pub enum SignPolicy {
    #[default]
    Both,
    /// Negative basic values count as zero.
    PositiveOnly,
    /// Positive basic values count as zero.
    NegativeOnly,
}

impl SignPolicy {
    pub const fn apply(self, basic: i32) -> i32 {
        match self {
            Self::Both => basic,
            Self::PositiveOnly if basic < 0 => 0,
            Self::NegativeOnly if basic > 0 => 0,
            Self::PositiveOnly | Self::NegativeOnly => basic,
        }
    }
}

/// Running totals of every bonus shelf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfTotals {
    pub weapon_grade: i32,
    pub experience: i32,
    pub combat_area_effect: i32,
    pub spell_effect: i32,
    pub hero_skill_derived: i32,
}

impl ShelfTotals {
    /// Adds a contribution to a bonus shelf and returns the shelf's new total.
    ///
    /// `Basic` and `All` are not bonus shelves; nothing is added and the result
    /// is `Some(0)`. Returns `None` on overflow, leaving the shelf untouched.
    pub fn checked_add(&mut self, shelf: Shelf, amount: i32) -> Option<i32> {
        let slot = match shelf {
            Shelf::WeaponGrade => &mut self.weapon_grade,
            Shelf::Experience => &mut self.experience,
            Shelf::CombatAreaEffect => &mut self.combat_area_effect,
            Shelf::SpellEffect => &mut self.spell_effect,
            Shelf::HeroSkillDerived => &mut self.hero_skill_derived,
            Shelf::Basic | Shelf::All => return Some(0),
        };
        *slot = slot.checked_add(amount)?;
        Some(*slot)
    }

    /// Total of one bonus shelf, or of all of them for `All`. `Basic` is 0.
    pub fn get(&self, shelf: Shelf) -> i32 {
        match shelf {
            Shelf::Basic => 0,
            Shelf::WeaponGrade => self.weapon_grade,
            Shelf::Experience => self.experience,
            Shelf::CombatAreaEffect => self.combat_area_effect,
            Shelf::SpellEffect => self.spell_effect,
            Shelf::HeroSkillDerived => self.hero_skill_derived,
            Shelf::All => self.sum(),
        }
    }

    /// Sum of every bonus shelf, or `None` if it leaves the `i32` range.
    pub fn checked_sum(&self) -> Option<i32> {
        Shelf::BONUSES
            .iter()
            .try_fold(0i32, |total, &shelf| total.checked_add(self.get(shelf)))
    }

    /// Sum of every bonus shelf, saturating at the `i32` bounds.
    pub fn sum(&self) -> i32 {
        Shelf::BONUSES
            .iter()
            .fold(0i32, |total, &shelf| total.saturating_add(self.get(shelf)))
    }
}

/// Every contribution to one skill of one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBreakdown {
    pub skill: SkillId,
    /// Basic value before any sign policy; valueless skills count as 0.
    pub basic: i32,
    pub shelves: ShelfTotals,
}

impl SkillBreakdown {
    /// Value seen through a shelf filter.
    ///
    /// `Basic` returns the sign-adjusted basic value, a bonus shelf returns that
    /// shelf alone, and `All` returns the sign-adjusted basic value plus every
    /// bonus shelf.
    ///
    /// Returns `None` if the `All` total leaves the `i32` range.
    pub fn checked_value(&self, filter: Shelf, sign: SignPolicy) -> Option<i32> {
        match filter {
            Shelf::Basic => Some(sign.apply(self.basic)),
            Shelf::All => sign.apply(self.basic).checked_add(self.shelves.checked_sum()?),
            shelf => Some(self.shelves.get(shelf)),
        }
    }

    /// Like [`Self::checked_value`], saturating at the `i32` bounds.
    pub fn value(&self, filter: Shelf, sign: SignPolicy) -> i32 {
        match filter {
            Shelf::All => sign.apply(self.basic).saturating_add(self.shelves.sum()),
            shelf => self.checked_value(shelf, sign).unwrap_or_default(),
        }
    }

    pub fn total(&self) -> i32 {
        self.value(Shelf::All, SignPolicy::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_policy_only_clamps_in_its_direction() {
        assert_eq!(SignPolicy::Both.apply(-3), -3);
        assert_eq!(SignPolicy::PositiveOnly.apply(-3), 0);
        assert_eq!(SignPolicy::PositiveOnly.apply(3), 3);
        assert_eq!(SignPolicy::NegativeOnly.apply(-3), -3);
        assert_eq!(SignPolicy::NegativeOnly.apply(3), 0);
    }

    #[test]
    fn sign_policy_leaves_bonus_shelves_alone() {
        let breakdown = SkillBreakdown {
            skill: SkillId::from("US004"),
            basic: -2,
            shelves: ShelfTotals {
                weapon_grade: 5,
                ..ShelfTotals::default()
            },
        };

        assert_eq!(breakdown.value(Shelf::Basic, SignPolicy::PositiveOnly), 0);
        assert_eq!(breakdown.value(Shelf::WeaponGrade, SignPolicy::NegativeOnly), 5);
        assert_eq!(breakdown.value(Shelf::All, SignPolicy::PositiveOnly), 5);
        assert_eq!(breakdown.value(Shelf::All, SignPolicy::Both), 3);
    }

    #[test]
    fn overflowing_shelf_is_left_untouched() {
        let mut shelves = ShelfTotals::default();
        assert_eq!(shelves.checked_add(Shelf::SpellEffect, i32::MAX), Some(i32::MAX));
        assert_eq!(shelves.checked_add(Shelf::SpellEffect, 1), None);
        assert_eq!(shelves.spell_effect, i32::MAX);
        assert_eq!(shelves.checked_add(Shelf::Basic, 7), Some(0));

        assert_eq!(shelves.checked_add(Shelf::WeaponGrade, 1), Some(1));
        assert_eq!(shelves.checked_sum(), None);
        assert_eq!(shelves.sum(), i32::MAX);
    }

    #[test]
    fn checked_value_reports_overflowing_total() {
        let breakdown = SkillBreakdown {
            skill: SkillId::from("US004"),
            basic: i32::MAX,
            shelves: ShelfTotals {
                experience: 1,
                ..ShelfTotals::default()
            },
        };

        assert_eq!(breakdown.checked_value(Shelf::All, SignPolicy::Both), None);
        assert_eq!(breakdown.checked_value(Shelf::Experience, SignPolicy::Both), Some(1));
        assert_eq!(breakdown.value(Shelf::All, SignPolicy::Both), i32::MAX);
    }

    #[test]
    fn shelves_parse_from_snake_case() {
        assert_eq!("hero_skill_derived".parse::<Shelf>(), Ok(Shelf::HeroSkillDerived));
        assert_eq!(Shelf::CombatAreaEffect.to_string(), "combat_area_effect");
    }
}
