//! Modifier aggregation.
//!
//! Walks every source a unit benefits from and sorts each bonus that targets
//! the queried skill onto its shelf.
//!
//! ```text
//! basic (possessed value)      ─┐
//! weapon grade rule             │
//! experience level rule         ├─► SkillBreakdown ─► value(filter, sign)
//! active combat area effects    │
//! possessed spell skills        │
//! possessed hero skills        ─┘
//! ```
//!
//! Possessed skills are walked in identifier order and area effects in the
//! order supplied, so the same inputs always log and sum identically.

use tracing::{debug, trace};

use super::shelf::{Shelf, ShelfTotals, SignPolicy, SkillBreakdown};
use crate::env::{
    AreaEffectRule, BonusAmount, BonusSource, ExperienceLevelRule, SkillOracle, SkillOrigin,
    WeaponGradeRule,
};
use crate::error::{ConsistencyError, RulesError};
use crate::state::{ExperienceLevel, PossessedSkills, SkillId};

/// Every bonus source of one unit, with catalog lookups already done.
#[derive(Clone, Copy, Debug)]
pub struct UnitSources<'a> {
    pub skills: &'a PossessedSkills,
    pub weapon_grade: Option<&'a WeaponGradeRule>,
    pub experience_level: Option<ExperienceLevel>,
    pub experience: Option<&'a ExperienceLevelRule>,
    pub area_effects: &'a [&'a AreaEffectRule],
}

impl<'a> UnitSources<'a> {
    /// Sources consisting of possessed skills only.
    pub fn skills_only(skills: &'a PossessedSkills) -> Self {
        Self {
            skills,
            weapon_grade: None,
            experience_level: None,
            experience: None,
            area_effects: &[],
        }
    }

    /// One-based experience ordinal; units without experience count as the first level.
    pub fn experience_ordinal(&self) -> i32 {
        self.experience_level.map_or(1, ExperienceLevel::ordinal)
    }
}

/// Computes every shelf contributing to `target`.
///
/// Returns `Ok(None)` when the unit does not possess `target` at all.
///
/// # Errors
///
/// - `NotFound` if `target` or any possessed skill is unknown to the catalog
/// - `ZeroDivisor` if a divisor-scaled bonus on the path has a zero divisor
/// - `Overflow` if a source level or shelf total leaves the `i32` range
pub fn breakdown(
    unit: &UnitSources<'_>,
    target: &SkillId,
    skills: &dyn SkillOracle,
) -> Result<Option<SkillBreakdown>, RulesError> {
    skills.find_skill(target)?;

    let Some(basic) = unit.skills.get(target) else {
        trace!(skill = %target, "skill not possessed");
        return Ok(None);
    };
    let basic = basic.unwrap_or(0);
    let ordinal = unit.experience_ordinal();

    let mut shelves = ShelfTotals::default();

    if let Some(grade) = unit.weapon_grade {
        shelve(&mut shelves, Shelf::WeaponGrade, sum_bonuses(grade, target, ordinal)?, target)?;
    }

    if let Some(experience) = unit.experience {
        let amount = sum_bonuses(experience, target, ordinal)?;
        shelve(&mut shelves, Shelf::Experience, amount, target)?;
    }

    for effect in unit.area_effects {
        let amount = sum_bonuses(*effect, target, ordinal)?;
        shelve(&mut shelves, Shelf::CombatAreaEffect, amount, target)?;
    }

    for (source_id, value) in unit.skills.iter() {
        let source = skills.find_skill(source_id)?;
        let shelf = match source.origin {
            SkillOrigin::Innate => continue,
            SkillOrigin::Spell => Shelf::SpellEffect,
            SkillOrigin::Hero => Shelf::HeroSkillDerived,
        };

        let source_level = ordinal
            .checked_mul(source_strength(value))
            .ok_or_else(|| ConsistencyError::overflow(target))?;
        let amount = sum_bonuses(source, target, source_level)?;
        shelve(&mut shelves, shelf, amount, target)?;
    }

    let breakdown = SkillBreakdown {
        skill: target.clone(),
        basic,
        shelves,
    };
    debug!(skill = %target, basic, total = breakdown.total(), "resolved skill breakdown");

    Ok(Some(breakdown))
}

/// Resolves one skill of a unit through a shelf filter.
///
/// The sign policy is applied to the basic value only. `All` returns the
/// adjusted basic value plus every shelf; any other bonus shelf is returned on
/// its own. Returns `Ok(None)` when the unit does not possess `target`.
///
/// # Errors
///
/// See [`breakdown`].
pub fn resolve(
    unit: &UnitSources<'_>,
    target: &SkillId,
    filter: Shelf,
    sign: SignPolicy,
    skills: &dyn SkillOracle,
) -> Result<Option<i32>, RulesError> {
    let Some(breakdown) = breakdown(unit, target, skills)? else {
        return Ok(None);
    };
    let value = breakdown
        .checked_value(filter, sign)
        .ok_or_else(|| ConsistencyError::overflow(target))?;
    Ok(Some(value))
}

/// Strength a possessed spell or hero skill lends to its source level.
///
/// The value is read the same way as a basic value, so a valueless source and
/// one stored as 0 are indistinguishable; both count as strength 1.
fn source_strength(value: Option<i32>) -> i32 {
    match value.unwrap_or(0) {
        0 => 1,
        strength => strength,
    }
}

fn shelve(
    shelves: &mut ShelfTotals,
    shelf: Shelf,
    amount: i32,
    target: &SkillId,
) -> Result<(), ConsistencyError> {
    shelves
        .checked_add(shelf, amount)
        .map(|_| ())
        .ok_or_else(|| ConsistencyError::overflow(target))
}

fn sum_bonuses<S: BonusSource>(
    source: &S,
    target: &SkillId,
    source_level: i32,
) -> Result<i32, ConsistencyError> {
    let mut total = 0i32;
    for amount in source.bonuses_to(target) {
        let contribution = amount.contribution(source_level).ok_or_else(|| match amount {
            BonusAmount::DivisorScaled { divisor: 0 } => ConsistencyError::ZeroDivisor {
                origin: source.source_label(),
                target: target.clone(),
            },
            BonusAmount::Fixed(_) | BonusAmount::DivisorScaled { .. } => {
                ConsistencyError::overflow(target)
            }
        })?;
        trace!(
            source = %source.source_label(),
            skill = %target,
            ?amount,
            source_level,
            contribution,
            "bonus applied"
        );
        total = total
            .checked_add(contribution)
            .ok_or_else(|| ConsistencyError::overflow(target))?;
    }
    Ok(total)
}
