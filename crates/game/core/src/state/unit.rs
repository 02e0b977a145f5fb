//! Unit snapshots handed to the rules engine.
//!
//! A snapshot is the already-coherent view of one unit supplied by the unit
//! store. The engine never mutates it.

use std::collections::BTreeMap;

use super::ids::{ExperienceLevel, SkillId, UnitId, WeaponGradeId};

/// Skills a unit currently has.
///
/// Presence without a value (`Some(None)` from [`PossessedSkills::get`]) is
/// distinct from absence (`None`): valueless skills such as flying still count
/// as sources for derived bonuses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PossessedSkills(BTreeMap<SkillId, Option<i32>>);

impl PossessedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a skill with a value.
    pub fn insert(&mut self, skill: impl Into<SkillId>, value: i32) {
        self.0.insert(skill.into(), Some(value));
    }

    /// Adds or replaces a skill that carries no value.
    pub fn insert_valueless(&mut self, skill: impl Into<SkillId>) {
        self.0.insert(skill.into(), None);
    }

    /// Builder variant of [`PossessedSkills::insert`].
    pub fn with(mut self, skill: impl Into<SkillId>, value: i32) -> Self {
        self.insert(skill, value);
        self
    }

    /// Builder variant of [`PossessedSkills::insert_valueless`].
    pub fn with_valueless(mut self, skill: impl Into<SkillId>) -> Self {
        self.insert_valueless(skill);
        self
    }

    pub fn remove(&mut self, skill: &SkillId) -> Option<Option<i32>> {
        self.0.remove(skill)
    }

    /// `None` if absent, `Some(None)` if possessed without a value.
    pub fn get(&self, skill: &SkillId) -> Option<Option<i32>> {
        self.0.get(skill).copied()
    }

    pub fn contains(&self, skill: &SkillId) -> bool {
        self.0.contains_key(skill)
    }

    /// Iterates possessed skills in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, Option<i32>)> {
        self.0.iter().map(|(id, value)| (id, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(SkillId, Option<i32>)> for PossessedSkills {
    fn from_iter<I: IntoIterator<Item = (SkillId, Option<i32>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Snapshot of a single unit instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSnapshot {
    /// Unit definition this instance was built from.
    pub unit: UnitId,
    pub skills: PossessedSkills,
    pub weapon_grade: Option<WeaponGradeId>,
    /// Experience level resolved by the experience calculator; `None` for units
    /// that never gain experience.
    pub experience_level: Option<ExperienceLevel>,
    pub damage_taken: i32,
}

impl UnitSnapshot {
    pub fn new(unit: impl Into<UnitId>) -> Self {
        Self {
            unit: unit.into(),
            skills: PossessedSkills::new(),
            weapon_grade: None,
            experience_level: None,
            damage_taken: 0,
        }
    }

    pub fn with_skills(mut self, skills: PossessedSkills) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_weapon_grade(mut self, grade: impl Into<WeaponGradeId>) -> Self {
        self.weapon_grade = Some(grade.into());
        self
    }

    pub fn with_experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn with_damage_taken(mut self, damage: i32) -> Self {
        self.damage_taken = damage;
        self
    }
}
