//! Snapshot types the rules engine reads.
//!
//! This module owns identifiers, unit snapshots and the surrounding world
//! context. All of it is supplied by the caller and treated as immutable for
//! the duration of a resolution call.
mod ids;
mod unit;
mod world;

pub use ids::{
    AreaEffectId, ExperienceLevel, MagicRealmId, ProductionTypeId, SkillId, UnitId, UnitTypeId,
    WeaponGradeId,
};
pub use unit::{PossessedSkills, UnitSnapshot};
pub use world::{ProductionBonuses, WorldContext};
