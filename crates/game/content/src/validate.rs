//! Catalog integrity checks.
//!
//! Oracle lookups only fail with `NotFound` when a query reaches a broken
//! reference. [`validate_catalog`] walks every cross reference once at load
//! time.

use std::collections::BTreeSet;
use std::fmt::Display;

use realm_core::{
    BonusAmount, BonusSource, CatalogSnapshot, ErrorSeverity, GameError, RulesConfig, SkillId,
    SkillOracle, SkillOrigin,
};
use tracing::warn;

/// A broken cross reference or impossible value in a rule catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate {kind} '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{origin} grants a bonus to unknown skill '{target}'")]
    UnknownBonusTarget { origin: String, target: SkillId },

    #[error("{origin} scales its bonus to '{target}' by a zero divisor")]
    ZeroDivisor { origin: String, target: SkillId },

    #[error("innate skill '{skill}' grants bonuses; only spell and hero skills may")]
    InnateSkillBonus { skill: SkillId },

    #[error("unit '{unit}' belongs to unknown magic realm '{realm}'")]
    UnknownMagicRealm { unit: String, realm: String },

    #[error("magic realm '{realm}' maps to unknown unit type '{unit_type}'")]
    UnknownUnitType { realm: String, unit_type: String },

    #[error("{origin} references unknown production type '{production_type}'")]
    UnknownProductionType { origin: String, production_type: String },
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            Self::UnknownBonusTarget { .. } => "CATALOG_UNKNOWN_BONUS_TARGET",
            Self::ZeroDivisor { .. } => "CATALOG_ZERO_DIVISOR",
            Self::InnateSkillBonus { .. } => "CATALOG_INNATE_SKILL_BONUS",
            Self::UnknownMagicRealm { .. } => "CATALOG_UNKNOWN_MAGIC_REALM",
            Self::UnknownUnitType { .. } => "CATALOG_UNKNOWN_UNIT_TYPE",
            Self::UnknownProductionType { .. } => "CATALOG_UNKNOWN_PRODUCTION_TYPE",
        }
    }
}

/// Every problem found in a catalog, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("catalog failed validation with {} error(s); first: {}", .0.len(), first(.0))]
pub struct ValidationReport(pub Vec<ValidationError>);

fn first(errors: &[ValidationError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

impl ValidationReport {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Checks every cross reference in `catalog`.
///
/// # Errors
///
/// Returns a [`ValidationReport`] listing every problem when at least one is
/// found.
pub fn validate_catalog(catalog: &CatalogSnapshot) -> Result<(), ValidationReport> {
    let mut errors = Vec::new();
    let oracle = catalog.oracle();
    let skill_rules = oracle.skills();

    let skills = unique_ids(&mut errors, "skill", skill_rules.iter().map(|s| &s.id));
    unique_ids(&mut errors, "weapon grade", catalog.weapon_grades.iter().map(|g| &g.id));
    unique_ids(&mut errors, "combat area effect", catalog.area_effects.iter().map(|e| &e.id));
    unique_ids(
        &mut errors,
        "experience level",
        catalog.experience_levels.iter().map(|l| &l.level),
    );
    unique_ids(&mut errors, "unit", catalog.units.iter().map(|u| &u.id));
    let realms = unique_ids(&mut errors, "magic realm", catalog.magic_realms.iter().map(|r| &r.id));
    let unit_types = unique_ids(&mut errors, "unit type", catalog.unit_types.iter().map(|t| &t.id));
    let production = unique_ids(
        &mut errors,
        "production type",
        catalog.production_types.iter().map(|p| &p.id),
    );

    for skill in skill_rules {
        if skill.origin == SkillOrigin::Innate && !skill.bonuses.is_empty() {
            errors.push(ValidationError::InnateSkillBonus { skill: skill.id.clone() });
        }
        check_bonuses(&mut errors, &skills, skill);
    }
    for grade in &catalog.weapon_grades {
        check_bonuses(&mut errors, &skills, grade);
    }
    for level in &catalog.experience_levels {
        check_bonuses(&mut errors, &skills, level);
    }
    for effect in &catalog.area_effects {
        check_bonuses(&mut errors, &skills, effect);
    }

    for unit in &catalog.units {
        if !realms.contains(unit.magic_realm.as_str()) {
            errors.push(ValidationError::UnknownMagicRealm {
                unit: unit.id.to_string(),
                realm: unit.magic_realm.to_string(),
            });
        }
        for resource in unit.upkeep.keys() {
            if !production.contains(resource.as_str()) {
                errors.push(ValidationError::UnknownProductionType {
                    origin: format!("upkeep of unit '{}'", unit.id),
                    production_type: resource.to_string(),
                });
            }
        }
        if unit.figure_count == 0 {
            warn!(unit = %unit.id, "unit has no figures");
        }
    }

    for realm in &catalog.magic_realms {
        if !unit_types.contains(realm.unit_type.as_str()) {
            errors.push(ValidationError::UnknownUnitType {
                realm: realm.id.to_string(),
                unit_type: realm.unit_type.to_string(),
            });
        }
    }

    for unit_type in &catalog.unit_types {
        let Some(reduction) = &unit_type.upkeep_reduction else {
            continue;
        };
        if !production.contains(reduction.as_str()) {
            errors.push(ValidationError::UnknownProductionType {
                origin: format!("upkeep reduction of unit type '{}'", unit_type.id),
                production_type: reduction.to_string(),
            });
        }
    }

    ValidationReport(errors).into_result()
}

/// Warns about reserved identifiers the catalog does not define.
///
/// A catalog without heroes or summons is legal, so these are not errors.
pub fn check_config(catalog: &CatalogSnapshot, config: &RulesConfig) {
    if !catalog.magic_realms.iter().any(|r| r.id == config.hero_magic_realm) {
        warn!(realm = %config.hero_magic_realm, "hero magic realm not in catalog");
    }
    if !catalog.unit_types.iter().any(|t| t.id == config.summoned_unit_type) {
        warn!(unit_type = %config.summoned_unit_type, "summoned unit type not in catalog");
    }
    if !catalog.skills.iter().any(|s| s.id == config.hit_points_skill) {
        warn!(skill = %config.hit_points_skill, "hit points skill not in catalog");
    }
}

fn unique_ids<'a, I, T>(errors: &mut Vec<ValidationError>, kind: &'static str, ids: I) -> BTreeSet<String>
where
    I: Iterator<Item = &'a T>,
    T: Display + 'a,
{
    let mut seen = BTreeSet::new();
    for id in ids {
        let id = id.to_string();
        if !seen.insert(id.clone()) {
            errors.push(ValidationError::DuplicateId { kind, id });
        }
    }
    seen
}

fn check_bonuses<S: BonusSource>(
    errors: &mut Vec<ValidationError>,
    skills: &BTreeSet<String>,
    source: &S,
) {
    for bonus in source.bonuses() {
        if !skills.contains(bonus.target.as_str()) {
            errors.push(ValidationError::UnknownBonusTarget {
                origin: source.source_label(),
                target: bonus.target.clone(),
            });
        }
        match bonus.amount {
            BonusAmount::DivisorScaled { divisor: 0 } => {
                errors.push(ValidationError::ZeroDivisor {
                    origin: source.source_label(),
                    target: bonus.target.clone(),
                });
            }
            BonusAmount::Fixed(0) => {
                warn!(source = %source.source_label(), target = %bonus.target, "bonus of zero");
            }
            BonusAmount::Fixed(_) | BonusAmount::DivisorScaled { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use realm_core::{
        ExperienceLevel, ExperienceLevelRule, MagicRealmRule, ProductionTypeRule, SkillBonus,
        SkillRule, UnitDefinition, UnitTypeRule, WeaponGradeRule,
    };

    use super::*;

    fn sound_catalog() -> CatalogSnapshot {
        CatalogSnapshot::new()
            .with_skill(SkillRule::innate("melee"))
            .with_skill(
                SkillRule::new("heroism", SkillOrigin::Hero).with_bonus(SkillBonus::scaled("melee", 2)),
            )
            .with_weapon_grade(WeaponGradeRule::new("mithril").with_bonus(SkillBonus::fixed("melee", 2)))
            .with_experience_level(
                ExperienceLevelRule::new(ExperienceLevel(1)).with_bonus(SkillBonus::fixed("melee", 1)),
            )
            .with_production_type(ProductionTypeRule::new("gold"))
            .with_unit_type(UnitTypeRule::new("normal").with_upkeep_reduction("gold"))
            .with_magic_realm(MagicRealmRule::new("life", "normal"))
            .with_unit(UnitDefinition::new("spearmen", "life", 8).with_upkeep("gold", 1))
    }

    #[test]
    fn sound_catalog_passes() {
        assert_eq!(validate_catalog(&sound_catalog()), Ok(()));
    }

    #[test]
    fn dangling_bonus_target_is_rejected() {
        let catalog = sound_catalog()
            .with_weapon_grade(WeaponGradeRule::new("iron").with_bonus(SkillBonus::fixed("archery", 1)));

        let report = validate_catalog(&catalog).unwrap_err();
        assert_eq!(
            report.errors(),
            [ValidationError::UnknownBonusTarget {
                origin: "iron".into(),
                target: "archery".into(),
            }]
        );
    }

    #[test]
    fn zero_divisor_and_innate_bonuses_are_rejected() {
        let catalog = sound_catalog()
            .with_skill(SkillRule::innate("lucky").with_bonus(SkillBonus::scaled("melee", 0)));

        let codes: Vec<_> = validate_catalog(&catalog)
            .unwrap_err()
            .errors()
            .iter()
            .map(GameError::error_code)
            .collect();
        assert_eq!(codes, ["CATALOG_INNATE_SKILL_BONUS", "CATALOG_ZERO_DIVISOR"]);
    }

    #[test]
    fn broken_classification_chain_is_rejected() {
        let catalog = sound_catalog()
            .with_unit(UnitDefinition::new("ghouls", "death", 4))
            .with_magic_realm(MagicRealmRule::new("chaos", "fantastic"));

        let report = validate_catalog(&catalog).unwrap_err();
        assert_eq!(report.errors().len(), 2);
        assert!(report.to_string().contains("unknown magic realm 'death'"));
    }

    #[test]
    fn duplicates_are_reported_per_kind() {
        let catalog = sound_catalog()
            .with_skill(SkillRule::innate("melee"))
            .with_production_type(ProductionTypeRule::new("gold"));

        let report = validate_catalog(&catalog).unwrap_err();
        assert_eq!(
            report.errors(),
            [
                ValidationError::DuplicateId { kind: "skill", id: "melee".into() },
                ValidationError::DuplicateId { kind: "production type", id: "gold".into() },
            ]
        );
    }

    #[test]
    fn unknown_upkeep_resources_are_rejected() {
        let catalog = sound_catalog()
            .with_unit(UnitDefinition::new("golem", "life", 1).with_upkeep("crystals", 2));

        let report = validate_catalog(&catalog).unwrap_err();
        assert_eq!(report.errors()[0].error_code(), "CATALOG_UNKNOWN_PRODUCTION_TYPE");
        assert_eq!(report.errors()[0].severity(), ErrorSeverity::Validation);
    }
}
