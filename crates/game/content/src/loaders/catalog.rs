//! Rule catalog loader.

use std::path::Path;

use realm_core::CatalogSnapshot;
use tracing::info;

use crate::loaders::{LoadResult, read_file};
use crate::validate::validate_catalog;

/// Loader for the rule catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a rule catalog from a RON file.
    ///
    /// Every list in the file is optional; a missing list is empty.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if the catalog has a
    /// broken cross reference.
    pub fn load(path: &Path) -> LoadResult<CatalogSnapshot> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)?;

        info!(
            path = %path.display(),
            skills = catalog.skills.len(),
            units = catalog.units.len(),
            production_types = catalog.production_types.len(),
            "rule catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog held in memory.
    pub fn parse(content: &str) -> LoadResult<CatalogSnapshot> {
        let catalog: CatalogSnapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rule catalog RON: {}", e))?;
        validate_catalog(&catalog)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use realm_core::{BonusAmount, SkillOrigin};

    use super::*;

    #[test]
    fn parses_tagged_bonus_amounts() {
        let catalog = CatalogLoader::parse(
            r#"(
                skills: [
                    (id: "melee"),
                    (id: "heroism", origin: Hero, bonuses: [
                        (target: "melee", amount: DivisorScaled(divisor: 2)),
                    ]),
                ],
                weapon_grades: [
                    (id: "mithril", bonuses: [(target: "melee", amount: Fixed(2))]),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.skills[1].origin, SkillOrigin::Hero);
        assert_eq!(
            catalog.skills[1].bonuses[0].amount,
            BonusAmount::DivisorScaled { divisor: 2 }
        );
        assert_eq!(catalog.weapon_grades[0].bonuses[0].amount, BonusAmount::Fixed(2));
        assert!(catalog.units.is_empty());
    }

    #[test]
    fn invalid_catalog_is_rejected() {
        let err = CatalogLoader::parse(
            r#"(weapon_grades: [(id: "iron", bonuses: [(target: "archery", amount: Fixed(1))])])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown skill 'archery'"));
    }
}
