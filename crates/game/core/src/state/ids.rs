use std::fmt;

/// Declares a string-backed catalog identifier.
///
/// Identifiers are ordered so every map keyed by them iterates
/// deterministically.
macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

catalog_id!(
    /// Skill or attribute identifier (melee, hit points, flying, hero skills, ...).
    SkillId
);

catalog_id!(
    /// Production type identifier. Upkeep resources live in this namespace too.
    ProductionTypeId
);

catalog_id!(
    /// Unit definition identifier.
    UnitId
);

catalog_id!(WeaponGradeId);

catalog_id!(
    /// Combat area effect identifier (node auras, battlefield enchantments).
    AreaEffectId
);

catalog_id!(MagicRealmId);

catalog_id!(
    /// Unit type classification derived from the magic realm (normal, hero, summoned).
    UnitTypeId
);

/// Experience level number, as already resolved by the experience calculator.
///
/// Level 0 is the first tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExperienceLevel(pub u8);

impl ExperienceLevel {
    /// One-based ordinal used by level-scaled bonuses.
    #[inline]
    pub const fn ordinal(self) -> i32 {
        self.0 as i32 + 1
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_lexicographically() {
        let mut ids = vec![SkillId::from("US010"), SkillId::from("US002"), SkillId::from("HS01")];
        ids.sort();
        assert_eq!(ids, vec![SkillId::from("HS01"), SkillId::from("US002"), SkillId::from("US010")]);
    }

    #[test]
    fn experience_ordinal_is_one_based() {
        assert_eq!(ExperienceLevel(0).ordinal(), 1);
        assert_eq!(ExperienceLevel(5).ordinal(), 6);
        assert_eq!(ExperienceLevel(5).to_string(), "L5");
    }
}
