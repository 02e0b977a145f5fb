use super::OracleError;
use crate::state::ProductionTypeId;

/// Oracle providing production type rules.
pub trait ProductionOracle: Send + Sync {
    fn find_production_type(
        &self,
        id: &ProductionTypeId,
    ) -> Result<&ProductionTypeRule, OracleError>;
}

/// Accumulation bucket of a production breakdown.
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
pub enum ProductionBucket {
    /// Added before percentage bonuses apply (kept doubled).
    #[default]
    PreBonus,
    /// Added after percentage bonuses apply.
    PostBonus,
}

/// How a doubled pre-bonus total is halved.
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
pub enum RoundingDirection {
    #[default]
    RoundDown,
    RoundUp,
    /// Odd doubled totals are a consistency error.
    MustBeExact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionTypeRule {
    pub id: ProductionTypeId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_bucket: ProductionBucket,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounding: RoundingDirection,
}

impl ProductionTypeRule {
    pub fn new(id: impl Into<ProductionTypeId>) -> Self {
        Self {
            id: id.into(),
            default_bucket: ProductionBucket::PreBonus,
            rounding: RoundingDirection::RoundDown,
        }
    }

    pub fn with_default_bucket(mut self, bucket: ProductionBucket) -> Self {
        self.default_bucket = bucket;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingDirection) -> Self {
        self.rounding = rounding;
        self
    }
}
