use std::collections::BTreeMap;

use super::OracleError;
use crate::state::{MagicRealmId, ProductionTypeId, UnitId, UnitTypeId};

/// Oracle providing unit definitions and their classifications.
pub trait UnitOracle: Send + Sync {
    fn find_unit(&self, id: &UnitId) -> Result<&UnitDefinition, OracleError>;

    fn find_magic_realm(&self, id: &MagicRealmId) -> Result<&MagicRealmRule, OracleError>;

    fn find_unit_type(&self, id: &UnitTypeId) -> Result<&UnitTypeRule, OracleError>;
}

/// Static definition shared by every instance of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDefinition {
    pub id: UnitId,
    pub magic_realm: MagicRealmId,
    pub figure_count: u32,
    /// Base upkeep per production type. Missing entries cost nothing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub upkeep: BTreeMap<ProductionTypeId, i32>,
}

impl UnitDefinition {
    pub fn new(id: impl Into<UnitId>, magic_realm: impl Into<MagicRealmId>, figure_count: u32) -> Self {
        Self {
            id: id.into(),
            magic_realm: magic_realm.into(),
            figure_count,
            upkeep: BTreeMap::new(),
        }
    }

    pub fn with_upkeep(mut self, production_type: impl Into<ProductionTypeId>, amount: i32) -> Self {
        self.upkeep.insert(production_type.into(), amount);
        self
    }

    pub fn base_upkeep(&self, production_type: &ProductionTypeId) -> i32 {
        self.upkeep.get(production_type).copied().unwrap_or(0)
    }
}

/// Magic realm / lifeform type. Each realm maps onto one unit type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicRealmRule {
    pub id: MagicRealmId,
    pub unit_type: UnitTypeId,
}

impl MagicRealmRule {
    pub fn new(id: impl Into<MagicRealmId>, unit_type: impl Into<UnitTypeId>) -> Self {
        Self {
            id: id.into(),
            unit_type: unit_type.into(),
        }
    }
}

/// Unit type classification (normal, hero, summoned).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTypeRule {
    pub id: UnitTypeId,
    /// Production type whose percentage bonus discounts upkeep of this category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub upkeep_reduction: Option<ProductionTypeId>,
}

impl UnitTypeRule {
    pub fn new(id: impl Into<UnitTypeId>) -> Self {
        Self {
            id: id.into(),
            upkeep_reduction: None,
        }
    }

    pub fn with_upkeep_reduction(mut self, production_type: impl Into<ProductionTypeId>) -> Self {
        self.upkeep_reduction = Some(production_type.into());
        self
    }
}
