//! World context surrounding a unit during a resolution call.

use std::collections::BTreeMap;

use super::ids::{AreaEffectId, ProductionTypeId};

/// Aggregate percentage production bonuses of one player, already summed by
/// the city/economy layer (e.g. `{"RE_UPKEEP_REDUCTION": 50}`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductionBonuses(BTreeMap<ProductionTypeId, i32>);

impl ProductionBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, production_type: impl Into<ProductionTypeId>, percent: i32) -> Self {
        self.add(production_type, percent);
        self
    }

    /// Adds to the running percentage for a production type, saturating at the
    /// `i32` bounds.
    pub fn add(&mut self, production_type: impl Into<ProductionTypeId>, percent: i32) {
        let total = self.0.entry(production_type.into()).or_default();
        *total = total.saturating_add(percent);
    }

    /// Percentage bonus for a production type; missing entries are 0%.
    pub fn percentage(&self, production_type: &ProductionTypeId) -> i32 {
        self.0.get(production_type).copied().unwrap_or(0)
    }
}

/// Read-only world state relevant to resolving one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldContext {
    /// Area effects already filtered for applicability to the unit.
    pub area_effects: Vec<AreaEffectId>,
    /// The owning player's aggregate production bonuses.
    pub production_bonuses: ProductionBonuses,
}

impl WorldContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_area_effect(mut self, effect: impl Into<AreaEffectId>) -> Self {
        self.area_effects.push(effect.into());
        self
    }

    pub fn with_production_bonuses(mut self, bonuses: ProductionBonuses) -> Self {
        self.production_bonuses = bonuses;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_accumulate_per_production_type() {
        let mut bonuses = ProductionBonuses::new().with("RE10", 25);
        bonuses.add("RE10", 25);

        assert_eq!(bonuses.percentage(&ProductionTypeId::from("RE10")), 50);
        assert_eq!(bonuses.percentage(&ProductionTypeId::from("RE11")), 0);
    }
}
