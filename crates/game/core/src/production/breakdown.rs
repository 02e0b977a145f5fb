//! Production breakdowns and the bucket classifier.
//!
//! Pre-bonus amounts are kept doubled so half points survive until the
//! production type's rounding rule is applied once, at finalisation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::env::{ProductionBucket, ProductionOracle, RoundingDirection};
use crate::error::{ConsistencyError, RulesError};
use crate::state::ProductionTypeId;
use crate::stats::{ceil_div, floor_div, percent_of};

/// Running totals of one production type for one city and turn.
///
/// Each breakdown is owned by exactly one accumulation; pass it explicitly to
/// whoever adds to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionBreakdown {
    production_type: ProductionTypeId,
    doubled_pre_bonus: i32,
    post_bonus: i32,
}

/// Finalised amounts of one production breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedProduction {
    /// Halved pre-bonus total.
    pub base: i32,
    /// Base after the percentage bonus.
    pub modified: i32,
    /// Modified plus the post-bonus amount.
    pub total: i32,
    /// Total minus consumption.
    pub net: i32,
}

impl ProductionBreakdown {
    pub fn new(production_type: impl Into<ProductionTypeId>) -> Self {
        Self {
            production_type: production_type.into(),
            doubled_pre_bonus: 0,
            post_bonus: 0,
        }
    }

    pub fn production_type(&self) -> &ProductionTypeId {
        &self.production_type
    }

    pub fn doubled_pre_bonus(&self) -> i32 {
        self.doubled_pre_bonus
    }

    pub fn post_bonus(&self) -> i32 {
        self.post_bonus
    }

    /// Routes a doubled amount to a bucket and returns the bucket used.
    ///
    /// The bucket is `bucket_override` if given, else the production type's
    /// declared default.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the production type is unknown
    /// - `OddPostBonusAmount` if an odd doubled amount is routed after bonuses;
    ///   the breakdown is left untouched
    pub fn add(
        &mut self,
        doubled_amount: i32,
        bucket_override: Option<ProductionBucket>,
        production: &dyn ProductionOracle,
    ) -> Result<ProductionBucket, RulesError> {
        let bucket = match bucket_override {
            Some(bucket) => bucket,
            None => {
                production
                    .find_production_type(&self.production_type)?
                    .default_bucket
            }
        };

        self.add_to_bucket(doubled_amount, bucket)?;
        debug!(
            production_type = %self.production_type,
            doubled_amount,
            %bucket,
            "production added"
        );
        Ok(bucket)
    }

    /// Adds a doubled amount to an explicit bucket.
    ///
    /// On error the breakdown is left untouched.
    pub fn add_to_bucket(
        &mut self,
        doubled_amount: i32,
        bucket: ProductionBucket,
    ) -> Result<(), ConsistencyError> {
        let overflow = || ConsistencyError::overflow(&self.production_type);
        match bucket {
            ProductionBucket::PreBonus => {
                self.doubled_pre_bonus = self
                    .doubled_pre_bonus
                    .checked_add(doubled_amount)
                    .ok_or_else(overflow)?;
            }
            ProductionBucket::PostBonus => {
                if doubled_amount % 2 != 0 {
                    return Err(ConsistencyError::OddPostBonusAmount {
                        production_type: self.production_type.clone(),
                        doubled: doubled_amount,
                    });
                }
                self.post_bonus = self
                    .post_bonus
                    .checked_add(doubled_amount / 2)
                    .ok_or_else(overflow)?;
            }
        }
        Ok(())
    }

    /// Applies rounding, the percentage bonus and consumption.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the production type is unknown
    /// - `InexactHalving` if the type must halve exactly and the doubled total is odd
    /// - `Overflow` if an intermediate amount leaves the `i32` range
    pub fn finalize(
        &self,
        percentage_bonus: i32,
        consumption: i32,
        production: &dyn ProductionOracle,
    ) -> Result<ResolvedProduction, RulesError> {
        let rule = production.find_production_type(&self.production_type)?;
        let base = self.halve(rule.rounding)?;
        let overflow = || ConsistencyError::overflow(&self.production_type);
        let modified = percent_of(base, percentage_bonus)
            .and_then(|bonus| base.checked_add(bonus))
            .ok_or_else(overflow)?;
        let total = modified.checked_add(self.post_bonus).ok_or_else(overflow)?;
        let net = total.checked_sub(consumption).ok_or_else(overflow)?;

        Ok(ResolvedProduction {
            base,
            modified,
            total,
            net,
        })
    }

    fn halve(&self, rounding: RoundingDirection) -> Result<i32, ConsistencyError> {
        let doubled = self.doubled_pre_bonus;
        let halved = match rounding {
            RoundingDirection::RoundDown => floor_div(doubled, 2),
            RoundingDirection::RoundUp => ceil_div(doubled, 2),
            RoundingDirection::MustBeExact if doubled % 2 == 0 => Some(doubled / 2),
            RoundingDirection::MustBeExact => None,
        };
        halved.ok_or_else(|| ConsistencyError::InexactHalving {
            production_type: self.production_type.clone(),
            doubled,
        })
    }
}

/// Every production breakdown of one city for one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityProduction {
    breakdowns: BTreeMap<ProductionTypeId, ProductionBreakdown>,
}

impl CityProduction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breakdown for a production type, created empty on first access.
    pub fn breakdown_mut(&mut self, production_type: &ProductionTypeId) -> &mut ProductionBreakdown {
        self.breakdowns
            .entry(production_type.clone())
            .or_insert_with(|| ProductionBreakdown::new(production_type.clone()))
    }

    pub fn breakdown(&self, production_type: &ProductionTypeId) -> Option<&ProductionBreakdown> {
        self.breakdowns.get(production_type)
    }

    /// Classifies a doubled amount into the breakdown for `production_type`.
    pub fn add(
        &mut self,
        production_type: &ProductionTypeId,
        doubled_amount: i32,
        bucket_override: Option<ProductionBucket>,
        production: &dyn ProductionOracle,
    ) -> Result<ProductionBucket, RulesError> {
        self.breakdown_mut(production_type)
            .add(doubled_amount, bucket_override, production)
    }

    /// Breakdowns in production type order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductionBreakdown> {
        self.breakdowns.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogSnapshot, OracleError, ProductionTypeRule};

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new()
            .with_production_type(ProductionTypeRule::new("RE01"))
            .with_production_type(
                ProductionTypeRule::new("RE02").with_default_bucket(ProductionBucket::PostBonus),
            )
            .with_production_type(
                ProductionTypeRule::new("RE03").with_rounding(RoundingDirection::RoundUp),
            )
            .with_production_type(
                ProductionTypeRule::new("RE04").with_rounding(RoundingDirection::MustBeExact),
            )
    }

    #[test]
    fn pre_bonus_default_accumulates_doubled() {
        let catalog = catalog();
        let oracle = catalog.oracle();
        let mut breakdown = ProductionBreakdown::new("RE01");
        breakdown.add(4, None, &oracle).unwrap();

        assert_eq!(breakdown.add(5, None, &oracle), Ok(ProductionBucket::PreBonus));
        assert_eq!(breakdown.doubled_pre_bonus(), 9);
        assert_eq!(breakdown.post_bonus(), 0);
    }

    #[test]
    fn explicit_override_routes_after_bonuses() {
        let catalog = catalog();
        let oracle = catalog.oracle();
        let mut breakdown = ProductionBreakdown::new("RE01");
        breakdown.add(4, None, &oracle).unwrap();

        assert_eq!(
            breakdown.add(6, Some(ProductionBucket::PostBonus), &oracle),
            Ok(ProductionBucket::PostBonus)
        );
        assert_eq!(breakdown.doubled_pre_bonus(), 4);
        assert_eq!(breakdown.post_bonus(), 3);
    }

    #[test]
    fn odd_post_bonus_amount_fails_loudly() {
        let catalog = catalog();
        let oracle = catalog.oracle();
        let mut breakdown = ProductionBreakdown::new("RE02");

        let err = breakdown.add(9, None, &oracle).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(breakdown, ProductionBreakdown::new("RE02"));

        assert_eq!(breakdown.add(10, None, &oracle), Ok(ProductionBucket::PostBonus));
        assert_eq!(breakdown.post_bonus(), 5);
        assert_eq!(breakdown.doubled_pre_bonus(), 0);
    }

    #[test]
    fn unknown_production_type_is_not_found() {
        let catalog = catalog();
        let mut breakdown = ProductionBreakdown::new("RE99");

        assert_eq!(
            breakdown.add(2, None, &catalog.oracle()),
            Err(RulesError::Oracle(OracleError::ProductionTypeNotFound("RE99".into())))
        );
    }

    #[test]
    fn finalize_applies_rounding_direction() {
        let catalog = catalog();
        let oracle = catalog.oracle();

        let mut down = ProductionBreakdown::new("RE01");
        down.add(9, None, &oracle).unwrap();
        assert_eq!(down.finalize(0, 0, &oracle).unwrap().base, 4);

        let mut up = ProductionBreakdown::new("RE03");
        up.add(9, None, &oracle).unwrap();
        assert_eq!(up.finalize(0, 0, &oracle).unwrap().base, 5);

        let mut exact = ProductionBreakdown::new("RE04");
        exact.add(9, None, &oracle).unwrap();
        let err = exact.finalize(0, 0, &oracle).unwrap_err();
        assert_eq!(
            err,
            RulesError::Consistency(ConsistencyError::InexactHalving {
                production_type: "RE04".into(),
                doubled: 9,
            })
        );
    }

    #[test]
    fn finalize_applies_bonus_then_post_amount_then_consumption() {
        let catalog = catalog();
        let oracle = catalog.oracle();
        let mut breakdown = ProductionBreakdown::new("RE01");
        breakdown.add(20, None, &oracle).unwrap();
        breakdown.add(6, Some(ProductionBucket::PostBonus), &oracle).unwrap();

        assert_eq!(
            breakdown.finalize(50, 4, &oracle),
            Ok(ResolvedProduction {
                base: 10,
                modified: 15,
                total: 18,
                net: 14,
            })
        );
    }

    #[test]
    fn overflowing_amounts_are_rejected() {
        let catalog = catalog();
        let oracle = catalog.oracle();

        let mut breakdown = ProductionBreakdown::new("RE01");
        breakdown.add(i32::MAX, None, &oracle).unwrap();
        let err = breakdown.add(1, None, &oracle).unwrap_err();
        assert_eq!(
            err,
            RulesError::Consistency(ConsistencyError::Overflow {
                quantity: "RE01".to_owned(),
            })
        );
        assert_eq!(breakdown.doubled_pre_bonus(), i32::MAX);

        let mut breakdown = ProductionBreakdown::new("RE01");
        breakdown.add(2_000_000_000, None, &oracle).unwrap();
        assert!(breakdown.finalize(300, 0, &oracle).unwrap_err().is_internal());
        assert!(breakdown.finalize(0, -2_000_000_000, &oracle).unwrap_err().is_internal());
        assert_eq!(breakdown.finalize(0, 0, &oracle).unwrap().net, 1_000_000_000);
    }

    #[test]
    fn city_production_keeps_one_breakdown_per_type() {
        let catalog = catalog();
        let oracle = catalog.oracle();
        let mut city = CityProduction::new();
        let food = ProductionTypeId::from("RE01");
        let gold = ProductionTypeId::from("RE02");

        city.add(&food, 3, None, &oracle).unwrap();
        city.add(&food, 3, None, &oracle).unwrap();
        city.add(&gold, 4, None, &oracle).unwrap();

        assert_eq!(city.breakdown(&food).map(|b| b.doubled_pre_bonus()), Some(6));
        assert_eq!(city.breakdown(&gold).map(|b| b.post_bonus()), Some(2));
        let order: Vec<&str> = city.iter().map(|b| b.production_type().as_str()).collect();
        assert_eq!(order, vec!["RE01", "RE02"]);
    }
}
