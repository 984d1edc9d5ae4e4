use std::num::NonZeroUsize;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{Cost, Rate, Usage, history::History, prelude::*, sample::validate_usage};

/// Single logged invocation of [`RateModel::calculate_cost`].
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CostResult {
    pub usage: Usage,
    pub rate_applied: Rate,
    pub cost: Cost,
    pub computed_at: DateTime<Local>,
}

/// Base rate per unit together with the log of the costs calculated with it.
#[derive(Clone, Debug)]
pub struct RateModel {
    base_rate: Rate,
    log: History<CostResult>,
}

impl RateModel {
    pub fn new(base_rate: Rate, log_capacity: NonZeroUsize) -> Self {
        Self { base_rate, log: History::with_capacity(log_capacity) }
    }

    pub const fn base_rate(&self) -> Rate {
        self.base_rate
    }

    pub fn calculate_cost(&mut self, usage: Usage) -> Result<Cost> {
        let usage = validate_usage(usage)?;
        let cost = (usage * self.base_rate).round_to_cents();
        trace!(?usage, rate = ?self.base_rate, ?cost, "calculated");
        self.log.push(CostResult {
            usage,
            rate_applied: self.base_rate,
            cost,
            computed_at: Local::now(),
        });
        Ok(cost)
    }

    /// Scale an already calculated cost by an adjustment factor.
    ///
    /// The cost is rounded to cents once in [`RateModel::calculate_cost`] and not again here.
    pub fn adjust(cost: Cost, factor: f64) -> Cost {
        cost * factor
    }

    pub const fn log(&self) -> &History<CostResult> {
        &self.log
    }

    pub fn drain_log(&mut self) -> Vec<CostResult> {
        self.log.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_model(rate: f64) -> RateModel {
        RateModel::new(Rate::from(rate), NonZeroUsize::new(3).unwrap())
    }

    #[test]
    fn cost_is_rounded_to_cents() {
        let mut model = rate_model(0.12);
        for (usage, expected) in
            [(0.0, 0.0), (1.0, 0.12), (33.333, 4.0), (1000.0, 120.0), (1234.567, 148.15)]
        {
            assert_eq!(model.calculate_cost(Usage::from(usage)).unwrap(), Cost::from(expected));
        }
    }

    #[test]
    fn every_calculation_is_logged() {
        let mut model = rate_model(0.5);
        let _ = model.calculate_cost(Usage::from(10.0)).unwrap();
        let _ = model.calculate_cost(Usage::from(20.0)).unwrap();
        assert_eq!(model.log().len(), 2);
        let latest = model.log().latest().unwrap();
        assert_eq!(latest.usage, Usage::from(20.0));
        assert_eq!(latest.rate_applied, Rate::from(0.5));
        assert_eq!(latest.cost, Cost::from(10.0));
    }

    #[test]
    fn invalid_usage_is_not_logged() {
        let mut model = rate_model(0.5);
        assert!(matches!(
            model.calculate_cost(Usage::from(-1.0)),
            Err(Error::InvalidUsage { .. })
        ));
        assert!(model.log().is_empty());
    }

    #[test]
    fn log_is_bounded() {
        let mut model = rate_model(1.0);
        for usage in 0..5 {
            let _ = model.calculate_cost(Usage::from(f64::from(usage))).unwrap();
        }
        let usages: Vec<_> = model.drain_log().into_iter().map(|result| result.usage).collect();
        assert_eq!(usages, [Usage::from(2.0), Usage::from(3.0), Usage::from(4.0)]);
        assert!(model.log().is_empty());
    }

    #[test]
    fn adjust_does_not_round_again() {
        assert_eq!(RateModel::adjust(Cost::from(0.15), 1.5), Cost::from(0.15) * 1.5);
        assert_ne!(RateModel::adjust(Cost::from(0.15), 1.5), Cost::from(0.22));
    }

    #[test]
    fn half_cent_products_round_up() {
        // 4.625 × 0.12 = 0.555 exactly.
        let mut model = rate_model(0.12);
        assert_eq!(model.calculate_cost(Usage::from(4.625)).unwrap(), Cost::from(0.56));
        let mut model = rate_model(0.45);
        // 0.9 × 0.45 = 0.405 exactly.
        assert_eq!(model.calculate_cost(Usage::from(0.9)).unwrap(), Cost::from(0.41));
    }
}
