use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::{
    Cost,
    Usage,
    calculator::{RateModel, UtilityCalculator},
    prelude::*,
    sample::UsageSample,
    settings::{ElectricitySettings, PeakWindow},
    utility::UtilityType,
};

#[derive(Clone, Debug)]
pub struct ElectricityCalculator {
    rate_model: RateModel,
    peak_window: PeakWindow,
    peak_multiplier: f64,

    /// Kilograms of CO₂ per kilowatt-hour.
    emission_factor: f64,

    benchmark: Usage,
}

impl ElectricityCalculator {
    /// Monthly kilowatt-hours above which appliance upgrades are worth it.
    pub const HIGH_USAGE_KWH: f64 = 500.0;

    pub const MODERATE_USAGE_KWH: f64 = 300.0;

    pub const HIGH_USAGE_TIP: &'static str =
        "Consider LED lighting and energy-efficient appliances";
    pub const MODERATE_USAGE_TIP: &'static str = "Use programmable thermostats";
    pub const GENERAL_TIP: &'static str = "Unplug devices when not in use";

    pub fn new(settings: &ElectricitySettings, log_capacity: NonZeroUsize) -> Self {
        Self {
            rate_model: RateModel::new(settings.rate, log_capacity),
            peak_window: settings.peak_window,
            peak_multiplier: settings.peak_multiplier,
            emission_factor: settings.emission_factor,
            benchmark: settings.benchmark,
        }
    }

    pub const fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_window.contains(hour)
    }

    pub fn calculate_peak_cost(&mut self, usage: Usage, hour: u32) -> Result<Cost> {
        let base_cost = self.calculate_cost(usage)?;
        if self.is_peak_hour(hour) {
            debug!(hour, multiplier = self.peak_multiplier, "peak hour surcharge");
            Ok(RateModel::adjust(base_cost, self.peak_multiplier))
        } else {
            Ok(base_cost)
        }
    }

    /// Kilograms of CO₂.
    #[must_use]
    pub fn estimate_carbon_footprint(&self, usage: Usage) -> f64 {
        usage.0.0 * self.emission_factor
    }

    /// Savings tips from the most to the least specific, without duplicates.
    #[must_use]
    pub fn recommend_savings(&self, usage: Usage) -> Vec<&'static str> {
        let usage = usage.0.0;
        [
            (usage > Self::HIGH_USAGE_KWH).then_some(Self::HIGH_USAGE_TIP),
            (usage > Self::MODERATE_USAGE_KWH).then_some(Self::MODERATE_USAGE_TIP),
            Some(Self::GENERAL_TIP),
        ]
        .into_iter()
        .flatten()
        .unique()
        .collect()
    }
}

impl UtilityCalculator for ElectricityCalculator {
    fn utility_type(&self) -> UtilityType {
        UtilityType::Electricity
    }

    fn rate_model(&self) -> &RateModel {
        &self.rate_model
    }

    fn rate_model_mut(&mut self) -> &mut RateModel {
        &mut self.rate_model
    }

    fn default_benchmark(&self) -> Usage {
        self.benchmark
    }

    fn adjusted_cost(&mut self, sample: &UsageSample) -> Result<Cost> {
        match sample.hour_of_day() {
            Some(hour) => self.calculate_peak_cost(sample.usage(), hour),
            None => self.calculate_cost(sample.usage()),
        }
    }
}
