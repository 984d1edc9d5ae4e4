use std::num::NonZeroUsize;

use crate::{
    Cost,
    Usage,
    calculator::{RateModel, UtilityCalculator},
    prelude::*,
    sample::UsageSample,
    settings::GasSettings,
    utility::UtilityType,
};

#[derive(Clone, Debug)]
pub struct GasCalculator {
    rate_model: RateModel,
    heating_efficiency: f64,
    default_outdoor_temp: f64,
    benchmark: Usage,
}

impl GasCalculator {
    /// British thermal units per cubic meter of natural gas.
    pub const BTU_PER_CUBIC_METER: f64 = 35_300.0;

    /// Celsius, no heating is needed above it.
    pub const BALANCE_POINT_TEMP: f64 = 20.0;

    pub const MIN_HEATING_FACTOR: f64 = 0.5;

    pub fn new(settings: &GasSettings, log_capacity: NonZeroUsize) -> Self {
        Self {
            rate_model: RateModel::new(settings.rate, log_capacity),
            heating_efficiency: settings.heating_efficiency,
            default_outdoor_temp: settings.default_outdoor_temp,
            benchmark: settings.benchmark,
        }
    }

    /// The colder it is, the more expensive, but never less than half of the base cost.
    #[must_use]
    pub fn heating_factor(outdoor_temp: f64) -> f64 {
        ((Self::BALANCE_POINT_TEMP - outdoor_temp) / Self::BALANCE_POINT_TEMP)
            .max(Self::MIN_HEATING_FACTOR)
    }

    pub fn calculate_heating_cost(&mut self, usage: Usage, outdoor_temp: f64) -> Result<Cost> {
        let base_cost = self.calculate_cost(usage)?;
        Ok(RateModel::adjust(base_cost, Self::heating_factor(outdoor_temp)))
    }

    #[must_use]
    pub fn estimate_btu_output(&self, usage: Usage) -> f64 {
        usage.0.0 * Self::BTU_PER_CUBIC_METER * self.heating_efficiency
    }
}

impl UtilityCalculator for GasCalculator {
    fn utility_type(&self) -> UtilityType {
        UtilityType::Gas
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
        let outdoor_temp = sample.outdoor_temp().unwrap_or(self.default_outdoor_temp);
        self.calculate_heating_cost(sample.usage(), outdoor_temp)
    }
}
