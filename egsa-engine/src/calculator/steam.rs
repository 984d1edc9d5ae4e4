use std::num::NonZeroUsize;

use crate::{
    Cost,
    Usage,
    calculator::{RateModel, UtilityCalculator},
    prelude::*,
    sample::UsageSample,
    settings::SteamSettings,
    utility::UtilityType,
};

#[derive(Clone, Debug)]
pub struct SteamCalculator {
    rate_model: RateModel,
    pressure_psi: f64,
    efficiency_factor: f64,
    condensate_return_ratio: f64,
    benchmark: Usage,
}

impl SteamCalculator {
    /// Latent heat of steam at 15 PSI, BTU per pound.
    pub const LATENT_HEAT_BTU_PER_POUND: f64 = 970.0;

    pub fn new(settings: &SteamSettings, log_capacity: NonZeroUsize) -> Self {
        Self {
            rate_model: RateModel::new(settings.rate, log_capacity),
            pressure_psi: settings.pressure_psi,
            efficiency_factor: settings.efficiency_factor,
            condensate_return_ratio: settings.condensate_return_ratio,
            benchmark: settings.benchmark,
        }
    }

    /// Configured nominal pressure, reported as is and not used by the estimates.
    #[must_use]
    pub const fn pressure_psi(&self) -> f64 {
        self.pressure_psi
    }

    /// Pounds of condensate expected back from the given steam usage.
    pub fn calculate_condensate_return(&self, usage: Usage) -> Usage {
        usage * self.condensate_return_ratio
    }

    /// British thermal units.
    #[must_use]
    pub fn estimate_heat_transfer(&self, usage: Usage) -> f64 {
        usage.0.0 * Self::LATENT_HEAT_BTU_PER_POUND * self.efficiency_factor
    }
}

impl UtilityCalculator for SteamCalculator {
    fn utility_type(&self) -> UtilityType {
        UtilityType::Steam
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
        self.calculate_cost(sample.usage())
    }
}
