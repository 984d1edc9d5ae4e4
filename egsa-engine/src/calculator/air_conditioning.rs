use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{
    Cost,
    Usage,
    calculator::{RateModel, UtilityCalculator},
    prelude::*,
    sample::UsageSample,
    settings::AirConditioningSettings,
    utility::UtilityType,
};

/// Recommended thermostat set points, Fahrenheit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct ThermostatSetting {
    pub cooling: u8,
    pub heating: u8,
}

#[derive(Clone, Debug)]
pub struct AirConditioningCalculator {
    rate_model: RateModel,

    /// Coefficient of performance.
    cop: f64,

    default_outdoor_temp: f64,
    benchmark: Usage,
}

impl AirConditioningCalculator {
    pub const BTU_PER_KWH: f64 = 3412.0;

    /// One ton of refrigeration.
    pub const BTU_PER_TON: f64 = 12_000.0;

    /// Fahrenheit, the cooling load grows linearly above it.
    pub const COMFORT_TEMP: f64 = 70.0;

    /// Degrees above [`Self::COMFORT_TEMP`] that double the cost.
    pub const DOUBLING_SPAN: f64 = 30.0;

    pub const MIN_COOLING_FACTOR: f64 = 0.8;

    pub fn new(settings: &AirConditioningSettings, log_capacity: NonZeroUsize) -> Self {
        Self {
            rate_model: RateModel::new(settings.rate, log_capacity),
            cop: settings.cop,
            default_outdoor_temp: settings.default_outdoor_temp,
            benchmark: settings.benchmark,
        }
    }

    #[must_use]
    pub fn cooling_factor(outdoor_temp: f64) -> f64 {
        ((outdoor_temp - Self::COMFORT_TEMP) / Self::DOUBLING_SPAN + 1.0)
            .max(Self::MIN_COOLING_FACTOR)
    }

    pub fn calculate_cooling_cost(&mut self, usage: Usage, outdoor_temp: f64) -> Result<Cost> {
        let base_cost = self.calculate_cost(usage)?;
        Ok(RateModel::adjust(base_cost, Self::cooling_factor(outdoor_temp)))
    }

    /// Tons of refrigeration.
    #[must_use]
    pub fn estimate_cooling_capacity(&self, usage: Usage) -> f64 {
        usage.0.0 * Self::BTU_PER_KWH * self.cop / Self::BTU_PER_TON
    }

    pub const fn recommend_temperature_settings(outdoor_temp: f64) -> ThermostatSetting {
        if outdoor_temp > 90.0 {
            ThermostatSetting { cooling: 76, heating: 68 }
        } else if outdoor_temp > 80.0 {
            ThermostatSetting { cooling: 74, heating: 70 }
        } else {
            ThermostatSetting { cooling: 72, heating: 72 }
        }
    }
}

impl UtilityCalculator for AirConditioningCalculator {
    fn utility_type(&self) -> UtilityType {
        UtilityType::AirConditioning
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
        self.calculate_cooling_cost(sample.usage(), outdoor_temp)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::sample::Context;

    fn calculator() -> AirConditioningCalculator {
        AirConditioningCalculator::new(&AirConditioningSettings::default(), NonZeroUsize::MIN)
    }

    #[test]
    fn cooling_factor() {
        assert_abs_diff_eq!(AirConditioningCalculator::cooling_factor(100.0), 2.0);
        assert_abs_diff_eq!(AirConditioningCalculator::cooling_factor(70.0), 1.0);
        assert_abs_diff_eq!(AirConditioningCalculator::cooling_factor(64.0), 0.8);
        assert_abs_diff_eq!(AirConditioningCalculator::cooling_factor(30.0), 0.8);
    }

    #[test]
    fn hotter_is_never_cheaper() {
        let mut calculator = calculator();
        let costs: Vec<_> = (40..=110)
            .map(|temp| {
                calculator.calculate_cooling_cost(Usage::from(200.0), f64::from(temp)).unwrap()
            })
            .collect();
        assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn default_outdoor_temp() {
        // 200 kWh × 0.15 = 30.00, at 75 °F the factor is 7/6:
        let sample = UsageSample::try_new(
            UtilityType::AirConditioning,
            Usage::from(200.0),
            Context::default(),
        )
        .unwrap();
        assert_eq!(calculator().adjusted_cost(&sample).unwrap(), Cost::from(35.0));
    }

    #[test]
    fn cooling_capacity() {
        assert_abs_diff_eq!(
            calculator().estimate_cooling_capacity(Usage::from(12_000.0)),
            3412.0 * 3.5,
            epsilon = 1e-6
        );
    }

    #[test]
    fn temperature_settings() {
        assert_eq!(
            AirConditioningCalculator::recommend_temperature_settings(95.0),
            ThermostatSetting { cooling: 76, heating: 68 }
        );
        assert_eq!(
            AirConditioningCalculator::recommend_temperature_settings(85.0),
            ThermostatSetting { cooling: 74, heating: 70 }
        );
        assert_eq!(
            AirConditioningCalculator::recommend_temperature_settings(80.0),
            ThermostatSetting { cooling: 72, heating: 72 }
        );
    }
}
