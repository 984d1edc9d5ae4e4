use std::num::NonZeroUsize;

use ordered_float::OrderedFloat;
use serde::Deserialize;

use crate::{Quantity, Rate, Usage, history::History, prelude::*, utility::UtilityType};

/// Calculator parameters, one section per utility.
///
/// Every field falls back to its default, so an empty TOML document is a valid configuration.
#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct Settings {
    #[builder(default)]
    pub electricity: ElectricitySettings,

    #[builder(default)]
    pub gas: GasSettings,

    #[builder(default)]
    pub steam: SteamSettings,

    #[builder(default)]
    pub air_conditioning: AirConditioningSettings,

    #[builder(default)]
    pub history: HistorySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct ElectricitySettings {
    /// Per kilowatt-hour.
    #[builder(default = Quantity(OrderedFloat(0.12)))]
    pub rate: Rate,

    #[builder(default)]
    pub peak_window: PeakWindow,

    #[builder(default = 1.5)]
    pub peak_multiplier: f64,

    /// Kilograms of CO₂ per kilowatt-hour.
    #[builder(default = 0.5)]
    pub emission_factor: f64,

    #[builder(default = UtilityType::Electricity.default_benchmark())]
    pub benchmark: Usage,
}

impl Default for ElectricitySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Inclusive range of local hours that are billed with the peak multiplier.
///
/// A window with `start_hour > end_hour` wraps over midnight.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct PeakWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for PeakWindow {
    fn default() -> Self {
        Self { start_hour: 17, end_hour: 21 }
    }
}

impl PeakWindow {
    pub const fn contains(self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            self.start_hour <= hour && hour <= self.end_hour
        } else {
            hour >= self.start_hour || hour <= self.end_hour
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct GasSettings {
    /// Per cubic meter.
    #[builder(default = Quantity(OrderedFloat(0.45)))]
    pub rate: Rate,

    #[builder(default = 0.85)]
    pub heating_efficiency: f64,

    /// Celsius, assumed when a reading carries no outdoor temperature.
    #[builder(default = 20.0)]
    pub default_outdoor_temp: f64,

    #[builder(default = UtilityType::Gas.default_benchmark())]
    pub benchmark: Usage,
}

impl Default for GasSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct SteamSettings {
    /// Per pound.
    #[builder(default = Quantity(OrderedFloat(0.025)))]
    pub rate: Rate,

    /// Nominal line pressure in PSI.
    ///
    /// Informational only: no estimate depends on it, the latent heat constant always assumes
    /// 15 PSI.
    #[builder(default = 15.0)]
    pub pressure_psi: f64,

    #[builder(default = 0.9)]
    pub efficiency_factor: f64,

    /// Share of the steam mass that returns as condensate.
    #[builder(default = 0.85)]
    pub condensate_return_ratio: f64,

    #[builder(default = UtilityType::Steam.default_benchmark())]
    pub benchmark: Usage,
}

impl Default for SteamSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct AirConditioningSettings {
    /// Per kilowatt-hour.
    #[builder(default = Quantity(OrderedFloat(0.15)))]
    pub rate: Rate,

    /// Coefficient of performance.
    #[builder(default = 3.5)]
    pub cop: f64,

    /// Fahrenheit, assumed when a reading carries no outdoor temperature.
    #[builder(default = 75.0)]
    pub default_outdoor_temp: f64,

    #[builder(default = UtilityType::AirConditioning.default_benchmark())]
    pub benchmark: Usage,
}

impl Default for AirConditioningSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Copy, Clone, Debug, Deserialize, bon::Builder)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of cost results each calculator retains.
    #[builder(default = History::<()>::DEFAULT_CAPACITY)]
    pub calculation_log: NonZeroUsize,

    /// Maximum number of analysis records the analyzer retains.
    #[builder(default = History::<()>::DEFAULT_CAPACITY)]
    pub analyses: NonZeroUsize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Settings {
    /// Check that every parameter which scales a cost or an estimate is finite and non-negative.
    pub fn validate(&self) -> Result {
        let checks = [
            (UtilityType::Electricity, "rate", self.electricity.rate.0.0),
            (UtilityType::Electricity, "peak_multiplier", self.electricity.peak_multiplier),
            (UtilityType::Electricity, "emission_factor", self.electricity.emission_factor),
            (UtilityType::Gas, "rate", self.gas.rate.0.0),
            (UtilityType::Gas, "heating_efficiency", self.gas.heating_efficiency),
            (UtilityType::Steam, "rate", self.steam.rate.0.0),
            (UtilityType::Steam, "efficiency_factor", self.steam.efficiency_factor),
            (UtilityType::Steam, "condensate_return_ratio", self.steam.condensate_return_ratio),
            (UtilityType::AirConditioning, "rate", self.air_conditioning.rate.0.0),
            (UtilityType::AirConditioning, "cop", self.air_conditioning.cop),
        ];
        for (utility_type, name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidSetting { utility_type, name, value });
            }
        }
        let peak_window = self.electricity.peak_window;
        for (name, hour) in [
            ("peak_window.start_hour", peak_window.start_hour),
            ("peak_window.end_hour", peak_window.end_hour),
        ] {
            if hour > 23 {
                return Err(Error::InvalidSetting {
                    utility_type: UtilityType::Electricity,
                    name,
                    value: f64::from(hour),
                });
            }
        }
        Ok(())
    }
}
