mod air_conditioning;
mod electricity;
mod factory;
mod gas;
mod rate_model;
mod steam;

pub use self::{
    air_conditioning::{AirConditioningCalculator, ThermostatSetting},
    electricity::ElectricityCalculator,
    factory::CalculatorFactory,
    gas::GasCalculator,
    rate_model::{CostResult, RateModel},
    steam::SteamCalculator,
};
use crate::{
    Cost,
    Usage,
    efficiency::EfficiencyRating,
    history::History,
    prelude::*,
    sample::UsageSample,
    utility::UtilityType,
};

/// Capabilities shared by every utility calculator.
///
/// Implementors only provide access to their [`RateModel`] and their own cost adjustment,
/// the plain cost and the efficiency rating are common.
pub trait UtilityCalculator {
    fn utility_type(&self) -> UtilityType;

    fn rate_model(&self) -> &RateModel;

    fn rate_model_mut(&mut self) -> &mut RateModel;

    /// Benchmark to rate against when the reading carries none.
    fn default_benchmark(&self) -> Usage;

    /// Cost with the utility-specific adjustment applied (peak hours, outdoor temperature).
    fn adjusted_cost(&mut self, sample: &UsageSample) -> Result<Cost>;

    /// Plain `usage × base rate`, rounded to cents. Every successful call is logged.
    fn calculate_cost(&mut self, usage: Usage) -> Result<Cost> {
        self.rate_model_mut().calculate_cost(usage)
    }

    /// Pure: never touches the calculation log.
    fn get_efficiency_rating(&self, usage: Usage, benchmark: Usage) -> EfficiencyRating {
        EfficiencyRating::from_usage(usage, benchmark)
    }

    fn calculation_log(&self) -> &History<CostResult> {
        self.rate_model().log()
    }

    fn drain_calculation_log(&mut self) -> Vec<CostResult> {
        self.rate_model_mut().drain_log()
    }
}

#[derive(Clone, Debug, derive_more::From)]
pub enum Calculator {
    Electricity(ElectricityCalculator),
    Gas(GasCalculator),
    Steam(SteamCalculator),
    AirConditioning(AirConditioningCalculator),
}

macro_rules! dispatch {
    ($self:ident, $calculator:ident => $body:expr) => {
        match $self {
            Self::Electricity($calculator) => $body,
            Self::Gas($calculator) => $body,
            Self::Steam($calculator) => $body,
            Self::AirConditioning($calculator) => $body,
        }
    };
}

impl UtilityCalculator for Calculator {
    fn utility_type(&self) -> UtilityType {
        dispatch!(self, calculator => calculator.utility_type())
    }

    fn rate_model(&self) -> &RateModel {
        dispatch!(self, calculator => calculator.rate_model())
    }

    fn rate_model_mut(&mut self) -> &mut RateModel {
        dispatch!(self, calculator => calculator.rate_model_mut())
    }

    fn default_benchmark(&self) -> Usage {
        dispatch!(self, calculator => calculator.default_benchmark())
    }

    fn adjusted_cost(&mut self, sample: &UsageSample) -> Result<Cost> {
        dispatch!(self, calculator => calculator.adjusted_cost(sample))
    }
}
