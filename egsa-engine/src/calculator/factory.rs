use crate::{
    calculator::{
        AirConditioningCalculator,
        Calculator,
        ElectricityCalculator,
        GasCalculator,
        SteamCalculator,
    },
    prelude::*,
    settings::Settings,
    utility::UtilityType,
};

/// Builds fresh calculators, holds no state of its own.
pub struct CalculatorFactory;

impl CalculatorFactory {
    pub fn create(utility_type: UtilityType, settings: &Settings) -> Result<Calculator> {
        settings.validate()?;
        let log_capacity = settings.history.calculation_log;
        let calculator = match utility_type {
            UtilityType::Electricity => {
                ElectricityCalculator::new(&settings.electricity, log_capacity).into()
            }
            UtilityType::Gas => GasCalculator::new(&settings.gas, log_capacity).into(),
            UtilityType::Steam => SteamCalculator::new(&settings.steam, log_capacity).into(),
            UtilityType::AirConditioning => {
                AirConditioningCalculator::new(&settings.air_conditioning, log_capacity).into()
            }
        };
        debug!(%utility_type, "created a calculator");
        Ok(calculator)
    }

    pub fn create_by_name(identifier: &str, settings: &Settings) -> Result<Calculator> {
        Self::create(identifier.parse()?, settings)
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;
    use crate::{Rate, calculator::UtilityCalculator, settings::GasSettings};

    #[test]
    fn creates_every_variant() {
        for utility_type in EnumSet::<UtilityType>::all() {
            let calculator = CalculatorFactory::create(utility_type, &Settings::default()).unwrap();
            assert_eq!(calculator.utility_type(), utility_type);
            assert_eq!(calculator.default_benchmark(), utility_type.default_benchmark());
        }
    }

    #[test]
    fn create_by_name() {
        let calculator = CalculatorFactory::create_by_name("steam", &Settings::default()).unwrap();
        assert!(matches!(calculator, Calculator::Steam(_)));
        assert_eq!(calculator.rate_model().base_rate(), Rate::from(0.025));
    }

    #[test]
    fn unknown_utility_type() {
        let result = CalculatorFactory::create_by_name("unknown", &Settings::default());
        assert!(matches!(
            result,
            Err(Error::UnknownUtilityType(identifier)) if identifier == "unknown"
        ));
    }

    #[test]
    fn uses_configured_rate() {
        let settings =
            Settings::builder().gas(GasSettings::builder().rate(Rate::from(1.0)).build()).build();
        let calculator = CalculatorFactory::create(UtilityType::Gas, &settings).unwrap();
        assert_eq!(calculator.rate_model().base_rate(), Rate::from(1.0));
    }

    #[test]
    fn rejects_invalid_settings() {
        let settings = Settings::builder()
            .gas(GasSettings::builder().rate(Rate::from(f64::NAN)).build())
            .build();
        assert!(matches!(
            CalculatorFactory::create(UtilityType::Electricity, &settings),
            Err(Error::InvalidSetting { utility_type: UtilityType::Gas, .. })
        ));
    }
}
