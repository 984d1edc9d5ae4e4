use std::str::FromStr;

use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::{Usage, prelude::*};

#[derive(Debug, Hash, Ord, PartialOrd, Deserialize, Serialize, EnumSetType, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum UtilityType {
    #[display("electricity")]
    Electricity,

    #[display("gas")]
    Gas,

    #[display("steam")]
    Steam,

    #[display("air_conditioning")]
    AirConditioning,
}

impl UtilityType {
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Electricity | Self::AirConditioning => "kWh",
            Self::Gas => "m³",
            Self::Steam => "lb",
        }
    }

    /// Reference usage the efficiency rating falls back to when a reading carries no benchmark.
    pub fn default_benchmark(self) -> Usage {
        match self {
            Self::Electricity => Usage::from(400.0),
            Self::Gas => Usage::from(100.0),
            Self::Steam => Usage::from(50.0),
            Self::AirConditioning => Usage::from(200.0),
        }
    }
}

impl FromStr for UtilityType {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self> {
        match identifier {
            "electricity" => Ok(Self::Electricity),
            "gas" => Ok(Self::Gas),
            "steam" => Ok(Self::Steam),
            "air_conditioning" => Ok(Self::AirConditioning),
            _ => Err(Error::UnknownUtilityType(identifier.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn parse_round_trips_display() {
        for utility_type in EnumSet::<UtilityType>::all() {
            assert_eq!(utility_type.to_string().parse::<UtilityType>().unwrap(), utility_type);
        }
    }

    #[test]
    fn parse_unknown() {
        let error = "water".parse::<UtilityType>().unwrap_err();
        assert!(matches!(error, Error::UnknownUtilityType(identifier) if identifier == "water"));
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&UtilityType::AirConditioning).unwrap(),
            r#""air_conditioning""#
        );
    }
}
