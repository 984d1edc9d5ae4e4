use serde::{Deserialize, Serialize};

use crate::{Usage, prelude::*, utility::UtilityType};

/// Loosely-typed reading as supplied by the host application.
///
/// Every field is optional here so that a missing `usage` surfaces as
/// [`Error::MalformedSample`] rather than a deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, bon::Builder)]
pub struct RawSample {
    #[builder(into)]
    pub usage: Option<RawUsage>,

    pub outdoor_temp: Option<f64>,

    #[serde(alias = "hour_of_day")]
    pub hour: Option<i64>,

    pub benchmark: Option<f64>,
}

/// Usage as supplied, so that a non-numeric value is reported as [`Error::InvalidUsage`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, derive_more::Display, derive_more::From)]
#[serde(untagged)]
pub enum RawUsage {
    #[display("{_0}")]
    Number(f64),

    #[display("{_0}")]
    Other(serde_json::Value),
}

impl RawUsage {
    /// Numeric strings are accepted as well.
    pub fn to_usage(&self) -> Result<Usage> {
        match self {
            Self::Number(usage) => Ok(Usage::from(*usage)),
            Self::Other(serde_json::Value::String(text)) => text
                .trim()
                .parse::<f64>()
                .map(Usage::from)
                .map_err(|_| Error::InvalidUsage { usage: self.to_string() }),
            Self::Other(_) => Err(Error::InvalidUsage { usage: self.to_string() }),
        }
    }
}

/// Optional circumstances of a reading.
#[derive(Copy, Clone, Debug, Default, PartialEq, bon::Builder)]
pub struct Context {
    /// Outdoor temperature: Celsius for gas heating, Fahrenheit for air conditioning.
    pub outdoor_temp: Option<f64>,

    /// Local hour, `0..=23`.
    pub hour_of_day: Option<u32>,

    pub benchmark: Option<Usage>,
}

/// Validated, immutable usage reading of a single utility.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct UsageSample {
    utility_type: UtilityType,
    usage: Usage,
    context: Context,
}

impl UsageSample {
    pub fn try_new(utility_type: UtilityType, usage: Usage, context: Context) -> Result<Self> {
        let usage = validate_usage(usage)?;
        if context.hour_of_day.is_some_and(|hour| hour > 23) {
            return Err(Error::MalformedSample {
                utility_type,
                reason: "hour of day must be within 0..=23",
            });
        }
        if context.outdoor_temp.is_some_and(|temp| !temp.is_finite()) {
            return Err(Error::MalformedSample {
                utility_type,
                reason: "outdoor temperature must be finite",
            });
        }
        if context.benchmark.is_some_and(|benchmark| !benchmark.is_finite()) {
            return Err(Error::MalformedSample { utility_type, reason: "benchmark must be finite" });
        }
        Ok(Self { utility_type, usage, context })
    }

    pub fn try_from_raw(utility_type: UtilityType, raw: RawSample) -> Result<Self> {
        let usage = raw
            .usage
            .ok_or(Error::MalformedSample { utility_type, reason: "missing `usage`" })?
            .to_usage()?;
        let hour_of_day = raw
            .hour
            .map(u32::try_from)
            .transpose()
            .map_err(|_| Error::MalformedSample {
                utility_type,
                reason: "hour of day must be within 0..=23",
            })?;
        let context = Context {
            outdoor_temp: raw.outdoor_temp,
            hour_of_day,
            benchmark: raw.benchmark.map(Usage::from),
        };
        Self::try_new(utility_type, usage, context)
    }

    pub const fn utility_type(&self) -> UtilityType {
        self.utility_type
    }

    pub const fn usage(&self) -> Usage {
        self.usage
    }

    pub const fn context(&self) -> &Context {
        &self.context
    }

    pub const fn outdoor_temp(&self) -> Option<f64> {
        self.context.outdoor_temp
    }

    pub const fn hour_of_day(&self) -> Option<u32> {
        self.context.hour_of_day
    }

    pub const fn benchmark(&self) -> Option<Usage> {
        self.context.benchmark
    }
}

/// Reject negative and non-finite usage before anything gets computed.
pub fn validate_usage(usage: Usage) -> Result<Usage> {
    if usage.is_finite() && usage >= Usage::ZERO {
        Ok(usage)
    } else {
        Err(Error::InvalidUsage { usage: usage.0.0.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_ok() {
        let raw = RawSample::builder().usage(120.0).hour(18).outdoor_temp(5.0).build();
        let sample = UsageSample::try_from_raw(UtilityType::Electricity, raw).unwrap();
        assert_eq!(sample.usage(), Usage::from(120.0));
        assert_eq!(sample.hour_of_day(), Some(18));
        assert_eq!(sample.outdoor_temp(), Some(5.0));
        assert_eq!(sample.benchmark(), None);
    }

    #[test]
    fn missing_usage() {
        let error = UsageSample::try_from_raw(UtilityType::Gas, RawSample::default()).unwrap_err();
        assert!(matches!(
            error,
            Error::MalformedSample { utility_type: UtilityType::Gas, reason: "missing `usage`" }
        ));
    }

    #[test]
    fn negative_usage() {
        let raw = RawSample::builder().usage(-1.0).build();
        let error = UsageSample::try_from_raw(UtilityType::Steam, raw).unwrap_err();
        assert!(matches!(error, Error::InvalidUsage { usage } if usage == "-1"));
    }

    #[test]
    fn nan_usage() {
        let error = validate_usage(Usage::from(f64::NAN)).unwrap_err();
        assert!(matches!(error, Error::InvalidUsage { .. }));
    }

    #[test]
    fn hour_out_of_range() {
        for hour in [-1, 24] {
            let raw = RawSample::builder().usage(1.0).hour(hour).build();
            let error = UsageSample::try_from_raw(UtilityType::Electricity, raw).unwrap_err();
            assert!(matches!(error, Error::MalformedSample { .. }), "hour = {hour}");
        }
    }

    #[test]
    fn deserialize_hour_of_day_alias() {
        let raw: RawSample = serde_json::from_str(r#"{"usage": 10, "hour_of_day": 7}"#).unwrap();
        assert_eq!(raw.hour, Some(7));
        assert_eq!(raw.usage, Some(RawUsage::Number(10.0)));
    }

    #[test]
    fn non_numeric_usage() {
        for json in [r#"{"usage": "abc"}"#, r#"{"usage": true}"#, r#"{"usage": [1]}"#] {
            let raw: RawSample = serde_json::from_str(json).unwrap();
            let error = UsageSample::try_from_raw(UtilityType::Gas, raw).unwrap_err();
            assert!(matches!(error, Error::InvalidUsage { .. }), "{json}");
        }
    }

    #[test]
    fn numeric_string_usage() {
        let raw: RawSample = serde_json::from_str(r#"{"usage": " 12.5 "}"#).unwrap();
        let sample = UsageSample::try_from_raw(UtilityType::Steam, raw).unwrap();
        assert_eq!(sample.usage(), Usage::from(12.5));
    }

    #[test]
    fn null_usage_is_missing() {
        let raw: RawSample = serde_json::from_str(r#"{"usage": null}"#).unwrap();
        let error = UsageSample::try_from_raw(UtilityType::Gas, raw).unwrap_err();
        assert!(matches!(error, Error::MalformedSample { reason: "missing `usage`", .. }));
    }
}
