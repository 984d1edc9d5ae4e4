use crate::utility::UtilityType;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Usage is negative, NaN, infinite or not a number at all.
    #[error("invalid usage: `{usage}`")]
    InvalidUsage { usage: String },

    #[error("unknown utility type: `{0}`")]
    UnknownUtilityType(String),

    /// A required field is missing from the reading or is out of range.
    #[error("malformed `{utility_type}` sample: {reason}")]
    MalformedSample { utility_type: UtilityType, reason: &'static str },

    #[error("no calculator for `{0}`")]
    MissingCalculator(UtilityType),

    /// A calculator parameter is negative, NaN or infinite.
    #[error("invalid `{utility_type}` setting `{name}`: {value}")]
    InvalidSetting { utility_type: UtilityType, name: &'static str, value: f64 },
}
