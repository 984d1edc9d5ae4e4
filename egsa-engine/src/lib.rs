//! Cost and efficiency analysis for electricity, gas, steam and air conditioning usage.
//!
//! Callers own an [`Analyzer`], feed it batches of per-utility readings,
//! and reduce the retained [`AnalysisRecord`]s into a [`Report`].

pub mod analyzer;
pub mod calculator;
pub mod efficiency;
pub mod error;
pub mod history;
mod prelude;
pub mod report;
pub mod sample;
pub mod settings;
pub mod utility;

pub use egsa_quantities::{Quantity, cost::Cost, rate::Rate, usage::Usage};

pub use self::{
    analyzer::{AnalysisRecord, Analyzer},
    calculator::{Calculator, CalculatorFactory, CostResult, RateModel, UtilityCalculator},
    efficiency::EfficiencyRating,
    error::{Error, Result},
    history::History,
    report::{CostTrend, Report, ReportSummarizer},
    sample::{Context, RawSample, RawUsage, UsageSample},
    settings::Settings,
    utility::UtilityType,
};
