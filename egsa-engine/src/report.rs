use std::collections::BTreeMap;

use average::Mean;
use chrono::{DateTime, Local};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    Cost,
    analyzer::AnalysisRecord,
    efficiency::EfficiencyRating,
    prelude::*,
    utility::UtilityType,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum CostTrend {
    Increasing,
    Decreasing,
    Stable,

    #[display("Insufficient data")]
    InsufficientData,
}

impl CostTrend {
    /// The most recent cost must exceed the earliest one by more than this to be a rise.
    pub const INCREASE_FACTOR: f64 = 1.1;

    pub const DECREASE_FACTOR: f64 = 0.9;

    /// Compare the last record against the first one, in the given order.
    pub fn classify(records: &[&AnalysisRecord]) -> Self {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Self::InsufficientData;
        };
        if records.len() < 2 {
            Self::InsufficientData
        } else if last.total_cost > first.total_cost * Self::INCREASE_FACTOR {
            Self::Increasing
        } else if last.total_cost < first.total_cost * Self::DECREASE_FACTOR {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Report {
    /// `YYYY-MM-DD to YYYY-MM-DD`.
    pub period: String,

    /// Sum over the analyses within the period.
    pub total_cost: Cost,

    pub average_efficiency: BTreeMap<UtilityType, EfficiencyRating>,

    pub analysis_count: usize,

    pub cost_trend: CostTrend,
}

pub struct ReportSummarizer;

impl ReportSummarizer {
    /// Reduce the records timestamped within `start..=end` into a report.
    ///
    /// The records are taken in the iteration order, which is never re-sorted by timestamp.
    #[instrument(skip_all, fields(start = %start, end = %end))]
    pub fn summarize<'a>(
        history: impl IntoIterator<Item = &'a AnalysisRecord>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Report {
        let records = history
            .into_iter()
            .filter(|record| (start <= record.timestamp) && (record.timestamp <= end))
            .collect_vec();
        let report = Report {
            period: format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")),
            total_cost: records.iter().map(|record| record.total_cost).sum(),
            average_efficiency: Self::average_efficiency(&records),
            analysis_count: records.len(),
            cost_trend: CostTrend::classify(&records),
        };
        info!(
            analysis_count = report.analysis_count,
            total_cost = %report.total_cost,
            cost_trend = %report.cost_trend,
            "summarized",
        );
        report
    }

    fn average_efficiency(records: &[&AnalysisRecord]) -> BTreeMap<UtilityType, EfficiencyRating> {
        records
            .iter()
            .flat_map(|record| &record.efficiency_scores)
            .map(|(utility_type, rating)| (*utility_type, f64::from(rating.score())))
            .into_group_map()
            .into_iter()
            .map(|(utility_type, scores)| {
                let mean: Mean = scores.into_iter().collect();
                (utility_type, EfficiencyRating::from_mean_score(mean.mean()))
            })
            .collect()
    }
}
