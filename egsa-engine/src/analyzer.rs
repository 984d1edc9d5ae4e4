use std::collections::{BTreeMap, btree_map::Entry};

use chrono::{DateTime, Local};
use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    Cost,
    calculator::{Calculator, CalculatorFactory, UtilityCalculator},
    efficiency::EfficiencyRating,
    history::History,
    prelude::*,
    report::{Report, ReportSummarizer},
    sample::{RawSample, UsageSample},
    settings::Settings,
    utility::UtilityType,
};

/// Outcome of one [`Analyzer::analyze`] call.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, bon::Builder)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Local>,

    pub total_cost: Cost,

    /// Only the utilities present in the analyzed batch.
    #[builder(default)]
    pub efficiency_scores: BTreeMap<UtilityType, EfficiencyRating>,

    #[builder(default)]
    pub recommendations: Vec<String>,

    #[builder(default)]
    pub environmental_impact: BTreeMap<String, f64>,
}

impl AnalysisRecord {
    /// Key of the electricity carbon footprint in [`AnalysisRecord::environmental_impact`].
    pub const CO2_KG: &'static str = "co2_kg";
}

/// Caller-owned analysis engine: one calculator per utility plus the bounded analysis history.
#[derive(Debug)]
pub struct Analyzer {
    calculators: BTreeMap<UtilityType, Calculator>,
    history: History<AnalysisRecord>,
}

impl Analyzer {
    pub fn try_new(settings: &Settings) -> Result<Self> {
        let calculators = EnumSet::<UtilityType>::all()
            .iter()
            .map(|utility_type| {
                Ok((utility_type, CalculatorFactory::create(utility_type, settings)?))
            })
            .collect::<Result<_>>()?;
        Ok(Self { calculators, history: History::with_capacity(settings.history.analyses) })
    }

    pub fn analyze<K: AsRef<str>>(
        &mut self,
        utility_data: impl IntoIterator<Item = (K, RawSample)>,
    ) -> Result<AnalysisRecord> {
        self.analyze_at(Local::now(), utility_data)
    }

    /// Analyze the batch as if it happened at `timestamp`.
    ///
    /// The whole batch is validated upfront: on any error, neither the calculators
    /// nor the history are touched.
    #[instrument(skip_all, fields(timestamp = %timestamp))]
    pub fn analyze_at<K: AsRef<str>>(
        &mut self,
        timestamp: DateTime<Local>,
        utility_data: impl IntoIterator<Item = (K, RawSample)>,
    ) -> Result<AnalysisRecord> {
        let samples = Self::validate(utility_data)?;
        let record = self.record(timestamp, samples.values())?;
        info!(
            n_utilities = record.efficiency_scores.len(),
            total_cost = %record.total_cost,
            "analyzed",
        );
        self.history.push(record.clone());
        Ok(record)
    }

    /// Analyze already validated samples.
    pub fn analyze_samples(
        &mut self,
        timestamp: DateTime<Local>,
        samples: impl IntoIterator<Item = UsageSample>,
    ) -> Result<AnalysisRecord> {
        let mut by_type = BTreeMap::new();
        for sample in samples {
            Self::insert_unique(&mut by_type, sample)?;
        }
        let record = self.record(timestamp, by_type.values())?;
        self.history.push(record.clone());
        Ok(record)
    }

    fn validate<K: AsRef<str>>(
        utility_data: impl IntoIterator<Item = (K, RawSample)>,
    ) -> Result<BTreeMap<UtilityType, UsageSample>> {
        let mut samples = BTreeMap::new();
        for (identifier, raw) in utility_data {
            let utility_type: UtilityType = identifier.as_ref().parse()?;
            Self::insert_unique(&mut samples, UsageSample::try_from_raw(utility_type, raw)?)?;
        }
        Ok(samples)
    }

    fn insert_unique(
        samples: &mut BTreeMap<UtilityType, UsageSample>,
        sample: UsageSample,
    ) -> Result {
        match samples.entry(sample.utility_type()) {
            Entry::Vacant(entry) => {
                entry.insert(sample);
                Ok(())
            }
            Entry::Occupied(_) => Err(Error::MalformedSample {
                utility_type: sample.utility_type(),
                reason: "duplicate entry in the batch",
            }),
        }
    }

    fn record<'a>(
        &mut self,
        timestamp: DateTime<Local>,
        samples: impl IntoIterator<Item = &'a UsageSample>,
    ) -> Result<AnalysisRecord> {
        let samples = samples.into_iter().collect_vec();
        if let Some(sample) =
            samples.iter().find(|sample| !self.calculators.contains_key(&sample.utility_type()))
        {
            return Err(Error::MissingCalculator(sample.utility_type()));
        }

        let mut total_cost = Cost::ZERO;
        let mut efficiency_scores = BTreeMap::new();
        let mut recommendations = Vec::new();
        let mut environmental_impact = BTreeMap::new();

        for sample in samples {
            let utility_type = sample.utility_type();
            let calculator = self
                .calculators
                .get_mut(&utility_type)
                .ok_or(Error::MissingCalculator(utility_type))?;

            let cost = calculator.adjusted_cost(sample)?;
            total_cost += cost;

            let benchmark = sample.benchmark().unwrap_or_else(|| calculator.default_benchmark());
            let rating = calculator.get_efficiency_rating(sample.usage(), benchmark);
            efficiency_scores.insert(utility_type, rating);
            debug!(%utility_type, usage = ?sample.usage(), %cost, %rating, "analyzed the utility");

            if let Calculator::Electricity(electricity) = calculator {
                environmental_impact.insert(
                    AnalysisRecord::CO2_KG.to_owned(),
                    electricity.estimate_carbon_footprint(sample.usage()),
                );
                recommendations.extend(electricity.recommend_savings(sample.usage()));
            }
        }

        Ok(AnalysisRecord {
            timestamp,
            total_cost,
            efficiency_scores,
            recommendations: recommendations.into_iter().unique().map(str::to_owned).collect(),
            environmental_impact,
        })
    }

    pub const fn history(&self) -> &History<AnalysisRecord> {
        &self.history
    }

    /// Hand the retained records over to the caller, leaving the history empty.
    pub fn drain_history(&mut self) -> Vec<AnalysisRecord> {
        self.history.drain()
    }

    pub fn calculator(&self, utility_type: UtilityType) -> Option<&Calculator> {
        self.calculators.get(&utility_type)
    }

    pub fn calculator_mut(&mut self, utility_type: UtilityType) -> Option<&mut Calculator> {
        self.calculators.get_mut(&utility_type)
    }

    /// Summarize the retained history within `start..=end`.
    pub fn summarize(&self, start: DateTime<Local>, end: DateTime<Local>) -> Report {
        ReportSummarizer::summarize(&self.history, start, end)
    }
}
