//! Synthetic time-of-use reports.
//!
//! Every report kind draws its base quantities per period and derives its
//! totals from them, so a `*Total`/`net*` field always equals the rounded
//! sum (or difference) of its siblings.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::periods::{periods, Period};
use crate::sampler::Sampler;
use crate::types::ReportType;

pub mod charging;
pub mod energy;
pub mod energy_storage;
pub mod enterprise_income;
pub mod photovoltaic;
pub mod wind_power;

pub use charging::ChargingIncomeReport;
pub use energy::{EnergyBaseline, EnterpriseEnergyReport};
pub use energy_storage::EnergyStorageIncomeReport;
pub use enterprise_income::EnterpriseIncomeReport;
pub use photovoltaic::PhotovoltaicIncomeReport;
pub use wind_power::WindPowerIncomeReport;

/// Days folded into one yearly-report row.
pub const DAYS_PER_MONTH: f64 = 30.0;

impl Period {
    /// Multiplier applied to daily-scale draws.
    pub fn scale(&self) -> f64 {
        match self.report_type {
            ReportType::Monthly => 1.0,
            ReportType::Yearly => DAYS_PER_MONTH,
        }
    }
}

pub trait Report: Serialize + Sized {
    /// Label used in request logs.
    const NAME: &'static str;

    /// Reference data the rows are drawn from.
    type Source: ?Sized;

    fn draw<R: Rng>(source: &Self::Source, sampler: &mut Sampler<R>, period: &Period) -> Self;
}

/// One freshly drawn row per period in `[start, end]`.
pub fn generate_report<T, R>(
    source: &T::Source,
    rng: R,
    start: NaiveDate,
    end: NaiveDate,
    report_type: ReportType,
) -> Vec<T>
where
    T: Report,
    R: Rng,
{
    let mut sampler = Sampler::new(rng);
    periods(start, end, report_type)
        .iter()
        .map(|period| T::draw(source, &mut sampler, period))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_are_distinct() {
        let mut names = vec![
            EnterpriseEnergyReport::NAME,
            EnterpriseIncomeReport::NAME,
            PhotovoltaicIncomeReport::NAME,
            WindPowerIncomeReport::NAME,
            EnergyStorageIncomeReport::NAME,
            ChargingIncomeReport::NAME,
        ];
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
        assert!(names.iter().all(|name| !name.is_empty() && !name.contains("::")));
    }
}
