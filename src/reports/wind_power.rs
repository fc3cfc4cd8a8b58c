use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Report;
use crate::periods::Period;
use crate::sampler::{BandBounds, Sampler};

const ELECTRICITY: BandBounds = [(80.0, 250.0), (120.0, 350.0), (200.0, 450.0), (250.0, 500.0), (300.0, 600.0)];
const PRICE: BandBounds = [(0.8, 1.2), (0.6, 0.9), (0.4, 0.7), (0.3, 0.5), (0.2, 0.4)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindPowerIncomeReport {
    pub time: String,
    pub sharp_electricity: f64,
    pub sharp_income: f64,
    pub peak_electricity: f64,
    pub peak_income: f64,
    pub flat_electricity: f64,
    pub flat_income: f64,
    pub valley_electricity: f64,
    pub valley_income: f64,
    pub deep_valley_electricity: f64,
    pub deep_valley_income: f64,
    pub total_amount: f64,
    pub total_income: f64,
}

impl Report for WindPowerIncomeReport {
    const NAME: &'static str = "wind power income";
    type Source = ();

    fn draw<R: Rng>(_: &(), sampler: &mut Sampler<R>, period: &Period) -> Self {
        let electricity = sampler.bands(&ELECTRICITY, period.scale());
        let income = sampler.priced(&electricity, &PRICE);

        Self {
            time: period.time.clone(),
            sharp_electricity: electricity.sharp,
            sharp_income: income.sharp,
            peak_electricity: electricity.peak,
            peak_income: income.peak,
            flat_electricity: electricity.flat,
            flat_income: income.flat,
            valley_electricity: electricity.valley,
            valley_income: income.valley,
            deep_valley_electricity: electricity.deep_valley,
            deep_valley_income: income.deep_valley,
            total_amount: electricity.total(),
            total_income: income.total(),
        }
    }
}
