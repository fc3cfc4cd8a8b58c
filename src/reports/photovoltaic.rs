use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Report;
use crate::periods::Period;
use crate::sampler::{round2, BandBounds, Bounds, Sampler};

const AMOUNT: BandBounds = [(100.0, 500.0), (200.0, 800.0), (300.0, 1000.0), (400.0, 1200.0), (500.0, 1500.0)];
const INCOME: BandBounds = [(80.0, 400.0), (150.0, 600.0), (200.0, 700.0), (250.0, 800.0), (300.0, 900.0)];
const GRID_AMOUNT: Bounds = (200.0, 800.0);
const GRID_INCOME: Bounds = (150.0, 600.0);

/// Photovoltaic output: self-consumed per band plus what was fed to the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotovoltaicIncomeReport {
    pub time: String,
    pub sharp_amount: f64,
    pub sharp_income: f64,
    pub peak_amount: f64,
    pub peak_income: f64,
    pub flat_amount: f64,
    pub flat_income: f64,
    pub valley_amount: f64,
    pub valley_income: f64,
    pub deep_valley_amount: f64,
    pub deep_valley_income: f64,
    pub consumption_total_income: f64,
    pub grid_amount: f64,
    pub grid_income: f64,
    pub total_amount: f64,
    pub total_income: f64,
}

impl Report for PhotovoltaicIncomeReport {
    const NAME: &'static str = "photovoltaic income";
    type Source = ();

    fn draw<R: Rng>(_: &(), sampler: &mut Sampler<R>, period: &Period) -> Self {
        let scale = period.scale();
        let amount = sampler.bands(&AMOUNT, scale);
        let income = sampler.bands(&INCOME, scale);
        let consumption_total_income = income.total();
        let grid_amount = sampler.scaled(GRID_AMOUNT, scale);
        let grid_income = sampler.scaled(GRID_INCOME, scale);

        Self {
            time: period.time.clone(),
            sharp_amount: amount.sharp,
            sharp_income: income.sharp,
            peak_amount: amount.peak,
            peak_income: income.peak,
            flat_amount: amount.flat,
            flat_income: income.flat,
            valley_amount: amount.valley,
            valley_income: income.valley,
            deep_valley_amount: amount.deep_valley,
            deep_valley_income: income.deep_valley,
            consumption_total_income,
            grid_amount,
            grid_income,
            total_amount: round2(amount.total() + grid_amount),
            total_income: round2(consumption_total_income + grid_income),
        }
    }
}
