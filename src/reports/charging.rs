use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Report;
use crate::periods::Period;
use crate::sampler::{round2, BandBounds, Bounds, Sampler};

const ELECTRICITY: BandBounds = [(50.0, 200.0), (100.0, 300.0), (150.0, 400.0), (200.0, 500.0), (300.0, 600.0)];
const PRICE: BandBounds = [(1.2, 1.5), (0.9, 1.2), (0.6, 0.9), (0.3, 0.6), (0.1, 0.3)];
const MARGIN: Bounds = (1.2, 1.5);

/// Charging-pile income: energy bought per band and what it sold for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingIncomeReport {
    pub time: String,
    pub sharp_electricity: f64,
    pub sharp_cost: f64,
    pub peak_electricity: f64,
    pub peak_cost: f64,
    pub flat_electricity: f64,
    pub flat_cost: f64,
    pub valley_electricity: f64,
    pub valley_cost: f64,
    pub deep_valley_electricity: f64,
    pub deep_valley_cost: f64,
    pub charging_amount: f64,
    pub net_profit: f64,
}

impl ChargingIncomeReport {
    pub fn total_cost(&self) -> f64 {
        round2(self.sharp_cost + self.peak_cost + self.flat_cost + self.valley_cost + self.deep_valley_cost)
    }
}

impl Report for ChargingIncomeReport {
    const NAME: &'static str = "charging income";
    type Source = ();

    fn draw<R: Rng>(_: &(), sampler: &mut Sampler<R>, period: &Period) -> Self {
        let electricity = sampler.bands(&ELECTRICITY, period.scale());
        let cost = sampler.priced(&electricity, &PRICE);
        let total_cost = cost.total();
        let charging_amount = round2(total_cost * sampler.price(MARGIN));

        Self {
            time: period.time.clone(),
            sharp_electricity: electricity.sharp,
            sharp_cost: cost.sharp,
            peak_electricity: electricity.peak,
            peak_cost: cost.peak,
            flat_electricity: electricity.flat,
            flat_cost: cost.flat,
            valley_electricity: electricity.valley,
            valley_cost: cost.valley,
            deep_valley_electricity: electricity.deep_valley,
            deep_valley_cost: cost.deep_valley,
            charging_amount,
            net_profit: round2(charging_amount - total_cost),
        }
    }
}
