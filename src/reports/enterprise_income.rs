use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::with_prefix;

use super::Report;
use crate::periods::Period;
use crate::sampler::{round2, BandBounds, Bounds, Sampler};
use crate::types::BandSeries;

const ELECTRICITY_INCOME: BandBounds =
    [(1000.0, 5000.0), (800.0, 4000.0), (600.0, 3000.0), (400.0, 2000.0), (200.0, 1000.0)];
const WIND_INCOME: BandBounds = [(800.0, 4000.0), (600.0, 3000.0), (400.0, 2000.0), (300.0, 1500.0), (100.0, 800.0)];
const STORAGE_CHARGE_INCOME: BandBounds = [(200.0, 1000.0), (150.0, 800.0), (100.0, 600.0), (80.0, 400.0), (50.0, 200.0)];
const STORAGE_DISCHARGE_INCOME: BandBounds =
    [(300.0, 1500.0), (250.0, 1200.0), (200.0, 1000.0), (150.0, 800.0), (100.0, 500.0)];
const CHARGING_INCOME: BandBounds = [(500.0, 2500.0), (400.0, 2000.0), (300.0, 1500.0), (200.0, 1000.0), (100.0, 500.0)];
const GRID_INCOME: BandBounds = [(600.0, 3000.0), (500.0, 2500.0), (400.0, 2000.0), (300.0, 1500.0), (200.0, 1000.0)];
const SOLAR_CONSUMPTION_INCOME: BandBounds =
    [(400.0, 2000.0), (300.0, 1500.0), (250.0, 1200.0), (200.0, 1000.0), (150.0, 800.0)];
const GRID_CONNECTION_INCOME: Bounds = (500.0, 2500.0);

const SOLAR_CONSUMPTION_AMOUNT: Bounds = (100.0, 800.0);
const SOLAR_GRID_CONNECTION_AMOUNT: Bounds = (50.0, 400.0);
const SOLAR_INCOME: Bounds = (300.0, 1500.0);
const STORAGE_CHARGE_AMOUNT: Bounds = (80.0, 600.0);
const STORAGE_DISCHARGE_AMOUNT: Bounds = (60.0, 500.0);
const CHARGING_PILE_AMOUNT: Bounds = (50.0, 400.0);
const CHARGING_PILE_INCOME: Bounds = (150.0, 800.0);
const WIND_CONSUMPTION_AMOUNT: Bounds = (120.0, 900.0);
const WIND_GRID_CONNECTION_AMOUNT: Bounds = (80.0, 600.0);
const WIND_SUMMARY_INCOME: Bounds = (400.0, 2000.0);

with_prefix!(electricity_income "electricityIncome");
with_prefix!(wind_income "windIncome");
with_prefix!(storage_charge_income "storageChargeIncome");
with_prefix!(storage_discharge_income "storageDischargeIncome");
with_prefix!(charging_income "chargingIncome");
with_prefix!(grid_income "gridIncome");
with_prefix!(solar_consumption_income "solarConsumptionIncome");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseIncomeReport {
    pub time: String,
    #[serde(flatten, with = "electricity_income")]
    pub electricity_income: BandSeries,
    #[serde(flatten, with = "wind_income")]
    pub wind_income: BandSeries,
    #[serde(flatten, with = "storage_charge_income")]
    pub storage_charge_income: BandSeries,
    #[serde(flatten, with = "storage_discharge_income")]
    pub storage_discharge_income: BandSeries,
    #[serde(flatten, with = "charging_income")]
    pub charging_income: BandSeries,
    #[serde(flatten, with = "grid_income")]
    pub grid_income: BandSeries,
    #[serde(flatten, with = "solar_consumption_income")]
    pub solar_consumption_income: BandSeries,
    pub grid_connection_income: f64,
    pub grand_total_income: f64,

    // Per-source summary
    pub solar_consumption_amount: f64,
    pub solar_grid_connection_amount: f64,
    pub solar_income: f64,
    pub storage_charge_amount: f64,
    pub storage_discharge_amount: f64,
    pub storage_income_total: f64,
    pub charging_pile_amount: f64,
    pub charging_pile_income: f64,
    pub wind_consumption_amount: f64,
    pub wind_grid_connection_amount: f64,
    #[serde(rename = "windIncome")]
    pub wind_summary_income: f64,
}

impl EnterpriseIncomeReport {
    pub fn series(&self) -> [&BandSeries; 7] {
        [
            &self.electricity_income,
            &self.wind_income,
            &self.storage_charge_income,
            &self.storage_discharge_income,
            &self.charging_income,
            &self.grid_income,
            &self.solar_consumption_income,
        ]
    }
}

impl Report for EnterpriseIncomeReport {
    const NAME: &'static str = "enterprise income";
    type Source = ();

    fn draw<R: Rng>(_: &(), sampler: &mut Sampler<R>, period: &Period) -> Self {
        let scale = period.scale();
        let electricity_income = BandSeries::new(sampler.bands(&ELECTRICITY_INCOME, scale));
        let wind_income = BandSeries::new(sampler.bands(&WIND_INCOME, scale));
        let storage_charge_income = BandSeries::new(sampler.bands(&STORAGE_CHARGE_INCOME, scale));
        let storage_discharge_income = BandSeries::new(sampler.bands(&STORAGE_DISCHARGE_INCOME, scale));
        let charging_income = BandSeries::new(sampler.bands(&CHARGING_INCOME, scale));
        let grid_income = BandSeries::new(sampler.bands(&GRID_INCOME, scale));
        let solar_consumption_income = BandSeries::new(sampler.bands(&SOLAR_CONSUMPTION_INCOME, scale));
        let grid_connection_income = sampler.scaled(GRID_CONNECTION_INCOME, scale);

        let series_total: f64 = [
            &electricity_income,
            &wind_income,
            &storage_charge_income,
            &storage_discharge_income,
            &charging_income,
            &grid_income,
            &solar_consumption_income,
        ]
        .iter()
        .map(|series| series.total)
        .sum();

        Self {
            time: period.time.clone(),
            grand_total_income: round2(series_total + grid_connection_income),
            storage_income_total: round2(storage_discharge_income.total - storage_charge_income.total),
            electricity_income,
            wind_income,
            storage_charge_income,
            storage_discharge_income,
            charging_income,
            grid_income,
            solar_consumption_income,
            grid_connection_income,
            solar_consumption_amount: sampler.scaled(SOLAR_CONSUMPTION_AMOUNT, scale),
            solar_grid_connection_amount: sampler.scaled(SOLAR_GRID_CONNECTION_AMOUNT, scale),
            solar_income: sampler.scaled(SOLAR_INCOME, scale),
            storage_charge_amount: sampler.scaled(STORAGE_CHARGE_AMOUNT, scale),
            storage_discharge_amount: sampler.scaled(STORAGE_DISCHARGE_AMOUNT, scale),
            charging_pile_amount: sampler.scaled(CHARGING_PILE_AMOUNT, scale),
            charging_pile_income: sampler.scaled(CHARGING_PILE_INCOME, scale),
            wind_consumption_amount: sampler.scaled(WIND_CONSUMPTION_AMOUNT, scale),
            wind_grid_connection_amount: sampler.scaled(WIND_GRID_CONNECTION_AMOUNT, scale),
            wind_summary_income: sampler.scaled(WIND_SUMMARY_INCOME, scale),
        }
    }
}
