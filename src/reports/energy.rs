use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::with_prefix;

use super::Report;
use crate::periods::Period;
use crate::sampler::{round2, Bounds, Sampler};
use crate::types::{BandSeries, Bands, ReportType};

/// Day-to-day jitter around the reference day.
const DAILY_VARIATION: Bounds = (0.9, 1.1);
/// A month accumulates roughly this many reference days.
const MONTHLY_ACCUMULATION: Bounds = (25.0, 35.0);

with_prefix!(load "load");
with_prefix!(wind "wind");
with_prefix!(storage_charge "storageCharge");
with_prefix!(storage_discharge "storageDischarge");
with_prefix!(charging_pile "chargingPile");
with_prefix!(grid "grid");
with_prefix!(solar_consumption "solarConsumption");

/// A measured reference day the synthetic rows are varied from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBaseline {
    pub date: &'static str,
    pub load: Bands,
    pub wind: Bands,
    pub storage_charge: Bands,
    pub storage_discharge: Bands,
    pub charging_pile: Bands,
    pub grid: Bands,
    pub solar_consumption: Bands,
    pub grid_connection: f64,
}

/// Enterprise energy flows (kW·h) per source and band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseEnergyReport {
    pub time: String,
    #[serde(flatten, with = "load")]
    pub load: BandSeries,
    #[serde(flatten, with = "wind")]
    pub wind: BandSeries,
    #[serde(flatten, with = "storage_charge")]
    pub storage_charge: BandSeries,
    #[serde(flatten, with = "storage_discharge")]
    pub storage_discharge: BandSeries,
    #[serde(flatten, with = "charging_pile")]
    pub charging_pile: BandSeries,
    #[serde(flatten, with = "grid")]
    pub grid: BandSeries,
    #[serde(flatten, with = "solar_consumption")]
    pub solar_consumption: BandSeries,
    pub grid_connection: f64,
    pub grand_total: f64,
}

impl EnterpriseEnergyReport {
    /// Builds a row from band values, deriving every total.
    pub fn from_baseline(time: impl Into<String>, baseline: &EnergyBaseline) -> Self {
        let solar_consumption = BandSeries::new(baseline.solar_consumption);
        Self {
            time: time.into(),
            load: baseline.load.into(),
            wind: baseline.wind.into(),
            storage_charge: baseline.storage_charge.into(),
            storage_discharge: baseline.storage_discharge.into(),
            charging_pile: baseline.charging_pile.into(),
            grid: baseline.grid.into(),
            grand_total: round2(solar_consumption.total + baseline.grid_connection),
            solar_consumption,
            grid_connection: baseline.grid_connection,
        }
    }
}

impl Report for EnterpriseEnergyReport {
    const NAME: &'static str = "enterprise energy";
    type Source = [EnergyBaseline];

    fn draw<R: Rng>(baselines: &[EnergyBaseline], sampler: &mut Sampler<R>, period: &Period) -> Self {
        let (position, factor) = match period.report_type {
            ReportType::Monthly => (period.index, DAILY_VARIATION),
            ReportType::Yearly => (period.date.month0() as usize, MONTHLY_ACCUMULATION),
        };
        let base = baselines
            .get(position % baselines.len().max(1))
            .copied()
            .unwrap_or_default();

        let varied = EnergyBaseline {
            date: base.date,
            load: sampler.vary(&base.load, factor),
            wind: sampler.vary(&base.wind, factor),
            storage_charge: sampler.vary(&base.storage_charge, factor),
            storage_discharge: sampler.vary(&base.storage_discharge, factor),
            charging_pile: sampler.vary(&base.charging_pile, factor),
            grid: sampler.vary(&base.grid, factor),
            solar_consumption: sampler.vary(&base.solar_consumption, factor),
            grid_connection: round2(base.grid_connection * sampler.factor(factor)),
        };
        Self::from_baseline(period.time.clone(), &varied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::energy_baseline;
    use crate::reports::generate_report;
    use crate::reports::test_support::{assert_close, assert_series, date, rng};

    fn assert_row(row: &EnterpriseEnergyReport) {
        for series in [
            &row.load,
            &row.wind,
            &row.storage_charge,
            &row.storage_discharge,
            &row.charging_pile,
            &row.grid,
            &row.solar_consumption,
        ] {
            assert_series(series);
        }
        assert_close(row.grand_total, row.solar_consumption.total + row.grid_connection);
    }

    #[test]
    fn baseline_rows_recompute_totals() {
        for baseline in energy_baseline() {
            let row = EnterpriseEnergyReport::from_baseline(baseline.date, &baseline);
            assert_eq!(row.time, baseline.date);
            assert_row(&row);
        }
    }

    #[test]
    fn daily_rows_stay_near_baseline() {
        let baselines = energy_baseline();
        let rows: Vec<EnterpriseEnergyReport> =
            generate_report(baselines.as_slice(), rng(10), date("2024-01-01"), date("2024-01-10"), ReportType::Monthly);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[9].time, "2024-01-10");
        for (i, row) in rows.iter().enumerate() {
            assert_row(row);
            let base = baselines[i % baselines.len()].load.sharp;
            assert!(row.load.bands.sharp >= round2(base * 0.9) && row.load.bands.sharp <= round2(base * 1.1));
        }
    }

    #[test]
    fn monthly_rows_accumulate() {
        let baselines = energy_baseline();
        let rows: Vec<EnterpriseEnergyReport> =
            generate_report(baselines.as_slice(), rng(11), date("2024-01-01"), date("2024-06-30"), ReportType::Yearly);
        assert_eq!(rows.len(), 6);
        for (month, row) in rows.iter().enumerate() {
            assert_row(row);
            let base = baselines[month % baselines.len()].load.sharp;
            assert!(row.load.bands.sharp >= round2(base * 25.0));
        }
    }

    #[test]
    fn serializes_prefixed_series() {
        let baselines = energy_baseline();
        let row = EnterpriseEnergyReport::from_baseline("2025-07-02", &baselines[0]);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["loadSharp"], 120.5);
        assert_eq!(value["loadTotal"], row.load.total);
        assert_eq!(value["solarConsumptionDeepValley"], 25.8);
        assert_eq!(value["gridConnection"], 68.5);
        assert!(value.get("grandTotal").is_some());
    }

    #[test]
    fn empty_baseline_yields_zero_rows() {
        let rows: Vec<EnterpriseEnergyReport> =
            generate_report(&[][..], rng(12), date("2024-01-01"), date("2024-01-02"), ReportType::Monthly);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].grand_total, 0.0);
    }
}
