use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_with::with_prefix;

use super::Report;
use crate::periods::Period;
use crate::sampler::{round2, BandBounds, Sampler};
use crate::types::Bands;

const CHARGING: BandBounds = [(10.0, 50.0), (20.0, 80.0), (50.0, 120.0), (80.0, 150.0), (100.0, 200.0)];
const DISCHARGING: BandBounds = [(80.0, 180.0), (60.0, 150.0), (40.0, 100.0), (20.0, 70.0), (5.0, 40.0)];
const CHARGING_PRICE: BandBounds = [(1.2, 1.5), (0.9, 1.2), (0.6, 0.9), (0.4, 0.6), (0.2, 0.4)];
const DISCHARGING_PRICE: BandBounds = [(1.3, 1.6), (1.0, 1.3), (0.7, 1.0), (0.5, 0.7), (0.3, 0.5)];

with_prefix!(charging_electricity "chargingElectricity");
with_prefix!(discharging_electricity "dischargingElectricity");
with_prefix!(charging_cost "chargingCost");
with_prefix!(discharging_income "dischargingIncome");

/// Storage arbitrage: charge in cheap bands, discharge in expensive ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyStorageIncomeReport {
    pub time: String,
    #[serde(flatten, with = "charging_electricity")]
    pub charging_electricity: Bands,
    #[serde(flatten, with = "discharging_electricity")]
    pub discharging_electricity: Bands,
    #[serde(flatten, with = "charging_cost")]
    pub charging_cost: Bands,
    #[serde(flatten, with = "discharging_income")]
    pub discharging_income: Bands,
    pub total_net_income: f64,
}

impl Report for EnergyStorageIncomeReport {
    const NAME: &'static str = "energy storage income";
    type Source = ();

    fn draw<R: Rng>(_: &(), sampler: &mut Sampler<R>, period: &Period) -> Self {
        let scale = period.scale();
        let charging_electricity = sampler.bands(&CHARGING, scale);
        let discharging_electricity = sampler.bands(&DISCHARGING, scale);
        let charging_cost = sampler.priced(&charging_electricity, &CHARGING_PRICE);
        let discharging_income = sampler.priced(&discharging_electricity, &DISCHARGING_PRICE);

        Self {
            time: period.time.clone(),
            charging_electricity,
            discharging_electricity,
            charging_cost,
            discharging_income,
            total_net_income: round2(discharging_income.total() - charging_cost.total()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::generate_report;
    use crate::reports::test_support::{assert_close, date, rng};
    use crate::types::ReportType;

    fn assert_row(row: &EnergyStorageIncomeReport) {
        let cost = row.charging_cost.sharp
            + row.charging_cost.peak
            + row.charging_cost.flat
            + row.charging_cost.valley
            + row.charging_cost.deep_valley;
        let income = row.discharging_income.sharp
            + row.discharging_income.peak
            + row.discharging_income.flat
            + row.discharging_income.valley
            + row.discharging_income.deep_valley;
        assert!((row.total_net_income - (income - cost)).abs() < 0.02, "{:?}", row);
        assert_close(row.total_net_income, round2(income) - round2(cost));
    }

    #[test]
    fn net_income_is_income_minus_cost() {
        let rows: Vec<EnergyStorageIncomeReport> =
            generate_report(&(), rng(8), date("2024-08-01"), date("2024-08-20"), ReportType::Monthly);
        assert_eq!(rows.len(), 20);
        rows.iter().for_each(assert_row);
    }

    #[test]
    fn yearly_rows_scale_quantities() {
        let rows: Vec<EnergyStorageIncomeReport> =
            generate_report(&(), rng(18), date("2024-01-15"), date("2024-12-01"), ReportType::Yearly);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].time, "2024-01");
        assert_eq!(rows[11].time, "2024-12");
        for row in &rows {
            assert_row(row);
            assert!(row.charging_electricity.sharp >= 10.0 * 30.0);
            assert!(row.discharging_electricity.sharp <= 180.0 * 30.0);
            // Prices are not scaled, so cost stays below quantity times the top price.
            assert!(row.charging_cost.sharp <= round2(row.charging_electricity.sharp * 1.5));
        }
    }

    #[test]
    fn serializes_prefixed_keys() {
        let rows: Vec<EnergyStorageIncomeReport> =
            generate_report(&(), rng(9), date("2024-08-01"), date("2024-08-01"), ReportType::Monthly);
        let value = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(value["chargingElectricitySharp"], rows[0].charging_electricity.sharp);
        assert_eq!(value["dischargingIncomeDeepValley"], rows[0].discharging_income.deep_valley);
        assert!(value.get("totalNetIncome").is_some());

        let parsed: EnergyStorageIncomeReport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, rows[0]);
    }
}
