pub mod csv;
pub mod xlsx;

use crate::session::PassReport;
use smallvec::SmallVec;

/// Column names and order, fixed for interoperability with prior
/// exports. Serde field order below must stay in sync.
pub const COLUMNS: [&str; 8] = [
    "Alternative",
    "Scenario",
    "Probability",
    "Units",
    "Unit Price",
    "Revenue",
    "Fixed Cost",
    "Expected Value",
];

/// One flattened export record: one scenario of one alternative. The
/// alternative's expected value repeats on both of its rows.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExportRow {
    #[serde(rename = "Alternative")]
    pub alternative: String,
    #[serde(rename = "Scenario")]
    pub scenario: u8,
    #[serde(rename = "Probability")]
    pub probability: f64,
    #[serde(rename = "Units")]
    pub units: u64,
    #[serde(rename = "Unit Price")]
    pub unit_price: f64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Fixed Cost")]
    pub fixed_cost: f64,
    #[serde(rename = "Expected Value")]
    pub expected_value: f64,
}

/// Flatten a pass report into export records: exactly four rows
/// (2 scenarios x 2 alternatives) when both alternatives are valid,
/// zero otherwise. An incomplete pass is not exportable.
pub fn build_rows(report: &PassReport) -> SmallVec<[ExportRow; 4]> {
    let mut rows = SmallVec::new();
    if !report.complete() {
        return rows;
    }

    for alt in &report.alternatives {
        let result = match &alt.result {
            Some(r) => r,
            None => return SmallVec::new(),
        };
        let scenarios = [
            (1u8, alt.input.scenario_1, alt.input.probability_1, result.revenue_1),
            (2u8, alt.input.scenario_2, alt.input.probability_2, result.revenue_2),
        ];
        for (index, scenario, probability, revenue) in scenarios {
            rows.push(ExportRow {
                alternative: alt.label.clone(),
                scenario: index,
                probability,
                units: scenario.units,
                unit_price: scenario.unit_price,
                revenue,
                fixed_cost: alt.input.fixed_cost,
                expected_value: result.expected_value,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::defaults::ParameterDefaults;
    use crate::collect::ParameterCollector;
    use crate::session::{run_pass, EvaluateRequest};

    fn defaults_report() -> PassReport {
        let collector = ParameterCollector::new(ParameterDefaults::default());
        run_pass(&collector, &EvaluateRequest::defaults())
    }

    #[test]
    fn test_complete_pass_yields_four_rows() {
        let rows = build_rows(&defaults_report());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].alternative, "B");
        assert_eq!(rows[0].scenario, 1);
        assert_eq!(rows[1].scenario, 2);
        assert_eq!(rows[2].alternative, "C");
        assert_eq!(rows[3].alternative, "C");
    }

    #[test]
    fn test_expected_value_repeats_per_alternative() {
        let rows = build_rows(&defaults_report());
        assert_eq!(rows[0].expected_value, 49_500_000.0);
        assert_eq!(rows[1].expected_value, 49_500_000.0);
        assert_eq!(rows[2].expected_value, 55_025_000.0);
        assert_eq!(rows[3].expected_value, 55_025_000.0);
        assert_eq!(rows[0].fixed_cost, 0.0);
        assert_eq!(rows[2].fixed_cost, 100_000.0);
    }

    #[test]
    fn test_invalid_pass_yields_zero_rows() {
        let collector = ParameterCollector::new(ParameterDefaults::default());
        let mut req = EvaluateRequest {
            use_defaults: false,
            ..EvaluateRequest::defaults()
        };
        req.alternative_b.probability_1 = 0.5;
        req.alternative_b.probability_2 = 0.49;

        let report = run_pass(&collector, &req);
        assert!(build_rows(&report).is_empty());
    }
}
