/// Expected Monetary Value computation.
///
/// EMV = r1 * p1 + r2 * p2
///
/// where:
///   r_i = units_i * unit_price_i - fixed_cost
///   p_i = scenario probability (p1 + p2 = 1, validated upstream)
///   fixed_cost = 0 for the alternative without an upfront study
///
/// All arithmetic is f64 (unit counts widen on use). Pure functions,
/// no side effects, no allocations, no internal rounding -- formatting
/// belongs to the presenter.

pub mod decision;

/// One of the two mutually exclusive future outcomes of an alternative.
/// Stack-allocated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScenarioInput {
    pub units: u64,
    pub unit_price: f64,
}

/// Full parameter set for one alternative. Stack-allocated.
///
/// The probability-sum invariant must already hold when this reaches
/// the evaluator; validation is the collector's responsibility and is
/// never repeated here.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlternativeInput {
    pub scenario_1: ScenarioInput,
    pub scenario_2: ScenarioInput,
    pub probability_1: f64,
    pub probability_2: f64,
    #[serde(default)]
    pub fixed_cost: f64,
}

/// Per-alternative evaluation output. Stack-allocated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct EvaluationResult {
    /// Net revenue if scenario 1 happens
    pub revenue_1: f64,
    /// Net revenue if scenario 2 happens
    pub revenue_2: f64,
    /// Probability-weighted sum of the two net revenues
    pub expected_value: f64,
}

/// Compute net revenues and EMV for one alternative.
///
/// This is a **pure function**: same inputs always produce same output.
#[inline]
pub fn evaluate_alternative(input: &AlternativeInput) -> EvaluationResult {
    let revenue_1 = input.scenario_1.units as f64 * input.scenario_1.unit_price - input.fixed_cost;
    let revenue_2 = input.scenario_2.units as f64 * input.scenario_2.unit_price - input.fixed_cost;
    let expected_value = revenue_1 * input.probability_1 + revenue_2 * input.probability_2;

    EvaluationResult {
        revenue_1,
        revenue_2,
        expected_value,
    }
}
