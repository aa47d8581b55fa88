use std::fmt;

/// Which alternative a pass recommends. Derived from the two expected
/// values on every pass, never stored.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Recommendation {
    pub label: String,
    pub expected_value: f64,
    pub runner_up_label: String,
    pub runner_up_expected_value: f64,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "choose alternative {} (EMV {:.2} vs {:.2})",
            self.label, self.expected_value, self.runner_up_expected_value
        )
    }
}

/// Decision rule: strictly greater EMV wins. A tie keeps the first
/// alternative -- the one without the upfront cost.
#[inline]
pub fn recommend(label_b: &str, ev_b: f64, label_c: &str, ev_c: f64) -> Recommendation {
    if ev_c > ev_b {
        Recommendation {
            label: label_c.to_string(),
            expected_value: ev_c,
            runner_up_label: label_b.to_string(),
            runner_up_expected_value: ev_b,
        }
    } else {
        Recommendation {
            label: label_b.to_string(),
            expected_value: ev_b,
            runner_up_label: label_c.to_string(),
            runner_up_expected_value: ev_c,
        }
    }
}
