use crate::errors::{CalcError, CalcResult};

/// Runtime configuration. Everything here shapes the input surface or
/// the server; none of it reaches the evaluator. The probability-sum
/// tolerance is deliberately absent: it is a fixed constant, not a knob.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// Usability cap on per-scenario unit counts.
    pub max_units: u64,
    /// Usability cap on unit prices, in dollars.
    pub max_unit_price: f64,
    /// Usability cap on the one-time fixed cost, in dollars.
    pub max_fixed_cost: f64,
    /// Directory the static form is served from.
    pub dashboard_dir: String,
}

impl AppConfig {
    pub fn from_env() -> CalcResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| CalcError::Config(format!("SERVER_PORT: {e}")))?;

        let max_units = env_var_or("MAX_UNITS", "1000000")
            .parse::<u64>()
            .map_err(|e| CalcError::Config(format!("MAX_UNITS: {e}")))?;

        let max_unit_price = env_var_or("MAX_UNIT_PRICE", "10000.0")
            .parse::<f64>()
            .map_err(|e| CalcError::Config(format!("MAX_UNIT_PRICE: {e}")))?;

        let max_fixed_cost = env_var_or("MAX_FIXED_COST", "1000000.0")
            .parse::<f64>()
            .map_err(|e| CalcError::Config(format!("MAX_FIXED_COST: {e}")))?;

        Ok(Self {
            server_port,
            max_units,
            max_unit_price,
            max_fixed_cost,
            dashboard_dir: env_var_or("DASHBOARD_DIR", "dashboard"),
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
