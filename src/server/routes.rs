use crate::collect::defaults::{LABEL_B, LABEL_C};
use crate::config::AppConfig;
use crate::emv::AlternativeInput;
use crate::export;
use crate::session::{run_pass, EvaluateRequest};
use crate::state::{AppState, EvalSnapshot};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use std::sync::Arc;

/// GET /api/defaults -- built-in parameter set plus input surface limits
pub async fn get_defaults(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "labels": [LABEL_B, LABEL_C],
        "defaults": state.collector.defaults(),
        "limits": {
            "max_units": state.config.max_units,
            "max_unit_price": state.config.max_unit_price,
            "max_fixed_cost": state.config.max_fixed_cost,
        },
    }))
}

/// GET /api/state -- currently-displayed snapshot (watch channel, no lock)
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<EvalSnapshot> {
    let snapshot = state.snapshot_rx.borrow().clone();
    Json(snapshot)
}

/// POST /api/evaluate -- one full collect/evaluate pass
pub async fn post_evaluate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    if let Err(msg) = check_ranges(&req, &state.config) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": msg })),
        )
            .into_response();
    }

    let report = run_pass(&state.collector, &req);
    let snapshot = state.publish(report);
    Json(snapshot).into_response()
}

/// POST /api/export/csv -- run the pass and download delimited text
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    export_file(state, req, ExportKind::Csv)
}

/// POST /api/export/xlsx -- run the pass and download a workbook
pub async fn export_xlsx(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EvaluateRequest>,
) -> Response {
    export_file(state, req, ExportKind::Xlsx)
}

/// GET /api/counters -- interaction counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    use portable_atomic::Ordering::Relaxed;
    Json(serde_json::json!({
        "passes_completed": state.counters.passes_completed.load(Relaxed),
        "validations_rejected": state.counters.validations_rejected.load(Relaxed),
        "csv_exports": state.counters.csv_exports.load(Relaxed),
        "xlsx_exports": state.counters.xlsx_exports.load(Relaxed),
        "ws_messages_sent": state.counters.ws_messages_sent.load(Relaxed),
    }))
}

enum ExportKind {
    Csv,
    Xlsx,
}

fn export_file(state: Arc<AppState>, req: EvaluateRequest, kind: ExportKind) -> Response {
    use portable_atomic::Ordering::Relaxed;

    if let Err(msg) = check_ranges(&req, &state.config) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": msg })),
        )
            .into_response();
    }

    let report = run_pass(&state.collector, &req);
    let rows = export::build_rows(&report);
    if rows.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "error": "both alternatives must have probabilities summing to 1.0 before export"
            })),
        )
            .into_response();
    }

    let (bytes, content_type, filename) = match kind {
        ExportKind::Csv => (
            export::csv::to_csv(&rows),
            "text/csv; charset=utf-8",
            "emv_export.csv",
        ),
        ExportKind::Xlsx => (
            export::xlsx::to_xlsx(&rows),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "emv_export.xlsx",
        ),
    };

    match bytes {
        Ok(body) => {
            match kind {
                ExportKind::Csv => state.counters.csv_exports.fetch_add(1, Relaxed),
                ExportKind::Xlsx => state.counters.xlsx_exports.fetch_add(1, Relaxed),
            };
            tracing::info!(file = filename, rows = rows.len(), "export written");
            (
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("export error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Range enforcement lives at the input surface; the core only owns the
/// probability-sum invariant. Rejections name the offending field.
pub(crate) fn check_ranges(req: &EvaluateRequest, cfg: &AppConfig) -> Result<(), String> {
    if req.use_defaults {
        return Ok(());
    }
    check_alternative(LABEL_B, &req.alternative_b, cfg)?;
    check_alternative(LABEL_C, &req.alternative_c, cfg)
}

fn check_alternative(label: &str, input: &AlternativeInput, cfg: &AppConfig) -> Result<(), String> {
    for (index, scenario) in [(1, input.scenario_1), (2, input.scenario_2)] {
        if scenario.units > cfg.max_units {
            return Err(format!(
                "alternative {label} scenario {index}: units above {}",
                cfg.max_units
            ));
        }
        if !(0.0..=cfg.max_unit_price).contains(&scenario.unit_price) {
            return Err(format!(
                "alternative {label} scenario {index}: unit price outside [0, {}]",
                cfg.max_unit_price
            ));
        }
    }
    for (index, p) in [(1, input.probability_1), (2, input.probability_2)] {
        if !(0.0..=1.0).contains(&p) {
            return Err(format!(
                "alternative {label} scenario {index}: probability outside [0, 1]"
            ));
        }
    }
    if !(0.0..=cfg.max_fixed_cost).contains(&input.fixed_cost) {
        return Err(format!(
            "alternative {label}: fixed cost outside [0, {}]",
            cfg.max_fixed_cost
        ));
    }
    Ok(())
}
