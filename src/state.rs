use crate::collect::defaults::ParameterDefaults;
use crate::collect::ParameterCollector;
use crate::config::AppConfig;
use crate::session::{run_pass, EvaluateRequest, PassReport};
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

// ── Messages OUT to live listeners ──

#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type")]
pub enum WsMessage {
    #[serde(rename = "evaluation")]
    Evaluation { snapshot: EvalSnapshot },

    #[serde(rename = "validation_warning")]
    ValidationWarning {
        label: String,
        probability_1: f64,
        probability_2: f64,
        message: String,
    },
}

// ── Currently-displayed values (watch channel, wholly replaced per pass) ──

#[derive(Debug, Clone, serde::Serialize)]
pub struct EvalSnapshot {
    pub report: PassReport,
    pub updated_at: String,
}

impl Default for EvalSnapshot {
    fn default() -> Self {
        // Startup view is the defaults-mode pass, same as the form's
        // initial render.
        let collector = ParameterCollector::new(ParameterDefaults::default());
        Self {
            report: run_pass(&collector, &EvaluateRequest::defaults()),
            updated_at: String::new(),
        }
    }
}

// ── Performance Counters (lock-free) ──

pub struct PerfCounters {
    pub passes_completed: AtomicU64,
    pub validations_rejected: AtomicU64,
    pub csv_exports: AtomicU64,
    pub xlsx_exports: AtomicU64,
    pub ws_messages_sent: AtomicU64,
}

impl PerfCounters {
    pub fn new() -> Self {
        Self {
            passes_completed: AtomicU64::new(0),
            validations_rejected: AtomicU64::new(0),
            csv_exports: AtomicU64::new(0),
            xlsx_exports: AtomicU64::new(0),
            ws_messages_sent: AtomicU64::new(0),
        }
    }
}

// ── Application shared state (channels, not locks) ──

pub struct AppState {
    pub config: AppConfig,
    pub collector: ParameterCollector,

    // Pass -> Dashboard: latest snapshot (watch = single producer, multi consumer)
    pub snapshot_tx: watch::Sender<EvalSnapshot>,
    pub snapshot_rx: watch::Receiver<EvalSnapshot>,

    // Pass -> Dashboard: event stream (broadcast for WS clients)
    pub ws_tx: broadcast::Sender<WsMessage>,

    // Lock-free interaction counters
    pub counters: PerfCounters,
}

impl AppState {
    pub fn new(config: AppConfig, collector: ParameterCollector) -> Arc<Self> {
        let (ws_tx, _) = broadcast::channel(256);
        let (snapshot_tx, snapshot_rx) = watch::channel(EvalSnapshot::default());

        Arc::new(Self {
            config,
            collector,
            snapshot_tx,
            snapshot_rx,
            ws_tx,
            counters: PerfCounters::new(),
        })
    }

    #[inline]
    pub fn broadcast(&self, msg: WsMessage) {
        self.counters.ws_messages_sent.fetch_add(1, Ordering::Relaxed);
        let _ = self.ws_tx.send(msg);
    }

    /// Replace the displayed snapshot with a fresh pass report and
    /// notify live listeners. Rejections become warnings here; they
    /// were already kept out of the evaluator by the collector.
    pub fn publish(&self, report: PassReport) -> EvalSnapshot {
        for alt in report.alternatives.iter().filter(|a| !a.valid) {
            self.counters.validations_rejected.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                label = %alt.label,
                p1 = alt.input.probability_1,
                p2 = alt.input.probability_2,
                "probability pair rejected"
            );
            self.broadcast(WsMessage::ValidationWarning {
                label: alt.label.clone(),
                probability_1: alt.input.probability_1,
                probability_2: alt.input.probability_2,
                message: alt.warning.clone().unwrap_or_default(),
            });
        }

        if let Some(rec) = &report.recommendation {
            tracing::info!(recommendation = %rec, "pass evaluated");
        }

        let snapshot = EvalSnapshot {
            report,
            updated_at: chrono::Utc::now().to_rfc3339(),
        };
        let _ = self.snapshot_tx.send(snapshot.clone());
        self.broadcast(WsMessage::Evaluation {
            snapshot: snapshot.clone(),
        });
        self.counters.passes_completed.fetch_add(1, Ordering::Relaxed);

        snapshot
    }
}
