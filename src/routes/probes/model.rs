use serde::Serialize;

/// Flat payload for the liveness and readiness probes.
#[derive(Debug, Serialize)]
pub struct ProbeStatus {
    pub status: &'static str,
}
