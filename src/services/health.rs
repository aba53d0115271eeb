use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::cache::UserCache;
use crate::store::UserStore;

/// Outcome of the readiness gate. Any failure keeps the instance out of the
/// load balancer; the first failing dependency is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessStatus {
    Ready,
    StoreDown,
    CacheDown,
}

/// Per-dependency slice of the diagnostic report.
#[derive(Debug, Serialize)]
pub struct DependencyReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f64>,
}

/// Diagnostic report for operators. Always served, regardless of how
/// degraded the dependencies are.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub app: &'static str,
    pub database: DependencyReport,
    pub redis: DependencyReport,
}

/// Probes the store and (when enabled) the cache. Readiness fails fast and
/// loud; health records failures and answers anyway.
#[derive(Clone)]
pub struct HealthService {
    store: Arc<dyn UserStore>,
    cache: Option<Arc<dyn UserCache>>,
}

impl HealthService {
    pub fn new(store: Arc<dyn UserStore>, cache: Option<Arc<dyn UserCache>>) -> Self {
        Self { store, cache }
    }

    pub async fn readiness(&self) -> ReadinessStatus {
        if self.store.ping().await.is_err() {
            return ReadinessStatus::StoreDown;
        }

        if let Some(cache) = &self.cache {
            if cache.ping().await.is_err() {
                return ReadinessStatus::CacheDown;
            }
        }

        ReadinessStatus::Ready
    }

    pub async fn health(&self) -> HealthReport {
        let started = Instant::now();
        let database = match self.store.ping().await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!("database health check failed: {}", e);
                "down"
            }
        };
        let database = DependencyReport {
            status: database,
            latency_ms: Some(elapsed_ms(started)),
        };

        let redis = match &self.cache {
            None => DependencyReport {
                status: "disabled",
                latency_ms: None,
            },
            Some(cache) => {
                let started = Instant::now();
                let status = match cache.ping().await {
                    Ok(()) => "ok",
                    Err(e) => {
                        tracing::warn!("cache health check failed: {}", e);
                        "down"
                    }
                };
                DependencyReport {
                    status,
                    latency_ms: Some(elapsed_ms(started)),
                }
            }
        };

        HealthReport {
            app: "up",
            database,
            redis,
        }
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
