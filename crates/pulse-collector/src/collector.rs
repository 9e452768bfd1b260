//! Concurrent endpoint poller with a cooperative run loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Url;
use tokio::sync::RwLock;

use pulse_analysis::tracing_setup::events;
use pulse_analysis::MonitorEngine;
use pulse_core::errors::ConfigError;
use pulse_core::{MetricSample, MonitorConfig, PulseResult};

/// Issues one probe per configured endpoint per cycle, concurrently, and
/// feeds every resulting sample to the analysis engine.
///
/// All shared state lives behind a reader-writer lock: probes run as
/// parallel outstanding I/O, but append+analyze happens sequentially under
/// the write lock, and reporting takes a read-lock snapshot.
#[derive(Debug, Clone)]
pub struct Collector {
    pub(crate) config: MonitorConfig,
    /// Base URL with any trailing slash trimmed.
    pub(crate) base_url: String,
    client: reqwest::Client,
    pub(crate) engine: Arc<RwLock<MonitorEngine>>,
    pub(crate) active: Arc<AtomicBool>,
}

impl Collector {
    /// Validate the configuration and build the HTTP client.
    ///
    /// This is the only fallible step; a reachable-but-wrong base URL is not
    /// detected here and instead shows up as a persistent failure pattern in
    /// the collected samples.
    pub fn new(config: MonitorConfig) -> PulseResult<Self> {
        if config.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints.into());
        }
        for path in &config.endpoints {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidEndpoint { path: path.clone() }.into());
            }
        }
        Url::parse(&config.base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| ConfigError::ClientBuild {
                reason: err.to_string(),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let engine = Arc::new(RwLock::new(MonitorEngine::new(config.clone())));

        Ok(Self {
            config,
            base_url,
            client,
            engine,
            active: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Run the probe-then-idle loop until [`Collector::stop`] is observed.
    ///
    /// The stop flag is checked once per iteration; an in-progress cycle
    /// always completes.
    pub async fn run(&self) {
        self.active.store(true, Ordering::SeqCst);
        events::monitor_started(&self.base_url, self.config.endpoints.len());

        while self.active.load(Ordering::SeqCst) {
            self.run_cycle().await;
            tokio::time::sleep(Duration::from_secs(self.config.check_interval_secs)).await;
        }

        let total_samples = self.engine.read().await.history().len();
        events::monitor_stopped(total_samples);
    }

    /// Signal the run loop to exit after its current iteration.
    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Whether the run loop is active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Probe every endpoint concurrently, then append the samples in order.
    ///
    /// Returns only after every probe has produced exactly one sample. The
    /// appends run sequentially under the write lock, so the analysis hook
    /// never executes concurrently with itself.
    pub async fn run_cycle(&self) {
        let probes = self.config.endpoints.iter().map(|endpoint| self.probe(endpoint));
        let samples = futures::future::join_all(probes).await;

        tracing::debug!(
            event = "cycle_completed",
            samples = samples.len(),
            "probe cycle completed"
        );

        let mut engine = self.engine.write().await;
        for sample in samples {
            engine.record(sample);
        }
    }

    async fn probe(&self, endpoint: &str) -> MetricSample {
        let url = format!("{}{}", self.base_url, endpoint);
        let start = Instant::now();

        match self.client.get(&url).send().await {
            Ok(response) => {
                let elapsed = start.elapsed().as_secs_f64();
                let status = response.status().as_u16();
                events::probe_completed(endpoint, status, elapsed);
                MetricSample::new(endpoint, elapsed, status)
            }
            Err(err) => {
                let elapsed = start.elapsed().as_secs_f64();
                if err.is_timeout() {
                    events::probe_timeout(endpoint, elapsed);
                    MetricSample::timeout(endpoint, elapsed)
                } else {
                    events::probe_failed(endpoint, &err.to_string());
                    MetricSample::connection_failed(endpoint, elapsed)
                }
            }
        }
    }

    /// Discard alerts older than `days`; intended to be driven by an
    /// external scheduler.
    pub async fn prune_alerts(&self, days: i64) {
        self.engine.write().await.prune_alerts(days);
    }

    /// Shared handle to the analysis engine.
    pub fn engine(&self) -> Arc<RwLock<MonitorEngine>> {
        Arc::clone(&self.engine)
    }
}
