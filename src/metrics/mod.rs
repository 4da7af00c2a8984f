//! Metrics collection for observability

use prometheus::{
    Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry,
    register_counter_vec_with_registry, register_counter_with_registry,
    register_histogram_with_registry,
};
use std::sync::Arc;
use once_cell::sync::Lazy;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Relay endpoint
    pub generate_requests: CounterVec,

    // Context resolution
    pub context_resolutions: CounterVec,
    pub store_errors: CounterVec,

    // Inference gateway
    pub inference_duration: Histogram,
    pub inference_failures: Counter,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let generate_requests = register_counter_vec_with_registry!(
            Opts::new("relay_generate_requests_total", "Total /generate requests"),
            &["outcome"],
            registry
        )?;

        let context_resolutions = register_counter_vec_with_registry!(
            Opts::new(
                "relay_context_resolutions_total",
                "Context lookups by the path that produced them"
            ),
            &["source"],
            registry
        )?;

        let store_errors = register_counter_vec_with_registry!(
            Opts::new("relay_store_errors_total", "Graph store failures"),
            &["operation"],
            registry
        )?;

        let inference_duration = register_histogram_with_registry!(
            HistogramOpts::new(
                "relay_inference_duration_seconds",
                "Inference server call duration in seconds"
            )
            .buckets(vec![0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
            registry
        )?;

        let inference_failures = register_counter_with_registry!(
            Opts::new("relay_inference_failures_total", "Failed inference calls"),
            registry
        )?;

        Ok(Self {
            registry,
            generate_requests,
            context_resolutions,
            store_errors,
            inference_duration,
            inference_failures,
        })
    }

    /// Record a finished /generate request
    pub fn record_generate(&self, outcome: &str) {
        self.generate_requests.with_label_values(&[outcome]).inc();
    }

    /// Record which lookup path produced (or failed to produce) context
    pub fn record_context(&self, source: &str) {
        self.context_resolutions.with_label_values(&[source]).inc();
    }

    /// Record a swallowed graph store failure
    pub fn record_store_error(&self, operation: &str) {
        self.store_errors.with_label_values(&[operation]).inc();
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_initialization() {
        let metrics = Metrics::new();
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_export_includes_recorded_series() {
        let metrics = Metrics::new().unwrap();
        metrics.record_generate("success");
        metrics.record_context("trigger");
        metrics.record_store_error("lookup");

        let text = metrics.export_prometheus();
        assert!(text.contains("relay_generate_requests_total{outcome=\"success\"} 1"));
        assert!(text.contains("relay_context_resolutions_total{source=\"trigger\"} 1"));
        assert!(text.contains("relay_store_errors_total{operation=\"lookup\"} 1"));
    }
}
