use std::net::SocketAddr;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: interval sets solved. Labels: mode, status.
pub const ALLOCATIONS_TOTAL: &str = "roomsweep_allocations_total";

/// Histogram: time spent in one allocator call, in seconds. Labels: mode.
pub const ALLOCATION_DURATION_SECONDS: &str = "roomsweep_allocation_duration_seconds";

// ── Workload shape ──────────────────────────────────────────────

/// Histogram: events per solved set.
pub const SET_EVENTS: &str = "roomsweep_set_events";

/// Histogram: rooms required per solved set.
pub const SET_ROOMS: &str = "roomsweep_set_rooms";

/// Gauge: sets currently being solved.
pub const SETS_IN_FLIGHT: &str = "roomsweep_sets_in_flight";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) -> Result<(), metrics_exporter_prometheus::BuildError> {
    let Some(port) = port else { return Ok(()) };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
    Ok(())
}
