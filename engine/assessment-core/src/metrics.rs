use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};

lazy_static! {
    // Paper assembly
    pub static ref PAPERS_ASSEMBLED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "papers_assembled_total",
        "Total number of diagnostic papers assembled",
        &["supply"]
    )
    .unwrap();

    pub static ref PAPER_SUPPLY_WARNINGS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "paper_supply_warnings_total",
        "Total number of under-supplied difficulty buckets at assembly",
        &["difficulty"]
    )
    .unwrap();

    // Adaptive practice
    pub static ref PRACTICE_QUESTIONS_SERVED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "practice_questions_served_total",
        "Total number of adaptive practice questions served",
        &["difficulty"]
    )
    .unwrap();

    pub static ref PRACTICE_TRANSITIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "practice_transitions_total",
        "Total number of adaptive difficulty transitions",
        &["direction"]
    )
    .unwrap();

    pub static ref PRACTICE_POOL_EXHAUSTED_TOTAL: IntCounter = register_int_counter!(
        "practice_pool_exhausted_total",
        "Total number of next-question picks that found no candidate"
    )
    .unwrap();

    // Scoring
    pub static ref SESSIONS_SCORED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "sessions_scored_total",
        "Total number of sessions scored into weakness reports",
        &["mode"]
    )
    .unwrap();
}

/// Renders all metrics in Prometheus text format
pub fn render_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(format!("Failed to convert metrics to UTF-8: {}", e)))
}
