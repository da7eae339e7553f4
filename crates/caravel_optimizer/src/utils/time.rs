#[macro_export]
macro_rules! timed_phase {
    ($phase:literal,$block:expr) => {{
        let started = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started);

        tracing::debug!(phase = $phase, ?elapsed, "phase finished");

        result
    }};
}
