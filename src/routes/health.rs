//! Liveness probe.

pub async fn live() -> &'static str {
    "OK"
}
