use serde::Serialize;

/// Static liveness payload returned by the health route.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        Self { status: "ok", message: "Trip Explorer API v2" }
    }
}
