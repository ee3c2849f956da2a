pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::HealthStatus::ok();
        assert_eq!(h.status, "ok");
        assert_eq!(h.message, "Trip Explorer API v2");
    }
}
