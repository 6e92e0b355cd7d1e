use crate::config::GatewayConfig;
use crate::error::AppError;
use crate::rate_limit::RateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            rate_limiter: Arc::new(RateLimiter::new(
                config.rate_limit_capacity,
                config.rate_limit_refill_per_sec,
                config.rate_limit_max_clients,
            )),
        }
    }

    /// Charge one request against `client`'s bucket for `endpoint`
    pub fn check_rate_limit(&self, client: &str, endpoint: &str) -> Result<(), AppError> {
        self.rate_limiter
            .check_rate_limit(&format!("{}:{}", client, endpoint))
    }
}
