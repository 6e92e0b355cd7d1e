use crate::error::AppError;
use axum::http::HeaderMap;
use dashmap::DashMap;
use std::time::Instant;

#[derive(Clone)]
struct Bucket {
    capacity: u32,
    tokens: f64,
    refill_rate: f64,
    last_update: Instant,
}

impl Bucket {
    fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            tokens: capacity as f64,
            refill_rate,
            last_update: Instant::now(),
        }
    }

    fn allow_request(&mut self, tokens: u32) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = f64::min(
            self.capacity as f64,
            self.tokens + elapsed * self.refill_rate,
        );
        self.last_update = now;

        if self.tokens >= tokens as f64 {
            self.tokens -= tokens as f64;
            true
        } else {
            false
        }
    }

    /// True once refill alone would bring the bucket back to capacity
    fn is_replenished(&self, now: Instant) -> bool {
        let elapsed = now.duration_since(self.last_update).as_secs_f64();
        self.tokens + elapsed * self.refill_rate >= self.capacity as f64
    }
}

/// Per-client token buckets, keyed e.g. "client:endpoint"
///
/// At most `max_clients` buckets are tracked. Replenished buckets are evicted
/// to make room; when none can be, unseen keys are rejected.
pub struct RateLimiter {
    buckets: DashMap<String, Bucket>,
    capacity: u32,
    refill_rate: f64,
    max_clients: usize,
}

impl RateLimiter {
    pub fn new(capacity: u32, refill_rate: f64, max_clients: usize) -> Self {
        Self {
            buckets: DashMap::new(),
            capacity,
            refill_rate,
            max_clients,
        }
    }

    pub fn check_rate_limit(&self, key: &str) -> Result<(), AppError> {
        if !self.buckets.contains_key(key) && !self.make_room() {
            return Err(AppError::RateLimitExceeded(
                "Too many active clients".to_string(),
            ));
        }

        let mut bucket = self
            .buckets
            .entry(key.to_string())
            .or_insert_with(|| Bucket::new(self.capacity, self.refill_rate));

        if bucket.allow_request(1) {
            Ok(())
        } else {
            Err(AppError::RateLimitExceeded(format!("Rate limit for {}", key)))
        }
    }

    /// Evict replenished buckets if the map is full. No entry guard may be
    /// held by the caller.
    fn make_room(&self) -> bool {
        if self.buckets.len() < self.max_clients {
            return true;
        }
        let now = Instant::now();
        self.buckets.retain(|_, bucket| !bucket.is_replenished(now));
        let remaining = self.buckets.len();
        if remaining >= self.max_clients {
            tracing::warn!(tracked = remaining, "rate limiter full, rejecting new client");
            return false;
        }
        tracing::debug!(tracked = remaining, "evicted idle rate limit buckets");
        true
    }
}

/// Identify the caller: API key, then first forwarded address, then a shared
/// anonymous bucket.
pub fn client_key(headers: &HeaderMap) -> String {
    if let Some(key) = header_value(headers, "x-api-key") {
        return format!("key:{}", key);
    }
    if let Some(forwarded) = header_value(headers, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return format!("ip:{}", first);
        }
    }
    "anonymous".to_string()
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
