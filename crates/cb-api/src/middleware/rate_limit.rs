use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Milliseconds for one client IP to earn another answer check, 10 per second.
pub const ANSWER_REFILL_INTERVAL_MS: u64 = 100;
/// Answer checks a client IP may send in a burst.
pub const ANSWER_BURST_SIZE: u32 = 20;

/// Rate limit a router by client IP, 10 requests per second with a burst of 20.
///
/// The client IP is taken from `x-forwarded-for`, `x-real-ip` or `forwarded`
/// when present, otherwise from the peer address, so the server must be run
/// with connect info.
pub fn apply_answer_rate_limit<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = GovernorConfigBuilder::default()
        .per_millisecond(ANSWER_REFILL_INTERVAL_MS)
        .burst_size(ANSWER_BURST_SIZE)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
        .expect("Failed to build answer rate limiter configuration");

    router.layer(GovernorLayer::new(config))
}
