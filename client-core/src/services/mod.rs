//! Business logic layer.
//!
//! Three independent controllers: session (login/register/logout/restore),
//! directory (stream discovery reads), broadcast (the caller's own stream
//! lifecycle). Each operation returns its own `Result` - there is no shared
//! status slot, so concurrent calls cannot clobber each other's outcome.

pub mod broadcast;
pub mod directory;
pub mod session;

pub use broadcast::BroadcastService;
pub use directory::StreamDirectory;
pub use session::SessionService;

use std::time::Duration;

/// Stand-in for backend latency. Every service operation suspends here once
/// before touching any state, matching where the real network call would be.
pub(crate) async fn simulate_api_delay(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
