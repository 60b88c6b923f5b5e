//! Repositories backing the client core.
//!
//! Each aggregate gets a trait seam so the services never see where the data
//! lives; the in-memory implementations stand in for the real backend without
//! any ambient global state. A networked implementation slots in behind the
//! same traits.

pub mod streams;
pub mod users;

pub use streams::{InMemoryStreamRepository, StreamRepository};
pub use users::{InMemoryUserRepository, UserRepository};
