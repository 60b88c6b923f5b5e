/// Prism Client Core
///
/// Session, discovery, and broadcast logic for the Prism live-streaming app,
/// decoupled from the presentation layer. Backend calls are simulated over
/// in-memory repositories; the signed-in identity is persisted through the
/// `kv-store` crate.
///
/// ## Modules
///
/// - `config`: Settings loaded from the environment
/// - `error`: Error taxonomy (`AppError`)
/// - `fixtures`: Seed data for the simulated backend
/// - `models`: Users, streams, categories, request types
/// - `repository`: Repository traits and in-memory implementations
/// - `services`: Session store, stream directory, broadcast controller
/// - `validators`: Input validation
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod repository;
pub mod services;
pub mod validators;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use services::{BroadcastService, SessionService, StreamDirectory};
