/// HTTP boundary for the Feng Shui learning app
///
/// This module provides:
/// - `POST /validate_placement` for the room simulator
/// - `POST /submit_quiz` for the quiz page
/// - `POST /check_orientation` for the orientation mini-game
/// - `GET /health` for liveness checks
pub mod handlers;
pub mod models;
pub mod server;

pub use handlers::AppState;
pub use models::{ErrorResponse, HealthResponse, OrientationForm};
pub use server::{ApiConfig, ApiServer};
