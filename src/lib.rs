pub mod app;
pub mod core;
pub mod field;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use core::components::{BlobBody, BodyColor, PointerBall};
pub use core::config::{SimConfig, WindowConfig};
pub use field::grid::ScalarField;
