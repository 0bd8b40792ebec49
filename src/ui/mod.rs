// Module declarations
mod app;
pub mod components;
pub mod dispatch;
mod renderer;
pub mod utils;
pub mod views;
// Re-exports for external use
pub use app::{App, UIConfig, run};
