pub mod tui_mode;

pub use tui_mode::run_tui_mode;
