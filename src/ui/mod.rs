// Terminal UI using Ratatui

pub mod components;
pub mod constants;
pub mod events;
pub mod screens;
pub mod state;
pub mod widgets;

pub use events::{SharedSource, run_ui};
pub use state::AppState;
