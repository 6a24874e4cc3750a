// Custom widgets for the TUI

pub mod progress;
pub mod slider;

pub use progress::StageProgress;
pub use slider::Slider;
