// Quiz model: stages, answers and the flow controller (independent of UI)

pub mod flow;
pub mod stages;
pub mod types;

pub use flow::{FlowError, QuizFlow};
pub use stages::{QUESTION_COUNT, Step};
pub use types::*;
