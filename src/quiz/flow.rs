// Quiz flow controller: step index plus collected answers

use super::{Answer, Answers, CompleteAnswers, Field, Step};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("quiz already started (currently at {0})")]
    AlreadyStarted(Step),

    #[error("quiz has not been started")]
    NotStarted,

    #[error("'{0}' must be answered before moving on")]
    MissingAnswer(Field),
}

/// Owns the current stage and the answers gathered so far.
///
/// Transitions: landing -> hunger via [`start`](Self::start), one stage at a time
/// via [`advance`](Self::advance) up to results, and back to landing via
/// [`restart`](Self::restart).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizFlow {
    step: Step,
    answers: Answers,
}

impl QuizFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn is_terminal(&self) -> bool {
        self.step == Step::Results
    }

    pub fn complete_answers(&self) -> Option<CompleteAnswers> {
        self.answers.complete()
    }

    pub fn start(&mut self) -> Result<(), FlowError> {
        if self.step != Step::Landing {
            return Err(FlowError::AlreadyStarted(self.step));
        }
        self.step = Step::Hunger;
        debug!(step = %self.step, "quiz started");
        Ok(())
    }

    /// Whether [`advance`](Self::advance) would move to the next stage
    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok() && !self.is_terminal()
    }

    /// Move to the next stage. A no-op on the results stage.
    pub fn advance(&mut self) -> Result<(), FlowError> {
        self.check_advance()?;

        if let Some(next) = self.step.next() {
            self.step = next;
            debug!(step = %self.step, "advanced");
        }
        Ok(())
    }

    fn check_advance(&self) -> Result<(), FlowError> {
        if self.step == Step::Landing {
            return Err(FlowError::NotStarted);
        }
        match self.step.field() {
            Some(field) if field.requires_choice() && !self.answers.is_set(field) => {
                Err(FlowError::MissingAnswer(field))
            }
            _ => Ok(()),
        }
    }

    /// Overwrite one field. Slider values are clamped into their range and
    /// non-finite values are dropped.
    pub fn set_answer(&mut self, answer: Answer) {
        match answer.normalized() {
            Some(value) => {
                if value != answer {
                    debug!(field = %answer.field(), "clamped {:?} to {:?}", answer, value);
                }
                self.answers.set(value);
            }
            None => warn!(field = %answer.field(), "ignoring non-finite answer"),
        }
    }

    /// Back to the landing stage with default answers
    pub fn restart(&mut self) {
        debug!(from = %self.step, "restart");
        *self = Self::default();
    }
}
