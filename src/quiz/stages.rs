// Linear quiz stages, landing through results

use super::Field;
use std::fmt;

/// Number of stages that collect an answer (shown by the progress bar)
pub const QUESTION_COUNT: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Landing,
    Hunger,
    Budget,
    Healthiness,
    Temperature,
    Spice,
    Social,
    Vibe,
    Results,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Step::Landing,
        Step::Hunger,
        Step::Budget,
        Step::Healthiness,
        Step::Temperature,
        Step::Spice,
        Step::Social,
        Step::Vibe,
        Step::Results,
    ];

    pub fn index(self) -> u8 {
        match self {
            Self::Landing => 0,
            Self::Hunger => 1,
            Self::Budget => 2,
            Self::Healthiness => 3,
            Self::Temperature => 4,
            Self::Spice => 5,
            Self::Social => 6,
            Self::Vibe => 7,
            Self::Results => 8,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The following stage, `None` once the results stage is reached
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Answer field collected on this stage
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Hunger => Some(Field::Hunger),
            Self::Budget => Some(Field::Budget),
            Self::Healthiness => Some(Field::Healthiness),
            Self::Temperature => Some(Field::Temperature),
            Self::Spice => Some(Field::Spice),
            Self::Social => Some(Field::Social),
            Self::Vibe => Some(Field::Vibe),
            Self::Landing | Self::Results => None,
        }
    }

    pub fn is_question(self) -> bool {
        self.field().is_some()
    }

    /// `(current, total)` for the progress bar; hidden on landing and results
    pub fn progress(self) -> Option<(u8, u8)> {
        self.is_question().then(|| (self.index(), QUESTION_COUNT))
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "What Should I Eat Now?",
            Self::Hunger => "How hungry are you?",
            Self::Budget => "What's the budget?",
            Self::Healthiness => "Healthy or Naughty?",
            Self::Temperature => "Hot or Cold?",
            Self::Spice => "How spicy?",
            Self::Social => "Who's eating?",
            Self::Vibe => "What's your vibe?",
            Self::Results => "You should eat...",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Landing => "Let's end your decision fatigue",
            Self::Hunger => "Drag the slider up!",
            Self::Budget => "Pick your price range",
            Self::Healthiness => "Drag the rope!",
            Self::Temperature => "What temperature sounds good?",
            Self::Spice => "Turn the heat dial!",
            Self::Social => "Swipe right to select, left to skip",
            Self::Vibe => "Pop the bubble that fits!",
            Self::Results => "Analyzing your cravings",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "landing",
            Self::Hunger => "hunger",
            Self::Budget => "budget",
            Self::Healthiness => "healthiness",
            Self::Temperature => "temperature",
            Self::Spice => "spice",
            Self::Social => "social",
            Self::Vibe => "vibe",
            Self::Results => "results",
        };
        write!(f, "{} ({})", name, self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.index() as usize, i);
            assert_eq!(Step::from_index(i as u8), Some(*step));
        }
        assert_eq!(Step::from_index(9), None);
    }

    #[test]
    fn test_next_stops_at_results() {
        assert_eq!(Step::Landing.next(), Some(Step::Hunger));
        assert_eq!(Step::Vibe.next(), Some(Step::Results));
        assert_eq!(Step::Results.next(), None);
    }

    #[test]
    fn test_progress_only_on_questions() {
        assert_eq!(Step::Landing.progress(), None);
        assert_eq!(Step::Hunger.progress(), Some((1, 7)));
        assert_eq!(Step::Vibe.progress(), Some((7, 7)));
        assert_eq!(Step::Results.progress(), None);
    }

    #[test]
    fn test_every_question_has_distinct_field() {
        let fields: Vec<Field> = Step::ALL.iter().filter_map(|s| s.field()).collect();
        assert_eq!(fields.len(), QUESTION_COUNT as usize);
        for (i, f) in fields.iter().enumerate() {
            assert!(!fields[i + 1..].contains(f), "duplicate field {:?}", f);
        }
    }
}
