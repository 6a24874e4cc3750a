use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_HUNGER: f64 = 50.0;
pub const DEFAULT_HEALTHINESS: f64 = 50.0;
pub const DEFAULT_TEMPERATURE: f64 = 50.0;
pub const DEFAULT_SPICE: u8 = 2;

/// Upper bound of the hunger/healthiness/temperature scales
pub const PERCENT_MAX: f64 = 100.0;
pub const SPICE_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Broke,
    Moderate,
    Balling,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Broke, Budget::Moderate, Budget::Balling];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Social {
    Solo,
    Date,
    Group,
}

impl Social {
    pub const ALL: [Social; 3] = [Social::Solo, Social::Date, Social::Group];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Hangover,
    Stressed,
    Lazy,
    Happy,
}

impl Vibe {
    pub const ALL: [Vibe; 4] = [Vibe::Hangover, Vibe::Stressed, Vibe::Lazy, Vibe::Happy];
}

/// Names of the seven answer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hunger,
    Budget,
    Healthiness,
    Temperature,
    Spice,
    Social,
    Vibe,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Hunger,
        Field::Budget,
        Field::Healthiness,
        Field::Temperature,
        Field::Spice,
        Field::Social,
        Field::Vibe,
    ];

    /// Fields without a default; their stage blocks Next until one is picked
    pub fn requires_choice(self) -> bool {
        matches!(self, Self::Budget | Self::Social | Self::Vibe)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hunger => "hunger",
            Self::Budget => "budget",
            Self::Healthiness => "healthiness",
            Self::Temperature => "temperature",
            Self::Spice => "spice",
            Self::Social => "social",
            Self::Vibe => "vibe",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for exactly one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Hunger(f64),
    Budget(Budget),
    Healthiness(f64),
    Temperature(f64),
    Spice(u8),
    Social(Social),
    Vibe(Vibe),
}

impl Answer {
    pub fn field(&self) -> Field {
        match self {
            Self::Hunger(_) => Field::Hunger,
            Self::Budget(_) => Field::Budget,
            Self::Healthiness(_) => Field::Healthiness,
            Self::Temperature(_) => Field::Temperature,
            Self::Spice(_) => Field::Spice,
            Self::Social(_) => Field::Social,
            Self::Vibe(_) => Field::Vibe,
        }
    }

    /// Clamp into the field's domain. `None` for non-finite slider values.
    pub fn normalized(self) -> Option<Self> {
        let percent = |v: f64| v.is_finite().then(|| v.clamp(0.0, PERCENT_MAX));
        Some(match self {
            Self::Hunger(v) => Self::Hunger(percent(v)?),
            Self::Healthiness(v) => Self::Healthiness(percent(v)?),
            Self::Temperature(v) => Self::Temperature(percent(v)?),
            Self::Spice(v) => Self::Spice(v.min(SPICE_MAX)),
            other => other,
        })
    }
}

/// Partial answers collected so far
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub hunger: Option<f64>,
    pub budget: Option<Budget>,
    pub healthiness: Option<f64>,
    pub temperature: Option<f64>,
    pub spice: Option<u8>,
    pub social: Option<Social>,
    pub vibe: Option<Vibe>,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            hunger: Some(DEFAULT_HUNGER),
            budget: None,
            healthiness: Some(DEFAULT_HEALTHINESS),
            temperature: Some(DEFAULT_TEMPERATURE),
            spice: Some(DEFAULT_SPICE),
            social: None,
            vibe: None,
        }
    }
}

impl Answers {
    pub fn get(&self, field: Field) -> Option<Answer> {
        match field {
            Field::Hunger => self.hunger.map(Answer::Hunger),
            Field::Budget => self.budget.map(Answer::Budget),
            Field::Healthiness => self.healthiness.map(Answer::Healthiness),
            Field::Temperature => self.temperature.map(Answer::Temperature),
            Field::Spice => self.spice.map(Answer::Spice),
            Field::Social => self.social.map(Answer::Social),
            Field::Vibe => self.vibe.map(Answer::Vibe),
        }
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn set(&mut self, answer: Answer) {
        match answer {
            Answer::Hunger(v) => self.hunger = Some(v),
            Answer::Budget(v) => self.budget = Some(v),
            Answer::Healthiness(v) => self.healthiness = Some(v),
            Answer::Temperature(v) => self.temperature = Some(v),
            Answer::Spice(v) => self.spice = Some(v),
            Answer::Social(v) => self.social = Some(v),
            Answer::Vibe(v) => self.vibe = Some(v),
        }
    }

    /// All seven fields, or `None` while any is missing
    pub fn complete(&self) -> Option<CompleteAnswers> {
        Some(CompleteAnswers {
            hunger: self.hunger?,
            budget: self.budget?,
            healthiness: self.healthiness?,
            temperature: self.temperature?,
            spice: self.spice?,
            social: self.social?,
            vibe: self.vibe?,
        })
    }
}

/// Request body for the recommendation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompleteAnswers {
    #[serde(serialize_with = "whole_percent")]
    pub hunger: f64,
    pub budget: Budget,
    #[serde(serialize_with = "whole_percent")]
    pub healthiness: f64,
    #[serde(serialize_with = "whole_percent")]
    pub temperature: f64,
    pub spice: u8,
    pub social: Social,
    pub vibe: Vibe,
}

// The service takes integer percentages
fn whole_percent<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(value.round() as i64)
}

impl From<CompleteAnswers> for Answers {
    fn from(a: CompleteAnswers) -> Self {
        Self {
            hunger: Some(a.hunger),
            budget: Some(a.budget),
            healthiness: Some(a.healthiness),
            temperature: Some(a.temperature),
            spice: Some(a.spice),
            social: Some(a.social),
            vibe: Some(a.vibe),
        }
    }
}
