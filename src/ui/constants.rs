// Stage option tables and slider ranges - single source of truth
// Option order here is the on-screen order and the cursor index order

use crate::quiz::{Budget, Social, Step, Vibe};

pub struct ChoiceOption<T> {
    pub value: T,
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const BUDGET_OPTIONS: [ChoiceOption<Budget>; 3] = [
    ChoiceOption {
        value: Budget::Broke,
        emoji: "💸",
        label: "Broke",
        description: "Budget eats",
    },
    ChoiceOption {
        value: Budget::Moderate,
        emoji: "💳",
        label: "Moderate",
        description: "Fair price",
    },
    ChoiceOption {
        value: Budget::Balling,
        emoji: "👑",
        label: "Balling",
        description: "Sky's the limit",
    },
];

// Budget cursor starts here until a choice is made
pub const BUDGET_DEFAULT_CURSOR: usize = 1;

pub const SOCIAL_CARDS: [ChoiceOption<Social>; 3] = [
    ChoiceOption {
        value: Social::Solo,
        emoji: "🧑‍🚀",
        label: "Flying Solo",
        description: "Just me, myself & I",
    },
    ChoiceOption {
        value: Social::Date,
        emoji: "🦩",
        label: "Date Night",
        description: "Party of two",
    },
    ChoiceOption {
        value: Social::Group,
        emoji: "🎉",
        label: "Squad Up",
        description: "The more the merrier",
    },
];

pub const VIBE_OPTIONS: [ChoiceOption<Vibe>; 4] = [
    ChoiceOption {
        value: Vibe::Hangover,
        emoji: "🤕",
        label: "Hangover",
        description: "",
    },
    ChoiceOption {
        value: Vibe::Stressed,
        emoji: "😤",
        label: "Stressed",
        description: "",
    },
    ChoiceOption {
        value: Vibe::Lazy,
        emoji: "😴",
        label: "Lazy",
        description: "",
    },
    ChoiceOption {
        value: Vibe::Happy,
        emoji: "🤩",
        label: "Happy",
        description: "",
    },
];

/// Horizontal drag distance (columns) that commits a swipe
pub const SWIPE_THRESHOLD: i32 = 12;

pub const START_LABEL: &str = "FEED ME";

/// Range and keyboard step for a slider stage
pub struct SliderSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub left_icon: &'static str,
    pub right_icon: &'static str,
}

pub const HUNGER_SLIDER: SliderSpec = SliderSpec {
    min: 0,
    max: 100,
    step: 5,
    left_icon: "🐦",
    right_icon: "🦖",
};

// Healthiness and temperature stop short of the end icons
pub const HEALTHINESS_SLIDER: SliderSpec = SliderSpec {
    min: 5,
    max: 95,
    step: 5,
    left_icon: "🥗",
    right_icon: "🍔",
};

pub const TEMPERATURE_SLIDER: SliderSpec = SliderSpec {
    min: 5,
    max: 95,
    step: 5,
    left_icon: "❄️",
    right_icon: "🔥",
};

pub const SPICE_DIAL: SliderSpec = SliderSpec {
    min: 0,
    max: 5,
    step: 1,
    left_icon: "🍼",
    right_icon: "🐉",
};

pub const SPICE_LEVELS: &[&str] = &["0", "1", "2", "3", "4", "5"];

pub fn slider_spec(step: Step) -> Option<&'static SliderSpec> {
    match step {
        Step::Hunger => Some(&HUNGER_SLIDER),
        Step::Healthiness => Some(&HEALTHINESS_SLIDER),
        Step::Temperature => Some(&TEMPERATURE_SLIDER),
        Step::Spice => Some(&SPICE_DIAL),
        _ => None,
    }
}

/// Number of selectable options on a choice stage
pub fn option_count(step: Step) -> usize {
    match step {
        Step::Budget => BUDGET_OPTIONS.len(),
        Step::Vibe => VIBE_OPTIONS.len(),
        _ => 0,
    }
}

pub fn hunger_mood(value: f64) -> (&'static str, &'static str) {
    if value < 33.0 {
        ("🐦", "Just Peckish")
    } else if value < 66.0 {
        ("😋", "Pretty Hungry")
    } else {
        ("🦖", "STARVING!")
    }
}

pub fn healthiness_mood(value: f64) -> &'static str {
    if value < 30.0 {
        "Super Healthy!"
    } else if value < 50.0 {
        "Pretty Healthy"
    } else if value < 70.0 {
        "A Little Naughty"
    } else {
        "Full Naughty Mode!"
    }
}

pub fn temperature_mood(value: f64) -> &'static str {
    if value < 30.0 {
        "Ice Cold!"
    } else if value < 50.0 {
        "Cool & Fresh"
    } else if value < 70.0 {
        "Warm & Cozy"
    } else {
        "Blazing Hot!"
    }
}

pub fn spice_mood(level: u8) -> (&'static str, &'static str) {
    match level {
        0 => ("🍼", "No Spice Please"),
        1 | 2 => ("😊", "Mild"),
        3 => ("🌶️", "Medium Heat"),
        4 => ("🔥", "Spicy!"),
        _ => ("🐉", "DRAGON FIRE!"),
    }
}
