// Application state management

use crate::quiz::{Answer, CompleteAnswers, Field, QuizFlow, Step};
use crate::recommend::{Lookup, Recommendation};
use crate::ui::constants::{
    BUDGET_DEFAULT_CURSOR, BUDGET_OPTIONS, SOCIAL_CARDS, SWIPE_THRESHOLD, VIBE_OPTIONS,
    option_count, slider_spec,
};
use crate::ui::widgets::Slider;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsState {
    /// No lookup issued for the current run yet
    #[default]
    Idle,
    Loading,
    Ready(Box<Recommendation>),
}

/// Endless card deck for the social stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwipeDeck {
    top: usize,
}

impl SwipeDeck {
    pub fn top(&self) -> usize {
        self.top
    }

    /// Index of the card `depth` positions below the top, wrapping around
    pub fn card_at(&self, depth: usize) -> usize {
        (self.top + depth) % SOCIAL_CARDS.len()
    }

    pub fn advance(&mut self) {
        self.top = self.card_at(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// An active pointer drag, in terminal columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub origin: u16,
    pub current: u16,
}

impl Gesture {
    pub fn offset(&self) -> i32 {
        self.current as i32 - self.origin as i32
    }

    pub fn swipe(&self) -> Option<SwipeDirection> {
        match self.offset() {
            d if d > SWIPE_THRESHOLD => Some(SwipeDirection::Right),
            d if d < -SWIPE_THRESHOLD => Some(SwipeDirection::Left),
            _ => None,
        }
    }
}

/// Screen regions recorded during the last draw, used for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub slider_bar: Option<Rect>,
    pub swipe_card: Option<Rect>,
    pub options: Vec<Rect>,
}

impl HitAreas {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub flow: QuizFlow,
    /// Highlighted option on the budget and vibe stages
    pub cursor: usize,
    pub deck: SwipeDeck,
    pub drag: Option<Gesture>,
    pub results: ResultsState,
    /// Bumped on restart so late lookups from an earlier run are dropped
    pub generation: u64,
    /// Frame counter for the loading animation
    pub tick: u64,
    pub hit: HitAreas,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.flow.step()
    }

    pub fn start(&mut self) {
        match self.flow.start() {
            Ok(()) => self.enter_stage(),
            Err(e) => debug!("start ignored: {}", e),
        }
    }

    /// Enter/Next: advance when the current stage has its answer.
    /// Choices are committed only by `pick`, a click or a swipe.
    pub fn next(&mut self) {
        let before = self.step();
        match self.flow.advance() {
            Ok(()) if self.step() != before => self.enter_stage(),
            Ok(()) => {}
            Err(e) => debug!("advance ignored: {}", e),
        }
    }

    pub fn restart(&mut self) {
        self.flow.restart();
        self.results = ResultsState::Idle;
        self.generation += 1;
        self.enter_stage();
    }

    fn enter_stage(&mut self) {
        self.drag = None;
        self.hit.clear();
        let answers = self.flow.answers();
        self.cursor = match self.step() {
            Step::Budget => answers
                .budget
                .and_then(|b| BUDGET_OPTIONS.iter().position(|o| o.value == b))
                .unwrap_or(BUDGET_DEFAULT_CURSOR),
            Step::Vibe => answers
                .vibe
                .and_then(|v| VIBE_OPTIONS.iter().position(|o| o.value == v))
                .unwrap_or(0),
            _ => 0,
        };
        if self.step() == Step::Social {
            self.deck = SwipeDeck::default();
        }
    }

    // ---- choice stages ----

    pub fn move_cursor(&mut self, forward: bool) {
        let count = option_count(self.step());
        if count == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    /// Commit option `index` of the current choice stage
    pub fn pick(&mut self, index: usize) {
        let answer = match self.step() {
            Step::Budget => BUDGET_OPTIONS.get(index).map(|o| Answer::Budget(o.value)),
            Step::Vibe => VIBE_OPTIONS.get(index).map(|o| Answer::Vibe(o.value)),
            _ => None,
        };
        if let Some(answer) = answer {
            self.cursor = index;
            self.flow.set_answer(answer);
        }
    }

    /// Index of the committed option on the current choice stage
    pub fn chosen(&self) -> Option<usize> {
        let answers = self.flow.answers();
        match self.step() {
            Step::Budget => answers
                .budget
                .and_then(|b| BUDGET_OPTIONS.iter().position(|o| o.value == b)),
            Step::Vibe => answers
                .vibe
                .and_then(|v| VIBE_OPTIONS.iter().position(|o| o.value == v)),
            _ => None,
        }
    }

    // ---- social deck ----

    /// Right selects the top card, left skips it; both reveal the next card
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if self.step() != Step::Social {
            return;
        }
        if direction == SwipeDirection::Right {
            let card = &SOCIAL_CARDS[self.deck.top()];
            self.flow.set_answer(Answer::Social(card.value));
        }
        self.deck.advance();
    }

    // ---- sliders ----

    fn slider(&self) -> Option<Slider> {
        let step = self.step();
        let spec = slider_spec(step)?;
        let value = slider_answer_value(self.flow.answers().get(step.field()?)?);
        Some(Slider::from_spec(step.title(), spec).value(value))
    }

    /// Keyboard adjustment, committed immediately
    pub fn adjust_slider(&mut self, key: KeyCode) -> bool {
        let Some(mut slider) = self.slider() else {
            return false;
        };
        if !slider.handle_key(key) {
            return false;
        }
        self.commit_slider(slider.get_value());
        true
    }

    /// Spice dial buttons 0-5
    pub fn set_spice(&mut self, level: u8) {
        if self.step() == Step::Spice {
            self.flow.set_answer(Answer::Spice(level));
        }
    }

    fn commit_slider(&mut self, value: u32) {
        if let Some(answer) = self.step().field().and_then(|f| slider_answer(f, value)) {
            self.flow.set_answer(answer);
        }
    }

    /// Value to display: the drag preview while dragging, else the answer
    pub fn slider_value(&self) -> Option<u32> {
        let slider = self.slider()?;
        match (self.drag, self.hit.slider_bar) {
            (Some(gesture), Some(bar)) => Some(slider.value_at(bar, gesture.current)),
            _ => Some(slider.get_value()),
        }
    }

    // ---- pointer drags ----

    /// Pointer pressed; starts a drag if it lands on the slider bar or card
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        let target = match self.step() {
            Step::Social => self.hit.swipe_card,
            _ => self.hit.slider_bar,
        };
        if target.is_some_and(|area| contains(area, column, row)) {
            self.drag = Some(Gesture {
                origin: column,
                current: column,
            });
        }
    }

    pub fn update_drag(&mut self, column: u16) {
        if let Some(gesture) = self.drag.as_mut() {
            gesture.current = column;
        }
    }

    /// Pointer released: commit the projected slider value or the swipe
    pub fn end_drag(&mut self) {
        let Some(gesture) = self.drag.take() else {
            return;
        };
        if self.step() == Step::Social {
            match gesture.swipe() {
                Some(direction) => self.swipe(direction),
                None => debug!(offset = gesture.offset(), "swipe too short, snapping back"),
            }
            return;
        }
        if let (Some(slider), Some(bar)) = (self.slider(), self.hit.slider_bar) {
            self.commit_slider(slider.value_at(bar, gesture.current));
        }
    }

    /// Mouse click on a choice option
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some(index) = self
            .hit
            .options
            .iter()
            .position(|area| contains(*area, column, row))
        {
            match self.step() {
                Step::Spice => self.set_spice(index as u8),
                _ => self.pick(index),
            }
        }
    }

    // ---- results ----

    /// Mark the lookup as in flight; returns what to send, once per run
    pub fn begin_lookup(&mut self) -> Option<(u64, CompleteAnswers)> {
        if !self.flow.is_terminal() || self.results != ResultsState::Idle {
            return None;
        }
        let answers = self.flow.complete_answers()?;
        self.results = ResultsState::Loading;
        info!(generation = self.generation, "starting recommendation lookup");
        Some((self.generation, answers))
    }

    /// Accept a finished lookup; stale ones from an earlier run are ignored
    pub fn finish_lookup(&mut self, lookup: Lookup) -> bool {
        if lookup.generation != self.generation || self.results != ResultsState::Loading {
            debug!(
                generation = lookup.generation,
                current = self.generation,
                "dropping stale lookup"
            );
            return false;
        }
        self.results = ResultsState::Ready(Box::new(lookup.recommendation));
        true
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.results {
            ResultsState::Ready(rec) => Some(rec),
            _ => None,
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn slider_answer_value(answer: Answer) -> u32 {
    match answer {
        Answer::Hunger(v) | Answer::Healthiness(v) | Answer::Temperature(v) => v.round() as u32,
        Answer::Spice(v) => v as u32,
        _ => 0,
    }
}

fn slider_answer(field: Field, value: u32) -> Option<Answer> {
    match field {
        Field::Hunger => Some(Answer::Hunger(value as f64)),
        Field::Healthiness => Some(Answer::Healthiness(value as f64)),
        Field::Temperature => Some(Answer::Temperature(value as f64)),
        Field::Spice => Some(Answer::Spice(value.min(u8::MAX as u32) as u8)),
        _ => None,
    }
}
