use crate::quiz::Step;
use crate::ui::components::render_button;
use crate::ui::constants::START_LABEL;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

// Food icons that drift across the landing screen
const FLOATING_FOOD: &[&str] = &["🍕", "🍔", "🌮", "🍜", "🍣", "🥗", "🍩", "🍛"];

pub struct LandingScreen;

impl LandingScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Floating food
                Constraint::Length(1),
                Constraint::Length(1), // Title
                Constraint::Length(1), // Tagline
                Constraint::Length(1),
                Constraint::Length(1), // Start button
                Constraint::Fill(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Self::food_line(state.tick)).alignment(Alignment::Center),
            chunks[1],
        );

        let title = Line::from(vec![
            Span::styled(
                "What Should I ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Eat Now?",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[3]);

        frame.render_widget(
            Paragraph::new(format!("{} 🎮", Step::Landing.prompt()))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[4],
        );

        render_button(START_LABEL, "Enter", true, chunks[6], frame.buffer_mut());
    }

    /// Icons rotate one position every ~half second
    fn food_line(tick: u64) -> String {
        let offset = (tick / 30) as usize;
        (0..FLOATING_FOOD.len())
            .map(|i| FLOATING_FOOD[(i + offset) % FLOATING_FOOD.len()])
            .collect::<Vec<_>>()
            .join("  ")
    }
}
