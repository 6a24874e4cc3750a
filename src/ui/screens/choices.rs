// Budget and vibe stages: one row of options

use crate::quiz::Step;
use crate::ui::components::render_radio_group;
use crate::ui::constants::{BUDGET_OPTIONS, ChoiceOption, VIBE_OPTIONS};
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct ChoiceScreen;

impl ChoiceScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        match state.step() {
            Step::Budget => Self::render_options(frame, area, state, &BUDGET_OPTIONS),
            Step::Vibe => Self::render_options(frame, area, state, &VIBE_OPTIONS),
            _ => {}
        }
    }

    fn render_options<T>(
        frame: &mut Frame,
        area: Rect,
        state: &mut AppState,
        options: &[ChoiceOption<T>],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Highlighted emoji
                Constraint::Length(1), // Highlighted label + description
                Constraint::Length(1),
                Constraint::Length(1), // Options
                Constraint::Length(1),
                Constraint::Length(1), // Chosen
                Constraint::Fill(1),
            ])
            .split(area);

        let cursor = state.cursor.min(options.len().saturating_sub(1));
        let chosen = state.chosen();

        if let Some(option) = options.get(cursor) {
            frame.render_widget(
                Paragraph::new(option.emoji).alignment(Alignment::Center),
                chunks[1],
            );

            let mut detail = vec![Span::styled(
                option.label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )];
            if !option.description.is_empty() {
                detail.push(Span::styled(
                    format!(" · {}", option.description),
                    Style::default().fg(Color::Gray),
                ));
            }
            frame.render_widget(
                Paragraph::new(Line::from(detail)).alignment(Alignment::Center),
                chunks[2],
            );
        }

        let labels: Vec<String> = options
            .iter()
            .map(|o| format!("{} {}", o.emoji, o.label))
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        let row = super::centered(chunks[4], row_width(&labels));
        state.hit.options = render_radio_group(&labels, cursor, chosen, row, frame.buffer_mut());

        let chosen_line = match chosen.and_then(|i| options.get(i)) {
            Some(option) => Line::styled(
                format!("Picked: {} {}", option.emoji, option.label),
                Style::default().fg(Color::Cyan),
            ),
            None => Line::styled("Nothing picked yet", Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(
            Paragraph::new(chosen_line).alignment(Alignment::Center),
            chunks[6],
        );
    }
}

fn row_width(labels: &[&str]) -> u16 {
    let width: usize = labels
        .iter()
        .map(|l| Line::raw(*l).width() + 4)
        .sum::<usize>()
        + 2 * labels.len().saturating_sub(1);
    width.min(u16::MAX as usize) as u16
}
