// Results stage: loading animation, then the recommended dish

use crate::recommend::{Recommendation, order_links};
use crate::ui::state::{AppState, ResultsState};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const COOKING: &[&str] = &["🍳", "🥘", "🍲", "🥄"];
const ALTERNATIVES_SHOWN: usize = 2;

pub struct ResultsScreen;

impl ResultsScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let lines = match &state.results {
            ResultsState::Ready(rec) => Self::result_lines(rec),
            ResultsState::Idle | ResultsState::Loading => Self::loading_lines(state.tick),
        };

        // Vertically center the block when it fits
        let height = lines.len() as u16;
        let top = area.height.saturating_sub(height) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn loading_lines(tick: u64) -> Vec<Line<'static>> {
        let spinner = SPINNER[(tick / 4) as usize % SPINNER.len()];
        let pot = COOKING[(tick / 15) as usize % COOKING.len()];
        let dots = ".".repeat((tick / 20) as usize % 4);
        vec![
            Line::raw(pot),
            Line::raw(""),
            Line::styled(
                format!("{} Finding Your Perfect Meal...", spinner),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("Analyzing your cravings{}", dots),
                Style::default().fg(Color::Gray),
            ),
        ]
    }

    fn result_lines(rec: &Recommendation) -> Vec<Line<'static>> {
        let food = &rec.food;
        let mut lines = Vec::new();

        if let Some(notice) = rec.notice() {
            lines.push(Line::styled(
                format!("⚠ {}", notice),
                Style::default().fg(Color::Yellow),
            ));
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled(
            "You should eat...",
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::raw(food.emoji.clone()));
        lines.push(Line::styled(
            format!("{}!", food.name),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(description) = food.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(Line::styled(
                description.to_string(),
                Style::default().fg(Color::White),
            ));
        }

        let mut score_line = Vec::new();
        if let Some(label) = rec.score_label() {
            score_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        for tag in rec.shown_tags() {
            score_line.push(Span::raw(" "));
            score_line.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(Color::Cyan),
            ));
        }
        if !score_line.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::from(score_line));
        }

        let mut price = format!("Average price: ₹{}", food.avg_price);
        if food.is_vegetarian {
            price.push_str(" • 🌱 Vegetarian");
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(price, Style::default().fg(Color::Gray)));

        if !rec.alternatives.is_empty() {
            lines.push(Line::raw(""));
            let names: Vec<String> = rec
                .alternatives
                .iter()
                .take(ALTERNATIVES_SHOWN)
                .map(|alt| format!("{} {}", alt.food.emoji, alt.food.name))
                .collect();
            lines.push(Line::from(vec![
                Span::styled("Or maybe: ", Style::default().fg(Color::DarkGray)),
                Span::raw(names.join(", ")),
            ]));
        }

        let links = order_links(&food.name);
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Order from:",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            format!("Zomato  {}", links.zomato),
            Style::default().fg(Color::Red),
        ));
        lines.push(Line::styled(
            format!("Swiggy  {}", links.swiggy),
            Style::default().fg(Color::LightYellow),
        ));

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::raw(" Try Again"),
        ]));
        lines
    }
}
