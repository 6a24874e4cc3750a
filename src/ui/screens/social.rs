// Social stage: a card deck swiped left (skip) or right (select)

use crate::ui::constants::{SOCIAL_CARDS, SWIPE_THRESHOLD};
use crate::ui::state::{AppState, SwipeDirection};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 7;
const INDICATOR_WIDTH: u16 = 10;

pub struct SocialScreen;

impl SocialScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(CARD_HEIGHT),
                Constraint::Length(1), // Next card hint
                Constraint::Length(1),
                Constraint::Length(1), // Selected
                Constraint::Fill(1),
            ])
            .split(area);

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(INDICATOR_WIDTH),
                Constraint::Min(0),
                Constraint::Length(INDICATOR_WIDTH),
            ])
            .split(chunks[1]);

        let resting = super::centered(row[1], CARD_WIDTH);
        if resting.is_empty() {
            return;
        }
        state.hit.swipe_card = Some(resting);

        let offset = state.drag.map(|g| g.offset()).unwrap_or(0);
        let pending = state.drag.and_then(|g| g.swipe());

        Self::render_indicator(
            frame,
            row[0],
            "◀ SKIP",
            Color::LightRed,
            pending == Some(SwipeDirection::Left),
        );
        Self::render_indicator(
            frame,
            row[2],
            "SELECT ▶",
            Color::LightGreen,
            pending == Some(SwipeDirection::Right),
        );

        let card = shift(resting, offset, row[1]);
        Self::render_card(frame, card, state.deck.top(), pending);

        let next = &SOCIAL_CARDS[state.deck.card_at(1)];
        frame.render_widget(
            Paragraph::new(format!("Next up: {} {}", next.emoji, next.label))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            chunks[2],
        );

        let selected = match state.flow.answers().social {
            Some(value) => {
                let label = SOCIAL_CARDS
                    .iter()
                    .find(|c| c.value == value)
                    .map(|c| format!("Selected: {} {}", c.emoji, c.label))
                    .unwrap_or_default();
                Line::styled(label, Style::default().fg(Color::Cyan))
            }
            None => Line::styled(
                "Swipe right on the one that fits",
                Style::default().fg(Color::DarkGray),
            ),
        };
        frame.render_widget(
            Paragraph::new(selected).alignment(Alignment::Center),
            chunks[4],
        );
    }

    fn render_card(frame: &mut Frame, area: Rect, index: usize, pending: Option<SwipeDirection>) {
        let card = &SOCIAL_CARDS[index];
        let border = match pending {
            Some(SwipeDirection::Right) => Color::LightGreen,
            Some(SwipeDirection::Left) => Color::LightRed,
            None => Color::Yellow,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));

        let lines = vec![
            Line::raw(""),
            Line::raw(card.emoji),
            Line::styled(
                card.label,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(card.description, Style::default().fg(Color::Gray)),
        ];

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_indicator(frame: &mut Frame, area: Rect, label: &str, color: Color, active: bool) {
        let style = if active {
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        let Some(line) = vertical_middle(area) else {
            return;
        };
        frame.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            line,
        );
    }
}

/// Move `card` sideways by a drag offset, kept inside `bounds`
fn shift(card: Rect, offset: i32, bounds: Rect) -> Rect {
    let min_x = bounds.x as i32;
    let max_x = (bounds.x + bounds.width).saturating_sub(card.width) as i32;
    // Past the threshold the card stops following the pointer
    let offset = offset.clamp(-SWIPE_THRESHOLD * 2, SWIPE_THRESHOLD * 2);
    let x = (card.x as i32 + offset).clamp(min_x, max_x.max(min_x));
    Rect {
        x: x as u16,
        ..card
    }
}

fn vertical_middle(area: Rect) -> Option<Rect> {
    (!area.is_empty()).then(|| Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    })
}
