// Reusable UI components

use crate::quiz::Step;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw("CONTROLS: ")];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    /// Controls for a stage; results only offers restart once the dish is shown
    pub fn for_step(step: Step, result_ready: bool) -> Self {
        match step {
            Step::Landing => Self::from_controls(&[("[Enter]", "Start"), ("[Q]", "Quit")]),
            Step::Hunger | Step::Healthiness | Step::Temperature | Step::Spice => {
                Self::from_controls(&[
                    ("[←/→]", "Adjust"),
                    ("[Home/End]", "Min/Max"),
                    ("[Drag]", "Slide"),
                    ("[Enter]", "Next"),
                    ("[Q]", "Quit"),
                ])
            }
            Step::Budget | Step::Vibe => Self::from_controls(&[
                ("[←/→]", "Move"),
                ("[Space]", "Pick"),
                ("[Enter]", "Next"),
                ("[Q]", "Quit"),
            ]),
            Step::Social => Self::from_controls(&[
                ("[→]", "Select"),
                ("[←]", "Skip"),
                ("[Drag]", "Swipe"),
                ("[Enter]", "Next"),
                ("[Q]", "Quit"),
            ]),
            Step::Results if result_ready => {
                Self::from_controls(&[("[R]", "Try Again"), ("[Q]", "Quit")])
            }
            Step::Results => Self::from_controls(&[("[Q]", "Quit")]),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

pub fn render_button(label: &str, hotkey: &str, enabled: bool, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let style = if enabled {
        Style::default().bg(Color::Blue).fg(Color::White).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = Line::from(vec![
        Span::raw("["),
        Span::styled(hotkey, Style::default().fg(Color::Yellow).bold()),
        Span::raw("] "),
        Span::raw(label),
    ])
    .style(style);

    let mut centered_area = area;
    let text_width = text.width() as u16;
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
}

/// Options in one row; `cursor` is highlighted, `chosen` gets the filled marker.
/// Returns the area each option occupies, for mouse hit testing.
pub fn render_radio_group(
    options: &[&str],
    cursor: usize,
    chosen: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) -> Vec<Rect> {
    if area.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut hit_areas = Vec::with_capacity(options.len());
    let mut x = area.x;

    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
            x += 2;
        }

        let symbol = if chosen == Some(i) { "(•)" } else { "( )" };
        let symbol_style = if i == cursor {
            Style::default().fg(Color::Yellow).bold()
        } else if chosen == Some(i) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if i == cursor {
            Style::default().bold()
        } else {
            Style::default()
        };

        let item = [
            Span::styled(symbol, symbol_style),
            Span::raw(" "),
            Span::styled(*option, label_style),
        ];
        let width: u16 = item.iter().map(|s| s.width() as u16).sum();
        hit_areas.push(Rect::new(x, area.y, width, 1).intersection(area));
        x += width;
        spans.extend(item);
    }

    let text = Line::from(spans);
    buf.set_line(area.x, area.y, &text, area.width);
    hit_areas
}
