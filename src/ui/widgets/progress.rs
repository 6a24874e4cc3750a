// Quiz progress bar shown across the top of question stages

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub struct StageProgress {
    current: u8,
    total: u8,
}

impl StageProgress {
    pub fn new(current: u8, total: u8) -> Self {
        Self {
            current: current.min(total),
            total,
        }
    }

    fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

impl Widget for StageProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // "3/7" sits at the right edge, the bar takes the rest
        let counter = format!(" {}/{}", self.current, self.total);
        let counter_width = (counter.len() as u16).min(area.width);
        let bar_width = area.width - counter_width;
        let filled_width = (bar_width as f64 * self.ratio()).round() as u16;

        for x in 0..bar_width {
            let (symbol, fg) = if x < filled_width {
                ("█", Color::LightRed)
            } else {
                ("░", Color::DarkGray)
            };
            buf.set_string(area.x + x, area.y, symbol, Style::default().fg(fg));
        }

        buf.set_stringn(
            area.x + bar_width,
            area.y,
            &counter,
            counter_width as usize,
            Style::default().fg(Color::Gray),
        );
    }
}
