// Custom slider widget for numeric answers (keyboard and pointer drag)

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::ui::constants::SliderSpec;

pub struct Slider {
    value: u32,
    min: u32,
    max: u32,
    step: u32,
    label: String,
    focused: bool,
    dragging: bool,
}

impl Slider {
    pub fn new(label: impl Into<String>, min: u32, max: u32) -> Self {
        Self {
            value: min,
            min,
            max,
            step: 1,
            label: label.into(),
            focused: false,
            dragging: false,
        }
    }

    pub fn from_spec(label: impl Into<String>, spec: &SliderSpec) -> Self {
        Self::new(label, spec.min, spec.max).step(spec.step)
    }

    pub fn value(mut self, value: u32) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    pub fn step(mut self, step: u32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn get_value(&self) -> u32 {
        self.value
    }

    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let old = self.value;
        self.value = match key {
            KeyCode::Left | KeyCode::Down => self.value.saturating_sub(self.step).max(self.min),
            KeyCode::Right | KeyCode::Up => (self.value + self.step).min(self.max),
            KeyCode::Home => self.min,
            KeyCode::End => self.max,
            _ => self.value,
        };
        self.value != old
    }

    /// Project a pointer column on the bar row into the slider range.
    ///
    /// `bar` is the one-row track as rendered; columns outside it clamp to
    /// the ends and the result is rounded to a whole value.
    pub fn value_at(&self, bar: Rect, column: u16) -> u32 {
        if bar.width <= 1 {
            return self.min;
        }
        let offset = column.saturating_sub(bar.x).min(bar.width - 1);
        let ratio = offset as f64 / (bar.width - 1) as f64;
        let range = (self.max - self.min) as f64;
        (self.min as f64 + ratio * range).round() as u32
    }

    /// The row the bar occupies inside `area`
    pub fn bar_area(area: Rect) -> Option<Rect> {
        (area.height >= 2 && area.width > 0).then(|| Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        })
    }
}

impl Widget for Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let value_style = if self.dragging {
            Style::default().fg(Color::Magenta).bold()
        } else if self.focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::default()
            .borders(Borders::NONE)
            .border_style(border_style);

        let inner = block.inner(area);

        // Label with value on the first row, bar on the second
        if inner.height >= 2 {
            let label_line = Line::from(vec![
                Span::raw(&self.label),
                Span::raw(": "),
                Span::styled(format!("{}", self.value), value_style),
                Span::styled(
                    format!(" ({}-{})", self.min, self.max),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            buf.set_line(inner.x, inner.y, &label_line, inner.width);

            if let Some(bar) = Self::bar_area(inner) {
                let range = self.max - self.min;
                let ratio = if range > 0 {
                    (self.value - self.min) as f64 / range as f64
                } else {
                    0.0
                };
                let filled_width = (bar.width as f64 * ratio).round() as u16;
                let fill_color = if self.focused {
                    Color::Blue
                } else {
                    Color::DarkGray
                };

                for x in 0..bar.width {
                    let (symbol, color) = if x < filled_width {
                        ("█", fill_color)
                    } else {
                        ("─", Color::DarkGray)
                    };
                    buf.set_string(bar.x + x, bar.y, symbol, Style::default().fg(color));
                }

                // Handle marks the current position
                let handle_x = bar.x + filled_width.min(bar.width - 1);
                buf.set_string(handle_x, bar.y, "●", value_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_step_and_clamp() {
        let mut slider = Slider::new("Hunger", 0, 100).step(5).value(97);
        assert!(slider.handle_key(KeyCode::Right));
        assert_eq!(slider.get_value(), 100);
        assert!(!slider.handle_key(KeyCode::Right));
        assert!(slider.handle_key(KeyCode::Left));
        assert_eq!(slider.get_value(), 95);
        assert!(slider.handle_key(KeyCode::Home));
        assert_eq!(slider.get_value(), 0);
        assert!(!slider.handle_key(KeyCode::Left));
        assert!(!slider.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn test_min_respected_with_offset_range() {
        let mut slider = Slider::new("Temp", 5, 95).step(5).value(7);
        slider.handle_key(KeyCode::Left);
        assert_eq!(slider.get_value(), 5);
        assert_eq!(Slider::new("Temp", 5, 95).value(0).get_value(), 5);
    }

    #[test]
    fn test_value_at_projects_column() {
        let slider = Slider::new("Hunger", 0, 100);
        let bar = Rect::new(10, 4, 101, 1);
        assert_eq!(slider.value_at(bar, 10), 0);
        assert_eq!(slider.value_at(bar, 60), 50);
        assert_eq!(slider.value_at(bar, 110), 100);
        // Outside the bar clamps
        assert_eq!(slider.value_at(bar, 0), 0);
        assert_eq!(slider.value_at(bar, 200), 100);
    }

    #[test]
    fn test_value_at_offset_range() {
        let slider = Slider::new("Health", 5, 95);
        let bar = Rect::new(0, 0, 91, 1);
        assert_eq!(slider.value_at(bar, 0), 5);
        assert_eq!(slider.value_at(bar, 90), 95);
    }

    #[test]
    fn test_render_fills_bar() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        Slider::new("S", 0, 10).value(10).focused(true).render(area, &mut buf);
        assert_eq!(buf[(0, 1)].symbol(), "█");
        assert_eq!(buf[(9, 1)].symbol(), "●");
    }
}
