//! Landing screen widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct LandingWidget;

impl Widget for LandingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Empower Your Business Clarity",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Choose a diagnostic tool to uncover insights and improve operations.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Explore Tools ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled("press Enter", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        // Vertically offset into the body so the block sits near the middle
        let offset = area.height.saturating_sub(lines.len() as u16) / 3;
        let centered = Rect {
            x: area.x,
            y: area.y + offset,
            width: area.width,
            height: area.height.saturating_sub(offset),
        };

        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .render(centered, buf);
    }
}
