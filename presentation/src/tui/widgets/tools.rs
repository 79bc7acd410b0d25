//! Tool picker widget

use clarity_domain::DiagnosticTool;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ToolsWidget<'a> {
    tools: &'a [DiagnosticTool],
    selected: usize,
}

impl<'a> ToolsWidget<'a> {
    pub fn new(tools: &'a [DiagnosticTool], selected: usize) -> Self {
        Self { tools, selected }
    }
}

impl<'a> Widget for ToolsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Select a Diagnostic Tool",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Choose the area you'd like to analyze and get actionable insights for your business.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        if self.tools.is_empty() {
            lines.push(Line::from(Span::styled(
                "No tools configured.",
                Style::default().fg(Color::Red),
            )));
        }

        for (i, tool) in self.tools.iter().enumerate() {
            let is_selected = i == self.selected;
            let (marker, name_style) = if is_selected {
                (
                    Span::styled("▸ ", Style::default().fg(Color::Green)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (Span::raw("  "), Style::default().fg(Color::White))
            };

            lines.push(Line::from(vec![
                marker,
                Span::styled(tool.name(), name_style),
                Span::styled(
                    format!("  ({} questions)", tool.question_count()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(tool.description(), Style::default().fg(Color::Gray)),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Enter to start",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Tools Hub ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
