//! Report widget — tally plus the full question/answer listing

use clarity_domain::ReportSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ReportWidget<'a> {
    report: &'a ReportSummary,
}

impl<'a> ReportWidget<'a> {
    pub fn new(report: &'a ReportSummary) -> Self {
        Self { report }
    }
}

impl<'a> Widget for ReportWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let report = self.report;
        let mut lines = vec![
            Line::from(Span::styled(
                report.tool_name().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Answered: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{} of {}", report.answered(), report.question_count()),
                    Style::default().fg(Color::White),
                ),
                Span::raw("    "),
                Span::styled(
                    format!("Yes: {}", report.yes_count()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("No: {}", report.no_count()),
                    Style::default().fg(Color::Red),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("({}% yes)", report.yes_percent()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
        ];

        if report.answers().is_empty() {
            lines.push(Line::from(Span::styled(
                "No answers were recorded for this tool.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (i, answer) in report.answers().iter().enumerate() {
            let (icon, color) = if answer.choice().is_yes() {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(answer.question().to_string(), Style::default().fg(Color::White)),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
