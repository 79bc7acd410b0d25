//! Questionnaire widget — breadcrumb, progress, question card, dot row

use clarity_domain::{QuestionDot, QuestionnaireSession};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct QuestionnaireWidget<'a> {
    session: &'a QuestionnaireSession,
    show_dots: bool,
    flex_threshold: u16,
}

impl<'a> QuestionnaireWidget<'a> {
    pub fn new(session: &'a QuestionnaireSession, show_dots: bool, flex_threshold: u16) -> Self {
        Self {
            session,
            show_dots,
            flex_threshold,
        }
    }

    fn breadcrumb(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled("Tools Hub", Style::default().fg(Color::DarkGray)),
            Span::raw(" / "),
            Span::styled(self.session.tool_name(), Style::default().fg(Color::White)),
            Span::raw(" / "),
            Span::styled(
                format!("Question {}", self.session.question_number()),
                Style::default().fg(Color::White),
            ),
        ])
    }

    fn dot_row(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for dot in self.session.dots() {
            let span = match dot {
                QuestionDot::Answered => Span::styled("● ", Style::default().fg(Color::Green)),
                QuestionDot::Current => Span::styled(
                    "◉ ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                QuestionDot::Upcoming => Span::styled("○ ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        Line::from(spans)
    }
}

impl<'a> Widget for QuestionnaireWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Narrow terminals drop the side padding
        let body = if area.width >= self.flex_threshold {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(10),
                    Constraint::Percentage(80),
                    Constraint::Percentage(10),
                ])
                .split(area);
            horizontal[1]
        } else {
            area
        };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // breadcrumb + progress text
                Constraint::Length(1), // gauge
                Constraint::Length(1), // spacer
                Constraint::Min(7),    // question card
                Constraint::Length(2), // dots + footer
            ])
            .split(body);

        // Breadcrumb and "k of N answered"
        let progress_text = Line::from(vec![
            Span::styled("Progress  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "{} of {} answered",
                    self.session.answered(),
                    self.session.question_count()
                ),
                Style::default().fg(Color::White),
            ),
        ]);
        Paragraph::new(vec![self.breadcrumb(), progress_text]).render(vertical[0], buf);

        // Progress bar
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .percent(self.session.progress_percent())
            .label(format!("{}%", self.session.progress_percent()))
            .render(vertical[1], buf);

        // Question card
        let question = self.session.current_question().unwrap_or_default();
        let card_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Question {} of {}",
                    self.session.question_number(),
                    self.session.question_count()
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                question.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  [y] Yes  ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    "  [n] No  ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let card = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.session.tool_name()))
            .style(Style::default().fg(Color::White));

        Paragraph::new(card_lines)
            .block(card)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(vertical[3], buf);

        // Dot row and remaining-count footer
        let mut footer_lines = Vec::new();
        if self.show_dots {
            footer_lines.push(self.dot_row());
        }
        footer_lines.push(Line::from(Span::styled(
            format!(
                "{}% Complete • {} questions remaining",
                self.session.progress_percent(),
                self.session.remaining()
            ),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(footer_lines)
            .alignment(ratatui::layout::Alignment::Center)
            .render(vertical[4], buf);
    }
}
