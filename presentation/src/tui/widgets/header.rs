//! Header widget — product name and current view

use clarity_application::AppView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget {
    view: AppView,
}

impl HeaderWidget {
    pub fn new(view: AppView) -> Self {
        Self { view }
    }

    fn view_label(&self) -> &'static str {
        match self.view {
            AppView::Landing => "Welcome",
            AppView::Tools => "Tools Hub",
            AppView::Questionnaire => "Questionnaire",
            AppView::Report => "Report",
        }
    }
}

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Green)),
            Span::styled(
                "Clarity Hub",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.view_label(), Style::default().fg(Color::Cyan)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
