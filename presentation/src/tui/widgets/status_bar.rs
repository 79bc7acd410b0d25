//! Status bar widget — view indicator + key hints + flash messages

use crate::tui::keymap::KeyContext;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    context: KeyContext,
    flash: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(context: KeyContext, flash: Option<&'a str>) -> Self {
        Self { context, flash }
    }

    fn indicator(&self) -> &'static str {
        match self.context {
            KeyContext::Landing => "HOME",
            KeyContext::Tools => "TOOLS",
            KeyContext::Questionnaire => "QUIZ",
            KeyContext::ExitConfirm => "CONFIRM",
            KeyContext::Report => "REPORT",
            KeyContext::Help => "HELP",
        }
    }

    fn indicator_color(&self) -> Color {
        match self.context {
            KeyContext::Landing => Color::Blue,
            KeyContext::Tools => Color::Cyan,
            KeyContext::Questionnaire => Color::Green,
            KeyContext::ExitConfirm => Color::Magenta,
            KeyContext::Report => Color::Yellow,
            KeyContext::Help => Color::DarkGray,
        }
    }

    fn hints(&self) -> &'static str {
        match self.context {
            KeyContext::Landing => "Enter:explore  ?:help  q:quit",
            KeyContext::Tools => "j/k:select  Enter:start  Esc:home  q:quit",
            KeyContext::Questionnaire => "y:yes  n:no  p:previous  Esc:tools hub  ?:help",
            KeyContext::ExitConfirm => "y:exit anyway  n:continue quiz",
            KeyContext::Report => "Enter:tools hub  h:home  q:quit",
            KeyContext::Help => "Esc:close",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: view indicator
        let indicator = self.indicator();
        let mode_span = Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(self.indicator_color())
                .add_modifier(Modifier::BOLD),
        );
        let mode_width = indicator.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![mode_span]), mode_width);

        // Right: flash message or key hints, right-aligned
        let right_text = self.flash.unwrap_or_else(|| self.hints());
        let right_span = Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );
        let right_width = right_text.len() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + mode_width {
            buf.set_line(right_x, area.y, &Line::from(vec![right_span]), right_width + 1);
        }
    }
}
