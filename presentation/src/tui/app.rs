//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── key event → KeyHandler → KeyAction
//!   │                                        ├─ UiState (selection, overlays)
//!   │                                        └─ AppController (view transitions)
//!   └─ tick_interval ── flash expiry
//! ```
//!
//! Every state transition happens synchronously inside the loop; there is
//! no background work.

use super::keymap::{KeyAction, KeyContext, KeyHandler};
use super::state::UiState;
use super::widgets::{
    header::HeaderWidget, landing::LandingWidget, questionnaire::QuestionnaireWidget,
    report::ReportWidget, status_bar::StatusBarWidget, tools::ToolsWidget, MainLayout,
};
use clarity_application::{AppAction, AppController, AppView, CatalogPort};
use clarity_domain::{AnswerChoice, ReportSummary};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::stream::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Display options populated from configuration at startup
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Render the per-question dot row
    pub show_dots: bool,
    /// Terminal width below which the questionnaire drops its side padding
    pub flex_threshold: u16,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            show_dots: true,
            flex_threshold: 90,
        }
    }
}

/// Main TUI application
pub struct TuiApp<C: CatalogPort> {
    controller: AppController<C>,
    state: UiState,
}

impl<C: CatalogPort> TuiApp<C> {
    pub fn new(catalog: Arc<C>, options: TuiOptions) -> Self {
        let mut state = UiState::new();
        state.show_dots = options.show_dots;
        state.flex_threshold = options.flex_threshold;

        Self {
            controller: AppController::new(catalog),
            state,
        }
    }

    /// Skip the landing and picker screens, starting directly in the named
    /// tool's questionnaire
    pub fn with_start_tool(mut self, name: &str) -> Self {
        self.controller.handle(AppAction::Explore);
        self.controller.handle(AppAction::PickTool(name.to_string()));
        self
    }

    /// Run the TUI main loop.
    ///
    /// Returns the finished report if one was on screen when the user quit,
    /// so the caller can echo it to stdout.
    pub async fn run(&mut self) -> io::Result<Option<ReportSummary>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    self.state.expire_flash(Duration::from_secs(5));
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(self.controller.take_report())
    }

    /// The context keys are currently routed to
    fn context(&self) -> KeyContext {
        if self.state.show_help {
            return KeyContext::Help;
        }
        match self.controller.view() {
            AppView::Landing => KeyContext::Landing,
            AppView::Tools => KeyContext::Tools,
            AppView::Questionnaire => {
                if self.controller.session().is_some_and(|s| s.exit_pending()) {
                    KeyContext::ExitConfirm
                } else {
                    KeyContext::Questionnaire
                }
            }
            AppView::Report => KeyContext::Report,
        }
    }

    // -- Rendering --

    fn render(&self, frame: &mut ratatui::Frame) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(self.controller.view()), layout.header);

        match self.controller.view() {
            AppView::Landing => frame.render_widget(LandingWidget, layout.body),
            AppView::Tools => frame.render_widget(
                ToolsWidget::new(self.controller.catalog().tools(), self.state.tool_index),
                layout.body,
            ),
            AppView::Questionnaire => {
                if let Some(session) = self.controller.session() {
                    frame.render_widget(
                        QuestionnaireWidget::new(
                            session,
                            self.state.show_dots,
                            self.state.flex_threshold,
                        ),
                        layout.body,
                    );
                }
            }
            AppView::Report => {
                if let Some(report) = self.controller.report() {
                    frame.render_widget(ReportWidget::new(report), layout.body);
                }
            }
        }

        frame.render_widget(
            StatusBarWidget::new(
                self.context(),
                self.state.flash_message.as_ref().map(|(m, _)| m.as_str()),
            ),
            layout.status_bar,
        );

        // Exit confirmation modal
        if self.context() == KeyContext::ExitConfirm {
            let modal_area = MainLayout::centered_overlay(50, 30, frame.area());
            frame.render_widget(ratatui::widgets::Clear, modal_area);
            self.render_exit_modal(frame, modal_area);
        }

        // Help overlay
        if self.state.show_help {
            let help_area = MainLayout::centered_overlay(60, 60, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area);
        }
    }

    fn render_exit_modal(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let answered = self
            .controller
            .session()
            .map(|s| s.answered())
            .unwrap_or_default();
        let plural = if answered == 1 { "" } else { "s" };

        let lines = vec![
            Line::from(Span::styled(
                "Leaving now?",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "You'll lose your progress! You've already answered {} question{}.",
                answered, plural
            )),
            Line::from(""),
            Line::from(Span::styled(
                "n: continue quiz   y: exit anyway",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .style(Style::default().fg(Color::Yellow));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_help(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::style::{Color, Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Landing:"),
            Line::from("  Enter/e  Explore tools"),
            Line::from(""),
            Line::from("Tools Hub:"),
            Line::from("  j/k      Move selection"),
            Line::from("  Enter    Start the selected tool"),
            Line::from("  Esc/h    Back to the landing screen"),
            Line::from(""),
            Line::from("Questionnaire:"),
            Line::from("  y / n    Answer Yes / No"),
            Line::from("  p / ←    Previous question (undoes its answer)"),
            Line::from("  Esc/t    Back to the tools hub"),
            Line::from("  h        Home (discards the session)"),
            Line::from(""),
            Line::from("Report:"),
            Line::from("  Enter/b  Back to the tools hub"),
            Line::from(""),
            Line::from("  q        Quit (from landing, tools, report)"),
            Line::from("  Ctrl+C   Quit from anywhere"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    // -- Event handling --

    fn handle_terminal_event(&mut self, event: crossterm::event::Event) {
        match event {
            crossterm::event::Event::Key(key) => {
                let action = KeyHandler::handle(self.context(), key);
                self.handle_action(action);
            }
            crossterm::event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Apply a semantic key action to the UI state and the controller
    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::None => {}

            // Application
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::ToggleHelp => self.state.show_help = !self.state.show_help,

            // Landing
            KeyAction::Explore => self.controller.handle(AppAction::Explore),

            // Tool picker
            KeyAction::SelectPrev => self.state.select_prev(),
            KeyAction::SelectNext => {
                let count = self.controller.catalog().tools().len();
                self.state.select_next(count);
            }
            KeyAction::StartSelected => {
                let picked = self
                    .controller
                    .catalog()
                    .tools()
                    .get(self.state.tool_index)
                    .map(|t| t.name().to_string());
                if let Some(name) = picked {
                    self.controller.handle(AppAction::PickTool(name));
                }
            }

            // Questionnaire
            KeyAction::AnswerYes => self
                .controller
                .handle(AppAction::Answer(AnswerChoice::Yes)),
            KeyAction::AnswerNo => self.controller.handle(AppAction::Answer(AnswerChoice::No)),
            KeyAction::PreviousQuestion => self.controller.handle(AppAction::PreviousQuestion),
            KeyAction::RequestExit => self.controller.handle(AppAction::RequestExit),
            KeyAction::ConfirmYes => {
                self.controller.handle(AppAction::ConfirmExit);
                self.state.set_flash("Progress discarded");
            }
            KeyAction::ConfirmNo => self.controller.handle(AppAction::DeclineExit),

            // Report / global navigation
            KeyAction::BackToTools => self.controller.handle(AppAction::BackToTools),
            KeyAction::GoHome => self.controller.handle(AppAction::GoHome),
        }
    }
}
