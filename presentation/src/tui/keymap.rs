//! Key handling
//!
//! Maps raw key events to semantic actions based on what is currently on
//! screen. Each context is a closed set of keys; anything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the keyboard is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Landing screen
    Landing,
    /// Tool picker list
    Tools,
    /// A question is on screen
    Questionnaire,
    /// The exit-confirmation modal is on screen
    ExitConfirm,
    /// The report is on screen
    Report,
    /// The help overlay is on screen
    Help,
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Landing: open the tool picker
    Explore,
    /// Tools: move the selection up
    SelectPrev,
    /// Tools: move the selection down
    SelectNext,
    /// Tools: start the selected tool
    StartSelected,
    /// Questionnaire: answer Yes
    AnswerYes,
    /// Questionnaire: answer No
    AnswerNo,
    /// Questionnaire: step back one question
    PreviousQuestion,
    /// Questionnaire: ask to return to the tool picker
    RequestExit,
    /// Modal: exit anyway
    ConfirmYes,
    /// Modal: continue the quiz
    ConfirmNo,
    /// Report: back to the tool picker
    BackToTools,
    /// Any view: back to the landing screen
    GoHome,
    /// Toggle the help overlay
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions for the active context
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(context: KeyContext, key: KeyEvent) -> KeyAction {
        // Ctrl+C quits from anywhere, including modals
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        match context {
            KeyContext::Landing => Self::handle_landing(key),
            KeyContext::Tools => Self::handle_tools(key),
            KeyContext::Questionnaire => Self::handle_questionnaire(key),
            KeyContext::ExitConfirm => Self::handle_exit_confirm(key),
            KeyContext::Report => Self::handle_report(key),
            KeyContext::Help => Self::handle_help(key),
        }
    }

    fn handle_landing(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('e') => KeyAction::Explore,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn handle_tools(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => KeyAction::SelectPrev,
            KeyCode::Char('j') | KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Enter => KeyAction::StartSelected,
            KeyCode::Esc | KeyCode::Char('h') => KeyAction::GoHome,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn handle_questionnaire(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => KeyAction::AnswerYes,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::AnswerNo,
            KeyCode::Char('p') | KeyCode::Left => KeyAction::PreviousQuestion,
            KeyCode::Esc | KeyCode::Char('t') => KeyAction::RequestExit,
            KeyCode::Char('h') => KeyAction::GoHome,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn handle_exit_confirm(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::ConfirmYes,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::ConfirmNo,
            _ => KeyAction::None,
        }
    }

    fn handle_report(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('b') | KeyCode::Esc => KeyAction::BackToTools,
            KeyCode::Char('h') => KeyAction::GoHome,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn handle_help(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for context in [
            KeyContext::Landing,
            KeyContext::Tools,
            KeyContext::Questionnaire,
            KeyContext::ExitConfirm,
            KeyContext::Report,
            KeyContext::Help,
        ] {
            assert_eq!(KeyHandler::handle(context, ctrl_c), KeyAction::Quit);
        }
    }

    #[test]
    fn test_landing_keys() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Landing, key(KeyCode::Enter)),
            KeyAction::Explore
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Landing, key(KeyCode::Char('e'))),
            KeyAction::Explore
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Landing, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Landing, key(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_tools_navigation() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Tools, key(KeyCode::Char('j'))),
            KeyAction::SelectNext
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Tools, key(KeyCode::Up)),
            KeyAction::SelectPrev
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Tools, key(KeyCode::Enter)),
            KeyAction::StartSelected
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Tools, key(KeyCode::Esc)),
            KeyAction::GoHome
        );
    }

    #[test]
    fn test_questionnaire_answering() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Questionnaire, key(KeyCode::Char('y'))),
            KeyAction::AnswerYes
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Questionnaire, key(KeyCode::Char('N'))),
            KeyAction::AnswerNo
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Questionnaire, key(KeyCode::Left)),
            KeyAction::PreviousQuestion
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Questionnaire, key(KeyCode::Esc)),
            KeyAction::RequestExit
        );
    }

    #[test]
    fn test_exit_confirm_keys() {
        assert_eq!(
            KeyHandler::handle(KeyContext::ExitConfirm, key(KeyCode::Char('y'))),
            KeyAction::ConfirmYes
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::ExitConfirm, key(KeyCode::Enter)),
            KeyAction::ConfirmYes
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::ExitConfirm, key(KeyCode::Esc)),
            KeyAction::ConfirmNo
        );
        // Answer keys must not leak through while the modal is up
        assert_eq!(
            KeyHandler::handle(KeyContext::ExitConfirm, key(KeyCode::Char('p'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_report_keys() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Report, key(KeyCode::Enter)),
            KeyAction::BackToTools
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Report, key(KeyCode::Char('h'))),
            KeyAction::GoHome
        );
    }

    #[test]
    fn test_help_closes_only() {
        assert_eq!(
            KeyHandler::handle(KeyContext::Help, key(KeyCode::Esc)),
            KeyAction::ToggleHelp
        );
        assert_eq!(
            KeyHandler::handle(KeyContext::Help, key(KeyCode::Char('y'))),
            KeyAction::None
        );
    }
}
