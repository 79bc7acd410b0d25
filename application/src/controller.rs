//! Application view controller
//!
//! A finite state machine over the four views. Every user action is routed
//! through [`AppController::handle`]; actions that are invalid for the
//! current view are ignored. The questionnaire session and the finished
//! report are owned here, so leaving a view is what destroys its state.

use std::sync::Arc;

use clarity_domain::{
    AnswerChoice, ExitOutcome, QuestionnaireSession, ReportSummary, SubmitOutcome,
};
use tracing::debug;

use crate::ports::catalog::CatalogPort;

/// The four top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Landing,
    Tools,
    Questionnaire,
    Report,
}

/// A user action routed to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Landing: move to the tool picker
    Explore,
    /// Tools: start a questionnaire for the named tool
    PickTool(String),
    /// Questionnaire: answer the current question
    Answer(AnswerChoice),
    /// Questionnaire: step back one question
    PreviousQuestion,
    /// Questionnaire: ask to return to the tool picker
    RequestExit,
    /// Questionnaire: confirm a pending exit, discarding progress
    ConfirmExit,
    /// Questionnaire: dismiss a pending exit, keeping the session
    DeclineExit,
    /// Report: return to the tool picker
    BackToTools,
    /// Any view: return to the landing screen
    GoHome,
}

/// Top-level controller: current view plus the state owned by it
pub struct AppController<C: CatalogPort> {
    catalog: Arc<C>,
    view: AppView,
    session: Option<QuestionnaireSession>,
    report: Option<ReportSummary>,
}

impl<C: CatalogPort> AppController<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            view: AppView::Landing,
            session: None,
            report: None,
        }
    }

    // -- Queries --

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The in-progress session, present only in the questionnaire view
    pub fn session(&self) -> Option<&QuestionnaireSession> {
        self.session.as_ref()
    }

    /// The finished report, present only in the report view
    pub fn report(&self) -> Option<&ReportSummary> {
        self.report.as_ref()
    }

    /// Take the finished report out of the controller (used on shutdown to
    /// echo it to the console)
    pub fn take_report(&mut self) -> Option<ReportSummary> {
        self.report.take()
    }

    // -- Transitions --

    /// Route one user action. Actions not valid for the current view are
    /// dropped with a debug log.
    pub fn handle(&mut self, action: AppAction) {
        match (self.view, action) {
            (AppView::Landing, AppAction::Explore) => {
                self.view = AppView::Tools;
            }

            (AppView::Tools, AppAction::PickTool(name)) => self.start_session(&name),

            (AppView::Questionnaire, AppAction::Answer(choice)) => self.submit(choice),

            (AppView::Questionnaire, AppAction::PreviousQuestion) => {
                if let Some(session) = self.session.as_mut() {
                    session.previous_question();
                }
            }

            (AppView::Questionnaire, AppAction::RequestExit) => {
                if let Some(session) = self.session.as_mut() {
                    if session.request_exit() == ExitOutcome::Exit {
                        self.reset_to_tools();
                    }
                    // Otherwise the session now has a pending confirmation;
                    // the view renders it as a modal.
                }
            }

            (AppView::Questionnaire, AppAction::ConfirmExit) => {
                if self.session.as_ref().is_some_and(|s| s.exit_pending()) {
                    self.reset_to_tools();
                }
            }

            (AppView::Questionnaire, AppAction::DeclineExit) => {
                if let Some(session) = self.session.as_mut() {
                    session.decline_exit();
                }
            }

            (AppView::Report, AppAction::BackToTools) => self.reset_to_tools(),

            (_, AppAction::GoHome) => {
                self.session = None;
                self.report = None;
                self.view = AppView::Landing;
            }

            (view, action) => {
                debug!(?view, ?action, "ignoring action invalid for current view");
            }
        }
    }

    /// Start a questionnaire for the named tool.
    ///
    /// Unknown names degrade to an empty question list; such a session is
    /// complete before the first question, so it goes straight to an empty
    /// report.
    fn start_session(&mut self, name: &str) {
        let session = match self.catalog.find(name) {
            Some(tool) => QuestionnaireSession::for_tool(tool),
            None => {
                debug!(tool = name, "unknown tool, starting empty session");
                QuestionnaireSession::new(name, Vec::new())
            }
        };

        if session.is_complete() {
            self.report = Some(ReportSummary::new(
                session.tool_name(),
                session.question_count(),
                session.answers().clone(),
            ));
            self.view = AppView::Report;
        } else {
            self.session = Some(session);
            self.view = AppView::Questionnaire;
        }
    }

    fn submit(&mut self, choice: AnswerChoice) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let SubmitOutcome::Completed(answers) = session.submit_answer(choice) {
            self.report = Some(ReportSummary::new(
                session.tool_name(),
                session.question_count(),
                answers,
            ));
            self.session = None;
            self.view = AppView::Report;
        }
    }

    fn reset_to_tools(&mut self) {
        self.session = None;
        self.report = None;
        self.view = AppView::Tools;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::{builtin_tools, DiagnosticTool, CASH_FLOW};

    struct TestCatalog(Vec<DiagnosticTool>);

    impl CatalogPort for TestCatalog {
        fn tools(&self) -> &[DiagnosticTool] {
            &self.0
        }
    }

    fn controller() -> AppController<TestCatalog> {
        AppController::new(Arc::new(TestCatalog(builtin_tools())))
    }

    fn in_questionnaire(name: &str) -> AppController<TestCatalog> {
        let mut c = controller();
        c.handle(AppAction::Explore);
        c.handle(AppAction::PickTool(name.into()));
        c
    }

    #[test]
    fn test_starts_on_landing() {
        let c = controller();
        assert_eq!(c.view(), AppView::Landing);
        assert!(c.session().is_none());
        assert!(c.report().is_none());
    }

    #[test]
    fn test_explore_moves_to_tools() {
        let mut c = controller();
        c.handle(AppAction::Explore);
        assert_eq!(c.view(), AppView::Tools);
    }

    #[test]
    fn test_pick_tool_starts_fresh_session() {
        let c = in_questionnaire(CASH_FLOW);
        assert_eq!(c.view(), AppView::Questionnaire);
        let session = c.session().unwrap();
        assert_eq!(session.tool_name(), CASH_FLOW);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.question_count(), 10);
    }

    #[test]
    fn test_landing_cannot_jump_to_report() {
        let mut c = controller();
        c.handle(AppAction::BackToTools);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        assert_eq!(c.view(), AppView::Landing);
        assert!(c.report().is_none());
    }

    #[test]
    fn test_full_run_reaches_report() {
        let mut c = in_questionnaire(CASH_FLOW);
        for _ in 0..10 {
            c.handle(AppAction::Answer(AnswerChoice::Yes));
        }
        assert_eq!(c.view(), AppView::Report);
        assert!(c.session().is_none());

        let report = c.report().unwrap();
        assert_eq!(report.tool_name(), CASH_FLOW);
        assert_eq!(report.answered(), 10);
        assert_eq!(report.yes_count(), 10);

        // Answers arrive in catalog question order
        let catalog = TestCatalog(builtin_tools());
        let tool = catalog.find(CASH_FLOW).unwrap();
        for (i, answer) in report.answers().iter().enumerate() {
            assert_eq!(answer.question(), tool.questions()[i]);
        }
    }

    #[test]
    fn test_previous_inside_questionnaire() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        c.handle(AppAction::Answer(AnswerChoice::No));
        c.handle(AppAction::PreviousQuestion);

        let session = c.session().unwrap();
        assert_eq!(session.answered(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_exit_unanswered_returns_to_tools_immediately() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::RequestExit);
        assert_eq!(c.view(), AppView::Tools);
        assert!(c.session().is_none());
    }

    #[test]
    fn test_exit_with_answers_needs_confirmation() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        c.handle(AppAction::RequestExit);

        // Still in the questionnaire, confirmation pending
        assert_eq!(c.view(), AppView::Questionnaire);
        assert!(c.session().unwrap().exit_pending());

        c.handle(AppAction::ConfirmExit);
        assert_eq!(c.view(), AppView::Tools);
        assert!(c.session().is_none());
    }

    #[test]
    fn test_decline_exit_keeps_session_unchanged() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        c.handle(AppAction::Answer(AnswerChoice::No));
        c.handle(AppAction::RequestExit);
        c.handle(AppAction::DeclineExit);

        assert_eq!(c.view(), AppView::Questionnaire);
        let session = c.session().unwrap();
        assert!(!session.exit_pending());
        assert_eq!(session.answered(), 2);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn test_confirm_without_pending_exit_is_ignored() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        c.handle(AppAction::ConfirmExit);
        assert_eq!(c.view(), AppView::Questionnaire);
        assert_eq!(c.session().unwrap().answered(), 1);
    }

    #[test]
    fn test_report_back_clears_everything() {
        let mut c = in_questionnaire(CASH_FLOW);
        for _ in 0..10 {
            c.handle(AppAction::Answer(AnswerChoice::No));
        }
        c.handle(AppAction::BackToTools);
        assert_eq!(c.view(), AppView::Tools);
        assert!(c.report().is_none());
        assert!(c.session().is_none());
    }

    #[test]
    fn test_home_from_any_view_clears_session() {
        let mut c = in_questionnaire(CASH_FLOW);
        c.handle(AppAction::Answer(AnswerChoice::Yes));
        c.handle(AppAction::GoHome);
        assert_eq!(c.view(), AppView::Landing);
        assert!(c.session().is_none());
        assert!(c.report().is_none());
    }

    #[test]
    fn test_unknown_tool_yields_empty_report() {
        let mut c = controller();
        c.handle(AppAction::Explore);
        c.handle(AppAction::PickTool("Not A Diagnostic".into()));

        assert_eq!(c.view(), AppView::Report);
        let report = c.report().unwrap();
        assert_eq!(report.answered(), 0);
        assert_eq!(report.question_count(), 0);
    }

    #[test]
    fn test_take_report_empties_controller() {
        let mut c = in_questionnaire(CASH_FLOW);
        for _ in 0..10 {
            c.handle(AppAction::Answer(AnswerChoice::Yes));
        }
        let report = c.take_report().unwrap();
        assert_eq!(report.answered(), 10);
        assert!(c.report().is_none());
    }
}
