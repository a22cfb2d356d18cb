use thiserror::Error;

use crate::model::analysis::AnalysisResult;
use crate::model::answers::AnswerSet;
use crate::model::ids::SessionId;
use crate::model::paper::GeneratedPaper;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("no active session; upload papers first")]
    NoSession,

    #[error("result belongs to session {incoming}, but session {held} is active")]
    SessionMismatch { held: SessionId, incoming: SessionId },
}

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// One of the four sequential stages, derived from artifact presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Upload,
    Analysis,
    Paper,
    Answers,
}

impl Step {
    /// 1-based position shown in the step indicator.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Upload => 1,
            Step::Analysis => 2,
            Step::Paper => 3,
            Step::Answers => 4,
        }
    }
}

//
// ─── WIZARD STATE ──────────────────────────────────────────────────────────────
//

/// The single record driving the wizard: the active session plus whichever
/// artifacts the pipeline has produced so far.
///
/// All mutation goes through the named operations below; artifacts from a
/// session other than the active one are rejected rather than folded in.
/// Progress is additive: a later-stage artifact never clears an earlier one,
/// and only `reset`/`start_session` clear anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    session_id: Option<SessionId>,
    analysis: Option<AnalysisResult>,
    paper: Option<GeneratedPaper>,
    answers: Option<AnswerSet>,
}

impl WizardState {
    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn paper(&self) -> Option<&GeneratedPaper> {
        self.paper.as_ref()
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerSet> {
        self.answers.as_ref()
    }

    /// Activate the session issued by a fresh upload.
    ///
    /// Artifacts held from a different prior session are cleared so nothing
    /// can leak across sessions. Re-activating the same session keeps them.
    pub fn start_session(&mut self, session_id: SessionId) {
        if self.session_id.as_ref() != Some(&session_id) {
            self.analysis = None;
            self.paper = None;
            self.answers = None;
        }
        self.session_id = Some(session_id);
    }

    /// Fold in the analysis for the active session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when no session is active or the result carries
    /// a different session id.
    pub fn set_analysis(&mut self, analysis: AnalysisResult) -> Result<(), WizardError> {
        self.check_session(&analysis.session_id)?;
        self.analysis = Some(analysis);
        Ok(())
    }

    /// Fold in the generated paper for the active session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when no session is active or the paper carries
    /// a different session id.
    pub fn set_paper(&mut self, paper: GeneratedPaper) -> Result<(), WizardError> {
        self.check_session(&paper.session_id)?;
        self.paper = Some(paper);
        Ok(())
    }

    /// Fold in the answer set for the active session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError` when no session is active or the answers carry
    /// a different session id.
    pub fn set_answers(&mut self, answers: AnswerSet) -> Result<(), WizardError> {
        self.check_session(&answers.session_id)?;
        self.answers = Some(answers);
        Ok(())
    }

    /// Back to an empty record, ready for a fresh upload.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pure derivation of the current step from artifact presence.
    #[must_use]
    pub fn current_step(&self) -> Step {
        if self.answers.is_some() {
            Step::Answers
        } else if self.paper.is_some() {
            Step::Paper
        } else if self.analysis.is_some() {
            Step::Analysis
        } else {
            Step::Upload
        }
    }

    fn check_session(&self, incoming: &SessionId) -> Result<(), WizardError> {
        let held = self.session_id.as_ref().ok_or(WizardError::NoSession)?;
        if held != incoming {
            return Err(WizardError::SessionMismatch {
                held: held.clone(),
                incoming: incoming.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn analysis(session: &str) -> AnalysisResult {
        AnalysisResult {
            session_id: SessionId::new(session),
            total_questions: 10,
            topics: Vec::new(),
            year_distribution: BTreeMap::new(),
            predicted_topics: Vec::new(),
            pattern_insights: Vec::new(),
            all_questions: Vec::new(),
        }
    }

    fn paper(session: &str) -> GeneratedPaper {
        GeneratedPaper {
            session_id: SessionId::new(session),
            title: "Predicted Paper".to_string(),
            subject: "Physics".to_string(),
            total_marks: 70,
            duration: "3 hours".to_string(),
            general_instructions: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn answers(session: &str) -> AnswerSet {
        AnswerSet {
            session_id: SessionId::new(session),
            title: "Predicted Paper".to_string(),
            answered_questions: Vec::new(),
        }
    }

    fn state_with(
        has_analysis: bool,
        has_paper: bool,
        has_answers: bool,
    ) -> WizardState {
        let mut state = WizardState::default();
        state.start_session(SessionId::new("s1"));
        if has_analysis {
            state.set_analysis(analysis("s1")).unwrap();
        }
        if has_paper {
            state.set_paper(paper("s1")).unwrap();
        }
        if has_answers {
            state.set_answers(answers("s1")).unwrap();
        }
        state
    }

    #[test]
    fn empty_state_is_step_one() {
        assert_eq!(WizardState::default().current_step(), Step::Upload);
    }

    #[test]
    fn step_derivation_covers_every_presence_combination() {
        // answers dominate, then paper, then analysis.
        let cases = [
            (false, false, false, Step::Upload),
            (true, false, false, Step::Analysis),
            (false, true, false, Step::Paper),
            (true, true, false, Step::Paper),
            (false, false, true, Step::Answers),
            (true, false, true, Step::Answers),
            (false, true, true, Step::Answers),
            (true, true, true, Step::Answers),
        ];
        for (has_analysis, has_paper, has_answers, expected) in cases {
            let state = state_with(has_analysis, has_paper, has_answers);
            assert_eq!(
                state.current_step(),
                expected,
                "analysis={has_analysis} paper={has_paper} answers={has_answers}"
            );
        }
    }

    #[test]
    fn step_numbers_are_one_through_four() {
        assert_eq!(Step::Upload.number(), 1);
        assert_eq!(Step::Analysis.number(), 2);
        assert_eq!(Step::Paper.number(), 3);
        assert_eq!(Step::Answers.number(), 4);
    }

    #[test]
    fn starting_a_new_session_clears_prior_artifacts() {
        let mut state = state_with(true, true, true);
        state.start_session(SessionId::new("s2"));

        assert_eq!(state.session_id(), Some(&SessionId::new("s2")));
        assert!(state.analysis().is_none());
        assert!(state.paper().is_none());
        assert!(state.answers().is_none());
        assert_eq!(state.current_step(), Step::Upload);
    }

    #[test]
    fn restarting_the_same_session_keeps_artifacts() {
        let mut state = state_with(true, false, false);
        state.start_session(SessionId::new("s1"));
        assert!(state.analysis().is_some());
    }

    #[test]
    fn artifacts_require_an_active_session() {
        let mut state = WizardState::default();
        assert_eq!(
            state.set_analysis(analysis("s1")),
            Err(WizardError::NoSession)
        );
    }

    #[test]
    fn mismatched_session_artifact_is_rejected() {
        let mut state = WizardState::default();
        state.start_session(SessionId::new("s1"));

        let err = state.set_analysis(analysis("s2")).unwrap_err();
        assert_eq!(
            err,
            WizardError::SessionMismatch {
                held: SessionId::new("s1"),
                incoming: SessionId::new("s2"),
            }
        );
        // the rejected artifact must not leak into the record
        assert!(state.analysis().is_none());
        assert_eq!(state.current_step(), Step::Upload);
    }

    #[test]
    fn later_artifacts_never_clear_earlier_ones() {
        let mut state = state_with(true, false, false);
        state.set_paper(paper("s1")).unwrap();
        state.set_answers(answers("s1")).unwrap();

        assert!(state.analysis().is_some());
        assert!(state.paper().is_some());
        assert!(state.answers().is_some());
    }

    #[test]
    fn reset_returns_to_the_empty_record() {
        let mut state = state_with(true, true, true);
        state.reset();
        assert_eq!(state, WizardState::default());
    }
}
