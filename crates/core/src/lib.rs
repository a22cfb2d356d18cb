#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnalysisResult, AnalyzedQuestion, AnswerSet, AnsweredQuestion, GeneratedPaper, PaperQuestion,
    PaperSection, SessionId, Step, TopicFrequency, UploadOutcome, User, WizardError, WizardState,
};
