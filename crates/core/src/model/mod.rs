mod analysis;
mod answers;
mod ids;
mod paper;
mod upload;
mod user;
mod wizard;

pub use analysis::{AnalysisResult, AnalyzedQuestion, TopicFrequency};
pub use answers::{AnswerSet, AnsweredQuestion};
pub use ids::SessionId;
pub use paper::{GeneratedPaper, PaperQuestion, PaperSection};
pub use upload::UploadOutcome;
pub use user::User;
pub use wizard::{Step, WizardError, WizardState};
