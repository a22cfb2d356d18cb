use serde::{Deserialize, Serialize};

use crate::model::ids::SessionId;

/// One generated question together with its model answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub number: u32,
    pub question: String,
    pub marks: u32,
    pub section: String,
    pub answer: String,
}

/// The full answer key for a generated paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub session_id: SessionId,
    pub title: String,
    pub answered_questions: Vec<AnsweredQuestion>,
}

impl AnswerSet {
    /// Sum of marks across all answered questions.
    #[must_use]
    pub fn total_marks(&self) -> u32 {
        self.answered_questions.iter().map(|q| q.marks).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_marks_sums_questions() {
        let answers = AnswerSet {
            session_id: SessionId::new("s1"),
            title: "Physics Predicted Paper".to_string(),
            answered_questions: vec![
                AnsweredQuestion {
                    number: 1,
                    question: "State Ohm's law.".to_string(),
                    marks: 1,
                    section: "A".to_string(),
                    answer: "V = IR at constant temperature.".to_string(),
                },
                AnsweredQuestion {
                    number: 2,
                    question: "Derive the lens formula.".to_string(),
                    marks: 5,
                    section: "C".to_string(),
                    answer: "Using similar triangles...".to_string(),
                },
            ],
        };

        assert_eq!(answers.total_marks(), 6);
    }
}
