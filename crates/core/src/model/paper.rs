use serde::{Deserialize, Serialize};

use crate::model::ids::SessionId;

/// One question in the generated paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperQuestion {
    pub number: u32,
    pub question: String,
    pub marks: u32,
    pub section: String,
    pub topic: String,
}

/// One section of the generated paper, with its own instructions and marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSection {
    pub name: String,
    pub instructions: String,
    pub questions: Vec<PaperQuestion>,
    pub total_marks: u32,
}

/// The AI-generated predicted question paper for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPaper {
    pub session_id: SessionId,
    pub title: String,
    pub subject: String,
    pub total_marks: u32,
    pub duration: String,
    pub general_instructions: Vec<String>,
    pub sections: Vec<PaperSection>,
}

impl GeneratedPaper {
    /// Total number of questions across all sections.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_count_sums_sections() {
        let question = PaperQuestion {
            number: 1,
            question: "State Ohm's law.".to_string(),
            marks: 1,
            section: "A".to_string(),
            topic: "Electricity".to_string(),
        };
        let paper = GeneratedPaper {
            session_id: SessionId::new("s1"),
            title: "Physics Predicted Paper".to_string(),
            subject: "Physics".to_string(),
            total_marks: 70,
            duration: "3 hours".to_string(),
            general_instructions: vec!["All questions are compulsory.".to_string()],
            sections: vec![
                PaperSection {
                    name: "Section A".to_string(),
                    instructions: "Answer in one sentence.".to_string(),
                    questions: vec![question.clone(), question.clone()],
                    total_marks: 2,
                },
                PaperSection {
                    name: "Section B".to_string(),
                    instructions: String::new(),
                    questions: vec![question],
                    total_marks: 1,
                },
            ],
        };

        assert_eq!(paper.question_count(), 3);
    }
}
