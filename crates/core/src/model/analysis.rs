use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::SessionId;

//
// ─── TOPIC FREQUENCY ───────────────────────────────────────────────────────────
//

/// How often one topic appeared across the uploaded papers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicFrequency {
    pub topic: String,
    pub count: u32,
    pub years: Vec<String>,
    pub percentage: f64,
}

/// One question extracted from the uploaded papers, with its metadata.
///
/// Year and section are missing when the source paper did not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedQuestion {
    pub question: String,
    pub marks: u32,
    pub topic: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

//
// ─── ANALYSIS RESULT ───────────────────────────────────────────────────────────
//

/// Pattern analysis over one session's uploaded papers.
///
/// Immutable once received; a new upload/analyze cycle replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub session_id: SessionId,
    pub total_questions: u32,
    pub topics: Vec<TopicFrequency>,
    pub year_distribution: BTreeMap<String, u32>,
    pub predicted_topics: Vec<String>,
    pub pattern_insights: Vec<String>,
    pub all_questions: Vec<AnalyzedQuestion>,
}

impl AnalysisResult {
    /// The topics with the highest occurrence counts, most frequent first.
    #[must_use]
    pub fn top_topics(&self, limit: usize) -> Vec<&TopicFrequency> {
        let mut topics: Vec<&TopicFrequency> = self.topics.iter().collect();
        topics.sort_by(|a, b| b.count.cmp(&a.count));
        topics.truncate(limit);
        topics
    }

    /// Number of distinct years observed across the papers.
    #[must_use]
    pub fn years_analyzed(&self) -> usize {
        self.year_distribution.len()
    }
}
