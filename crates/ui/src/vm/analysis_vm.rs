use examsight_core::model::AnalysisResult;

/// One row of the topic-frequency breakdown. `share` is the bar width in
/// percent, relative to the most frequent topic shown.
#[derive(Clone, Debug, PartialEq)]
pub struct TopicRow {
    pub topic: String,
    pub count: u32,
    pub share: f64,
}

#[must_use]
pub fn map_topic_rows(analysis: &AnalysisResult, limit: usize) -> Vec<TopicRow> {
    let top = analysis.top_topics(limit);
    let max = top.first().map_or(1, |topic| topic.count.max(1));
    top.into_iter()
        .map(|topic| TopicRow {
            topic: topic.topic.clone(),
            count: topic.count,
            share: f64::from(topic.count) * 100.0 / f64::from(max),
        })
        .collect()
}

/// One row of the year-wise distribution, already in ascending year order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearRow {
    pub year: String,
    pub count: u32,
}

#[must_use]
pub fn map_year_rows(analysis: &AnalysisResult) -> Vec<YearRow> {
    analysis
        .year_distribution
        .iter()
        .map(|(year, count)| YearRow {
            year: year.clone(),
            count: *count,
        })
        .collect()
}
