mod analysis_vm;
mod format;

pub use analysis_vm::{TopicRow, YearRow, map_topic_rows, map_year_rows};
pub use format::{format_size, marks_label};
