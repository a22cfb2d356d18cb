/// Human-readable file size for the upload list.
#[must_use]
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{bytes} B")
    } else if bytes_f < MIB {
        format!("{:.1} KB", bytes_f / KIB)
    } else {
        format!("{:.1} MB", bytes_f / MIB)
    }
}

/// "1 Mark" / "5 Marks" label used next to questions.
#[must_use]
pub fn marks_label(marks: u32) -> String {
    if marks == 1 {
        "1 Mark".to_string()
    } else {
        format!("{marks} Marks")
    }
}
