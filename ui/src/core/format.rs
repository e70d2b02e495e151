//! Formatting helpers for presenting ranks.

pub fn format_rank(value: Option<i64>) -> String {
    match value {
        Some(rank) => format!("#{rank}"),
        None => "–".to_string(),
    }
}

pub fn format_row_count(count: usize) -> String {
    if count == 1 {
        "1 keyword".to_string()
    } else {
        format!("{count} keywords")
    }
}
