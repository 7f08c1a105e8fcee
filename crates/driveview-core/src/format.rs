//! Formatting utilities for file sizes, dates and counts.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format a file size with 1024-based units and one decimal (e.g. "2.0 MB").
///
/// Unknown or zero sizes render as an empty string. GB is the largest unit.
pub fn format_file_size(size: Option<u64>) -> String {
    let Some(bytes) = size.filter(|b| *b > 0) else {
        return String::new();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Format a modification time relative to `now`.
///
/// Whole days are rounded up: "Today", "Yesterday", "N days ago" within a
/// week, "N weeks ago" within a month, otherwise the date as YYYY-MM-DD.
pub fn format_modified(modified: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(modified) = modified else {
        return String::new();
    };

    let diff_ms = (now - modified).num_milliseconds().abs();
    let days = (diff_ms + MS_PER_DAY - 1) / MS_PER_DAY;

    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => {
            let weeks = (days + 6) / 7;
            if weeks == 1 {
                "1 week ago".to_string()
            } else {
                format!("{} weeks ago", weeks)
            }
        }
        _ => modified.format("%Y-%m-%d").to_string(),
    }
}

/// Item count label ("1 item", "3 items").
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}
