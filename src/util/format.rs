//! Display formatting shared by track, artist, and album views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a track duration in milliseconds as `m:ss`.
pub fn duration(ms: u32) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{minutes}:{seconds:02}")
}

/// Format a follower count as `1.2M` / `3.4K`, or plain below a thousand.
#[allow(clippy::cast_precision_loss)]
pub fn followers(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Format a total album length as `X hr Y min`, or `Y min` under an hour.
pub fn album_length(total_ms: u64) -> String {
    let total_minutes = total_ms / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours} hr {minutes} min")
    } else {
        format!("{minutes} min")
    }
}

/// Extract the year from a release date such as `2019-06-21` or `2019`.
pub fn release_year(release_date: &str) -> &str {
    release_date.split('-').next().unwrap_or_default()
}
