//! Formatting utilities for terminal output

/// Format a word length as a circled number, e.g. `④`
///
/// Lengths above 20 fall back to a parenthesized number.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        // ① is U+2460, ⑳ is U+2473
        1..=20 => char::from_u32(0x245F + len as u32)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
