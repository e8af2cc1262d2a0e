//! Progress bar rendering for status messages.

/// Number of slots in the status-message progress bar.
pub const PROGRESS_BAR_SLOTS: usize = 10;

/// Render a fractional progress value as a fixed-width bar with a
/// percentage, e.g. `█████░░░░░ 50%`.
pub fn format_progress_bar(progress: f64, slots: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((progress * slots as f64) as usize).min(slots);
    let percent = (progress * 100.0) as u32;

    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(slots - filled),
        percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_full_bars() {
        assert_eq!(format_progress_bar(0.0, 10), "░░░░░░░░░░ 0%");
        assert_eq!(format_progress_bar(1.0, 10), "██████████ 100%");
    }

    #[test]
    fn partial_fill_floors() {
        assert_eq!(format_progress_bar(0.5, 10), "█████░░░░░ 50%");
        assert_eq!(format_progress_bar(0.49, 10), "████░░░░░░ 49%");
        assert_eq!(format_progress_bar(0.05, 10), "░░░░░░░░░░ 5%");
    }

    #[test]
    fn filled_count_is_monotonic() {
        let mut previous = 0;
        for step in 0..=100 {
            let bar = format_progress_bar(step as f64 / 100.0, 10);
            let filled = bar.chars().filter(|&c| c == '█').count();
            assert!(filled >= previous);
            previous = filled;
        }
        assert_eq!(previous, 10);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(format_progress_bar(-0.5, 10), "░░░░░░░░░░ 0%");
        assert_eq!(format_progress_bar(1.5, 10), "██████████ 100%");
    }
}
