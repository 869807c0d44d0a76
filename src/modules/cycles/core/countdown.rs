// Countdown arithmetic shared by the ticker and the presentation shell.

use crate::modules::cycles::core::state::Cycle;

/// Seconds left on the active cycle, or zero when nothing is counting down.
pub fn remaining_seconds(active: Option<&Cycle>, elapsed_seconds: u64) -> u64 {
    active
        .map(|cycle| cycle.total_seconds().saturating_sub(elapsed_seconds))
        .unwrap_or(0)
}

/// `MM:SS`, zero padded.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
