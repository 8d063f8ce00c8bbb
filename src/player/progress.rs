use super::range::RangeControl;

/// Format whole seconds as `M:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// The progress range control plus its `elapsed / total` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    range: RangeControl,
    label: String,
}

impl Default for ProgressView {
    fn default() -> Self {
        Self {
            range: RangeControl::default(),
            label: Self::label_for(0, 0),
        }
    }
}

impl ProgressView {
    fn label_for(position_ms: u64, duration_ms: u64) -> String {
        format!(
            "{} / {}",
            format_time(position_ms / 1000),
            format_time(duration_ms / 1000)
        )
    }

    /// Mirror a position read from the handle.
    pub fn show(&mut self, position_ms: u64, duration_ms: u64) {
        self.range.set_max(duration_ms);
        self.range.set_value(position_ms);
        self.label = Self::label_for(position_ms, duration_ms);
    }

    /// Back to the start of a track of `duration_ms`.
    pub fn reset(&mut self, duration_ms: u64) {
        self.show(0, duration_ms);
    }

    pub fn range(&self) -> &RangeControl {
        &self.range
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_is_unpadded_minutes_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(5), "0:05");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn show_truncates_to_whole_seconds() {
        let mut p = ProgressView::default();
        p.show(65_999, 185_400);
        assert_eq!(p.label(), "1:05 / 3:05");
        assert_eq!(p.range().value(), 65_999);
        assert_eq!(p.range().max(), 185_400);
    }

    #[test]
    fn reset_keeps_total() {
        let mut p = ProgressView::default();
        p.show(42_000, 90_000);
        p.reset(90_000);
        assert_eq!(p.label(), "0:00 / 1:30");
        assert_eq!(p.range().value(), 0);
    }
}
