/// A draggable bounded-integer control, used for both progress and volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeControl {
    max: u64,
    value: u64,
}

impl RangeControl {
    pub fn new(max: u64, value: u64) -> Self {
        Self {
            max,
            value: value.min(max),
        }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Change the bound, pulling the value in if it no longer fits.
    pub fn set_max(&mut self, max: u64) {
        self.max = max;
        self.value = self.value.min(max);
    }

    pub fn set_value(&mut self, value: u64) {
        self.value = value.min(self.max);
    }

    /// Filled fraction in `[0.0, 1.0]`; an empty range reads as 0.
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.value as f64 / self.max as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped_to_max() {
        let mut r = RangeControl::new(100, 150);
        assert_eq!(r.value(), 100);
        r.set_value(30);
        assert_eq!(r.value(), 30);
        r.set_max(20);
        assert_eq!(r.value(), 20);
        r.set_value(u64::MAX);
        assert_eq!(r.value(), 20);
    }

    #[test]
    fn ratio_handles_empty_range() {
        assert_eq!(RangeControl::default().ratio(), 0.0);
        assert_eq!(RangeControl::new(8, 2).ratio(), 0.25);
    }
}
