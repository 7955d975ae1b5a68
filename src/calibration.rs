/// Running min/max calibrator for one sensor axis.
///
/// While the antenna is swung through all orientations, the extrema of each
/// axis trace out the field range. The midpoint of the range estimates the
/// constant bias on that axis (hard-iron/DC error) and the half-width
/// estimates the per-axis gain. Both stay consistent with the current
/// extrema at all times.
#[derive(Clone, Copy, Debug)]
pub struct AxisCalibrator {
    min: f64,
    max: f64,
    offset: f64,
    scale: f64,
}

impl AxisCalibrator {
    pub fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            offset: 0.0,
            scale: 0.0,
        }
    }

    /// Discard the extrema. Infinite sentinels guarantee the first real
    /// sample moves both bounds and seeds a valid range.
    pub fn reset(&mut self) {
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }

    fn compute(&mut self) {
        self.offset = (self.max + self.min) / 2.0;
        self.scale = (self.max - self.min) / 2.0;
    }

    /// Process one calibration sample. The accumulating boolean lets a
    /// caller feed several axes in sequence and learn in one bit whether
    /// any of them moved a bound:
    ///
    /// ```text
    /// changed = cal_x.sample(x, changed);
    /// changed = cal_y.sample(y, changed);
    /// ```
    pub fn sample(&mut self, value: f64, mut changed: bool) -> bool {
        if value > self.max {
            self.max = value;
            self.compute();
            changed = true;
        }
        if value < self.min {
            self.min = value;
            self.compute();
            changed = true;
        }
        changed
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Estimated bias: midpoint of the observed range.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Estimated per-axis gain: half-width of the observed range. Zero
    /// until two distinct values have been observed.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Default for AxisCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_seeds_both_bounds() {
        let mut cal = AxisCalibrator::new();

        assert!(cal.sample(7.0, false));
        assert_eq!(cal.min(), 7.0);
        assert_eq!(cal.max(), 7.0);
        assert_eq!(cal.offset(), 7.0);
        assert_eq!(cal.scale(), 0.0);
    }

    #[test]
    fn test_sample_sequence() {
        let mut cal = AxisCalibrator::new();

        for value in [10.0, -5.0, 20.0, -20.0, 5.0] {
            cal.sample(value, false);
        }

        assert_eq!(cal.max(), 20.0);
        assert_eq!(cal.min(), -20.0);
        assert_eq!(cal.offset(), 0.0);
        assert_eq!(cal.scale(), 20.0);
    }

    #[test]
    fn test_bounds_contain_every_sample() {
        let mut cal = AxisCalibrator::new();
        let samples = [3.0, -1.5, 8.0, 8.0, -9.25, 0.0, 4.5];
        let mut seen: Vec<f64> = Vec::new();

        for value in samples {
            cal.sample(value, false);
            seen.push(value);

            assert!(cal.min() <= cal.max());
            for s in &seen {
                assert!(cal.min() <= *s && *s <= cal.max());
            }
            assert_eq!(cal.offset(), (cal.max() + cal.min()) / 2.0);
            assert_eq!(cal.scale(), (cal.max() - cal.min()) / 2.0);
        }
    }

    #[test]
    fn test_changed_flag_accumulates() {
        let mut cal = AxisCalibrator::new();
        cal.sample(1.0, false);
        cal.sample(-1.0, false);

        // Inside the known range: no new extremum.
        assert!(!cal.sample(0.5, false));
        // A set flag stays set even when nothing moved.
        assert!(cal.sample(0.5, true));
        // New extremum reports a change.
        assert!(cal.sample(2.0, false));
    }

    #[test]
    fn test_reset_discards_bounds() {
        let mut cal = AxisCalibrator::new();
        cal.sample(10.0, false);
        cal.sample(-10.0, false);

        cal.reset();

        // After reset the very first sample must move both bounds again.
        assert!(cal.sample(1.0, false));
        assert_eq!(cal.min(), 1.0);
        assert_eq!(cal.max(), 1.0);
    }
}
