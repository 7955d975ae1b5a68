/// Single-pole IIR low-pass filter, one instance per noisy scalar channel.
/// Decrease alpha to increase damping. The state starts at zero, so the
/// first readings carry a startup transient that decays geometrically.
#[derive(Clone, Copy, Debug)]
pub struct LowPassFilter {
    alpha: f64,
    last: f64,
}

impl LowPassFilter {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, last: 0.0 }
    }

    /// Smooth one sample and persist the result as the new filter state.
    pub fn update(&mut self, value: f64) -> f64 {
        let result = self.alpha * value + (1.0 - self.alpha) * self.last;
        self.last = result;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_response() {
        let mut filter = LowPassFilter::new(0.5);

        assert_eq!(filter.update(10.0), 5.0);
        assert_eq!(filter.update(10.0), 7.5);
        assert_eq!(filter.update(10.0), 8.75);
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut filter = LowPassFilter::new(0.5);

        let mut out = 0.0;
        for _ in 0..60 {
            out = filter.update(10.0);
        }
        assert!((out - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_one_passes_through() {
        let mut filter = LowPassFilter::new(1.0);

        assert_eq!(filter.update(42.0), 42.0);
        assert_eq!(filter.update(-7.0), -7.0);
    }

    #[test]
    fn test_smaller_alpha_damps_harder() {
        let mut light = LowPassFilter::new(0.5);
        let mut heavy = LowPassFilter::new(0.1);

        assert!(light.update(10.0) > heavy.update(10.0));
    }
}
