//! Configuration for timing `trace()` across matrix sizes

/// Sizes and fill values used by [`run_trace_timings`](crate::timing::run_trace_timings)
///
/// Square matrices of size `2^e` are built for every exponent `e` in
/// `min_exponent..=max_exponent`.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceTimingConfig {
    /// Smallest size exponent
    pub min_exponent: u32,

    /// Largest size exponent
    pub max_exponent: u32,

    /// Value of every element the matrices are built with, shared cells included
    pub fill: i64,
}

impl Default for TraceTimingConfig {
    fn default() -> Self {
        Self {
            min_exponent: 10, // 1024 × 1024
            max_exponent: 14, // 16384 × 16384
            fill: 0,
        }
    }
}

impl TraceTimingConfig {
    /// Create a config covering the exponents `min_exponent..=max_exponent`
    pub fn with_exponents(min_exponent: u32, max_exponent: u32) -> Self {
        Self {
            min_exponent,
            max_exponent,
            ..Self::default()
        }
    }

    /// The matrix sizes to time, smallest first
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_exponent..=self.max_exponent).map(|exponent| 1usize << exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let sizes: Vec<_> = TraceTimingConfig::default().sizes().collect();
        assert_eq!(sizes, vec![1024, 2048, 4096, 8192, 16384]);
    }

    #[test]
    fn test_empty_range() {
        let config = TraceTimingConfig::with_exponents(5, 4);
        assert_eq!(config.sizes().count(), 0);
    }
}
