pub const RANGE_MIN: f64 = 0.0;
pub const RANGE_MAX: f64 = 1000.0;

/// Inclusive numeric bound pair applied to `price` or `sale_price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Orders the bounds and clamps them to the slider limits.
    pub fn normalized(self) -> Self {
        let clamp = |v: f64| {
            if v.is_nan() {
                RANGE_MIN
            } else {
                v.clamp(RANGE_MIN, RANGE_MAX)
            }
        };
        let (a, b) = (clamp(self.min), clamp(self.max));
        Self::new(a.min(b), a.max(b))
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(RANGE_MIN, RANGE_MAX)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search_query: String,
    pub price_range: Range,
    pub sale_price_range: Range,
}
