//! Configuration for value generation

/// Default ranges used when a schema leaf carries no narrower bounds.
/// All bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Shortest generated string
    pub string_min_len: usize,
    /// Longest generated string
    pub string_max_len: usize,
    /// Lower bound for `number` leaves
    pub number_min: f64,
    /// Upper bound for `number` leaves
    pub number_max: f64,
    /// Lower bound for `integer` leaves
    pub integer_min: i64,
    /// Upper bound for `integer` leaves
    pub integer_max: i64,
    /// Fewest items in a generated array
    pub array_min_len: usize,
    /// Most items in a generated array
    pub array_max_len: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            string_min_len: 3,
            string_max_len: 14,
            number_min: 0.0,
            number_max: 100.0,
            integer_min: 0,
            integer_max: 100,
            array_min_len: 1,
            array_max_len: 5,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string_len(mut self, min: usize, max: usize) -> Self {
        self.string_min_len = min;
        self.string_max_len = max;
        self
    }

    pub fn with_number_range(mut self, min: f64, max: f64) -> Self {
        self.number_min = min;
        self.number_max = max;
        self
    }

    pub fn with_integer_range(mut self, min: i64, max: i64) -> Self {
        self.integer_min = min;
        self.integer_max = max;
        self
    }

    pub fn with_array_len(mut self, min: usize, max: usize) -> Self {
        self.array_min_len = min;
        self.array_max_len = max;
        self
    }
}
