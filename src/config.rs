use crate::InvalidParameter;

/// How many row bands (and persistent workers) a parallel engine uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WorkerCount {
    /// `floor(log2(height)) + 1` bands.
    #[default]
    Log2,
    /// A fixed number of bands; zero is treated as one.
    Fixed(usize),
}

impl WorkerCount {
    /// Number of bands for a board with `rows` rows, always at least one.
    pub fn for_rows(self, rows: usize) -> usize {
        match self {
            Self::Log2 => rows.checked_ilog2().map_or(1, |x| x as usize + 1),
            Self::Fixed(n) => n.max(1),
        }
    }
}

/// Limits and scheduling policy shared by all engines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Largest accepted board height.
    pub max_height: usize,
    /// Largest accepted board width.
    pub max_width: usize,
    /// Ignored by [`SequentialEngine`](crate::SequentialEngine).
    pub workers: WorkerCount,
}

impl EngineConfig {
    pub const DEFAULT_MAX_HEIGHT: usize = 100;
    pub const DEFAULT_MAX_WIDTH: usize = 200;

    /// Configuration without size limits beyond `usize`.
    pub fn unbounded() -> Self {
        Self {
            max_height: usize::MAX,
            max_width: usize::MAX,
            workers: WorkerCount::default(),
        }
    }

    pub fn with_workers(self, workers: WorkerCount) -> Self {
        Self { workers, ..self }
    }

    /// Checks the arguments of `populate` against these limits.
    pub fn validate(
        &self,
        height: usize,
        width: usize,
        density: f64,
    ) -> Result<(), InvalidParameter> {
        if !(0.0..=1.0).contains(&density) {
            return Err(InvalidParameter::Density(density));
        }
        self.validate_shape(height, width)
    }

    /// Checks board dimensions against these limits.
    pub fn validate_shape(&self, height: usize, width: usize) -> Result<(), InvalidParameter> {
        if !(1..=self.max_height).contains(&height) {
            return Err(InvalidParameter::Height {
                value: height,
                max: self.max_height,
            });
        }
        if !(1..=self.max_width).contains(&width) {
            return Err(InvalidParameter::Width {
                value: width,
                max: self.max_width,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_height: Self::DEFAULT_MAX_HEIGHT,
            max_width: Self::DEFAULT_MAX_WIDTH,
            workers: WorkerCount::default(),
        }
    }
}
