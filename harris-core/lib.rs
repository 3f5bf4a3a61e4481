use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw data length does not match `width * height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Grid data length mismatch: expected {expected}, got {actual}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Row-major 2-D grid of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

/// Row-major 8-bit grayscale image
pub type Image = Grid<u8>;

/// Row-major floating point field (gradients, responses)
pub type Field = Grid<f32>;

impl<T: Copy + Default> Grid<T> {
    /// Grid filled with `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap an existing row-major buffer, checking its length
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, DimensionMismatch> {
        let expected = width * height;
        if data.len() != expected {
            return Err(DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Build a grid by evaluating `f(x, y)` at every position
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.width + x] = value;
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Integer pixel position of a detected corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Corner {
    pub x: usize,
    pub y: usize,
}

impl Corner {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance in pixels
    pub fn distance_squared(&self, other: &Corner) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Corner) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// Tunables of the Harris pipeline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarrisParams {
    /// Corner/edge discrimination bias in `det - k * trace^2`
    pub k: f32,
    /// Gaussian smoothing window for the structure tensor (odd, >= 3)
    pub window_size: usize,
    /// Acceptance cutoff on the min-max normalised response, in [0, 1]
    pub threshold: f32,
    /// Candidate cap before spatial suppression
    pub max_corners: usize,
    /// Minimum pixel distance between accepted corners
    pub min_distance: f32,
    pub n_threads: usize,
}

impl Default for HarrisParams {
    fn default() -> Self {
        Self {
            k: 0.04,
            window_size: 5,
            threshold: 0.01,
            max_corners: 500,
            min_distance: 10.0,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
