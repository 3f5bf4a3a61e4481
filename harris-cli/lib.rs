use harris_core::{init_thread_pool, Field, HarrisParams, Image};
use harris_detect::{correlation, ConfigError, DetectorConfig, Detection, HarrisDetector, HarrisError, ScoredCorner};
use image::{ImageError, ImageReader, RgbImage};
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod cli;
pub mod render;

pub use harris_core::{self, Corner};
pub use harris_detect::{self, DetectorBuilder};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Harris error: {0}")]
    Detect(#[from] HarrisError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Error loading image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("Error writing image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Decoded source: the colour original for drawing and its grayscale version for detection
pub struct LoadedImage {
    pub color: RgbImage,
    pub gray: Image,
}

/// Decode an image file of any supported format
pub fn load_image(path: &Path) -> PipelineResult<LoadedImage> {
    let decode_err = |source: ImageError| PipelineError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .map_err(|e| decode_err(e.into()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.into()))?
        .decode()
        .map_err(decode_err)?;

    let color = decoded.into_rgb8();
    let gray = render::gray_from_rgb(&color);
    debug!("decoded {} ({}x{})", path.display(), gray.width(), gray.height());
    Ok(LoadedImage { color, gray })
}

/// Correlation flavour for the filter demonstration modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Correlate,
    Convolve,
}

/// Run the demo edge kernel over the grayscale input and write the 8-bit normalised result
pub fn run_filter(mode: FilterMode, input: &Path, output: &Path) -> PipelineResult<Field> {
    let loaded = load_image(input)?;
    let kernel = correlation::demo_kernel();
    let result = match mode {
        FilterMode::Correlate => correlation::correlate(&loaded.gray, &kernel),
        FilterMode::Convolve => correlation::convolve(&loaded.gray, &kernel),
    };
    info!("{:?} produced a {}x{} field", mode, result.width(), result.height());

    render::field_to_gray(&result)
        .save(output)
        .map_err(|source| PipelineError::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    Ok(result)
}

/// High-level Harris pipeline: decode, detect, draw and encode
pub struct HarrisPipeline {
    detector: HarrisDetector,
}

impl HarrisPipeline {
    /// Create a new pipeline with the given parameters
    pub fn new(params: HarrisParams) -> PipelineResult<Self> {
        let detector = HarrisDetector::new(params)?;

        if let Err(e) = init_thread_pool(detector.params().n_threads) {
            debug!("keeping existing thread pool: {}", e);
        }

        Ok(Self { detector })
    }

    pub fn from_config(config: &DetectorConfig) -> PipelineResult<Self> {
        info!("{}", config.summary());
        Self::new(config.params.clone())
    }

    /// Detect corners on an already decoded grayscale image
    pub fn detect(&self, img: &Image) -> PipelineResult<Detection> {
        Ok(self.detector.detect_with_response(img)?)
    }

    /// Detect on `input`, draw a ring at each corner of the colour original and write `output`.
    ///
    /// Nothing is written when decoding fails.
    pub fn run(&self, input: &Path, output: &Path) -> PipelineResult<Vec<ScoredCorner>> {
        let LoadedImage { mut color, gray } = load_image(input)?;
        let detection = self.detect(&gray)?;
        info!(
            "{}: {} candidates, {} corners",
            input.display(),
            detection.candidates.len(),
            detection.corners.len()
        );

        render::draw_corners(&mut color, &detection.positions());
        color.save(output).map_err(|source| PipelineError::Encode {
            path: output.to_path_buf(),
            source,
        })?;
        Ok(detection.corners)
    }

    pub fn detector(&self) -> &HarrisDetector {
        &self.detector
    }

    pub fn params(&self) -> &HarrisParams {
        self.detector.params()
    }
}
