use std::path::PathBuf;

pub use cli::CLIParser;
pub use color::RGBColor;
pub use error::{Error, ErrorKind};
use raster::reader::{FileImageReader, ImageReader};
pub use raster::Image;
pub use report::{write_report, ReportFormat};
pub use sampler::{BandResult, BandSampler, Orientation, SamplePoints, DEFAULT_BAND_COUNT};

mod cli;
pub mod color;
mod error;
mod logger;
pub mod raster;
pub mod report;
pub mod sampler;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    band_count: i64,
    report_format: ReportFormat,
}

impl Arguments {
    pub fn report_format(&self) -> ReportFormat {
        self.report_format
    }
}

/// Decodes the input image and samples the center of each of its bands.
pub fn sample_image_bands(arguments: &Arguments) -> Result<Vec<BandResult>> {
    let mut reader = FileImageReader::new(&arguments.input_file);
    let image = reader.read_image()?;
    let sampler = BandSampler::new(arguments.band_count);
    let results = sampler.sample(&image)?;
    logger::log_band_summary(results.len(), &reader.path().display().to_string());
    Ok(results)
}
