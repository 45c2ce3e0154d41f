use std::io;
use std::path::{Path, PathBuf};

use image::RgbImage;

use super::Image;
use crate::{Error, Result};

pub trait ImageReader {
    type Output: Image;

    fn read_image(&mut self) -> Result<Self::Output>;
}

/// Decodes an image file of any format the `image` crate recognizes.
///
/// The format is guessed from the file content, so a misleading extension does
/// not matter. Alpha channels are dropped and deeper channels are scaled down
/// to 8 bits.
pub struct FileImageReader {
    path: PathBuf,
}

impl FileImageReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn map_open_error(&self, error: io::Error) -> Error {
        match error.kind() {
            io::ErrorKind::NotFound => Error::InputFileNotFound(self.display_path()),
            io::ErrorKind::PermissionDenied => {
                Error::NoReadPermissionForInputFile(self.display_path())
            }
            _ => Error::UnableToOpenInputFileForReading(self.display_path(), error),
        }
    }
}

impl ImageReader for FileImageReader {
    type Output = RgbImage;

    fn read_image(&mut self) -> Result<RgbImage> {
        let reader = image::ImageReader::open(&self.path)
            .map_err(|e| self.map_open_error(e))?
            .with_guessed_format()
            .map_err(|e| Error::UnableToOpenInputFileForReading(self.display_path(), e))?;
        log::debug!(
            "Decoding '{}' as {:?}",
            self.display_path(),
            reader.format()
        );
        let decoded = reader
            .decode()
            .map_err(|e| Error::UnableToDecodeInputFile(self.display_path(), e))?;
        let image = decoded.to_rgb8();
        log::info!(
            "Loaded {}x{} image from '{}'",
            image.width(),
            image.height(),
            self.display_path()
        );
        Ok(image)
    }
}
