use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceNotFound,
    InvalidConfiguration,
    SampleOutOfBounds,
    UnclassifiedFailure,
}

impl ErrorKind {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnclassifiedFailure => 1,
            Self::ResourceNotFound => 3,
            Self::InvalidConfiguration => 4,
            Self::SampleOutOfBounds => 5,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeInputFile(String, image::ImageError),
    BandCountNotPositive(i64),
    BandCountExceedsDimension {
        band_count: i64,
        dimension: u32,
    },
    SampleOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    FailedToWriteReport(std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputFileNotFound(_) => ErrorKind::ResourceNotFound,
            Self::BandCountNotPositive(_) | Self::BandCountExceedsDimension { .. } => {
                ErrorKind::InvalidConfiguration
            }
            Self::SampleOutOfBounds { .. } => ErrorKind::SampleOutOfBounds,
            Self::NoReadPermissionForInputFile(_)
            | Self::UnableToOpenInputFileForReading(_, _)
            | Self::UnableToDecodeInputFile(_, _)
            | Self::FailedToWriteReport(_) => ErrorKind::UnclassifiedFailure,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeInputFile(path, error) => {
                write!(f, "Unable to decode input file '{}': {}", path, error)
            }
            Self::BandCountNotPositive(band_count) => {
                write!(f, "Band count must be greater than zero, but was {}", band_count)
            }
            Self::BandCountExceedsDimension {
                band_count,
                dimension,
            } => {
                write!(
                    f,
                    "Band count {} exceeds the {} pixels available along the band axis",
                    band_count, dimension
                )
            }
            Self::SampleOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Sample point ({}, {}) lies outside of the {}x{} image",
                    x, y, width, height
                )
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write band report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error) => Some(error),
            Self::UnableToDecodeInputFile(_, error) => Some(error),
            Self::FailedToWriteReport(error) => Some(error),
            _ => None,
        }
    }
}
