use std::fmt::Display;

use crate::color::RGBColor;
use crate::raster::Image;
use crate::{Error, Result};

pub const DEFAULT_BAND_COUNT: i64 = 126;

/// Axis along which the bands are laid out. Square images count as vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn primary_dimension(&self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }

    pub fn secondary_dimension(&self, width: u32, height: u32) -> u32 {
        match self {
            Orientation::Horizontal => height,
            Orientation::Vertical => width,
        }
    }

    fn point(&self, primary: u32, secondary: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (primary, secondary),
            Orientation::Vertical => (secondary, primary),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandResult {
    index: u32,
    color: RGBColor,
}

impl BandResult {
    pub fn new(index: u32, color: RGBColor) -> Self {
        Self { index, color }
    }

    /// One-based position of the band, counted left to right or top to bottom.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}

impl Display for BandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Band {}: {}", self.index, self.color)
    }
}

/// Center points of all bands in band order, as `(x, y)` pixel coordinates.
#[derive(Clone, Debug)]
pub struct SamplePoints {
    orientation: Orientation,
    band_size: u32,
    secondary_center: u32,
    band_index: u32,
    band_count: u32,
}

impl SamplePoints {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn band_size(&self) -> u32 {
        self.band_size
    }
}

impl Iterator for SamplePoints {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.band_index >= self.band_count {
            return None;
        }
        let primary_center = self.band_index * self.band_size + self.band_size / 2;
        self.band_index += 1;
        Some(self.orientation.point(primary_center, self.secondary_center))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.band_count - self.band_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SamplePoints {}

/// Any band count is accepted here; it is validated against the image
/// dimensions when sampling.
pub struct BandSampler {
    band_count: i64,
}

impl BandSampler {
    pub fn new(band_count: i64) -> Self {
        BandSampler { band_count }
    }

    pub fn band_count(&self) -> i64 {
        self.band_count
    }

    pub fn sample_points(&self, width: u32, height: u32) -> Result<SamplePoints> {
        if self.band_count <= 0 {
            return Err(Error::BandCountNotPositive(self.band_count));
        }
        let orientation = Orientation::of(width, height);
        let primary_dimension = orientation.primary_dimension(width, height);
        let band_size = i64::from(primary_dimension) / self.band_count;
        if band_size == 0 {
            return Err(Error::BandCountExceedsDimension {
                band_count: self.band_count,
                dimension: primary_dimension,
            });
        }
        // band_count <= primary_dimension from here on, both fit into u32
        let band_size = band_size as u32;
        let secondary_center = orientation.secondary_dimension(width, height) / 2;
        log::debug!(
            "{:?} bands in {}x{} image, {} pixels per band",
            orientation,
            width,
            height,
            band_size
        );
        Ok(SamplePoints {
            orientation,
            band_size,
            secondary_center,
            band_index: 0,
            band_count: self.band_count as u32,
        })
    }

    /// Samples the center pixel of every band.
    ///
    /// Fails before touching any pixel when the band count does not fit the
    /// image, and fails without partial results when a computed point lies
    /// outside of the image.
    pub fn sample<I: Image + ?Sized>(&self, image: &I) -> Result<Vec<BandResult>> {
        let (width, height) = (image.width(), image.height());
        let points = self.sample_points(width, height)?;
        let mut results = Vec::with_capacity(points.len());
        for (band_index, (x, y)) in (1..).zip(points) {
            let color = image.dot(x, y).ok_or(Error::SampleOutOfBounds {
                x,
                y,
                width,
                height,
            })?;
            log::trace!("band {} sampled at ({}, {}): {}", band_index, x, y, color);
            results.push(BandResult::new(band_index, color));
        }
        Ok(results)
    }
}

impl Default for BandSampler {
    fn default() -> Self {
        Self::new(DEFAULT_BAND_COUNT)
    }
}
