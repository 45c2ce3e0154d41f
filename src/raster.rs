use image::RgbImage;

use crate::color::RGBColor;

pub mod reader;

/// Read-only pixel access for the band sampler.
pub trait Image {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Color at column `x` and row `y`, or `None` when the point lies
    /// outside of the image.
    fn dot(&self, x: u32, y: u32) -> Option<RGBColor>;
}

impl Image for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn dot(&self, x: u32, y: u32) -> Option<RGBColor> {
        self.get_pixel_checked(x, y).map(RGBColor::from)
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::Image;
    use crate::color::RGBColor;

    #[test]
    fn report_dimensions() {
        let image = RgbImage::new(7, 3);
        assert_eq!(Image::width(&image), 7);
        assert_eq!(Image::height(&image), 3);
    }

    #[test]
    fn look_up_dot() {
        let image = RgbImage::from_fn(4, 2, |x, y| Rgb([x as u8, y as u8, 9]));
        assert_eq!(image.dot(3, 1), Some(RGBColor::new(3, 1, 9)));
        assert_eq!(image.dot(0, 0), Some(RGBColor::new(0, 0, 9)));
    }

    #[test]
    fn dot_outside_of_image_is_absent() {
        let image = RgbImage::new(4, 2);
        assert_eq!(image.dot(4, 0), None, "column past the right edge");
        assert_eq!(image.dot(0, 2), None, "row past the bottom edge");
    }
}
