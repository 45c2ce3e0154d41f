use std::fmt::Display;

use image::{Rgb, Rgba};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RGBColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RGBColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl From<&Rgb<u8>> for RGBColor {
    fn from(value: &Rgb<u8>) -> Self {
        let [red, green, blue] = value.0;
        RGBColor { red, green, blue }
    }
}

impl From<Rgb<u8>> for RGBColor {
    fn from(value: Rgb<u8>) -> Self {
        RGBColor::from(&value)
    }
}

/// Alpha is dropped, the color channels are taken as stored.
impl From<&Rgba<u8>> for RGBColor {
    fn from(value: &Rgba<u8>) -> Self {
        let [red, green, blue, _] = value.0;
        RGBColor { red, green, blue }
    }
}

impl From<Rgba<u8>> for RGBColor {
    fn from(value: Rgba<u8>) -> Self {
        RGBColor::from(&value)
    }
}

impl From<RGBColor> for Rgb<u8> {
    fn from(value: RGBColor) -> Self {
        Rgb([value.red, value.green, value.blue])
    }
}

impl Display for RGBColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}
