use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::color::RGBColor;

pub mod writer;

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// An in-memory bitmap in which every pixel holds the same color.
pub struct SolidBitmap {
    color: RGBColor,
    pixels: RgbImage,
}

impl SolidBitmap {
    pub fn new(size: u32, color: RGBColor) -> Self {
        Self {
            color,
            pixels: RgbImage::from_pixel(size, size, color.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }

    /// Nearest-neighbour sampling only ever copies source pixels, so the
    /// result stays a single color at any resolution.
    pub fn scaled(&self, width: u32, height: u32) -> RgbImage {
        if width == self.width() && height == self.height() {
            return self.pixels.clone();
        }
        imageops::resize(&self.pixels, width, height, FilterType::Nearest)
    }
}

#[cfg(test)]
mod test {
    use image::Rgb;

    use super::SolidBitmap;
    use crate::color::RGBColor;

    const TEST_COLOR: RGBColor = RGBColor::new(10, 20, 30);

    #[test]
    fn new_bitmap_is_square_and_solid() {
        let bitmap = SolidBitmap::new(256, TEST_COLOR);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 256);
        assert_eq!(bitmap.color(), TEST_COLOR);
        assert!(bitmap.scaled(256, 256).pixels().all(|p| *p == Rgb([10, 20, 30])));
    }

    #[test]
    fn downscaled_bitmap_keeps_color() {
        let bitmap = SolidBitmap::new(256, TEST_COLOR);
        for size in [16, 32, 48, 128] {
            let scaled = bitmap.scaled(size, size);
            assert_eq!(scaled.dimensions(), (size, size));
            assert!(
                scaled.pixels().all(|p| *p == Rgb([10, 20, 30])),
                "Pixel variance at {0}x{0}",
                size
            );
        }
    }

    #[test]
    fn upscaled_bitmap_keeps_color() {
        let bitmap = SolidBitmap::new(3, TEST_COLOR);
        let scaled = bitmap.scaled(64, 40);
        assert_eq!(scaled.dimensions(), (64, 40));
        assert!(scaled.pixels().all(|p| *p == Rgb([10, 20, 30])));
    }
}
