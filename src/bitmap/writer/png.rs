use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::bitmap::{ImageWriter, SolidBitmap};
use crate::Error;

pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    bitmap: &'a SolidBitmap,
    name: &'a str,
    width: u32,
    height: u32,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(
        writer: T,
        bitmap: &'a SolidBitmap,
        name: &'a str,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            writer,
            bitmap,
            name,
            width,
            height,
        }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let pixels = self.bitmap.scaled(self.width, self.height);
        log::debug!(
            "Encoding {} as {}x{} RGB PNG",
            self.name,
            self.width,
            self.height
        );
        PngEncoder::new(&mut self.writer)
            .write_image(
                pixels.as_raw(),
                self.width,
                self.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| Error::FailedToEncodePng(self.name.to_owned(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToWriteImageData(self.name.to_owned(), e))
    }
}
