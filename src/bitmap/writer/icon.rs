use std::io::Write;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::DynamicImage;

use crate::bitmap::{ImageWriter, SolidBitmap};
use crate::Error;

/// Largest edge length an ICO directory entry can describe.
pub const MAX_ICON_SIZE: u32 = 256;

pub fn find_unsupported_size(sizes: &[u32]) -> Option<u32> {
    sizes
        .iter()
        .copied()
        .find(|&size| size == 0 || size > MAX_ICON_SIZE)
}

pub struct IcoImageWriter<'a, T: Write> {
    writer: T,
    bitmap: &'a SolidBitmap,
    name: &'a str,
    sizes: &'a [u32],
}

impl<'a, T: Write> IcoImageWriter<'a, T> {
    pub fn new(
        writer: T,
        bitmap: &'a SolidBitmap,
        name: &'a str,
        sizes: &'a [u32],
    ) -> Self {
        Self {
            writer,
            bitmap,
            name,
            sizes,
        }
    }

    fn validate_sizes(&self) -> crate::Result<()> {
        match find_unsupported_size(self.sizes) {
            Some(size) => Err(Error::UnsupportedIconSize(size)),
            None => Ok(()),
        }
    }

    fn encode_entry(&self, size: u32) -> crate::Result<IconDirEntry> {
        let rgba = DynamicImage::ImageRgb8(self.bitmap.scaled(size, size)).into_rgba8();
        let icon_image = IconImage::from_rgba_data(size, size, rgba.into_raw());
        log::debug!("Encoding {0}x{0} entry of {1}", size, self.name);
        IconDirEntry::encode(&icon_image)
            .map_err(|e| Error::FailedToEncodeIcon(self.name.to_owned(), e))
    }
}

impl<T: Write> ImageWriter for IcoImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.validate_sizes()?;
        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for &size in self.sizes {
            icon_dir.add_entry(self.encode_entry(size)?);
        }
        icon_dir
            .write(&mut self.writer)
            .map_err(|e| Error::FailedToWriteImageData(self.name.to_owned(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToWriteImageData(self.name.to_owned(), e))
    }
}
