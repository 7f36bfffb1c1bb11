use std::{
    fs::{self, File, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

use bitmap::{
    writer::{IcoImageWriter, PngImageWriter},
    ImageWriter, SolidBitmap,
};
pub use cli::CLIParser;
pub use color::{ColorParseError, RGBColor};
pub use error::Error;
pub use icon_set::{IconFormat, IconSet, IconTarget};

mod bitmap;
mod cli;
mod color;
mod error;
mod icon_set;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "src-tauri/icons";
pub const SOURCE_BITMAP_SIZE: u32 = 256;

pub struct Arguments {
    output_dir: PathBuf,
    color: RGBColor,
}

impl Arguments {
    pub fn new(output_dir: PathBuf, color: RGBColor) -> Self {
        Self { output_dir, color }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn color(&self) -> RGBColor {
        self.color
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_OUTPUT_DIRECTORY), RGBColor::default())
    }
}

fn create_output_directory(dir_path: &Path) -> Result<()> {
    fs::create_dir_all(dir_path).map_err(|e| {
        Error::UnableToCreateOutputDirectory(dir_path.to_string_lossy().into_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_string_lossy().into_owned(), e)
        })
}

fn write_icon_target(bitmap: &SolidBitmap, target: &IconTarget, file_path: &Path) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let output_file_writer = BufWriter::new(&output_file);
    let name = target.file_name.as_str();
    match &target.format {
        IconFormat::Png { width, height } => {
            PngImageWriter::new(output_file_writer, bitmap, name, *width, *height).write_image()
        }
        IconFormat::Ico { sizes } => {
            IcoImageWriter::new(output_file_writer, bitmap, name, sizes).write_image()
        }
    }
}

/// Writes every target of `icon_set` into the output directory and returns
/// the written paths in target order. Stops at the first failure.
pub fn generate_icon_set(arguments: &Arguments, icon_set: &IconSet) -> Result<Vec<PathBuf>> {
    icon_set.validate()?;
    create_output_directory(&arguments.output_dir)?;
    let bitmap = SolidBitmap::new(SOURCE_BITMAP_SIZE, arguments.color);
    log::info!(
        "Writing {} icons filled with {} to {}",
        icon_set.targets().len(),
        bitmap.color(),
        arguments.output_dir.display()
    );
    let mut written = Vec::with_capacity(icon_set.targets().len());
    for target in icon_set.targets() {
        let file_path = arguments.output_dir.join(&target.file_name);
        write_icon_target(&bitmap, target, &file_path)?;
        log::info!("Wrote {}", file_path.display());
        written.push(file_path);
    }
    Ok(written)
}

pub fn generate_icons(arguments: &Arguments) -> Result<Vec<PathBuf>> {
    generate_icon_set(arguments, &IconSet::default())
}
