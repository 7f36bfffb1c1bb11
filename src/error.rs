use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToCreateOutputDirectory(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToEncodePng(String, image::ImageError),
    FailedToEncodeIcon(String, std::io::Error),
    FailedToWriteImageData(String, std::io::Error),
    UnsupportedIconSize(u32),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToEncodePng(name, error) => {
                write!(f, "Failed to encode PNG image '{}': {}", name, error)
            }
            Self::FailedToEncodeIcon(name, error) => {
                write!(f, "Failed to encode icon '{}': {}", name, error)
            }
            Self::FailedToWriteImageData(name, error) => {
                write!(f, "Failed to write image data of '{}': {}", name, error)
            }
            Self::UnsupportedIconSize(size) => {
                write!(
                    f,
                    "Icon size {0}x{0} is not supported. Sizes must be between 1 and 256.",
                    size
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToCreateOutputDirectory(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToEncodeIcon(_, error)
            | Self::FailedToWriteImageData(_, error) => Some(error),
            Self::FailedToEncodePng(_, error) => Some(error),
            Self::UnsupportedIconSize(_) => None,
        }
    }
}
