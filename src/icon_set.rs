use crate::bitmap::writer::find_unsupported_size;
use crate::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconFormat {
    Png { width: u32, height: u32 },
    Ico { sizes: Vec<u32> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: String,
    pub format: IconFormat,
}

impl IconTarget {
    pub fn png(file_name: &str, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.to_owned(),
            format: IconFormat::Png { width, height },
        }
    }

    pub fn ico(file_name: &str, sizes: &[u32]) -> Self {
        Self {
            file_name: file_name.to_owned(),
            format: IconFormat::Ico {
                sizes: sizes.to_vec(),
            },
        }
    }
}

/// Ordered list of files making up an application icon set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    targets: Vec<IconTarget>,
}

impl IconSet {
    pub fn new(targets: Vec<IconTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[IconTarget] {
        &self.targets
    }

    /// Fails on the first ICO entry an icon directory cannot hold.
    pub fn validate(&self) -> crate::Result<()> {
        for target in &self.targets {
            if let IconFormat::Ico { sizes } = &target.format {
                if let Some(size) = find_unsupported_size(sizes) {
                    return Err(Error::UnsupportedIconSize(size));
                }
            }
        }
        Ok(())
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(vec![
            IconTarget::ico("icon.ico", &[16, 32, 48, 256]),
            IconTarget::png("32x32.png", 32, 32),
            IconTarget::png("128x128.png", 128, 128),
            IconTarget::png("128x128@2x.png", 128, 128),
        ])
    }
}
