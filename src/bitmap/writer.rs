mod icon;
mod png;

pub use icon::{find_unsupported_size, IcoImageWriter};
pub use png::PngImageWriter;
