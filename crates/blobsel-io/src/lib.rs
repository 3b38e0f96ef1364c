//! blobsel-io - Image I/O for blobsel
//!
//! Reads and writes 8-bit grayscale images:
//!
//! - **Raw** - headerless `width * height` bytes, dimensions supplied by the caller
//! - **PGM** - binary `P5` (feature `pnm`, on by default)
//! - **PNG** - 8-bit grayscale (feature `png-format`, on by default)
//!
//! Files with a header are detected by their magic bytes; raw files must be
//! opened with [`read_raw_file`].

pub mod error;
pub mod format;
pub mod raw;

#[cfg(feature = "pnm")]
pub mod pnm;

#[cfg(feature = "png-format")]
pub mod png;

pub use blobsel_core::ImageFormat;
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use raw::{read_raw, write_raw};

use blobsel_core::Pix;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Read an image in a known format from a reader.
///
/// Raw data cannot be read this way because its dimensions are not
/// stored; use [`read_raw`] instead.
#[cfg_attr(
    not(any(feature = "pnm", feature = "png-format")),
    allow(unused_variables)
)]
pub fn read_image_format<R: BufRead + Seek>(reader: R, format: ImageFormat) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),

        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),

        ImageFormat::Raw => Err(IoError::UnsupportedFormat(
            "raw images need explicit dimensions".to_string(),
        )),

        _ => Err(IoError::UnsupportedFormat(format!(
            "format {:?} is not supported or not enabled",
            format
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image in the given format to a writer.
pub fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        ImageFormat::Raw => raw::write_raw(pix, writer),

        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),

        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),

        _ => Err(IoError::UnsupportedFormat(format!(
            "format {:?} is not supported or not enabled",
            format
        ))),
    }
}

/// Read a raw 8-bit image file of the given size.
pub fn read_raw_file<P: AsRef<Path>>(path: P, width: u32, height: u32) -> IoResult<Pix> {
    let reader = BufReader::new(File::open(path)?);
    raw::read_raw(reader, width, height)
}

/// Write the samples of `pix` to a file with no header.
pub fn write_raw_file<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    write_image(pix, path, ImageFormat::Raw)
}
