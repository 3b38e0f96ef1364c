//! Headerless 8-bit images
//!
//! A raw file is exactly `width * height` bytes, one sample per pixel,
//! rows top to bottom. The dimensions are not stored and must be supplied
//! by the caller.

use crate::{IoError, IoResult};
use blobsel_core::{ImageFormat, Pix};
use std::io::{ErrorKind, Read, Write};

/// Read a raw 8-bit image of the given size.
///
/// Bytes after the first `width * height` are left unread.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if the reader ends early and
/// [`IoError::Core`] for zero dimensions.
pub fn read_raw<R: Read>(mut reader: R, width: u32, height: u32) -> IoResult<Pix> {
    let mut data = vec![0u8; width as usize * height as usize];
    reader.read_exact(&mut data).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => IoError::InvalidData(format!(
            "raw data shorter than {}x{} samples",
            width, height
        )),
        _ => IoError::Io(e),
    })?;

    let mut pm = Pix::from_data(width, height, data)?.to_mut();
    pm.set_informat(ImageFormat::Raw);
    Ok(pm.into())
}

/// Write the samples of `pix` with no header.
pub fn write_raw<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    writer.write_all(pix.data())?;
    writer.flush()?;
    Ok(())
}
