//! PNG image format support
//!
//! Only 8-bit grayscale images are read and written. Other color types and
//! bit depths are rejected rather than converted.

use crate::{IoError, IoResult};
use blobsel_core::{ImageFormat, Pix};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if (color_type, bit_depth) != (ColorType::Grayscale, BitDepth::Eight) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?} (expected 8-bit grayscale)",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let mut pix_mut = Pix::new(width, height)?.to_mut();
    pix_mut.set_informat(ImageFormat::Png);

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        pix_mut
            .row_data_mut(y)
            .copy_from_slice(&data[row_start..row_start + width as usize]);
    }

    Ok(pix_mut.into())
}

/// Write a PNG image as 8-bit grayscale
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(pix.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
