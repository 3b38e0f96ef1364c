//! PGM (Portable Gray Map) format support
//!
//! Reads and writes binary PGM (P5) with a maxval of at most 255.
//! Header comments (`#` to end of line) are skipped. The ASCII variant
//! (P2) is detected but not decoded.

use crate::{IoError, IoResult};
use blobsel_core::{ImageFormat, Pix};
use std::io::{BufRead, Read, Write};

/// Read a binary PGM image from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5` magic
///
/// # Returns
/// An 8-bit `Pix`. Samples are stored as read, without rescaling to
/// maxval 255.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_header_token(&mut reader)?;
    match magic.as_str() {
        "P5" => {}
        "P2" => {
            return Err(IoError::UnsupportedFormat(
                "ASCII PGM (P2) is not supported".to_string(),
            ));
        }
        other => {
            return Err(IoError::InvalidData(format!(
                "not a PGM file: magic {:?}",
                other
            )));
        }
    }

    let width = parse_header_value(&mut reader, "width")?;
    let height = parse_header_value(&mut reader, "height")?;
    let maxval = parse_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PGM maxval {} (only 1..=255 supported)",
            maxval
        )));
    }

    let expected = (width as u64)
        .checked_mul(height as u64)
        .filter(|&n| usize::try_from(n).is_ok())
        .ok_or_else(|| {
            IoError::InvalidData(format!("PGM size {}x{} is too large", width, height))
        })?;

    // Grow with the bytes actually present, not the header's claim
    let mut data = Vec::new();
    reader.take(expected).read_to_end(&mut data)?;
    if (data.len() as u64) < expected {
        return Err(IoError::InvalidData(format!(
            "PGM pixel data truncated: {} of {} bytes",
            data.len(),
            expected
        )));
    }

    let mut pm = Pix::from_data(width, height, data)?.to_mut();
    pm.set_informat(ImageFormat::Pnm);
    Ok(pm.into())
}

/// Write a `Pix` as binary PGM (P5, maxval 255) to a writer.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", pix.width(), pix.height())?;
    writer.write_all(pix.data())?;
    writer.flush()?;
    Ok(())
}

fn parse_header_value<R: BufRead>(reader: &mut R, name: &str) -> IoResult<u32> {
    let token = read_header_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid PGM {}: {:?}", name, token)))
}

/// Read one whitespace-delimited header token, skipping comments.
///
/// Consumes exactly one whitespace byte after the token, which is what
/// separates the maxval from the pixel data.
fn read_header_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let mut byte = [0u8; 1];
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData(
                    "unexpected end of PGM header".to_string(),
                ));
            }
            return Ok(token);
        }

        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip() {
        let pix = Pix::from_data(4, 2, vec![0, 10, 20, 30, 255, 254, 1, 0]).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&pix, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P5\n4 2\n255\n"));

        let pix2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(pix2.width(), 4);
        assert_eq!(pix2.height(), 2);
        assert_eq!(pix2.data(), pix.data());
        assert_eq!(pix2.informat(), ImageFormat::Pnm);
    }

    #[test]
    fn test_pnm_comments() {
        let mut data = b"P5\n# created by hand\n2 # width\n1\n255\n".to_vec();
        data.extend_from_slice(&[7, 200]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.data(), &[7, 200]);
    }

    #[test]
    fn test_pnm_data_starting_with_whitespace_byte() {
        // 0x0a is a valid sample and must not be eaten by the header parser
        let mut data = b"P5 2 1 255\n".to_vec();
        data.extend_from_slice(&[0x0a, 0x20]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.data(), &[0x0a, 0x20]);
    }

    #[test]
    fn test_pnm_rejects_ascii_and_16bit() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P2\n1 1\n255\n0\n".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_pnm(Cursor::new(b"P5\n1 1\n65535\n\0\0".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_pnm_huge_header_without_data() {
        let data = b"P5\n4294967295 4294967295\n255\n\x00".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));

        let data = b"P5\n100000 100000\n255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_pnm_truncated() {
        let data = b"P5\n3 3\n255\n\x01\x02".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }
}
