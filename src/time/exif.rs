//! EXIF capture time extraction for JPEG and HEIC images

use super::CaptureDateDecoder;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::io::{BufRead, Seek};
use tracing::trace;

/// Decoder backed by kamadak-exif
///
/// Only `DateTimeOriginal` in the primary IFD is consulted. Digitized or
/// modification dates are not substituted when it is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifDecoder;

impl ExifDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureDateDecoder for ExifDecoder {
    fn decode<R: BufRead + Seek>(&self, reader: &mut R) -> Result<Option<NaiveDateTime>> {
        let exif = Reader::new()
            .read_from_container(reader)
            .map_err(|e| Error::ExifRead {
                message: e.to_string(),
            })?;

        let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
            trace!("No DateTimeOriginal field");
            return Ok(None);
        };

        let raw = match &field.value {
            Value::Ascii(parts) => parts
                .first()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default(),
            _ => String::new(),
        };

        let datetime = parse_exif_datetime(&raw);
        trace!(raw = %raw, ?datetime, "Found DateTimeOriginal");
        Ok(datetime)
    }
}

/// Parse an EXIF `DateTimeOriginal` value ("YYYY:MM:DD HH:MM:SS")
///
/// Blank or zeroed values ("0000:00:00 00:00:00") yield `None`.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('\0');

    NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%.f"))
        .ok()
}

/// Build a minimal JPEG whose EXIF block holds only `DateTimeOriginal`.
#[cfg(test)]
pub(crate) fn jpeg_with_date_original(date: &str) -> Vec<u8> {
    let mut value = date.as_bytes().to_vec();
    value.push(0);
    let count = value.len() as u32;

    // Little-endian TIFF: header, IFD0 -> Exif IFD -> DateTimeOriginal.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    // IFD0 at 8: one entry pointing at the Exif IFD (offset 26)
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    // Exif IFD at 26: DateTimeOriginal stored at offset 44
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&count.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(tiff.len(), 44);
    tiff.extend_from_slice(&value);

    let mut app1 = b"Exif\0\0".to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::io::Cursor;

    #[test]
    fn test_parse_date_time_original() {
        let dt = parse_exif_datetime("2023:05:06 10:00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 5, 6));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 0, 0));

        // Some cameras pad the field or leave the terminator in place
        let dt = parse_exif_datetime(" 2019:12:31 23:59:58\0").unwrap();
        assert_eq!(dt.day(), 31);

        let dt = parse_exif_datetime("2021:02:03 04:05:06.250").unwrap();
        assert_eq!(dt.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_non_exif_separators_rejected() {
        assert!(parse_exif_datetime("2023-05-06 10:00:00").is_none());
        assert!(parse_exif_datetime("2023:05:06T10:00:00").is_none());
        assert!(parse_exif_datetime("2023:13:01 00:00:00").is_none());
    }

    #[test]
    fn test_zeroed_date_is_missing() {
        assert!(parse_exif_datetime("0000:00:00 00:00:00").is_none());
        assert!(parse_exif_datetime("    :  :     :  :  ").is_none());
        assert!(parse_exif_datetime("").is_none());
    }

    #[test]
    fn test_decode_jpeg_date_original() {
        let bytes = jpeg_with_date_original("2023:05:06 10:00:00");
        let date = ExifDecoder::new()
            .decode(&mut Cursor::new(bytes))
            .unwrap()
            .unwrap();
        assert_eq!(
            date,
            NaiveDateTime::parse_from_str("2023-05-06 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn test_decode_zeroed_date() {
        let bytes = jpeg_with_date_original("0000:00:00 00:00:00");
        let date = ExifDecoder::new().decode(&mut Cursor::new(bytes)).unwrap();
        assert!(date.is_none());
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let mut reader = Cursor::new(b"definitely not an image".to_vec());
        let err = ExifDecoder::new().decode(&mut reader).unwrap_err();
        assert!(matches!(err, Error::ExifRead { .. }));
    }

    #[test]
    fn test_decode_jpeg_without_exif_is_error() {
        let mut reader = Cursor::new(vec![0xFF, 0xD8, 0xFF, 0xD9]);
        assert!(ExifDecoder::new().decode(&mut reader).is_err());
    }
}
