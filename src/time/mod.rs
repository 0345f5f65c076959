//! Capture time extraction
//!
//! The organizer never parses image containers itself. It hands an open file
//! to a [`CaptureDateDecoder`] and gets back the moment the photo was taken.
//! [`exif::ExifDecoder`] is the implementation used by the binary; tests
//! supply their own.

pub mod exif;

use crate::error::Result;
use chrono::NaiveDateTime;
use std::io::{BufRead, Seek};

pub use self::exif::ExifDecoder;

/// Reads the capture date ("date-time original") of an image
pub trait CaptureDateDecoder {
    /// Decode the capture date from an open image.
    ///
    /// Returns `Ok(None)` when the metadata was readable but carries no usable
    /// capture date. Container or metadata errors are returned as `Err`.
    fn decode<R: BufRead + Seek>(&self, reader: &mut R) -> Result<Option<NaiveDateTime>>;
}

impl<D: CaptureDateDecoder> CaptureDateDecoder for &D {
    fn decode<R: BufRead + Seek>(&self, reader: &mut R) -> Result<Option<NaiveDateTime>> {
        (**self).decode(reader)
    }
}
