use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

// Raw format tags shared with the calling runtime.
// The values are part of the call boundary and must not be renumbered.
pub const FORMAT_BITS: i32 = 1;
pub const FORMAT_INT8: i32 = 2;
pub const FORMAT_INT16: i32 = 3;
pub const FORMAT_INT32: i32 = 4;
pub const FORMAT_INT64: i32 = 5;

/// Document set representation behind a base buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseFormat {
    /// Bit vector: the buffer holds ceil(max_doc/64) 64-bit words
    Bits,
    /// Sorted array of 32-bit doc ids, ascending and unique
    Int32,
}

impl BaseFormat {
    pub fn from_tag(tag: i32) -> Result<Self> {
        match tag {
            FORMAT_BITS => Ok(BaseFormat::Bits),
            FORMAT_INT32 => Ok(BaseFormat::Int32),
            _ => Err(Error::new(
                ErrorKind::UnsupportedFormat,
                format!("unknown base format tag: {}", tag),
            )),
        }
    }
}

/// Storage width of a per-document ordinal array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrdFormat {
    Int8,
    Int16,
    Int32,
    Int64,
}

impl OrdFormat {
    pub fn from_tag(tag: i32) -> Result<Self> {
        match tag {
            FORMAT_INT8 => Ok(OrdFormat::Int8),
            FORMAT_INT16 => Ok(OrdFormat::Int16),
            FORMAT_INT32 => Ok(OrdFormat::Int32),
            FORMAT_INT64 => Ok(OrdFormat::Int64),
            _ => Err(Error::new(
                ErrorKind::UnsupportedFormat,
                format!("unknown ordinal format tag: {}", tag),
            )),
        }
    }
}
