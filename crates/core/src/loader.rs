//! Descriptor loading
//!
//! Embedded descriptors are stored gzip-compressed; loading decompresses the
//! blob fully into memory and decodes it as a file descriptor message. Any
//! failure aborts the load with no partial result.

use annotation_check_common::{CheckError, FileDescriptor, Result};
use flate2::read::GzDecoder;
use prost::Message;
use std::io::Read;

/// Decompress and decode one compressed file descriptor blob
pub fn load_file_descriptor(compressed: &[u8]) -> Result<FileDescriptor> {
    let mut decoder = GzDecoder::new(compressed);
    let mut buf = Vec::new();
    decoder
        .read_to_end(&mut buf)
        .map_err(|e| CheckError::Load(format!("failed to decompress file descriptor: {e}")))?;

    FileDescriptor::decode(buf.as_slice())
        .map_err(|e| CheckError::Load(format!("failed to decode file descriptor: {e}")))
}
