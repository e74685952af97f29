use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::{debug, warn};

use crate::config::{DEFAULT_COMPRESSION_LEVEL, MAX_DECOMPRESSED_SIZE};
use crate::error::{Result, ShareError};

/// Read chunk size used while inflating
const CHUNK_SIZE: usize = 4096;

/// Compresses data with gzip at the smallest-output level.
pub fn compress(data: &[u8]) -> Vec<u8> {
    compress_with_level(data, DEFAULT_COMPRESSION_LEVEL)
}

/// Compresses data with gzip at the given level (clamped to 0..=9).
///
/// Writing into an in-memory buffer cannot fail, so this is total; an
/// encoder error would indicate a bug and is logged.
pub fn compress_with_level(data: &[u8], level: u32) -> Vec<u8> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(data.len() / 2 + 32),
        Compression::new(level.min(9)),
    );
    let written = encoder.write_all(data).and_then(|_| encoder.finish());
    match written {
        Ok(out) => {
            debug!(input = data.len(), output = out.len(), "gzip compressed");
            out
        }
        Err(e) => {
            warn!(error = %e, "gzip encoder failed on in-memory buffer");
            Vec::new()
        }
    }
}

/// Decompresses gzip data with the default 64 KiB output cap.
///
/// # Errors
/// See [`decompress_bounded`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_bounded(data, MAX_DECOMPRESSED_SIZE)
}

/// Decompresses gzip data, refusing to produce more than `max_output_bytes`.
///
/// The limit is enforced chunk by chunk, so a gzip bomb is abandoned after at
/// most `max_output_bytes + CHUNK_SIZE` bytes of output.
///
/// # Errors
/// Returns `ShareError::PayloadTooLarge` once output exceeds the limit, and
/// `ShareError::CorruptStream` if the input is not a valid gzip stream.
pub fn decompress_bounded(data: &[u8], max_output_bytes: usize) -> Result<Vec<u8>> {
    let mut reader = GzDecoder::new(data);
    let mut out = Vec::with_capacity(data.len().saturating_mul(4).min(max_output_bytes));
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                out.extend_from_slice(&buffer[..n]);
                if out.len() > max_output_bytes {
                    warn!(limit = max_output_bytes, "Decompressed payload exceeds limit");
                    return Err(ShareError::PayloadTooLarge {
                        size: out.len(),
                        limit: max_output_bytes,
                    });
                }
            }
            Err(e) => return Err(ShareError::CorruptStream(e.to_string())),
        }
    }

    if out.is_empty() && data.is_empty() {
        return Err(ShareError::CorruptStream(String::from("empty gzip stream")));
    }

    debug!(input = data.len(), output = out.len(), "gzip decompressed");
    Ok(out)
}
