use std::io::Write;

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use crate::{Error, Result};

/// Size in bytes of the default scratch buffer.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// Reusable bounded scratch space for the compression functions.
///
/// Both `compress` and `decompress` drain their output through this buffer
/// one chunk at a time, so memory use stays bounded by its size no matter how
/// large the object is.
pub struct Scratch {
    buf: Box<[u8]>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::with_size(CHUNK_SIZE)
    }

    /// Creates a scratch buffer of a specific size, mostly useful to force
    /// the chunked paths in tests.
    pub fn with_size(size: usize) -> Self {
        assert!(size > 0, "scratch buffer cannot be empty");
        Self {
            buf: vec![0; size].into_boxed_slice(),
        }
    }
}

impl Default for Scratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Compresses `bytes` into `sink` using a zlib encoder, draining the output
/// through `scratch`.
///
/// The encoder is always driven to the end of the stream, so the zlib
/// trailer is written and the output is a complete stream.
///
/// # Errors
///
/// This function will fail with `Error::Codec` if the compression engine
/// reports an error, and with `Error::Io` if writing to `sink` fails.
pub fn compress<W: Write>(
    scratch: &mut Scratch,
    bytes: &[u8],
    sink: &mut W,
    level: Compression,
) -> Result<()> {
    let mut encoder = Compress::new(level, true);

    loop {
        let consumed = encoder.total_in() as usize;
        // Finish can only be requested once all the input has been handed over
        let flush = if consumed == bytes.len() {
            FlushCompress::Finish
        } else {
            FlushCompress::None
        };

        let before_out = encoder.total_out();
        let status = encoder
            .compress(&bytes[consumed..], &mut scratch.buf, flush)
            .map_err(|e| Error::Codec(e.to_string()))?;

        let produced = (encoder.total_out() - before_out) as usize;
        sink.write_all(&scratch.buf[..produced])?;

        if let Status::StreamEnd = status {
            break;
        }
    }

    Ok(())
}

/// Decompresses `bytes` into `sink` using a zlib decoder, draining the
/// output through `scratch` until the engine reports the end of the stream.
///
/// # Errors
///
/// This function will fail with `Error::CorruptObject` if the stream is
/// malformed or ends before the end-of-stream marker, and with `Error::Io`
/// if writing to `sink` fails. A partial result is never returned silently.
pub fn decompress<W: Write>(scratch: &mut Scratch, bytes: &[u8], sink: &mut W) -> Result<()> {
    let mut decoder = Decompress::new(true);

    loop {
        let consumed = decoder.total_in() as usize;

        let before_out = decoder.total_out();
        let status = decoder
            .decompress(&bytes[consumed..], &mut scratch.buf, FlushDecompress::None)
            .map_err(|e| Error::CorruptObject(format!("invalid zlib stream: {e}")))?;

        let produced = (decoder.total_out() - before_out) as usize;
        sink.write_all(&scratch.buf[..produced])?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                // No input left and no progress made: the stream was cut short
                if decoder.total_in() as usize == bytes.len() && produced == 0 {
                    return Err(Error::CorruptObject(
                        "compressed stream ended before the end-of-stream marker".into(),
                    ));
                }
            }
        }
    }

    Ok(())
}

// Tests

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn patterned_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_roundtrip() {
        let bytes = b"blob 12\0hello, world";
        let mut scratch = Scratch::new();

        let mut compressed = Vec::new();
        compress(&mut scratch, bytes, &mut compressed, Compression::default()).unwrap();

        let mut decompressed = Vec::new();
        decompress(&mut scratch, &compressed, &mut decompressed).unwrap();

        assert_eq!(bytes.as_slice(), decompressed.as_slice());
    }

    #[test]
    fn test_roundtrip_with_tiny_scratch_buffer() {
        // A 7 byte scratch buffer forces both directions through many chunks
        let bytes = patterned_bytes(4096);
        let mut scratch = Scratch::with_size(7);

        let mut compressed = Vec::new();
        compress(&mut scratch, &bytes, &mut compressed, Compression::default()).unwrap();

        let mut decompressed = Vec::new();
        decompress(&mut scratch, &compressed, &mut decompressed).unwrap();

        assert_eq!(bytes, decompressed);
    }

    #[test]
    fn test_empty_input_roundtrip() {
        let mut scratch = Scratch::new();

        let mut compressed = Vec::new();
        compress(&mut scratch, b"", &mut compressed, Compression::default()).unwrap();
        assert!(!compressed.is_empty()); // header and trailer are still there

        let mut decompressed = Vec::new();
        decompress(&mut scratch, &compressed, &mut decompressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_compressed_output_is_a_complete_zlib_stream() {
        let bytes = patterned_bytes(1000);
        let mut scratch = Scratch::new();

        let mut compressed = Vec::new();
        compress(&mut scratch, &bytes, &mut compressed, Compression::default()).unwrap();

        // an independent decoder must accept the stream, trailer included
        let mut decoder = flate2::bufread::ZlibDecoder::new(compressed.as_slice());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed).unwrap();

        assert_eq!(bytes, decompressed);
    }

    #[test]
    fn test_truncated_stream_fails() {
        let bytes = patterned_bytes(4096);
        let mut scratch = Scratch::new();

        let mut compressed = Vec::new();
        compress(&mut scratch, &bytes, &mut compressed, Compression::default()).unwrap();
        compressed.truncate(compressed.len() / 2);

        let mut decompressed = Vec::new();
        let result = decompress(&mut scratch, &compressed, &mut decompressed);

        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_garbage_stream_fails() {
        let mut scratch = Scratch::new();

        let mut decompressed = Vec::new();
        let result = decompress(&mut scratch, b"not a zlib stream", &mut decompressed);

        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }

    #[test]
    fn test_empty_stream_fails() {
        let mut scratch = Scratch::new();

        let mut decompressed = Vec::new();
        let result = decompress(&mut scratch, b"", &mut decompressed);

        assert!(matches!(result, Err(Error::CorruptObject(_))));
    }
}
