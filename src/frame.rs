use std::io::{self, Read};

use crate::gamma::GammaTable;

/// marker the downstream driver syncs on, sent after every frame
pub const END_OF_FRAME: [u8; 4] = [0xff, 0xff, 0xff, 0xf0];

/// output bytes produced per input sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// size of the translated block for `samples` input bytes, marker included
pub fn encoded_len(samples: usize) -> usize {
    samples * BYTES_PER_SAMPLE + END_OF_FRAME.len()
}

/// read_frame:
///   keeps calling read() until `buf` is full or the stream returns 0
///
/// pipes hand out data in whatever chunks the producer wrote, so a single
/// read() can easily return less than a frame. returns how many bytes ended
/// up in `buf`; anything less than `buf.len()` means the stream is done.
///
/// reads block, there is no polling here
pub fn read_frame<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

/// appends the gamma-mapped samples and the end marker to `out`
///
/// `out` is not cleared, the caller decides whether to reuse it
pub fn translate_into(frame: &[u8], table: &GammaTable, out: &mut Vec<u8>) {
    out.reserve(encoded_len(frame.len()));
    for &sample in frame {
        out.extend_from_slice(&table.encoded(sample));
    }
    out.extend_from_slice(&END_OF_FRAME);
}

pub fn translate(frame: &[u8], table: &GammaTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(frame.len()));
    translate_into(frame, table, &mut out);
    out
}
