mod config;
mod frame;
mod gamma;
mod transcoder;

pub use config::{Config, ConfigError, FrameSize, MAX_FRAME_SIZE};
pub use frame::{encoded_len, read_frame, translate, translate_into, BYTES_PER_SAMPLE, END_OF_FRAME};
pub use gamma::{raw_value, GammaParams, GammaTable, DEFAULT_CUTOFF, DEFAULT_GAMMA, FULL_SCALE, TABLE_SIZE};
pub use transcoder::{State, TranscodeError, TranscodeStats, Transcoder};

use std::io::{Read, Write};

/// transcode:
///   whole pipeline in one call, what the binary runs on stdin/stdout
///
/// 1. GammaTable::default -> 256 entries, gamma 2.5, cutoff 0x18
/// 2. Transcoder::run -> frames of `frame_size` samples until end of input
///
/// every frame comes out as 2 bytes per sample + FF FF FF F0

pub fn transcode<R, W>(reader: &mut R, writer: &mut W, frame_size: FrameSize) -> Result<TranscodeStats, TranscodeError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let table = GammaTable::default();
    Transcoder::new(&table, frame_size).run(reader, writer)
}
