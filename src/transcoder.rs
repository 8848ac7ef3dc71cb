use std::fmt;
use std::io::{self, Read, Write};

use log::{debug, info};

use crate::config::FrameSize;
use crate::frame::{encoded_len, read_frame, translate_into};
use crate::gamma::GammaTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Reading,
    Done,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeStats {
    pub frames: u64,
    pub full_frames: u64,
    pub partial_frames: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

#[derive(Debug)]
pub enum TranscodeError {
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscodeError::Read(_) => write!(f, "failed to read frame from input"),
            TranscodeError::Write(_) => write!(f, "failed to write frame to output"),
        }
    }
}

impl std::error::Error for TranscodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscodeError::Read(e) | TranscodeError::Write(e) => Some(e),
        }
    }
}

/// Transcoder:
///   read frame -> translate -> write -> flush, until the input runs dry
///
/// a short last frame is translated as-is (no padding). the loop only stops
/// when a read attempt yields nothing at all. any io error ends the run,
/// nothing is retried.
pub struct Transcoder<'a> {
    table: &'a GammaTable,
    frame_size: FrameSize,
    state: State,
    stats: TranscodeStats,
    frame: Vec<u8>,
    out: Vec<u8>,
}

impl<'a> Transcoder<'a> {
    pub fn new(table: &'a GammaTable, frame_size: FrameSize) -> Self {
        let n = frame_size.get();
        Transcoder {
            table,
            frame_size,
            state: State::Reading,
            stats: TranscodeStats::default(),
            frame: vec![0u8; n],
            out: Vec::with_capacity(encoded_len(n)),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stats(&self) -> TranscodeStats {
        self.stats
    }

    /// handles one frame; returns the state after it
    pub fn step<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<State, TranscodeError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        if self.state == State::Done {
            return Ok(State::Done);
        }

        let n = read_frame(reader, &mut self.frame).map_err(TranscodeError::Read)?;
        if n == 0 {
            self.state = State::Done;
            return Ok(State::Done);
        }

        self.out.clear();
        translate_into(&self.frame[..n], self.table, &mut self.out);

        writer.write_all(&self.out).map_err(TranscodeError::Write)?;
        writer.flush().map_err(TranscodeError::Write)?;

        self.stats.frames += 1;
        if n == self.frame_size.get() {
            self.stats.full_frames += 1;
        } else {
            self.stats.partial_frames += 1;
            debug!("partial frame: {} of {} samples", n, self.frame_size);
        }
        self.stats.bytes_in += n as u64;
        self.stats.bytes_out += self.out.len() as u64;

        debug!("frame {}: {} samples -> {} bytes", self.stats.frames, n, self.out.len());

        Ok(State::Reading)
    }

    pub fn run<R, W>(&mut self, reader: &mut R, writer: &mut W) -> Result<TranscodeStats, TranscodeError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        while self.step(reader, writer)? == State::Reading {}

        info!(
            "end of input: {} frames ({} partial), {} bytes in, {} bytes out",
            self.stats.frames, self.stats.partial_frames, self.stats.bytes_in, self.stats.bytes_out
        );
        Ok(self.stats)
    }
}
