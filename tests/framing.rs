use std::io::{self, Cursor, Read};

use gamma_conv::{encoded_len, read_frame, translate, GammaTable, END_OF_FRAME};

/// hands out at most `chunk` bytes per read, like a pipe with a slow writer
struct Trickle {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    interrupt_next: bool,
}

impl Trickle {
    fn new(data: &[u8], chunk: usize) -> Self {
        Trickle { data: data.to_vec(), pos: 0, chunk, interrupt_next: false }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // each successful read is followed by one EINTR
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        self.interrupt_next = true;
        Ok(n)
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn end_of_frame_marker() {
    assert_eq!(END_OF_FRAME, [0xff, 0xff, 0xff, 0xf0]);
}

#[test]
fn read_frame_fills_whole_buffer() {
    let mut input = Cursor::new(vec![1u8, 2, 3, 4, 5, 6]);
    let mut buf = [0u8; 4];

    assert_eq!(read_frame(&mut input, &mut buf).unwrap(), 4);
    assert_eq!(buf, [1, 2, 3, 4]);

    // two left, then end
    assert_eq!(read_frame(&mut input, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], &[5, 6]);
    assert_eq!(read_frame(&mut input, &mut buf).unwrap(), 0);
}

#[test]
fn read_frame_accumulates_short_reads() {
    let data: Vec<u8> = (0..10).collect();
    let mut input = Trickle::new(&data, 3);
    let mut buf = [0u8; 8];

    assert_eq!(read_frame(&mut input, &mut buf).unwrap(), 8);
    assert_eq!(&buf[..], &data[..8]);
    assert_eq!(read_frame(&mut input, &mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], &[8, 9]);
}

#[test]
fn read_frame_passes_errors_up() {
    let mut buf = [0u8; 4];
    let err = read_frame(&mut Broken, &mut buf).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn translate_sample_frame() {
    let table = GammaTable::default();

    let out = translate(&[0, 10, 128, 255], &table);

    println!("Translated frame bytes (hex): {:02X?}", out);
    assert_eq!(
        out,
        vec![
            0x00, 0x00, // 0, below cutoff
            0x00, 0x00, // 10 -> 20, below cutoff
            0x85, 0x2d, // 128 -> 11653
            0x00, 0xff, // 255 -> 0xff00
            0xff, 0xff, 0xff, 0xf0,
        ]
    );
}

#[test]
fn translated_size_is_two_per_sample_plus_marker() {
    let table = GammaTable::default();

    for n in [0usize, 1, 3, 8, 300] {
        let frame: Vec<u8> = (0..n).map(|i| (i * 7) as u8).collect();
        let out = translate(&frame, &table);
        assert_eq!(out.len(), 2 * n + 4, "frame of {n} samples");
        assert_eq!(out.len(), encoded_len(n));
        assert_eq!(&out[out.len() - 4..], &END_OF_FRAME);
    }
}
