//! Line copy engine.

use std::io::{BufRead, Read, Write};

use log::debug;

use crate::error::{Error, Result};

/// Most bytes moved per read/write cycle. A longer line is split across
/// consecutive cycles without changing its bytes.
pub const CHUNK_CAPACITY: usize = 78;

/// What a finished copy did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpStats {
    pub bytes: u64,
    pub chunks: u64,
}

/// Copies `input` to `output` one line (or one `CHUNK_CAPACITY` slice of a
/// line) at a time until end of stream.
///
/// Fails with [`Error::MissingInput`] before writing anything when there is
/// no input to read from.
pub fn dump<R, W>(input: Option<R>, output: &mut W) -> Result<DumpStats>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut input = input.ok_or(Error::MissingInput)?;

    let mut stats = DumpStats::default();
    let mut buffer = Vec::with_capacity(CHUNK_CAPACITY);

    loop {
        buffer.clear();
        let bytes_read = input
            .by_ref()
            .take(CHUNK_CAPACITY as u64)
            .read_until(b'\n', &mut buffer)
            .map_err(Error::Copy)?;
        if bytes_read == 0 {
            break;
        }

        output.write_all(&buffer).map_err(Error::Copy)?;
        stats.bytes += bytes_read as u64;
        stats.chunks += 1;
    }
    output.flush().map_err(Error::Copy)?;

    debug!("copied {} bytes in {} chunks", stats.bytes, stats.chunks);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn dump_bytes(data: &[u8]) -> (Vec<u8>, DumpStats) {
        let mut out = Vec::new();
        let stats = dump(Some(Cursor::new(data.to_vec())), &mut out).unwrap();
        (out, stats)
    }

    #[test]
    fn copies_lines_verbatim() {
        let (out, stats) = dump_bytes(b"hello\nworld\n");
        assert_eq!(out, b"hello\nworld\n");
        assert_eq!(stats, DumpStats { bytes: 12, chunks: 2 });
    }

    #[test]
    fn keeps_unterminated_last_line() {
        let (out, stats) = dump_bytes(b"one\ntwo");
        assert_eq!(out, b"one\ntwo");
        assert_eq!(stats.chunks, 2);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let (out, stats) = dump_bytes(b"");
        assert!(out.is_empty());
        assert_eq!(stats, DumpStats::default());
    }

    #[test]
    fn splits_long_line_without_loss() {
        let line = vec![b'x'; 200];
        let (out, stats) = dump_bytes(&line);
        assert_eq!(out, line);
        // 78 + 78 + 44
        assert_eq!(stats.chunks, 3);
    }

    #[test]
    fn line_of_exact_capacity_needs_another_cycle_for_newline() {
        let mut data = vec![b'a'; CHUNK_CAPACITY];
        data.push(b'\n');
        let (out, stats) = dump_bytes(&data);
        assert_eq!(out, data);
        assert_eq!(stats.chunks, 2);
    }

    #[test]
    fn binary_content_survives() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let (out, _) = dump_bytes(&data);
        assert_eq!(out, data);
    }

    #[test]
    fn missing_input_fails_without_output() {
        let mut out = Vec::new();
        let err = dump(None::<Cursor<Vec<u8>>>, &mut out).unwrap_err();
        assert!(matches!(err, Error::MissingInput));
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces() {
        let err = dump(Some(Cursor::new(b"data\n".to_vec())), &mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), Some(io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "dump_file: broken pipe");
    }
}
