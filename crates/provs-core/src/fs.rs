//! Filesystem helpers shared by the filesystem backend.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Size of the buffer used when streaming record bodies to disk.
pub const CHUNK_SIZE: usize = 1024;

/// Create a single directory, treating "already exists" as success.
///
/// Several clients may initialise the same resource type concurrently, so
/// losing the creation race is not an error.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(err) => Err(err),
    }
}

/// Stream `reader` into `writer` in `CHUNK_SIZE` pieces until end of stream.
///
/// Returns the number of bytes written. The first read or write error aborts
/// the copy; whatever was already written stays written.
pub fn write_chunked<W: Write + ?Sized>(reader: &mut dyn Read, writer: &mut W) -> io::Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    writer.flush()?;
    Ok(total)
}

/// Move a staged file over `destination`.
///
/// On Windows a rename onto an existing file may be refused, so the target
/// is removed and the rename retried. Elsewhere rename replaces atomically
/// and a failure leaves `destination` as it was. Either way the staged file
/// is removed when the move fails.
///
/// # Errors
///
/// Returns an error if the rename fails, after the retry where one applies.
pub fn rename_with_fallback(staged: &Path, destination: &Path) -> io::Result<()> {
    let result = match fs::rename(staged, destination) {
        Ok(()) => Ok(()),
        Err(initial_err) => retry_rename(staged, destination, initial_err),
    };
    if result.is_err() {
        let _ = fs::remove_file(staged);
    }
    result
}

#[cfg(windows)]
fn retry_rename(staged: &Path, destination: &Path, initial_err: io::Error) -> io::Result<()> {
    let _ = fs::remove_file(destination);
    fs::rename(staged, destination).map_err(|retry_err| {
        io::Error::new(
            retry_err.kind(),
            format!(
                "Atomic rename failed (initial: {}, retry: {})",
                initial_err, retry_err
            ),
        )
    })
}

#[cfg(not(windows))]
fn retry_rename(_staged: &Path, _destination: &Path, initial_err: io::Error) -> io::Result<()> {
    Err(initial_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Cursor;
    use tempfile::tempdir;

    /// Reader that hands out at most `step` bytes per call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = (self.pos + self.step.min(buf.len())).min(self.data.len());
            let n = end - self.pos;
            buf[..n].copy_from_slice(&self.data[self.pos..end]);
            self.pos = end;
            Ok(n)
        }
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_write_chunked_spans_many_chunks() {
        let data: Vec<u8> = (0..(CHUNK_SIZE * 5 + 17)).map(|i| (i % 251) as u8).collect();
        let mut out = Vec::new();

        let written = write_chunked(&mut Cursor::new(data.clone()), &mut out).unwrap();

        assert_eq!(written, data.len() as u64);
        assert_eq!(out, data);
    }

    #[test]
    fn test_write_chunked_handles_short_reads() {
        let data = b"{\"id\":\"abc\",\"name\":\"short reads\"}".to_vec();
        let mut reader = Trickle {
            data: data.clone(),
            pos: 0,
            step: 3,
        };
        let mut out = Vec::new();

        write_chunked(&mut reader, &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_write_chunked_propagates_read_error() {
        let mut out = Vec::new();
        let err = write_chunked(&mut Failing, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(out.is_empty());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let ns = dir.path().join("coffees");

        ensure_dir(&ns).unwrap();
        ensure_dir(&ns).unwrap();

        assert!(ns.is_dir());
    }

    #[test]
    fn test_ensure_dir_rejects_existing_file() {
        let dir = tempdir().unwrap();
        let ns = dir.path().join("order");
        File::create(&ns).unwrap();

        assert!(ensure_dir(&ns).is_err());
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let staged = dir.path().join(".abc.tmp");
        let dest = dir.path().join("abc");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&staged).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&staged, &dest).unwrap();

        assert!(!staged.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_failed_rename_keeps_destination() {
        let dir = tempdir().unwrap();
        let staged = dir.path().join(".gone.tmp");
        let dest = dir.path().join("abc");
        File::create(&dest).unwrap().write_all(b"old").unwrap();

        let err = rename_with_fallback(&staged, &dest).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
    }
}
