//! Writing serialized markup to disk

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{Error, Result};

/// Write `data` to `path` as UTF-8, truncating any existing file.
///
/// The file handle is released on every exit path. Failures are returned
/// as-is; nothing is retried or cleaned up.
pub fn write(data: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    crate::log::debug!(path = %path.display(), bytes = data.len(), "writing markup");

    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(data.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        write("first version, longer", &path).unwrap();
        write("<svg/>", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn keeps_non_ascii_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label.svg");
        write("<text>Größe – 10µm</text>", &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "<text>Größe – 10µm</text>"
        );
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let err = write("<svg/>", &path).unwrap_err();
        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
