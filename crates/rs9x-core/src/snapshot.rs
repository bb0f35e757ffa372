//! Freeze-state file helpers
//!
//! The core serializes its machine state through these streams; the
//! platform owns the on-disk format being gzip-compressed.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;

/// Opens a freeze-state file for thawing.
pub fn freeze_reader(path: &Path) -> Result<GzDecoder<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(GzDecoder::new(BufReader::new(file)))
}

/// Creates (or truncates) a freeze-state file for writing. The caller
/// must finish the encoder to flush the trailing gzip frame.
pub fn freeze_writer(path: &Path) -> Result<GzEncoder<BufWriter<File>>> {
    let file = File::create(path)?;
    Ok(GzEncoder::new(BufWriter::new(file), Compression::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn test_freeze_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.frz.gz");

        let mut writer = freeze_writer(&path).unwrap();
        writer.write_all(b"frozen machine state").unwrap();
        writer.finish().unwrap();

        let mut reader = freeze_reader(&path).unwrap();
        let mut thawed = Vec::new();
        reader.read_to_end(&mut thawed).unwrap();
        assert_eq!(thawed, b"frozen machine state");
    }

    #[test]
    fn test_freeze_file_is_gzip_compressed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.frz.gz");

        let mut writer = freeze_writer(&path).unwrap();
        writer.write_all(&[0u8; 4096]).unwrap();
        writer.finish().unwrap();

        let raw = std::fs::read(&path).unwrap();
        // gzip magic, and the zero page must have shrunk
        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
        assert!(raw.len() < 4096);
    }

    #[test]
    fn test_missing_freeze_file() {
        assert!(freeze_reader(Path::new("/nonexistent/game.frz.gz")).is_err());
    }
}
