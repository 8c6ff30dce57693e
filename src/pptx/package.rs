//! Physical package writer.
//!
//! Writes parts into an in-memory ZIP archive. Every entry is deflated and
//! stamped with the DOS epoch, so identical parts always produce identical
//! archive bytes.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::common::Result;

/// Writes package parts to a ZIP archive held in memory.
pub struct PackageWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PackageWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default())
            .unix_permissions(0o644);

        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Write a part with Deflate compression.
    ///
    /// # Arguments
    /// * `member_name` - Name of the part inside the archive, without a leading `/`
    /// * `blob` - The content to write
    pub fn write(&mut self, member_name: &str, blob: &[u8]) -> Result<()> {
        self.archive.start_file(member_name, self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn test_round_trip() {
        let mut writer = PackageWriter::new();
        writer.write("[Content_Types].xml", b"<Types/>").unwrap();
        writer.write("ppt/presentation.xml", b"<presentation/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<presentation/>");
    }

    #[test]
    fn test_output_is_reproducible() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer.write("a.xml", b"<a/>").unwrap();
            writer.write("b.xml", b"<b/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
