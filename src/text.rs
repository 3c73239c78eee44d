use crate::{
    error::{Error, Result},
    Seq,
};
use std::path::{Path, PathBuf};

/// Supplies extracts of a fixed text.
pub trait TextSource {
    /// The `length` bytes starting at the source's offset.
    fn extract(&self, length: usize) -> Result<Seq<'_>>;
}

/// A text file held in memory, read from a fixed start offset.
///
/// Every extract starts at the same offset, so increasing lengths yield
/// extracts that extend each other.
pub struct TextExtractor {
    path: Option<PathBuf>,
    text: Vec<u8>,
    offset: usize,
}

impl TextExtractor {
    /// Reads the file at `path`. Fails when the file cannot be read or
    /// `offset` is not inside it.
    pub fn open(path: impl AsRef<Path>, offset: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut extractor = Self::from_bytes(text, offset)?;
        extractor.path = Some(path.to_path_buf());
        Ok(extractor)
    }

    pub fn from_bytes(text: Vec<u8>, offset: usize) -> Result<Self> {
        if offset >= text.len() {
            return Err(Error::OffsetOutOfRange {
                offset: offset as u64,
                size: text.len() as u64,
            });
        }
        Ok(Self {
            path: None,
            text,
            offset,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The longest extract available from the offset.
    pub fn max_length(&self) -> usize {
        self.text.len() - self.offset
    }
}

impl TextSource for TextExtractor {
    fn extract(&self, length: usize) -> Result<Seq<'_>> {
        let out_of_range = || Error::ExtractOutOfRange {
            total: (self.offset as u64).saturating_add(length as u64),
            size: self.text.len() as u64,
        };
        let end = self.offset.checked_add(length).ok_or_else(out_of_range)?;
        self.text.get(self.offset..end).ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn extracts_from_offset() {
        let t = TextExtractor::from_bytes(b"hello world".to_vec(), 6).unwrap();
        assert_eq!(t.extract(0).unwrap(), b"");
        assert_eq!(t.extract(3).unwrap(), b"wor");
        assert_eq!(t.extract(5).unwrap(), b"world");
        assert_eq!(t.max_length(), 5);
    }

    #[test]
    fn extract_past_the_end() {
        let t = TextExtractor::from_bytes(b"hello world".to_vec(), 6).unwrap();
        assert!(matches!(
            t.extract(6),
            Err(Error::ExtractOutOfRange { total: 12, size: 11 })
        ));
    }

    #[test]
    fn huge_extract_length() {
        let t = TextExtractor::from_bytes(b"hello world".to_vec(), 6).unwrap();
        assert!(matches!(
            t.extract(usize::MAX - 2),
            Err(Error::ExtractOutOfRange { size: 11, .. })
        ));
        let err = t.extract(usize::MAX).err().unwrap();
        assert_eq!(
            err.to_string(),
            format!("total length {} is out of range, file size is 11", u64::MAX)
        );
    }

    #[test]
    fn offset_out_of_range() {
        assert!(matches!(
            TextExtractor::from_bytes(b"abc".to_vec(), 3),
            Err(Error::OffsetOutOfRange { offset: 3, size: 3 })
        ));
        assert!(TextExtractor::from_bytes(vec![], 0).is_err());
    }

    #[test]
    fn open_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"0123456789").unwrap();
        let t = TextExtractor::open(f.path(), 2).unwrap();
        assert_eq!(t.path(), Some(f.path()));
        assert_eq!(t.extract(4).unwrap(), b"2345");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextExtractor::open(dir.path().join("missing.txt"), 0).err().unwrap();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
