//! In-memory source text and file loading.


use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::ByteReader;

/// A whole source file held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceText {
    bytes: Vec<u8>,
    path: Option<PathBuf>,
}

impl SourceText {
    /// Largest file accepted by [`SourceText::read_file`] (64 MiB).
    pub const MAX_SIZE: u64 = 1 << 26;

    /// Load `path` whole.
    ///
    /// Empty files are rejected, as are files above [`SourceText::MAX_SIZE`]
    /// and files whose length changes while being read.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, SourceReadError> {
        let path = path.as_ref();
        let fail = |kind, source| SourceReadError {
            kind,
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(|e| fail(SourceReadErrorKind::OpenFailed, Some(e)))?;
        let size = file
            .metadata()
            .map_err(|e| fail(SourceReadErrorKind::StatFailed, Some(e)))?
            .len();
        if size == 0 {
            return Err(fail(SourceReadErrorKind::NonPositiveFileSize, None));
        }
        if size > Self::MAX_SIZE {
            return Err(fail(SourceReadErrorKind::FileTooLarge, None));
        }

        // Bounded by MAX_SIZE, so this fits in usize on every supported target.
        let capacity = usize::try_from(size).unwrap_or(0);
        let mut bytes = Vec::with_capacity(capacity);
        // Read one byte past the expected size so growth is detected too.
        file.take(size + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| fail(SourceReadErrorKind::ReadError, Some(e)))?;
        if bytes.len() != capacity {
            return Err(fail(SourceReadErrorKind::InconsistentSize, None));
        }

        Ok(SourceText {
            bytes,
            path: Some(path.to_path_buf()),
        })
    }

    /// Source text that did not come from a file.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        SourceText {
            bytes: bytes.into(),
            path: None,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Path for messages; `<input>` for in-memory sources.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .map_or_else(|| "<input>".to_string(), |p| p.display().to_string())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reader positioned at the first byte.
    pub fn reader(&self) -> ByteReader<'_> {
        ByteReader::new(&self.bytes)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        SourceText::from_bytes(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        SourceText::from_bytes(text)
    }
}

/// Why a source file could not be loaded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceReadErrorKind {
    OpenFailed,
    StatFailed,
    NonPositiveFileSize,
    FileTooLarge,
    ReadError,
    InconsistentSize,
}

impl SourceReadErrorKind {
    /// Process exit status reported by the command line driver.
    pub const fn exit_code(self) -> i32 {
        match self {
            SourceReadErrorKind::OpenFailed => 1,
            SourceReadErrorKind::StatFailed => 2,
            SourceReadErrorKind::NonPositiveFileSize => 3,
            SourceReadErrorKind::FileTooLarge => 4,
            SourceReadErrorKind::ReadError => 5,
            SourceReadErrorKind::InconsistentSize => 6,
        }
    }

    fn description(self) -> &'static str {
        match self {
            SourceReadErrorKind::OpenFailed => "cannot open",
            SourceReadErrorKind::StatFailed => "cannot read metadata of",
            SourceReadErrorKind::NonPositiveFileSize => "empty source file",
            SourceReadErrorKind::FileTooLarge => "source file too large",
            SourceReadErrorKind::ReadError => "error reading",
            SourceReadErrorKind::InconsistentSize => "size changed while reading",
        }
    }
}

/// Failure to load a source file.
#[derive(Debug)]
pub struct SourceReadError {
    pub kind: SourceReadErrorKind,
    pub path: PathBuf,
    source: Option<io::Error>,
}

impl fmt::Display for SourceReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.description(), self.path.display())?;
        match (&self.source, self.kind) {
            (Some(err), _) => write!(f, ": {err}"),
            (None, SourceReadErrorKind::FileTooLarge) => {
                write!(f, " (limit is {} bytes)", SourceText::MAX_SIZE)
            }
            (None, _) => Ok(()),
        }
    }
}

impl std::error::Error for SourceReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
