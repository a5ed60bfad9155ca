use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD, Engine};
use log::{debug, info, warn};
use tempfile::NamedTempFile;

pub mod envs;
pub mod report;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("'{}' not found, run this tool in the same directory as the keystore", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A keystore that has been encoded and written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    input_path: PathBuf,
    output_path: PathBuf,
    byte_count: usize,
    encoded: String,
}

impl EncodedOutput {
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Size of the original keystore in bytes.
    pub fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// Length of the Base64 text. Always ASCII, so bytes and characters agree.
    pub fn char_count(&self) -> usize {
        self.encoded.len()
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

/// Standard alphabet, `=` padded, no line wrapping.
pub fn encode_bytes(x: &[u8]) -> String {
    STANDARD.encode(x)
}

/// Writes `contents` to a temporary file next to `path` and renames it over
/// `path`. A failure at any point leaves the previous file as it was.
fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Reads `input`, encodes it and writes the single-line result to `output`.
///
/// Nothing is written unless the whole keystore was read successfully, so a
/// missing or unreadable input leaves any earlier output file untouched. The
/// output is replaced in one rename, so a failed write does too.
pub fn encode(input: &Path, output: &Path) -> Result<EncodedOutput> {
    if !input.exists() {
        warn!("keystore {} does not exist", input.display());
        return Err(Error::NotFound(input.to_owned()));
    }

    let payload = fs::read(input).map_err(|source| {
        warn!("reading {} failed: {}", input.display(), source);
        Error::Read {
            path: input.to_owned(),
            source,
        }
    })?;
    debug!("read {} bytes from {}", payload.len(), input.display());

    let encoded = encode_bytes(&payload);
    debug!("encoded to {} characters", encoded.len());

    replace_file(output, encoded.as_bytes()).map_err(|source| {
        warn!("writing {} failed: {}", output.display(), source);
        Error::Write {
            path: output.to_owned(),
            source,
        }
    })?;
    info!("wrote {}", output.display());

    Ok(EncodedOutput {
        input_path: input.to_owned(),
        output_path: output.to_owned(),
        byte_count: payload.len(),
        encoded,
    })
}
