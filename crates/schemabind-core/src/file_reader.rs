use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const UTF8_BOM: &str = "\u{feff}";

/// Reads one SDL source file into a `String`, dropping a leading byte-order
/// mark so the text joins cleanly with its neighbours.
pub(crate) fn read_content(file_path: &Path) -> Result<String, ReadContentError> {
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile {
            path: file_path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Io {
        path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    })?;

    let text = String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// The io error is flattened into its kind and message so that loader errors
/// stay comparable in tests.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReadContentError {
    #[error("`{}` is not valid utf-8 after byte {valid_up_to}", path.display())]
    InvalidUtf8 {
        path: PathBuf,
        valid_up_to: usize,
    },

    #[error("could not read schema file `{}`: {message}", path.display())]
    Io {
        path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("schema path `{}` is not a file", path.display())]
    NotAFile {
        path: PathBuf,
    },
}
