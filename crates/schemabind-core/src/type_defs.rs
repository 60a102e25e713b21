//! Normalizing, joining, parsing and loading type definitions.

use crate::ast;
use crate::file_reader;
use crate::ReadContentError;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

/// Joins type-definition fragments into a single document text.
///
/// Each fragment has its leading and trailing whitespace removed, then the
/// fragments are joined in order with a blank line between each pair.
pub fn join_type_defs<S: AsRef<str>>(type_defs: &[S]) -> String {
    type_defs.iter()
        .map(|type_def| type_def.as_ref().trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parses a joined type-definitions document.
pub fn parse_type_defs(
    type_defs: &str,
) -> Result<ast::schema::Document, SchemaSyntaxError> {
    graphql_parser::schema::parse_schema::<String>(type_defs)
        .map(|document| document.into_static())
        .map_err(|err| SchemaSyntaxError {
            err: err.to_string(),
        })
}

/// Type definitions as accepted by
/// [`make_executable_schema`](crate::make_executable_schema): either a single
/// document text or an ordered sequence of fragments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeDefs {
    Single(String),
    Many(Vec<String>),
}
impl TypeDefs {
    /// Joins the type definitions into one document text. A single text is
    /// treated as a one-element sequence.
    pub fn join(&self) -> String {
        match self {
            Self::Single(type_defs) => join_type_defs(&[type_defs]),
            Self::Many(type_defs) => join_type_defs(type_defs),
        }
    }
}
impl From<&str> for TypeDefs {
    fn from(type_defs: &str) -> Self {
        Self::Single(type_defs.to_string())
    }
}
impl From<String> for TypeDefs {
    fn from(type_defs: String) -> Self {
        Self::Single(type_defs)
    }
}
impl From<&String> for TypeDefs {
    fn from(type_defs: &String) -> Self {
        Self::Single(type_defs.to_owned())
    }
}
impl From<Vec<&str>> for TypeDefs {
    fn from(type_defs: Vec<&str>) -> Self {
        Self::Many(type_defs.into_iter().map(str::to_string).collect())
    }
}
impl From<Vec<String>> for TypeDefs {
    fn from(type_defs: Vec<String>) -> Self {
        Self::Many(type_defs)
    }
}
impl From<&[&str]> for TypeDefs {
    fn from(type_defs: &[&str]) -> Self {
        Self::Many(type_defs.iter().map(|type_def| type_def.to_string()).collect())
    }
}
impl<const N: usize> From<[&str; N]> for TypeDefs {
    fn from(type_defs: [&str; N]) -> Self {
        Self::Many(type_defs.iter().map(|type_def| type_def.to_string()).collect())
    }
}

/// Loads type definitions from a file, or from every matching file found
/// recursively under a directory.
///
/// Directory contents are read in sorted path order and joined with
/// [`join_type_defs`]. Each file is syntax-checked on its own so that an
/// error names the file it came from.
#[derive(Clone, Debug)]
pub struct SchemaLoader {
    file_exts: Vec<String>,
}
impl SchemaLoader {
    pub const DEFAULT_FILE_EXTS: [&'static str; 3] = ["graphql", "graphqls", "gql"];

    pub fn new() -> Self {
        Self {
            file_exts: Self::DEFAULT_FILE_EXTS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    /// Replaces the file extensions matched when walking a directory. A
    /// leading `.` is optional.
    pub fn file_exts<I, S>(mut self, file_exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.file_exts = file_exts.into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<String, LoadSchemaError> {
        let path = path.as_ref();
        if path.is_dir() {
            let file_paths = self.find_schema_files(path)?;
            log::debug!(
                "Found {} schema files under {path:#?}.",
                file_paths.len(),
            );
            let contents = file_paths.iter()
                .map(|file_path| Self::read_schema_file(file_path))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(join_type_defs(&contents))
        } else {
            let content = Self::read_schema_file(path)?;
            Ok(join_type_defs(&[content]))
        }
    }

    fn find_schema_files(&self, dir_path: &Path) -> Result<Vec<PathBuf>, LoadSchemaError> {
        let mut file_paths = vec![];
        for entry in WalkDir::new(dir_path).follow_links(true) {
            let entry = entry.map_err(|err| LoadSchemaError::DirectoryWalkError {
                dir_path: dir_path.to_path_buf(),
                err: err.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }
            if let Some(ext) = path.extension().map(|ext| ext.to_string_lossy())
                && self.file_exts.iter().any(|file_ext| *file_ext == ext) {
                log::trace!("Found schema file at {path:#?}.");
                file_paths.push(path.to_path_buf());
            }
        }
        file_paths.sort();
        Ok(file_paths)
    }

    fn read_schema_file(file_path: &Path) -> Result<String, LoadSchemaError> {
        let content = file_reader::read_content(file_path)?;
        parse_type_defs(&content).map_err(|err| LoadSchemaError::SchemaFileSyntaxError {
            file_path: file_path.to_path_buf(),
            err,
        })?;
        Ok(content)
    }
}
impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads type definitions from `path` using the default
/// [`SchemaLoader`] configuration.
pub fn load_schema_from_path<P: AsRef<Path>>(path: P) -> Result<String, LoadSchemaError> {
    SchemaLoader::new().load(path)
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Failed to parse type definitions: {err}")]
pub struct SchemaSyntaxError {
    pub err: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum LoadSchemaError {
    #[error("Failed to walk `{}`: {err}", dir_path.display())]
    DirectoryWalkError {
        dir_path: PathBuf,
        err: String,
    },

    #[error(transparent)]
    ReadContentError(#[from] ReadContentError),

    #[error("Syntax error in `{}`: {err}", file_path.display())]
    SchemaFileSyntaxError {
        file_path: PathBuf,
        err: SchemaSyntaxError,
    },
}
