//! Compiler configuration. A `Config` is built once from the command line and
//! handed down read-only.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const SOURCE_EXTENSION: &str = "cl";
const OUTPUT_EXTENSION: &str = "asm";

/// What to do with tokens after the last `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    /// An unterminated trailing statement is a syntax error.
    Strict,
    /// An unterminated trailing statement is dropped with a warning.
    Lenient,
}

/// How many syntax errors to report before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    AbortOnFirst,
    CollectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub segment_mode: SegmentMode,
    pub error_policy: ErrorPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            segment_mode: SegmentMode::Strict,
            error_policy: ErrorPolicy::AbortOnFirst,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    source_path: PathBuf,
    output_path: PathBuf,
    options: ParseOptions,
}

impl Config {
    /// Validates the file extensions. Without an explicit output the assembly file
    /// is placed next to the source.
    pub fn new(
        source_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        options: ParseOptions,
    ) -> Result<Self, ConfigError> {
        let source_path = source_path.ok_or(ConfigError::MissingSource)?;
        if !has_extension(&source_path, SOURCE_EXTENSION) {
            return Err(ConfigError::WrongSourceExtension(source_path));
        }
        let output_path = match output_path {
            Some(path) if !has_extension(&path, OUTPUT_EXTENSION) => {
                return Err(ConfigError::WrongOutputExtension(path))
            }
            Some(path) => path,
            None => source_path.with_extension(OUTPUT_EXTENSION),
        };
        Ok(Self {
            source_path,
            output_path,
            options,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_stem().is_some() && path.extension().map_or(false, |ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source: &str, output: Option<&str>) -> Result<Config, ConfigError> {
        Config::new(
            Some(source.into()),
            output.map(PathBuf::from),
            ParseOptions::default(),
        )
    }

    #[test]
    fn test_default_output_path() {
        let config = config("circuits/adder.cl", None).unwrap();
        assert_eq!(config.source_path(), Path::new("circuits/adder.cl"));
        assert_eq!(config.output_path(), Path::new("circuits/adder.asm"));
        assert_eq!(config.options().segment_mode, SegmentMode::Strict);
        assert_eq!(config.options().error_policy, ErrorPolicy::AbortOnFirst);
    }

    #[test]
    fn test_explicit_output_path() {
        let config = config("adder.cl", Some("out/adder.asm")).unwrap();
        assert_eq!(config.output_path(), Path::new("out/adder.asm"));
    }

    #[test]
    fn test_missing_source() {
        assert_eq!(
            Config::new(None, Some("adder.asm".into()), ParseOptions::default()),
            Err(ConfigError::MissingSource)
        );
    }

    #[test]
    fn test_wrong_extensions() {
        assert_eq!(
            config("adder.txt", None),
            Err(ConfigError::WrongSourceExtension("adder.txt".into()))
        );
        assert_eq!(
            config("adder", None),
            Err(ConfigError::WrongSourceExtension("adder".into()))
        );
        assert_eq!(
            config("adder.cl", Some("adder.s")),
            Err(ConfigError::WrongOutputExtension("adder.s".into()))
        );
    }
}
