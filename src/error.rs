use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{name}'")]
#[diagnostic(
    code(spinning_wheel::import_parse_error),
    help("Imported option lists must be valid JSON, for example [\"Pizza\", \"Tacos\"]")
)]
pub struct ImportParseError {
    pub name: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

impl ImportParseError {
    /// Build a parse error pointing at the position serde_json reported
    pub fn new(name: &str, text: &str, source: serde_json::Error) -> Self {
        let span = offset_of(text, source.line(), source.column()).map(|offset| {
            let len = text[offset..].chars().next().map_or(0, char::len_utf8);
            SourceSpan::from((offset, len))
        });

        Self {
            name: name.to_string(),
            source_code: NamedSource::new(name, text.to_string()),
            span,
            source,
        }
    }
}

/// Byte offset of a 1-based line/column pair, if it lies inside `text`
fn offset_of(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, current) in text.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let column_offset = column.saturating_sub(1).min(current.len());
            let mut target = offset + column_offset;
            while !text.is_char_boundary(target) {
                target -= 1;
            }
            return Some(target);
        }
        offset += current.len();
    }

    None
}

#[derive(Error, Debug, Diagnostic)]
pub enum WheelError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(spinning_wheel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(spinning_wheel::io_error),
        help("Check that the directory exists and you have write permissions")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ImportParse(Box<ImportParseError>),

    #[error("Invalid option list: {message}")]
    #[diagnostic(
        code(spinning_wheel::import_shape_error),
        help("The file must contain a non-empty JSON array of strings")
    )]
    ImportShape { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(spinning_wheel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(spinning_wheel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(spinning_wheel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("The wheel is spinning")]
    #[diagnostic(
        code(spinning_wheel::spin_in_progress),
        help("Wait for the wheel to land before changing its options")
    )]
    SpinInProgress,

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(spinning_wheel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Storage error: {message}")]
    #[diagnostic(
        code(spinning_wheel::store_error),
        help("The option store could not be written; changes are kept for this session only")
    )]
    Store { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_import_parse_error_display() {
        let text = "[\"a\", ";
        let json_err = serde_json::from_str::<serde_json::Value>(text).unwrap_err();

        let error = ImportParseError::new("options.json", text, json_err);

        assert_eq!(error.to_string(), "Invalid JSON in 'options.json'");
        assert!(error.span.is_some());
    }

    #[test]
    fn test_import_parse_error_span_points_at_offending_char() {
        let text = "[\n  \"a\",\n  b\n]";
        let json_err = serde_json::from_str::<serde_json::Value>(text).unwrap_err();

        let error = ImportParseError::new("options.json", text, json_err);
        let span = error.span.expect("span should be resolved");

        assert_eq!(&text[span.offset()..span.offset() + span.len()], "b");
    }

    #[test]
    fn test_offset_of_out_of_range_line() {
        assert_eq!(offset_of("abc", 3, 1), None);
        assert_eq!(offset_of("abc", 0, 1), None);
        assert_eq!(offset_of("abc\ndef", 2, 2), Some(5));
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = WheelError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_import_shape_error() {
        let error = WheelError::ImportShape {
            message: "expected an array, found an object".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Invalid option list: expected an array, found an object"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = WheelError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = WheelError::FileReadError {
            path: PathBuf::from("test.json"),
            source: io_err,
        };

        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let wheel_err: WheelError = io_err.into();

        match wheel_err {
            WheelError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let wheel_err: WheelError = json_err.into();

        match wheel_err {
            WheelError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
