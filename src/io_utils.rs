use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Describe a failed file operation and suggest what to check.
///
/// The tool touches two files: the word list it reads and the CSV it
/// creates, so suggestions point at the matching flag.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check the --word-list path, or that the --output directory exists.",
        PermissionDenied => "The word list must be readable and the output directory writable.",
        WriteZero => "Disk may be full. Free up space or pass a different --output.",
        Other if err.raw_os_error() == Some(28) => {
            "Disk may be full. Free up space or pass a different --output."
        }
        _ => "Check the --word-list and --output paths.",
    };
    format!("{} '{}' failed: {}. {}", operation, path.display(), err, suggestion)
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error, attaching the path for I/O failures.
pub fn wordsum_cli_error(context: &str, path: &Path, err: crate::WordsumError) -> CliError {
    match err {
        crate::WordsumError::Io(io) => io_cli_error(context, path, io),
        crate::WordsumError::Csv(e) => match e.into_kind() {
            csv::ErrorKind::Io(io) => io_cli_error(context, path, io),
            kind => simple_cli_error(&format!(
                "{context} '{}': {kind:?}. Could not write CSV output.",
                path.display()
            )),
        },
        other => CliError {
            msg: format!("{}: {}", context, cli_hint(&other)),
            source: Some(Box::new(other)),
        },
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &crate::WordsumError) -> String {
    use crate::WordsumError::*;
    match err {
        KeyTooLong { len } => format!("key has {len} letters. Use at most 35 distinct letters."),
        KeyTooShort { len } => format!("key has {len} letters. Use at least 2 distinct letters."),
        DuplicateKeyLetter(c) => format!("key repeats '{c}'. Every key letter must be distinct."),
        UnmappedSymbol(c) => format!("'{c}' is not part of the cipher."),
        InvalidNumeral { numeral, base } => format!("'{numeral}' is not a base-{base} numeral."),
        InvalidBase(b) => format!("base {b} is unsupported. Use 2 to 36."),
        Overflow => "result does not fit in 64 bits.".to_string(),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
        Csv(e) => format!("{e}. Could not write CSV output."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordsumError;

    #[test]
    fn missing_word_list_names_flag() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let msg = format_io_error("loading word list", Path::new("w.txt"), &err);
        assert!(msg.starts_with("loading word list 'w.txt' failed:"));
        assert!(msg.contains("--word-list"));
    }

    #[test]
    fn csv_io_error_keeps_path() {
        let err = WordsumError::Csv(csv::Error::from(io::Error::from(io::ErrorKind::PermissionDenied)));
        let cli = wordsum_cli_error("creating csv file", Path::new("out.csv"), err);
        assert!(cli.msg.contains("'out.csv' failed"));
        assert!(cli.msg.contains("output directory writable"));
    }

    #[test]
    fn csv_record_error_keeps_detail() {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["a", "b"]).unwrap();
        let err = wtr.write_record(["a"]).unwrap_err();
        let cli = wordsum_cli_error("writing csv row", Path::new("out.csv"), WordsumError::Csv(err));
        assert!(cli.msg.starts_with("writing csv row 'out.csv': UnequalLengths"));
    }

    #[test]
    fn config_error_uses_hint() {
        let err = WordsumError::Config("output path equals the word list path".into());
        let cli = wordsum_cli_error("checking arguments", Path::new("w.txt"), err);
        assert_eq!(
            cli.msg,
            "checking arguments: output path equals the word list path. Invalid configuration."
        );
    }
}
