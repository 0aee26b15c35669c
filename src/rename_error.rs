use std::{error::Error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum RenameError {
    /// A listing line that does not follow `name.ext, City, yyyy-mm-dd hh:mm:ss`.
    MalformedLine { line_number: usize, line: String },
    /// Reading a listing failed. `path` is `-` for stdin.
    Io { path: PathBuf, source: io::Error },
    /// The glob given to the listing runner could not be parsed.
    Pattern { pattern: String, details: String },
}

impl RenameError {
    pub fn malformed(line_number: usize, line: &str) -> RenameError {
        RenameError::MalformedLine { line_number, line: line.to_string() }
    }

    pub fn io(path: &PathBuf, source: io::Error) -> RenameError {
        RenameError::Io { path: path.to_path_buf(), source }
    }
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RenameError::MalformedLine { line_number, line } => {
                write!(f, "Error: line {} -> malformed photo record {:?}", line_number, line)
            }
            RenameError::Io { path, source } => {
                write!(f, "Error: {} -> {}", path.display(), source)
            }
            RenameError::Pattern { pattern, details } => {
                write!(f, "Error: {} -> invalid pattern: {}", pattern, details)
            }
        }
    }
}

impl Error for RenameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenameError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
