use core::fmt;

use crate::error::{Error, LineCol};

/// Associate the name of the input and the position of the error with a scan
/// error.
///
/// # Examples
///
/// ```
/// use schematic::Lines;
/// use schematic::cli::error_context;
///
/// let error = schematic::scan(Lines::new(b"1*.\n....\n")).unwrap_err();
/// let error = error_context("schematic.txt", error);
/// assert_eq!(error.to_string(), "schematic.txt:2:0");
/// ```
pub fn error_context(path: &str, error: Error) -> anyhow::Error {
    let pos = error.pos();
    let context = ErrorContext {
        path: path.to_owned(),
        pos,
    };

    anyhow::Error::new(error).context(context)
}

#[derive(Debug)]
struct ErrorContext {
    path: String,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}
