use core::fmt;

/// Associate the path of the input being processed with an error.
pub(crate) fn error_context(path: &str, error: anyhow::Error) -> anyhow::Error {
    error.context(ErrorContext {
        path: path.into(),
    })
}

#[derive(Debug)]
struct ErrorContext {
    path: Box<str>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}", path = self.path)
    }
}
