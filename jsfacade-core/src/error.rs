use miette::Diagnostic;
use thiserror::Error;

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A function reference was requested before the script was named.
    #[error("the script has no function name")]
    #[diagnostic(
        code(jsfacade::missing_function_name),
        help("call make_function() first")
    )]
    MissingFunctionName,

    #[error("failed to write rendered script")]
    #[diagnostic(code(jsfacade::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is the missing function name error.
    pub fn is_missing_function_name(&self) -> bool {
        matches!(self, Error::MissingFunctionName)
    }
}
