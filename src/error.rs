/// Errors that can occur while turning a composed pattern into a [`regex::Regex`].
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The rendered pattern was rejected by the regex compiler.
    Compile(regex::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compile(err) => write!(f, "Invalid pattern: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compile(err) => Some(err),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Compile(err)
    }
}
