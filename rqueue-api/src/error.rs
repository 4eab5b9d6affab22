pub type RqueueResult<T> = Result<T, RqueueError>;

/// Generic error that contains all the different kinds of errors that may occur when building or
/// recording render queues
#[derive(Debug, Clone)]
pub enum RqueueError {
    StringError(String),
}

impl std::error::Error for RqueueError {}

impl core::fmt::Display for RqueueError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            RqueueError::StringError(ref e) => e.fmt(fmt),
        }
    }
}

impl From<&str> for RqueueError {
    fn from(str: &str) -> Self {
        RqueueError::StringError(str.to_string())
    }
}

impl From<String> for RqueueError {
    fn from(string: String) -> Self {
        RqueueError::StringError(string)
    }
}
