use std::fmt::{Display, Formatter};

/// An error that occurs while retrieving `emoji-test.txt` or the annotations.
///
/// Parsing itself never fails, so this is the only error of this crate.
#[derive(Debug)]
pub enum SourceError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// The annotations are not valid CLDR JSON
    Json(serde_json::Error),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
    #[cfg(feature = "online")]
    /// The server answered, but not with a success status
    Status {
        url: String,
        status: u16
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Io(error) => write!(f, "Could not read emoji data: {}", error),
            SourceError::Json(error) => write!(f, "Could not parse annotations: {}", error),
            #[cfg(feature = "online")]
            SourceError::Reqwest(error) => write!(f, "Could not fetch emoji data: {}", error),
            #[cfg(feature = "online")]
            SourceError::Status { url, status } => write!(f, "Request to {} failed with status {}", url, status)
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(error) => Some(error),
            SourceError::Json(error) => Some(error),
            #[cfg(feature = "online")]
            SourceError::Reqwest(error) => Some(error),
            #[cfg(feature = "online")]
            SourceError::Status { .. } => None
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Json(err)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Reqwest(err)
    }
}
