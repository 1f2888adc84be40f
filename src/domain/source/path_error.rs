use std::fmt;

// 基準ディレクトリまわりのエラー
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    Walk(walkdir::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "invalid path: {}", s),
            PathError::Walk(e) => write!(f, "failed to walk directory: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidPath(_) => None,
            PathError::Walk(e) => Some(e),
        }
    }
}

impl From<walkdir::Error> for PathError {
    fn from(e: walkdir::Error) -> Self {
        PathError::Walk(e)
    }
}
