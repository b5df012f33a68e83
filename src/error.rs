use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Parse(String),
    NotFound(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "malformed catalog: {msg}"),
            Self::NotFound(msg) => write!(f, "not found: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    NotFound(PathBuf),
    Spawn { path: PathBuf, message: String },
}

impl LaunchError {
    /// Title of the notice shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Executable not found",
            Self::Spawn { .. } => "Launch failed",
        }
    }

    /// Body of the notice shown to the user.
    pub fn detail(&self) -> String {
        match self {
            Self::NotFound(path) => format!("Path doesn't exist:\n{}", path.display()),
            Self::Spawn { message, .. } => message.clone(),
        }
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "executable not found: {}", path.display()),
            Self::Spawn { path, message } => {
                write!(f, "failed to launch {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {}
