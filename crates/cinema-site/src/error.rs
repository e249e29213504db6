use cinema_router::RouteError;

/// Problems found at startup. Only [`BootError::InvalidLogLevel`] is
/// recoverable: the default level is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error("no browser window or document available")]
    NoWindow,
    #[error("mount point #{0} not found in the host page")]
    MissingMountPoint(String),
    #[error("mount point #{0} is not an HTML element")]
    MountPointNotHtml(String),
    #[error("invalid route table: {0}")]
    InvalidRouteTable(#[from] RouteError),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("seat {index} out of range for a screen with {seats} seats")]
    OutOfRange { index: usize, seats: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification: {0}")]
pub struct UnknownClassification(pub String);
