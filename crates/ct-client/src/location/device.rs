//! One-shot device geolocation.
//!
//! Platform access sits behind the [`PositionSource`] trait; the default
//! implementation shells out to a configured helper command. Timeout and
//! cache allowance are enforced here so every source gets the same
//! one-shot semantics.

use std::time::Duration;

use ct_config::GeolocationConfig;
use ct_core::Position;
use log::{debug, warn};
use thiserror::Error;
use tokio::time::Instant;

/// Platform geolocation failures mapped to user-facing categories.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error(
        "Location access was denied. Please enable location permissions for the configured fix command."
    )]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("Location request timed out. Please try again.")]
    Timeout,

    #[error("An unknown error occurred while getting your location.")]
    Unknown,

    #[error("Device geolocation is not configured. Set geolocation.fix_command.")]
    Unsupported,
}

impl GeolocationError {
    /// Platform error code table: 1 permission, 2 unavailable, 3 timeout.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }
}

/// A producer of one-shot position fixes.
pub trait PositionSource {
    fn acquire(&self) -> impl Future<Output = Result<Position, GeolocationError>> + Send;
}

/// Remembers the last successful fix for the cache allowance.
#[derive(Debug, Default)]
pub struct FixCache {
    last: Option<(Position, Instant)>,
}

impl FixCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&self, max_age: Duration) -> Option<Position> {
        let (position, at) = self.last?;
        (at.elapsed() <= max_age).then_some(position)
    }

    fn store(&mut self, position: Position) {
        self.last = Some((position, Instant::now()));
    }
}

/// Acquire a device fix with the configured one-shot timeout and cache
/// allowance. A fix younger than `max_age_secs` is reused without
/// consulting the source; a timed-out acquisition maps to
/// [`GeolocationError::Timeout`]. No retry.
pub async fn acquire_fix<S: PositionSource>(
    source: &S,
    config: &GeolocationConfig,
    cache: &mut FixCache,
) -> Result<Position, GeolocationError> {
    if let Some(position) = cache.fresh(Duration::from_secs(config.max_age_secs)) {
        debug!("reusing cached fix {}", position);
        return Ok(position);
    }

    let timeout = Duration::from_secs(config.timeout_secs);
    match tokio::time::timeout(timeout, source.acquire()).await {
        Ok(Ok(position)) => {
            cache.store(position);
            Ok(position)
        }
        Ok(Err(e)) => {
            warn!("device fix failed: {}", e);
            Err(e)
        }
        Err(_) => {
            warn!("device fix timed out after {}s", config.timeout_secs);
            Err(GeolocationError::Timeout)
        }
    }
}

/// Runs the configured helper command and parses its stdout.
///
/// Expected output is a single line `<lat> <lng>`; a helper that cannot
/// produce a fix prints `ERROR <code>` using the platform code table.
pub struct CommandPositionSource {
    command: String,
}

impl CommandPositionSource {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Build from config; `None` when no fix command is configured.
    pub fn from_config(config: &GeolocationConfig) -> Option<Self> {
        config.fix_command.as_deref().map(Self::new)
    }

    fn parse_output(line: &str) -> Result<Position, GeolocationError> {
        if let Some(code) = line.strip_prefix("ERROR ") {
            let code = code.trim().parse::<i32>().unwrap_or(-1);
            return Err(GeolocationError::from_code(code));
        }

        let mut parts = line.split_whitespace();
        let lat = parts.next().and_then(|s| s.parse::<f64>().ok());
        let lng = parts.next().and_then(|s| s.parse::<f64>().ok());
        match (lat, lng) {
            (Some(lat), Some(lng)) => Ok(Position::new(lat, lng)),
            _ => Err(GeolocationError::PositionUnavailable),
        }
    }
}

impl PositionSource for CommandPositionSource {
    async fn acquire(&self) -> Result<Position, GeolocationError> {
        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .output()
            .await
            .map_err(|_| GeolocationError::PositionUnavailable)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.trim();

        if line.is_empty() && !output.status.success() {
            return Err(GeolocationError::PositionUnavailable);
        }

        Self::parse_output(line)
    }
}
