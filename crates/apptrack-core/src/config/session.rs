use std::time::Duration;

/// Session timing. Both timeouts are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfiguration {
    pub foreground_timeout: Duration,
    pub background_timeout: Duration,
}

impl SessionConfiguration {
    pub fn new(foreground_timeout: Duration, background_timeout: Duration) -> Self {
        Self {
            foreground_timeout,
            background_timeout,
        }
    }

    pub fn from_secs(foreground_secs: u64, background_secs: u64) -> Self {
        Self::new(
            Duration::from_secs(foreground_secs),
            Duration::from_secs(background_secs),
        )
    }
}
