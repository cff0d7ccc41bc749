use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected at construction; never recovered at runtime.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The episode hit a terminal outcome; reset before stepping again.
    #[error("episode terminated, reset required")]
    EpisodeTerminated,

    #[error("unknown policy: {0}")]
    UnknownPolicy(String),
}
