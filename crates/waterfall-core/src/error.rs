use thiserror::Error;

/// Rejected scene configuration. Raised once at start-up, never per frame.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("containment zone needs 0 <= near ({near}) < far ({far})")]
    InvalidContainment { near: f32, far: f32 },
    #[error("floater area must be positive, got {width} x {depth}")]
    InvalidFloaterArea { width: f32, depth: f32 },
    #[error("{0} must be a positive finite value")]
    InvalidMixRange(&'static str),
    #[error("{0} is not finite")]
    NonFinite(&'static str),
}
