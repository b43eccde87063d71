//! Errors raised while turning a route manifest into scopes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("unknown guard `{name}` on `{path}`")]
    UnknownGuard { name: String, path: String },

    #[error("unknown key `{key}` on `{path}`")]
    UnknownKey { key: String, path: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid route manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}
