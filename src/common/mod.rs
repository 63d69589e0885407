pub mod authentication;
pub mod envelope;
pub mod types;

#[derive(Debug)]
pub enum Error {
    InvalidJson {
        raw: String,
    },
    RemotePayload {
        raw: String,
    },
    Transport {
        description: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    Dependency {
        description: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn invalid_json(raw: impl Into<String>) -> Self {
        Self::InvalidJson { raw: raw.into() }
    }

    pub fn remote_payload(raw: impl Into<String>) -> Self {
        Self::RemotePayload { raw: raw.into() }
    }

    pub fn transport(
        description: &'static str,
        error: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Transport {
            description,
            source: error,
        }
    }

    pub fn dependency(
        description: &'static str,
        error: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Dependency {
            description,
            source: error,
        }
    }

    /// The response text that caused a protocol error, if any.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::InvalidJson { raw } | Self::RemotePayload { raw } => Some(raw.as_str()),
            Self::Transport { .. } | Self::Dependency { .. } => None,
        }
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(error: hmac::digest::InvalidLength) -> Self {
        Self::dependency("Hmac invalid key length", Box::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::dependency("Json error", Box::new(error))
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::transport("Reqwest error", Box::new(error))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson { raw } => write!(f, "Invalid JSON from PayPlay => {raw}"),
            Self::RemotePayload { raw } => write!(f, "PayPlay error payload => {raw}"),
            Self::Transport {
                description,
                source,
            } => write!(f, "{description} => {source}"),
            Self::Dependency {
                description,
                source,
            } => write!(f, "{description} => {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport { source, .. } | Self::Dependency { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            Self::InvalidJson { .. } | Self::RemotePayload { .. } => None,
        }
    }
}
