use thiserror::Error;

/// Why a single state could not be looked up.
///
/// These never abort a run: the collector records them per state and moves on.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: wreq::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no geography matches state '{0}'")]
    UnknownState(String),

    #[error("no demographic data for FIPS code {0}")]
    NoDemographics(String),
}

impl LookupError {
    /// True when the input itself was bad rather than the upstream.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnknownState(_))
    }
}
