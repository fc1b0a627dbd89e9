use thiserror::Error;

/// Failure fetching or deriving one resource from the upstream rate API.
///
/// No retries happen at this level; the loader or the service decides what
/// to do with a failed fetch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("upstream request timed out after {0}ms")]
    Timeout(u64),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("failed to parse upstream body: {0}")]
    Parse(String),

    #[error("quote for {currency} is missing or zero; refusing to derive a buy spread")]
    DegenerateQuote { currency: String },
}

/// Request-time failure surfaced by the resource service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    /// The requested name was never registered. Always surfaced as a
    /// not-found outcome, before and after startup.
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    /// The name is registered but its strategy failed during the startup
    /// load, so the sealed store holds nothing for it.
    #[error("resource '{0}' is registered but was not loaded at startup")]
    ResourceUnavailable(String),

    /// An upstream fetch failed while serving the request. Only produced by
    /// an on-demand service; the cache-backed service never fetches at
    /// request time.
    #[error("fetching resource '{name}' failed: {source}")]
    ResourceFetch { name: String, source: FetchError },
}
