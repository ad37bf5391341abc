use thiserror::Error;

/// Failure of a single temperature lookup.
///
/// The `Display` output is the message shown to clients, so upstream details
/// never appear in it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid zipcode")]
    InvalidPostalCode,

    #[error("can not find zipcode")]
    NotFound,

    /// Either upstream failed for a reason other than "not found".
    #[error("internal error")]
    Upstream(anyhow::Error),
}

/// Errors reported by a [`Geocoder`](crate::Geocoder).
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("postal code did not resolve to a location")]
    NotFound,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
