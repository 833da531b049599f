//! Pairwise driving-distance lookups against the distance-matrix provider,
//! memoized for the lifetime of the session.

mod cache;
mod matrix;

pub use cache::CachedOracle;
pub use matrix::{DEFAULT_BASE_URL, DistanceMatrixClient};

use crate::{Error, model::RouteLeg};

/// One attempted provider lookup for an ordered pair of places.
///
/// Structural failures (network, auth, malformed response, rejected
/// request) surface as [`Error::Provider`]; a well-formed answer that the
/// pair is not drivable surfaces as [`Error::NoDistance`]. Callers that
/// must not observe failures go through [`CachedOracle::leg`].
pub trait DistanceOracle {
    fn fetch(&self, origin: &str, destination: &str) -> Result<RouteLeg, Error>;
}
