use std::sync::{Mutex, PoisonError};

use hashbrown::HashMap;
use log::warn;

use super::DistanceOracle;
use crate::model::RouteLeg;

/// Session-scoped memo cache over a [`DistanceOracle`].
///
/// Keyed by the exact (origin, destination) string pair. Failed lookups are
/// cached as absent so a graph rebuild or repeated query re-issues no
/// provider calls. Safe to share across the builder's worker threads.
pub struct CachedOracle<O> {
    inner: O,
    cache: Mutex<HashMap<(String, String), Option<RouteLeg>>>,
}

impl<O: DistanceOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Memoized lookup for an ordered pair of places.
    ///
    /// Provider failures and undrivable pairs both collapse to `None`; the
    /// cause is reported as a diagnostic and never propagates further.
    pub fn leg(&self, origin: &str, destination: &str) -> Option<RouteLeg> {
        let key = (origin.to_string(), destination.to_string());

        if let Some(cached) = self.lock().get(&key) {
            return *cached;
        }

        let outcome = match self.inner.fetch(origin, destination) {
            Ok(leg) => Some(leg),
            Err(err) => {
                warn!("lookup failed for '{origin}' -> '{destination}': {err}");
                None
            }
        };

        self.lock().insert(key, outcome);
        outcome
    }

    /// Number of distinct pairs resolved so far, successful or not
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), Option<RouteLeg>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::Error;

    struct CountingOracle {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingOracle {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DistanceOracle for CountingOracle {
        fn fetch(&self, origin: &str, destination: &str) -> Result<RouteLeg, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(Error::NoDistance {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                })
            } else {
                Ok(RouteLeg {
                    distance: 1.0,
                    duration: 0.1,
                })
            }
        }
    }

    #[test]
    fn successful_lookup_is_memoized() {
        let oracle = CachedOracle::new(CountingOracle::new(false));

        assert!(oracle.leg("A", "B").is_some());
        assert!(oracle.leg("A", "B").is_some());
        assert_eq!(oracle.inner.calls(), 1);
    }

    #[test]
    fn failed_lookup_is_memoized_as_absent() {
        let oracle = CachedOracle::new(CountingOracle::new(true));

        assert!(oracle.leg("A", "B").is_none());
        assert!(oracle.leg("A", "B").is_none());
        assert_eq!(oracle.inner.calls(), 1);
    }

    #[test]
    fn reversed_pair_is_a_distinct_key() {
        let oracle = CachedOracle::new(CountingOracle::new(false));

        oracle.leg("A", "B");
        oracle.leg("B", "A");
        assert_eq!(oracle.inner.calls(), 2);
        assert_eq!(oracle.len(), 2);
    }
}
