use hashbrown::HashSet;
use itertools::Itertools;
use log::info;
use rayon::prelude::*;

use crate::Error;
use crate::model::{Place, RouteGraph};
use crate::oracle::{CachedOracle, DistanceOracle};

/// Builds the directed complete-attempt graph over the given places.
///
/// Issues one oracle lookup per ordered pair of distinct places (n·(n−1)
/// for n places), in parallel. A pair whose lookup comes back absent
/// contributes no edge; the opposite direction is queried independently, so
/// the graph may hold A→B without B→A. Every place stays a node even when
/// all of its lookups failed.
///
/// # Errors
///
/// Returns an error if the place set has fewer than two entries or a
/// duplicate name.
pub fn build_route_graph<O>(oracle: &CachedOracle<O>, places: &[Place]) -> Result<RouteGraph, Error>
where
    O: DistanceOracle + Sync,
{
    validate_places(places)?;

    let mut graph = RouteGraph::with_places(places);

    let pairs: Vec<(&Place, &Place)> = places
        .iter()
        .cartesian_product(places.iter())
        .filter(|(origin, destination)| origin.name != destination.name)
        .collect();

    let legs: Vec<_> = pairs
        .par_iter()
        .map(|(origin, destination)| oracle.leg(&origin.name, &destination.name))
        .collect();

    for ((origin, destination), leg) in pairs.iter().zip(legs) {
        let (Some(from), Some(to)) = (graph.node(&origin.name), graph.node(&destination.name))
        else {
            continue;
        };
        if let Some(leg) = leg {
            graph.add_leg(from, to, leg);
        }
    }

    info!(
        "route graph built: {} places, {} of {} legs resolved",
        graph.node_count(),
        graph.edge_count(),
        pairs.len()
    );

    Ok(graph)
}

fn validate_places(places: &[Place]) -> Result<(), Error> {
    if places.len() < 2 {
        return Err(Error::InvalidData(
            "route planning needs at least two places".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(places.len());
    for place in places {
        if !seen.insert(place.name.as_str()) {
            return Err(Error::InvalidData(format!(
                "duplicate place name: '{}'",
                place.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RouteLeg;

    struct FixedOracle;

    impl DistanceOracle for FixedOracle {
        fn fetch(&self, _origin: &str, _destination: &str) -> Result<RouteLeg, Error> {
            Ok(RouteLeg {
                distance: 1.0,
                duration: 0.1,
            })
        }
    }

    #[test]
    fn fewer_than_two_places_is_rejected() {
        let oracle = CachedOracle::new(FixedOracle);
        let places = vec![Place::new("T. Nagar", "Chennai")];

        assert!(matches!(
            build_route_graph(&oracle, &places),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn duplicate_place_names_are_rejected() {
        let oracle = CachedOracle::new(FixedOracle);
        let places = vec![
            Place::new("T. Nagar", "Chennai"),
            Place::new("T. Nagar", "Chennai"),
            Place::new("Avadi", "Thiruvallur"),
        ];

        assert!(matches!(
            build_route_graph(&oracle, &places),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn all_ordered_pairs_get_an_edge_when_every_lookup_resolves() {
        let oracle = CachedOracle::new(FixedOracle);
        let places = vec![
            Place::new("A", "r"),
            Place::new("B", "r"),
            Place::new("C", "r"),
        ];

        let graph = build_route_graph(&oracle, &places).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 6);
    }
}
