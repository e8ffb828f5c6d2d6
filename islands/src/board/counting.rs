use crate::DisjointSet;

/// The number of pairs among `neighbors` that already belong to the same set.
pub(crate) fn count_connections(forest: &DisjointSet, neighbors: &[usize]) -> usize {
    let mut connections = 0;
    for (idx, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[idx + 1..] {
            if forest.connected(a, b) {
                connections += 1;
            }
        }
    }
    connections
}

/// How the island count of a color changes when a stone is placed next to
/// `neighbors` stones of the same color, `connections` pairs of which were
/// already connected.
///
/// Joining `m` distinct islands removes `m - 1` of them. Around a hex,
/// same-colored neighbors that are next to each other are always already
/// joined, so `connections` determines `m`:
///
/// - 2 neighbors: 0 connections means two islands, 1 means one.
/// - 3 neighbors: 0, 1 or 3 connections for three, two or one islands.
///   2 connections cannot happen, connectivity is transitive.
/// - 4 neighbors: they form at most two runs around the hex, so there are
///   at most two islands. 2 connections (runs of 2 + 2) and 3 connections
///   (runs of 3 + 1) mean two islands, 6 means one.
/// - 5 or 6 neighbors form a single run, i.e. one island, and 1 neighbor
///   just grows its island.
pub(crate) fn island_delta(neighbors: usize, connections: usize) -> isize {
    match (neighbors, connections) {
        (0, _) => 1,
        (2, 0) => -1,
        (3, 0) => -2,
        (3, 1) => -1,
        (4, 2) | (4, 3) => -1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_table() {
        assert_eq!(island_delta(0, 0), 1);
        assert_eq!(island_delta(1, 0), 0);
        assert_eq!(island_delta(2, 0), -1);
        assert_eq!(island_delta(2, 1), 0);
        assert_eq!(island_delta(3, 0), -2);
        assert_eq!(island_delta(3, 1), -1);
        assert_eq!(island_delta(3, 2), 0);
        assert_eq!(island_delta(3, 3), 0);
        assert_eq!(island_delta(4, 2), -1);
        assert_eq!(island_delta(4, 3), -1);
        assert_eq!(island_delta(4, 6), 0);
        assert_eq!(island_delta(5, 10), 0);
        assert_eq!(island_delta(6, 15), 0);
    }

    #[test]
    fn connections_are_counted_pairwise() {
        let mut forest = DisjointSet::new(6);
        assert_eq!(count_connections(&forest, &[0, 1, 2, 3]), 0);
        forest.union(0, 1);
        assert_eq!(count_connections(&forest, &[0, 1, 2, 3]), 1);
        forest.union(2, 3);
        assert_eq!(count_connections(&forest, &[0, 1, 2, 3]), 2);
        forest.union(1, 2);
        assert_eq!(count_connections(&forest, &[0, 1, 2, 3]), 6);
        assert_eq!(count_connections(&forest, &[]), 0);
        assert_eq!(count_connections(&forest, &[5]), 0);
    }
}
