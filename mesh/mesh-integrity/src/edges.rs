//! Undirected edges and the per-analysis edge usage table.

use hashbrown::HashMap;

/// An edge between two vertices, independent of traversal direction.
///
/// Two adjacent, consistently wound triangles walk their shared edge in
/// opposite directions. Storing the smaller index first makes both walks
/// land on the same key.
///
/// # Example
///
/// ```
/// use mesh_integrity::UndirectedEdge;
///
/// assert_eq!(UndirectedEdge::new(7, 3), UndirectedEdge::new(3, 7));
/// assert_eq!(UndirectedEdge::new(7, 3).endpoints(), (3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedEdge {
    lo: u32,
    hi: u32,
}

impl UndirectedEdge {
    /// Create an edge, normalizing endpoint order.
    #[inline]
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Endpoints as `(smaller, larger)`.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (u32, u32) {
        (self.lo, self.hi)
    }

    /// Whether both endpoints are the same vertex.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.lo == self.hi
    }
}

/// How many triangles use each undirected edge.
///
/// Built fresh for one analysis and dropped afterwards; nothing is cached
/// between calls.
///
/// - usage 1: boundary edge (a hole in the surface)
/// - usage 2: interior edge of a closed manifold
/// - usage 3+: non-manifold "fin" edge
///
/// # Example
///
/// ```
/// use mesh_integrity::EdgeUsageTable;
///
/// let table = EdgeUsageTable::build([[0, 1, 2], [1, 3, 2]]);
///
/// assert_eq!(table.edge_count(), 5);
/// assert_eq!(table.usage(2, 1), 2);
/// assert_eq!(table.boundary_edge_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeUsageTable {
    counts: HashMap<UndirectedEdge, u32>,
}

impl EdgeUsageTable {
    /// Count edge usage over a sequence of triangles.
    ///
    /// Each triangle `(a, b, c)` contributes its edges `(a, b)`, `(b, c)`
    /// and `(c, a)`.
    #[must_use]
    pub fn build(triangles: impl IntoIterator<Item = [u32; 3]>) -> Self {
        let triangles = triangles.into_iter();
        let mut counts: HashMap<UndirectedEdge, u32> =
            HashMap::with_capacity(triangles.size_hint().0 * 3 / 2);

        for [a, b, c] in triangles {
            for edge in [
                UndirectedEdge::new(a, b),
                UndirectedEdge::new(b, c),
                UndirectedEdge::new(c, a),
            ] {
                *counts.entry(edge).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Number of triangles using the edge between `a` and `b`, in either
    /// direction. Zero if no triangle uses it.
    #[must_use]
    pub fn usage(&self, a: u32, b: u32) -> u32 {
        self.counts
            .get(&UndirectedEdge::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.counts.len()
    }

    /// Check if no edges were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(edge, usage)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (UndirectedEdge, u32)> + '_ {
        self.counts.iter().map(|(&edge, &count)| (edge, count))
    }

    /// Iterate over edges used by exactly one triangle.
    pub fn boundary_edges(&self) -> impl Iterator<Item = UndirectedEdge> + '_ {
        self.iter()
            .filter(|&(_, count)| count == 1)
            .map(|(edge, _)| edge)
    }

    /// Count the edges used by exactly one triangle.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.counts.values().filter(|&&count| count == 1).count()
    }

    /// Iterate over edges used by three or more triangles.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = UndirectedEdge> + '_ {
        self.iter()
            .filter(|&(_, count)| count > 2)
            .map(|(edge, _)| edge)
    }

    /// Count the edges used by three or more triangles.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.counts.values().filter(|&&count| count > 2).count()
    }

    /// True iff every recorded edge is used by exactly two triangles.
    ///
    /// Vacuously true for an empty table.
    #[must_use]
    pub fn is_closed_manifold(&self) -> bool {
        self.counts.values().all(|&count| count == 2)
    }

    /// Boundary edges sorted by endpoints, for stable diagnostics output.
    #[must_use]
    pub fn sorted_boundary_edges(&self) -> Vec<UndirectedEdge> {
        let mut edges: Vec<_> = self.boundary_edges().collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Vec<[u32; 3]> {
        vec![[0, 1, 2]]
    }

    fn two_triangles_sharing_edge() -> Vec<[u32; 3]> {
        vec![[0, 1, 2], [1, 3, 2]]
    }

    fn fin() -> Vec<[u32; 3]> {
        // Three triangles hanging off edge (0, 1)
        vec![[0, 1, 2], [0, 1, 3], [0, 1, 4]]
    }

    fn tetrahedron() -> Vec<[u32; 3]> {
        vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]
    }

    #[test]
    fn edge_normalization() {
        let e = UndirectedEdge::new(5, 2);
        assert_eq!(e.endpoints(), (2, 5));
        assert!(!e.is_degenerate());
        assert!(UndirectedEdge::new(4, 4).is_degenerate());
    }

    #[test]
    fn single_triangle_is_all_boundary() {
        let table = EdgeUsageTable::build(single_triangle());

        assert_eq!(table.edge_count(), 3);
        assert_eq!(table.boundary_edge_count(), 3);
        assert!(!table.is_closed_manifold());
    }

    #[test]
    fn shared_edge_counted_twice() {
        let table = EdgeUsageTable::build(two_triangles_sharing_edge());

        assert_eq!(table.usage(1, 2), 2);
        assert_eq!(table.usage(2, 1), 2);
        assert_eq!(table.usage(0, 1), 1);
        assert_eq!(table.boundary_edge_count(), 4);
    }

    #[test]
    fn fin_edge_detected() {
        let table = EdgeUsageTable::build(fin());

        assert_eq!(table.usage(0, 1), 3);
        assert_eq!(table.non_manifold_edge_count(), 1);
        assert_eq!(
            table.non_manifold_edges().collect::<Vec<_>>(),
            vec![UndirectedEdge::new(0, 1)]
        );
        assert!(!table.is_closed_manifold());
    }

    #[test]
    fn tetrahedron_is_closed() {
        let table = EdgeUsageTable::build(tetrahedron());

        assert_eq!(table.edge_count(), 6);
        assert_eq!(table.boundary_edge_count(), 0);
        assert!(table.is_closed_manifold());
    }

    #[test]
    fn empty_table_is_vacuously_closed() {
        let table = EdgeUsageTable::build(std::iter::empty());
        assert!(table.is_empty());
        assert!(table.is_closed_manifold());
    }

    #[test]
    fn unknown_edge_has_zero_usage() {
        let table = EdgeUsageTable::build(single_triangle());
        assert_eq!(table.usage(0, 5), 0);
    }

    #[test]
    fn sorted_boundary_edges_are_stable() {
        let table = EdgeUsageTable::build(two_triangles_sharing_edge());
        let edges: Vec<_> = table
            .sorted_boundary_edges()
            .into_iter()
            .map(UndirectedEdge::endpoints)
            .collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }
}
