use crate::maximum_flow::error::Error;
use num_traits::NumAssign;
use std::collections::BTreeMap;

/// Directed capacity graph keyed by node. Parallel edges between the same
/// ordered pair are merged at insertion time by summing their capacities.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct CapacityGraph<N, Flow> {
    adjacency: BTreeMap<N, BTreeMap<N, Flow>>,
}

impl<N, Flow> CapacityGraph<N, Flow>
where
    N: Ord + Clone,
    Flow: NumAssign + Ord + Copy,
{
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, Flow)>) -> Result<Self, Error<N>> {
        let mut graph = Self { adjacency: BTreeMap::new() };
        for (from, to, capacity) in edges {
            graph.add_directed_edge(from, to, capacity)?;
        }
        Ok(graph)
    }

    pub fn add_directed_edge(&mut self, from: N, to: N, capacity: Flow) -> Result<(), Error<N>> {
        if capacity < Flow::zero() {
            return Err(Error::InvalidCapacity { from, to });
        }

        // every referenced node gets an outer entry, so node iteration is total
        self.adjacency.entry(to.clone()).or_default();
        *self.adjacency.entry(from).or_default().entry(to).or_insert_with(Flow::zero) += capacity;
        Ok(())
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    #[inline]
    pub fn contains_node(&self, u: &N) -> bool {
        self.adjacency.contains_key(u)
    }

    pub fn capacity(&self, from: &N, to: &N) -> Flow {
        self.adjacency.get(from).and_then(|neighbors| neighbors.get(to)).copied().unwrap_or_else(Flow::zero)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn neighbors(&self, u: &N) -> impl Iterator<Item = (&N, Flow)> + '_ {
        self.adjacency.get(u).into_iter().flatten().map(|(v, capacity)| (v, *capacity))
    }

    // all (from, to, capacity) triples, ascending by (from, to)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Flow)> + '_ {
        self.adjacency.iter().flat_map(|(u, neighbors)| neighbors.iter().map(move |(v, capacity)| (u, v, *capacity)))
    }
}
