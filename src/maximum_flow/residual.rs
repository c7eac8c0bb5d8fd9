use crate::maximum_flow::graph::CapacityGraph;
use num_traits::NumAssign;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Residual capacities derived from a capacity graph. Every original edge
/// gets a reverse slot before any augmentation, so pushing flow never has
/// to create the undo direction on the fly.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct ResidualGraph<N, Flow> {
    adjacency: BTreeMap<N, BTreeMap<N, Flow>>,
}

impl<N, Flow> ResidualGraph<N, Flow>
where
    N: Ord + Clone,
    Flow: NumAssign + Ord + Copy,
{
    pub fn from_capacity(capacity: &CapacityGraph<N, Flow>) -> Self {
        let mut residual = Self { adjacency: BTreeMap::new() };
        for (u, v, cap) in capacity.edges() {
            // accumulate: an original v -> u edge may already have set this slot
            *residual.adjacency.entry(u.clone()).or_default().entry(v.clone()).or_insert_with(Flow::zero) += cap;
            residual.adjacency.entry(v.clone()).or_default().entry(u.clone()).or_insert_with(Flow::zero);
        }
        for u in capacity.nodes() {
            residual.adjacency.entry(u.clone()).or_default();
        }
        residual
    }

    pub fn residual_capacity(&self, from: &N, to: &N) -> Flow {
        self.adjacency.get(from).and_then(|neighbors| neighbors.get(to)).copied().unwrap_or_else(Flow::zero)
    }

    pub fn neighbors(&self, u: &N) -> impl Iterator<Item = (&N, Flow)> + '_ {
        self.adjacency.get(u).into_iter().flatten().map(|(v, residual)| (v, *residual))
    }

    pub(crate) fn push_flow(&mut self, from: &N, to: &N, flow: Flow) {
        *self.adjacency.entry(from.clone()).or_default().entry(to.clone()).or_insert_with(Flow::zero) -= flow;
        *self.adjacency.entry(to.clone()).or_default().entry(from.clone()).or_insert_with(Flow::zero) += flow;
    }

    // nodes reachable from source along strictly positive residual capacity,
    // ascending; once no augmenting path remains this is the source side of
    // a minimum cut
    pub fn min_cut(&self, source: &N) -> Vec<N> {
        let mut visited = BTreeSet::from([source.clone()]);
        let mut que = VecDeque::from([source.clone()]);

        while let Some(u) = que.pop_front() {
            for (v, residual) in self.neighbors(&u) {
                if residual > Flow::zero() && visited.insert(v.clone()) {
                    que.push_back(v.clone());
                }
            }
        }

        visited.into_iter().collect()
    }
}
