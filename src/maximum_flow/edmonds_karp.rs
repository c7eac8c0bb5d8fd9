use crate::maximum_flow::error::Error;
use crate::maximum_flow::graph::CapacityGraph;
use crate::maximum_flow::residual::ResidualGraph;
use log::{debug, trace};
use num_traits::NumAssign;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

pub struct EdmondsKarp<N, Flow> {
    que: VecDeque<(N, Option<Flow>)>,
    prev: BTreeMap<N, N>,
    visited: BTreeSet<N>,
}

impl<N, Flow> Default for EdmondsKarp<N, Flow> {
    fn default() -> Self {
        Self { que: VecDeque::new(), prev: BTreeMap::new(), visited: BTreeSet::new() }
    }
}

impl<N, Flow> EdmondsKarp<N, Flow>
where
    N: Ord + Clone + Debug,
    Flow: NumAssign + Ord + Copy + Debug,
{
    pub fn solve(
        &mut self,
        capacity: &CapacityGraph<N, Flow>,
        source: &N,
        sink: &N,
    ) -> Result<(Flow, ResidualGraph<N, Flow>), Error<N>> {
        if source == sink || !capacity.contains_node(source) || !capacity.contains_node(sink) {
            return Err(Error::InvalidEndpoints { source: source.clone(), sink: sink.clone() });
        }

        let mut residual = ResidualGraph::from_capacity(capacity);
        let mut flow = Flow::zero();
        let mut num_phases = 0_usize;

        loop {
            let delta = self.bfs(&residual, source, sink);
            if delta == Flow::zero() {
                break;
            }
            num_phases += 1;
            trace!("phase {}: bottleneck {:?}", num_phases, delta);

            // update flow along the parent chain
            let mut v = sink.clone();
            while v != *source {
                let u = self.prev[&v].clone();
                residual.push_flow(&u, &v, delta);
                v = u;
            }
            flow += delta;
        }

        debug!("maximum flow {:?} after {} phases", flow, num_phases);
        Ok((flow, residual))
    }

    // one phase: shortest augmenting path by edge count, stopping the moment
    // the sink is discovered; returns its bottleneck, zero if the sink is
    // unreachable
    fn bfs(&mut self, residual: &ResidualGraph<N, Flow>, source: &N, sink: &N) -> Flow {
        self.que.clear();
        self.prev.clear();
        self.visited.clear();

        self.visited.insert(source.clone());
        self.que.push_back((source.clone(), None));

        while let Some((u, bound)) = self.que.pop_front() {
            for (v, residual_capacity) in residual.neighbors(&u) {
                if residual_capacity == Flow::zero() || self.visited.contains(v) {
                    continue;
                }
                self.visited.insert(v.clone());
                self.prev.insert(v.clone(), u.clone());

                let delta = match bound {
                    Some(bound) => bound.min(residual_capacity),
                    None => residual_capacity,
                };
                if v == sink {
                    return delta;
                }
                self.que.push_back((v.clone(), Some(delta)));
            }
        }

        Flow::zero()
    }
}
