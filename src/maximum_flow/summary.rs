use crate::maximum_flow::graph::CapacityGraph;
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct FlowRecord<N, Flow> {
    pub from: N,
    pub to: N,
    pub flow: Flow,
}

/// Flow carried by every original edge, ascending by (from, to).
/// Edges carrying nothing are omitted; when antiparallel original edges
/// cancel, the net flow is attributed entirely to the larger direction.
pub fn summarize<N, Flow>(capacity: &CapacityGraph<N, Flow>, residual: &ResidualGraph<N, Flow>) -> Vec<FlowRecord<N, Flow>>
where
    N: Ord + Clone,
    Flow: NumAssign + Ord + Copy,
{
    let mut records = Vec::new();
    for (from, to, cap) in capacity.edges() {
        let used = cap - residual.residual_capacity(from, to);
        if used > Flow::zero() {
            records.push(FlowRecord { from: from.clone(), to: to.clone(), flow: used });
        }
    }
    records
}
