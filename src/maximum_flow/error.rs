use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum Error<N> {
    /// negative capacity supplied at construction; no partial graph is produced
    #[error("negative capacity on edge {from:?} -> {to:?}")]
    InvalidCapacity { from: N, to: N },

    /// source equals sink, or an endpoint is not referenced by the network
    #[error("invalid endpoints: source {source:?}, sink {sink:?}")]
    InvalidEndpoints { source: N, sink: N },
}
