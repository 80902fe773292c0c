use chemage_core::Snapshot;

/// Why a bisection solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A probe met the residual tolerance.
    Converged,

    /// Ran out of probes first.
    MaxIters,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// The closest evaluation a bisection solve reached.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,

    /// The root estimate. On convergence this is the probe that met the
    /// tolerance.
    pub x: f64,

    /// Residual at the reported root estimate.
    pub residual: f64,

    /// Model input and output at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Midpoint probes made, not counting the two endpoints.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns true if the solver met its residual tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
