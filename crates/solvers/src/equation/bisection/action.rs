/// What a bisection observer can ask the solver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt after the current evaluation and report the closest one so far.
    StopEarly,
}
