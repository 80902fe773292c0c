/// A fallible function from a typed input to a typed output.
///
/// Solvers only ever see a model through this trait, so the decay equation
/// and the test doubles in this workspace plug into the same search.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the model is undefined at `input`.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The input a model was called with and the output it produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
