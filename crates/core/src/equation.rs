/// An equation posed over a [`Model`](crate::Model).
///
/// Solvers choose `x`, the problem turns it into a model input, and after the
/// model runs the problem reports how far the output is from satisfying the
/// equation. A root is an `x` whose residuals are all zero.
///
/// `N` counts both the solver variables and the residuals, so dating a single
/// grain by its age alone is an `EquationProblem<1>`.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for the solver variables `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if `x` has no corresponding input.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Measures how far `output` is from satisfying the equation.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals are undefined for this pair.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}
