/// One step of a root-finding run.
///
/// Every method emits one `Iteration` per step. Indices start at 1 and
/// increase by one within a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Step number (1-based).
    pub index: usize,

    /// Current approximation of the root.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,
}

impl Iteration {
    /// Returns the residual `|f(x)|`.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.fx.abs()
    }
}
