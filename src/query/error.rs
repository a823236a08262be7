/// A violated precondition of the EPA algorithm.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreconditionViolation {
    /// The initial simplex is not a tetrahedron.
    #[error("the initial simplex has {0} points instead of 4.")]
    SimplexSize(usize),
    /// The initial tetrahedron does not contain the origin.
    #[error("the initial tetrahedron does not contain the origin.")]
    OriginNotEnclosed,
}

/// Errors of the EPA algorithm.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpaError {
    /// The input simplex cannot be used as the starting polytope.
    #[error("EPA precondition violated: {0}")]
    PreconditionViolated(#[from] PreconditionViolation),
}
