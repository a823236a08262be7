use crate::query::epa::EpaParams;
use crate::query::gjk::GjkOptions;

/// The parameters of the GJK and EPA algorithms used by the queries of this module.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    /// Options of the intersection test.
    pub gjk: GjkOptions,
    /// Options of the penetration depth computation.
    pub epa: EpaParams,
}
