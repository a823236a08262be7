//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two colliders are intersecting or not.
//! * [`query::penetration()`] to compute the smallest translation separating two intersecting
//!   colliders.
//!
//! Both start by rejecting pairs whose world-space AABBs do not overlap. The underlying
//! algorithms are available in the [`gjk`] and [`epa`] submodules.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test
//! [`query::penetration()`]: crate::query::penetration

pub use self::epa::{EpaParams, EpaStatus, ExhaustionReason, Penetration};
pub use self::error::{EpaError, PreconditionViolation};
pub use self::gjk::GjkOptions;
pub use self::intersection_test::intersection_test;
#[cfg(feature = "parallel")]
pub use self::penetration::penetration_batch;
pub use self::penetration::{penetration, penetration_with_workspace};
pub use self::query_options::QueryOptions;

pub mod epa;
mod error;
pub mod gjk;
mod intersection_test;
mod penetration;
mod query_options;
