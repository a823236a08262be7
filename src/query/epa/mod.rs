//! The EPA algorithm for penetration depth computation.

pub use self::epa3::*;

mod epa3;
