//! The GJK algorithm for boolean intersection tests.

pub use self::gjk::*;
pub use self::simplex::Simplex;

mod gjk;
mod simplex;
