use crate::bounding_volume::Aabb;
use crate::query::epa::{Epa, Penetration};
use crate::query::gjk;
use crate::query::{EpaError, QueryOptions};
use crate::shape::Collider;

/// Computes the smallest translation separating two intersecting colliders.
///
/// Returns `Ok(None)` if the colliders do not intersect (see [`crate::query::intersection_test`]
/// for the treatment of touching colliders).
pub fn penetration<A, B>(
    a: &A,
    b: &B,
    options: &QueryOptions,
) -> Result<Option<Penetration>, EpaError>
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    penetration_with_workspace(&mut Epa::new(), a, b, options)
}

/// Same as [`penetration`] but reuses the buffers of the given EPA workspace.
pub fn penetration_with_workspace<A, B>(
    epa: &mut Epa,
    a: &A,
    b: &B,
    options: &QueryOptions,
) -> Result<Option<Penetration>, EpaError>
where
    A: ?Sized + Collider,
    B: ?Sized + Collider,
{
    if !Aabb::from_collider(a).intersects_strictly(&Aabb::from_collider(b)) {
        return Ok(None);
    }

    let result = gjk::intersects_with_simplex(a, b, &options.gjk);

    if !result.hit {
        return Ok(None);
    }

    epa.solve(a, b, &result.simplex, &options.epa).map(Some)
}

/// Computes the penetrations of independent pairs of colliders in parallel.
///
/// Each worker thread reuses its own EPA workspace. The results are in the order of `pairs`.
#[cfg(feature = "parallel")]
pub fn penetration_batch<A, B>(
    pairs: &[(A, B)],
    options: &QueryOptions,
) -> alloc::vec::Vec<Result<Option<Penetration>, EpaError>>
where
    A: Collider + Sync,
    B: Collider + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map_init(Epa::new, |epa, (a, b)| {
            penetration_with_workspace(epa, a, b, options)
        })
        .collect()
}
