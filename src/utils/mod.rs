//! Various unsorted geometrical operators.

pub use self::any_perpendicular::{any_perpendicular, is_near_zero};
pub use self::ccw_face_normal::ccw_face_normal;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod any_perpendicular;
mod ccw_face_normal;
mod point_cloud_support_point;
