//! Ray-primitive intersection.
//!
//! Sphere tests work in the frame where the ray origin is offset by the
//! sphere's position (`origin + position`), and the closest-hit stage
//! resolves the surface point and normal in that same frame. For a sphere at
//! the world origin this is the usual geometry; elsewhere the sphere behaves
//! as if centred at `-position`.

use crate::{HitRecord, Primitive, Ray, Shape, Sphere};

/// Distance to the near intersection of `ray` with `sphere`, if it is in front
/// of the origin.
///
/// Only the smaller root of `a t^2 + b t + c = 0` is considered, so a ray
/// starting inside the sphere reports no hit.
pub fn ray_sphere_distance(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let origin = ray.origin + sphere.position;
    let direction = ray.direction;

    let a = direction.dot(direction);
    let b = 2.0 * origin.dot(direction);
    let c = origin.dot(origin) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let closest_t = (-b - discriminant.sqrt()) / (2.0 * a);
    (closest_t > 0.0).then_some(closest_t)
}

/// Test `ray` against `primitive`, returning whichever of `record` and the new
/// hit is closer.
///
/// An accepted hit only carries distance and indices; see [`closest_hit`].
pub fn intersect(ray: &Ray, primitive: &Primitive, record: HitRecord) -> HitRecord {
    match &primitive.shape {
        Shape::Sphere(sphere) => match ray_sphere_distance(ray, sphere) {
            Some(distance) => record.nearer(HitRecord {
                object_index: primitive.object_index,
                material_index: primitive.material_index,
                distance,
                ..record
            }),
            None => record,
        },
        Shape::Triangle(_) => record,
    }
}

/// Scan every primitive and keep the nearest hit.
pub fn nearest_hit(ray: &Ray, primitives: &[Primitive]) -> HitRecord {
    primitives
        .iter()
        .fold(HitRecord::miss(), |record, primitive| {
            intersect(ray, primitive, record)
        })
}

/// Fill in the world position and normal of a hit on `primitive`.
pub fn closest_hit(ray: &Ray, primitive: &Primitive, record: HitRecord) -> HitRecord {
    match &primitive.shape {
        Shape::Sphere(sphere) => {
            let origin = ray.origin + sphere.position;
            let hit_point = origin + ray.direction * record.distance;

            HitRecord {
                world_normal: hit_point.normalize(),
                world_position: hit_point - sphere.position,
                ..record
            }
        }
        Shape::Triangle(_) => record,
    }
}
