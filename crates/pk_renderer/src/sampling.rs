//! Random sampling helpers.

use pk_math::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform sample in `[-1, 1)^3` rejected until it lies inside the unit ball.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let p = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

// splitmix64 finalizer
#[inline]
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Generator for one pixel of one frame.
///
/// The stream depends only on its three inputs, so pixels can be rendered in
/// any order or on any thread.
pub fn pixel_rng(seed: u64, frame_index: u32, pixel_index: usize) -> StdRng {
    let state = mix(mix(mix(seed) ^ u64::from(frame_index)) ^ pixel_index as u64);
    StdRng::seed_from_u64(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_unit_sphere_is_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = random_in_unit_sphere(&mut rng);
            assert!(p.length_squared() <= 1.0);
            assert!(p.x >= -1.0 && p.x < 1.0);
        }
    }

    #[test]
    fn test_pixel_rng_is_deterministic() {
        let a: [u64; 4] = pixel_rng(9, 2, 17).gen();
        let b: [u64; 4] = pixel_rng(9, 2, 17).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pixel_rng_streams_differ() {
        let base: u64 = pixel_rng(0, 1, 0).gen();
        assert_ne!(base, pixel_rng(0, 1, 1).gen::<u64>());
        assert_ne!(base, pixel_rng(0, 2, 0).gen::<u64>());
        assert_ne!(base, pixel_rng(1, 1, 0).gen::<u64>());
    }
}
