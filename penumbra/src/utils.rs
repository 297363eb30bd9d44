#[cfg(feature = "metrics")]
mod metrics;

#[cfg(feature = "metrics")]
pub use self::metrics::*;

use glam::{vec2, UVec2, Vec2};
use rand::Rng;

/// Draws the per-frame jitter kernel: two random pixel offsets in
/// `[0, w) x [0, h)`, rounded to whole pixels so shaders can use them as
/// integer dither offsets.
pub fn draw_jitter(rng: &mut impl Rng, size: UVec2) -> [Vec2; 2] {
    let mut sample = || {
        vec2(
            rng.gen_range(0..size.x) as f32,
            rng.gen_range(0..size.y) as f32,
        )
    };

    [sample(), sample()]
}

#[cfg(test)]
mod tests {
    use glam::uvec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn jitter_stays_in_screen_bounds() {
        let mut rng = StdRng::seed_from_u64(0xcafebabe);
        let size = uvec2(1280, 720);

        for _ in 0..1000 {
            for sample in draw_jitter(&mut rng, size) {
                assert!(sample.x >= 0.0 && sample.x < 1280.0);
                assert!(sample.y >= 0.0 && sample.y < 720.0);
                assert_eq!(sample.x.round(), sample.x);
                assert_eq!(sample.y.round(), sample.y);
            }
        }
    }

    #[test]
    fn jitter_works_on_tiny_viewports() {
        let mut rng = StdRng::seed_from_u64(1);

        for sample in draw_jitter(&mut rng, uvec2(1, 1)) {
            assert_eq!(Vec2::ZERO, sample);
        }
    }
}
