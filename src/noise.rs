// The static noise texture the swirl samples from.
// Built once at startup from a seeded RNG; read-only afterwards.

use rand::RngCore;

pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<u32>, // width * height, row-major by v
}

impl NoiseField {
    /// Fill a `width x height` table with independent random u32s.
    pub fn new<R: RngCore + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut values = vec![0u32; width * height];
        for value in values.iter_mut() {
            *value = rng.next_u32();
        }
        Self { width, height, values }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Texel at (u, v). Callers wrap first; see [`wrap`].
    #[inline]
    pub fn sample(&self, u: usize, v: usize) -> u32 {
        debug_assert!(u < self.width && v < self.height, "unwrapped noise index ({u}, {v})");
        self.values[v * self.width + u]
    }
}

/// Map any integer coordinate into `[0, n)`.
/// Negative inputs wrap from the far edge (-1 -> n - 1), unlike `%` on signed ints.
#[inline]
pub fn wrap(c: i64, n: usize) -> usize {
    c.rem_euclid(n as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn same_seed_same_texture() {
        let a = NoiseField::new(64, 32, &mut SmallRng::seed_from_u64(7));
        let b = NoiseField::new(64, 32, &mut SmallRng::seed_from_u64(7));
        for v in 0..32 {
            for u in 0..64 {
                assert_eq!(a.sample(u, v), b.sample(u, v));
            }
        }
    }

    #[test]
    fn different_seed_different_texture() {
        let a = NoiseField::new(64, 64, &mut SmallRng::seed_from_u64(1));
        let b = NoiseField::new(64, 64, &mut SmallRng::seed_from_u64(2));
        let same = (0..64).filter(|&u| a.sample(u, 0) == b.sample(u, 0)).count();
        assert!(same < 4);
    }

    #[test]
    fn texture_is_not_blank() {
        let field = NoiseField::new(512, 512, &mut SmallRng::seed_from_u64(3));
        assert_eq!(field.width(), 512);
        assert_eq!(field.height(), 512);

        let nonzero = (0..10)
            .flat_map(|v| (0..10).map(move |u| (u, v)))
            .any(|(u, v)| field.sample(u, v) != 0);
        assert!(nonzero, "noise field should contain non-zero values");
    }

    #[test]
    fn wrap_stays_in_range_and_is_idempotent() {
        for c in [-1025_i64, -512, -513, -1, 0, 1, 511, 512, 513, 1024, 100_000, i64::MIN + 1] {
            let w = wrap(c, 512);
            assert!(w < 512, "wrap({c}) = {w}");
            assert_eq!(wrap(w as i64, 512), w);
        }
    }

    #[test]
    fn wrap_negative_counts_from_the_far_edge() {
        assert_eq!(wrap(-1, 512), 511);
        assert_eq!(wrap(-512, 512), 0);
        assert_eq!(wrap(-513, 512), 511);
        assert_eq!(wrap(512, 512), 0);
        assert_eq!(wrap(700, 512), 188);
    }
}
