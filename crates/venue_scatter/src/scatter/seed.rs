//! Deterministic seed derivation for per-point random streams.
use rand::Rng;

/// Creates a deterministic seed for a draw stream from a base seed.
///
/// Each point consumes two streams (angle and radial distance), so consecutive
/// stream indices must decorrelate fully; the multiply-and-finalize mixing
/// guarantees that even adjacent indices produce unrelated seeds.
pub fn seed_for_index(base_seed: u64, stream: u64) -> u64 {
    mix_u64(base_seed ^ stream.wrapping_mul(0x9E3779B97F4A7C15))
}

/// SplitMix64 finalizer.
#[inline]
pub fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}
