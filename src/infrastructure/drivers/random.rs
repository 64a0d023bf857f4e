use rand::Rng as _;

/// Seed for the engine's random colors
pub(crate) fn get_seed() -> u64 {
    rand::thread_rng().r#gen()
}
