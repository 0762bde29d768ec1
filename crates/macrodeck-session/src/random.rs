//! Random source shared by every session bootstrap in the process.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex};

/// Cheaply cloneable handle to one seeded generator.
#[derive(Clone)]
pub struct SharedRng(Arc<Mutex<StdRng>>);

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SharedRng {
    pub fn from_entropy() -> Self {
        Self(Arc::new(Mutex::new(StdRng::from_entropy())))
    }

    /// Deterministic generator, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    fn with<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    pub fn fill_bytes(&self, dest: &mut [u8]) {
        self.with(|rng| rng.fill_bytes(dest))
    }

    /// Uniform value in `low..=high`.
    pub fn in_range(&self, low: u16, high: u16) -> u16 {
        self.with(|rng| rng.gen_range(low..=high))
    }
}

impl std::fmt::Debug for SharedRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedRng")
    }
}
