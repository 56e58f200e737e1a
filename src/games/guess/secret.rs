use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;

use super::rules::MAX_SECRET;

/// Supplies the secret for each new session.
pub trait SecretSource {
    /// Draw a secret in `0..=MAX_SECRET`.
    fn draw(&mut self) -> u8;
}

/// Uniform draws over `0..=MAX_SECRET` from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSecrets<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomSecrets<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<StdRng> {
    /// Reproducible sequence of secrets.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: RngCore> SecretSource for RandomSecrets<R> {
    fn draw(&mut self) -> u8 {
        self.rng.random_range(0..=MAX_SECRET)
    }
}

/// Replays a fixed list of secrets, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSecrets {
    secrets: Vec<u8>,
    next: usize,
}

impl FixedSecrets {
    pub fn new(secrets: impl Into<Vec<u8>>) -> Result<Self> {
        let secrets = secrets.into();
        if secrets.is_empty() {
            bail!("at least one secret is required");
        }
        if let Some(bad) = secrets.iter().find(|&&s| s > MAX_SECRET) {
            bail!("secret {} is outside 0..={}", bad, MAX_SECRET);
        }
        Ok(Self { secrets, next: 0 })
    }
}

impl SecretSource for FixedSecrets {
    fn draw(&mut self) -> u8 {
        let secret = self.secrets[self.next];
        self.next = (self.next + 1) % self.secrets.len();
        secret
    }
}
