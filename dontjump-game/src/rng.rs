//! Deterministic RNG streams segregated by rule-engine domain.
//!
//! All randomness in the engine is drawn synchronously from these streams,
//! so a run is fully reproducible from its user seed.
use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sha2::Sha256;
use std::cell::{RefCell, RefMut};

/// Bundle of seeded RNG streams, one per simulation domain.
///
/// `platform` feeds the safe-side sampler and side-count rolls, `events`
/// feeds power-up and penalty selection, `narration` feeds the fall-line
/// picker. Keeping the streams separate means a change in one domain's draw
/// pattern cannot perturb another's.
#[derive(Debug, Clone)]
pub struct RngBundle {
    platform: RefCell<CountingRng<SmallRng>>,
    events: RefCell<CountingRng<SmallRng>>,
    narration: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        let platform = CountingRng::new(derive_stream_seed(seed, b"platform"));
        let events = CountingRng::new(derive_stream_seed(seed, b"events"));
        let narration = CountingRng::new(derive_stream_seed(seed, b"narration"));
        Self {
            platform: RefCell::new(platform),
            events: RefCell::new(events),
            narration: RefCell::new(narration),
        }
    }

    /// Access the platform RNG stream.
    #[must_use]
    pub fn platform(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.platform.borrow_mut()
    }

    /// Access the events RNG stream.
    #[must_use]
    pub fn events(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.events.borrow_mut()
    }

    /// Access the narration RNG stream.
    #[must_use]
    pub fn narration(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.narration.borrow_mut()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
