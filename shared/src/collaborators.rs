//! Seams between the spin logic and the outside world: randomness, the
//! persisted one-time gate, wall-clock delays and the flavor-text service.
//! Everything here runs on a single thread, so futures are `LocalBoxFuture`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::GATE_SPUN_VALUE;
use crate::error::{FortuneError, GateError};

/// Source of prize draws.
pub trait RandomIndex {
    /// Uniform index in `[0, n)`; `n` is never zero.
    fn next_index(&mut self, n: usize) -> usize;
}

/// `RandomIndex` over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndex<R: Rng>(R);

impl<R: Rng> RngIndex<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngIndex<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomIndex for RngIndex<R> {
    fn next_index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }
}

/// Minimal string key-value storage, shaped like the browser's localStorage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GateError>;
}

impl KeyValueStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GateError> {
        self.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle so a test can inspect what was persisted.
impl<S: KeyValueStore> KeyValueStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GateError> {
        self.borrow_mut().set(key, value)
    }
}

/// The one-time-use flag.
pub trait GateStore {
    /// Whether a spin has already completed. Read once at startup.
    fn load(&self) -> bool;
    /// Records that a spin has completed.
    fn save(&mut self) -> Result<(), GateError>;
}

/// Gate kept under a single key of a `KeyValueStore`. Only the literal
/// `"true"` counts as spun.
#[derive(Debug, Clone)]
pub struct KeyedGate<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyedGate<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> GateStore for KeyedGate<S> {
    fn load(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some(GATE_SPUN_VALUE)
    }

    fn save(&mut self) -> Result<(), GateError> {
        self.store.set(&self.key, GATE_SPUN_VALUE)
    }
}

/// Wall-clock delays.
pub trait Clock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Produces the congratulatory message for a won prize.
pub trait FortuneTeller {
    fn fortune(&self, prize_label: &str) -> LocalBoxFuture<'static, Result<String, FortuneError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_index_stays_in_range() {
        let mut rng = RngIndex::seeded(42);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_index(n) < n);
            }
        }
    }

    #[test]
    fn test_keyed_gate_only_accepts_literal_true() {
        let mut store = HashMap::new();
        store.insert("gate".to_string(), "TRUE".to_string());
        let gate = KeyedGate::new(store, "gate");
        assert!(!gate.load());

        let mut gate = KeyedGate::new(HashMap::<String, String>::new(), "gate");
        assert!(!gate.load());
        gate.save().unwrap();
        assert!(gate.load());
        assert_eq!(gate.store().get("gate").map(String::as_str), Some("true"));
    }
}
