//! Nonce generation for private requests
//!
//! Kraken rejects any private call whose nonce is not greater than the last
//! one it accepted for the same API key. Nonces here are nanosecond
//! timestamps, bumped by one whenever the clock has not moved (or moved
//! backwards) since the previous call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Process-wide generator shared by every signer
static GLOBAL_NONCE: NonceGenerator = NonceGenerator::new();

/// Strictly increasing nonce source
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a generator that has not issued any nonce yet
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    /// Return the next nonce, always greater than every earlier one
    pub fn next(&self) -> u64 {
        let now = unix_nanos();
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }
}

/// Next nonce from the process-wide generator
pub fn next_nonce() -> u64 {
    GLOBAL_NONCE.next()
}

fn unix_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
