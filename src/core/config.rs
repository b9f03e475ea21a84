//! Game configuration.
//!
//! `GameOptions` is what a front end passes to `new_game`. Both fields are
//! optional in spirit: the seed defaults to the current time and
//! `all_face_up` defaults to a normal deal.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Options recognized by `new_game`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Shuffle seed. `None` picks a time-derived seed.
    #[serde(default)]
    pub seed: Option<i64>,

    /// Deal every tableau card face-up (debug/test mode).
    #[serde(default)]
    pub all_face_up: bool,
}

impl GameOptions {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with every tableau card revealed.
    #[must_use]
    pub fn with_all_face_up(mut self, all_face_up: bool) -> Self {
        self.all_face_up = all_face_up;
        self
    }

    /// The seed to deal with, resolving the time-derived default.
    #[must_use]
    pub fn resolve_seed(&self) -> i64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

static LAST_TIME_SEED: AtomicI64 = AtomicI64::new(i64::MIN);

/// Milliseconds since the Unix epoch, strictly increasing across calls.
///
/// Two games started within the same millisecond still get distinct seeds.
#[must_use]
pub fn time_seed() -> i64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0);

    let mut last = LAST_TIME_SEED.load(Ordering::Relaxed);
    loop {
        let next = now.max(last.saturating_add(1));
        match LAST_TIME_SEED.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}
