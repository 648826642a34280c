//! Fingerprint → token table with optional recency bound.
//!
//! The table is not synchronized; [`ThrowableRenderer`](super::ThrowableRenderer)
//! holds it behind a single mutex so lookup-or-insert is atomic.
//!
//! # Eviction
//!
//! Unbounded tables grow for the life of the process. Bounded tables evict
//! the least recently used fingerprint when a new one arrives at capacity.
//! Each entry stores a logical clock value instead of an `Instant`, which
//! keeps ordering exact under bursts.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use crate::fault::FaultFingerprint;

/// Prefix shared by every minted token.
pub const TOKEN_PREFIX: &str = "fault-";

#[derive(Debug)]
struct TokenEntry {
    token: String,
    last_used: u64,
}

/// Outcome of [`TokenTable::lookup_or_insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// First sighting. A fresh token was recorded; `evicted` names the token
    /// dropped to make room, if any.
    Minted {
        token: String,
        evicted: Option<String>,
    },
    /// Already recorded under this token.
    Seen(String),
}

/// Counters describing table activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Tokens minted for first sightings.
    pub tokens_minted: u64,
    /// Renderings that were reduced to a token.
    pub repeats_suppressed: u64,
    /// Entries dropped by the recency bound.
    pub evictions: u64,
    /// Entries currently held.
    pub live_entries: usize,
}

#[derive(Debug, Default)]
pub(crate) struct TokenTable {
    entries: HashMap<FaultFingerprint, TokenEntry>,
    tokens: HashSet<String>,
    capacity: Option<usize>,
    clock: u64,
    tokens_minted: u64,
    repeats_suppressed: u64,
    evictions: u64,
}

impl TokenTable {
    /// Create a table. `None` or `Some(0)` means unbounded.
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity: capacity.filter(|&c| c > 0),
            ..Self::default()
        }
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Return the existing token for `fingerprint` or mint and record one.
    pub(crate) fn lookup_or_insert(&mut self, fingerprint: &FaultFingerprint) -> Lookup {
        self.clock += 1;
        let now = self.clock;

        if let Some(entry) = self.entries.get_mut(fingerprint) {
            entry.last_used = now;
            self.repeats_suppressed += 1;
            return Lookup::Seen(entry.token.clone());
        }

        let evicted = match self.capacity {
            Some(capacity) if self.entries.len() >= capacity => self.evict_oldest(),
            _ => None,
        };

        let token = self.mint(fingerprint);
        self.tokens.insert(token.clone());
        self.entries.insert(
            fingerprint.clone(),
            TokenEntry {
                token: token.clone(),
                last_used: now,
            },
        );
        self.tokens_minted += 1;

        Lookup::Minted { token, evicted }
    }

    pub(crate) fn stats(&self) -> RendererStats {
        RendererStats {
            tokens_minted: self.tokens_minted,
            repeats_suppressed: self.repeats_suppressed,
            evictions: self.evictions,
            live_entries: self.entries.len(),
        }
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone())?;
        let entry = self.entries.remove(&oldest)?;
        self.tokens.remove(&entry.token);
        self.evictions += 1;
        Some(entry.token)
    }

    /// Derive a token from the fingerprint hash, re-salting on collision.
    ///
    /// `DefaultHasher::new()` uses fixed keys, so the same fault gets the
    /// same token across runs unless it collides.
    fn mint(&self, fingerprint: &FaultFingerprint) -> String {
        let mut salt: u32 = 0;
        loop {
            let mut hasher = DefaultHasher::new();
            fingerprint.hash(&mut hasher);
            salt.hash(&mut hasher);
            let token = format!("{}{:08x}", TOKEN_PREFIX, hasher.finish() as u32);
            if !self.tokens.contains(&token) {
                return token;
            }
            salt = salt.wrapping_add(1);
        }
    }
}
