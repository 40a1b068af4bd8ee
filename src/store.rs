use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::value::FromEnv;

/// In-memory key/value configuration store.
///
/// Keys are case-sensitive and hold at most one value; a later `set` or load
/// for the same key silently overwrites the earlier one. All methods take
/// `&self`. Mutation is guarded by an internal read/write lock, so a store
/// can be shared across threads freely.
///
/// [`Store::new`] builds an empty, isolated instance for tests and scoped
/// configuration; [`Store::from_process_env`] additionally seeds the mapping
/// from the process environment so that dotenv files only need to declare
/// what the shell did not already export. The process-wide default instance
/// lives behind the free functions in the crate root.
#[derive(Debug, Default)]
pub struct Store {
    values: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the process environment as a base layer.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process_env() -> Self {
        let store = Self::new();
        {
            let mut values = store.write_values();
            for (key, value) in std::env::vars_os() {
                if let (Some(key), Some(value)) = (key.to_str(), value.to_str()) {
                    values.insert(key.to_owned(), value.to_owned());
                }
            }
        }
        store
    }

    /// Store `value` under `key`, rendering it with its canonical `Display`
    /// text. Overwrites silently.
    pub fn set(&self, key: impl Into<String>, value: impl Display) {
        self.write_values().insert(key.into(), value.to_string());
    }

    /// Return the raw stored string for `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_values().get(key).cloned()
    }

    /// Copy the current mapping.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read_values().clone()
    }

    /// Look up `key` and convert it to `T`.
    ///
    /// An absent key returns `default` unchanged, with no conversion
    /// attempted. A present value that fails to parse as `T` returns the
    /// zero value of `T`, deliberately not `default`, so a malformed value
    /// reads as "empty" rather than "use the fallback". Conversion failure
    /// is silent.
    pub fn get_or<T: FromEnv>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Some(raw) => T::from_env(&raw).unwrap_or_default(),
            None => default,
        }
    }

    /// Read `key` as a string; absent keys read as `""`.
    pub fn string(&self, key: &str) -> String {
        self.get_or(key, String::new())
    }

    /// Read `key` as a string with an explicit fallback for absent keys.
    pub fn string_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_or(key, default.into())
    }

    /// Read `key` as a comma-separated list; absent keys read as empty.
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.get_or(key, Vec::new())
    }

    /// Read `key` as a comma-separated list with an explicit fallback.
    pub fn strings_or(&self, key: &str, default: Vec<String>) -> Vec<String> {
        self.get_or(key, default)
    }

    /// Read `key` as a signed integer; absent keys read as `0`. The full
    /// `i64` range is accepted, same as [`Store::int64`].
    pub fn int(&self, key: &str) -> i64 {
        self.get_or(key, 0)
    }

    /// Read `key` as a signed integer with an explicit fallback for absent
    /// keys.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    /// Read `key` as an `i64`; absent keys read as `0`.
    pub fn int64(&self, key: &str) -> i64 {
        self.get_or(key, 0)
    }

    /// Read `key` as an `i64` with an explicit fallback for absent keys.
    pub fn int64_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    /// Read `key` as an unsigned integer; absent keys read as `0`. The full
    /// `u64` range is accepted, same as [`Store::uint64`].
    pub fn uint(&self, key: &str) -> u64 {
        self.get_or(key, 0)
    }

    /// Read `key` as an unsigned integer with an explicit fallback for
    /// absent keys.
    pub fn uint_or(&self, key: &str, default: u64) -> u64 {
        self.get_or(key, default)
    }

    /// Read `key` as a `u64`; absent keys read as `0`.
    pub fn uint64(&self, key: &str) -> u64 {
        self.get_or(key, 0)
    }

    /// Read `key` as a `u64` with an explicit fallback for absent keys.
    pub fn uint64_or(&self, key: &str, default: u64) -> u64 {
        self.get_or(key, default)
    }

    /// Read `key` as a bool; absent keys read as `false`. Accepts the
    /// `1/t/T/true/TRUE/True` family and its false counterparts.
    pub fn bool(&self, key: &str) -> bool {
        self.get_or(key, false)
    }

    /// Read `key` as a bool with an explicit fallback for absent keys.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    /// Read `key` as an `f64`; absent keys read as `0.0`.
    pub fn float(&self, key: &str) -> f64 {
        self.get_or(key, 0.0)
    }

    /// Read `key` as an `f64` with an explicit fallback for absent keys.
    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    // Poisoning is absorbed: a panic elsewhere must not wedge config reads.
    fn read_values(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_values(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}
