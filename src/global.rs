//! Process-wide default store and its free-function surface.
//!
//! The default instance is created on first use, seeded from the process
//! environment, and lives for the rest of the process. Dotenv files loaded
//! afterwards override environment values on key collision. Call sites that
//! want isolation (tests, scoped configuration) construct their own
//! [`Store`] instead.

use std::fmt::Display;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Error;
use crate::model::LoadReport;
use crate::schema::Bindable;
use crate::store::Store;

static GLOBAL: OnceLock<Store> = OnceLock::new();

/// The process-wide store.
pub fn store() -> &'static Store {
    GLOBAL.get_or_init(Store::from_process_env)
}

/// Store `value` under `key` in the process-wide store.
pub fn set(key: impl Into<String>, value: impl Display) {
    store().set(key, value);
}

/// Raw lookup in the process-wide store.
pub fn get(key: &str) -> Option<String> {
    store().get(key)
}

/// Load a dotenv file into the process-wide store.
pub fn load(path: impl AsRef<Path>) -> Result<LoadReport, Error> {
    store().load(path)
}

/// Populate `record` from the process-wide store.
pub fn map<R: Bindable>(record: &mut R) {
    store().map(record);
}

/// Read `key` as a string; `""` when absent.
pub fn string(key: &str) -> String {
    store().string(key)
}

/// Read `key` as a string with an explicit fallback for absent keys.
pub fn string_or(key: &str, default: impl Into<String>) -> String {
    store().string_or(key, default)
}

/// Read `key` as a comma-separated list; empty when absent.
pub fn strings(key: &str) -> Vec<String> {
    store().strings(key)
}

/// Read `key` as a comma-separated list with an explicit fallback.
pub fn strings_or(key: &str, default: Vec<String>) -> Vec<String> {
    store().strings_or(key, default)
}

/// Read `key` as a signed integer; `0` when absent.
pub fn int(key: &str) -> i64 {
    store().int(key)
}

/// Read `key` as a signed integer with an explicit fallback for absent keys.
pub fn int_or(key: &str, default: i64) -> i64 {
    store().int_or(key, default)
}

/// Read `key` as an `i64`; `0` when absent.
pub fn int64(key: &str) -> i64 {
    store().int64(key)
}

/// Read `key` as an `i64` with an explicit fallback for absent keys.
pub fn int64_or(key: &str, default: i64) -> i64 {
    store().int64_or(key, default)
}

/// Read `key` as an unsigned integer; `0` when absent.
pub fn uint(key: &str) -> u64 {
    store().uint(key)
}

/// Read `key` as an unsigned integer with an explicit fallback for absent
/// keys.
pub fn uint_or(key: &str, default: u64) -> u64 {
    store().uint_or(key, default)
}

/// Read `key` as a `u64`; `0` when absent.
pub fn uint64(key: &str) -> u64 {
    store().uint64(key)
}

/// Read `key` as a `u64` with an explicit fallback for absent keys.
pub fn uint64_or(key: &str, default: u64) -> u64 {
    store().uint64_or(key, default)
}

/// Read `key` as a bool; `false` when absent.
pub fn bool(key: &str) -> bool {
    store().bool(key)
}

/// Read `key` as a bool with an explicit fallback for absent keys.
pub fn bool_or(key: &str, default: bool) -> bool {
    store().bool_or(key, default)
}

/// Read `key` as an `f64`; `0.0` when absent.
pub fn float(key: &str) -> f64 {
    store().float(key)
}

/// Read `key` as an `f64` with an explicit fallback for absent keys.
pub fn float_or(key: &str, default: f64) -> f64 {
    store().float_or(key, default)
}
