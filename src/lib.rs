//! Process-wide configuration store seeded from the environment and `.env`
//! files.
//!
//! [`Store`] is the core type: a key/value mapping populated from the process
//! environment and any number of dotenv files (file values win on collision),
//! read through typed accessors (`string`, `int`, `bool`, …) or mapped onto a
//! record type via an explicit binding table ([`Bindable`]).
//!
//! The free functions at the crate root operate on a process-wide default
//! instance for convenience call sites; construct a [`Store`] directly for an
//! isolated instance.
//!
//! ```
//! let store = envstore::Store::new();
//! store.load_str("export APP_NAME='demo'\nWORKERS=4\n");
//!
//! assert_eq!(store.string("APP_NAME"), "demo");
//! assert_eq!(store.uint("WORKERS"), 4);
//! assert_eq!(store.uint_or("MISSING", 8), 8);
//! ```

mod error;
mod global;
mod loader;
mod model;
mod parser;
mod schema;
mod store;
mod value;

pub use error::Error;
pub use global::{
    bool, bool_or, float, float_or, get, int, int64, int64_or, int_or, load, map, set, store,
    string, string_or, strings, strings_or, uint, uint64, uint64_or, uint_or,
};
pub use model::{LoadReport, ROOT_KEY};
pub use parser::parse_line;
pub use schema::{Bindable, Field};
pub use store::Store;
pub use value::FromEnv;
