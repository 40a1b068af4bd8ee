/// Conversion from a raw stored string into a typed configuration value.
///
/// `from_env` returns `None` when the raw text is present but not a valid
/// representation of `Self`; accessors then substitute the type's zero value
/// (`Default::default()`) rather than the caller's fallback. The closed set of
/// implementations is `String`, the integer widths used by the accessor
/// family, `bool`, `f64`, and `Vec<String>`.
pub trait FromEnv: Default + Sized {
    fn from_env(raw: &str) -> Option<Self>;
}

impl FromEnv for String {
    fn from_env(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

impl FromEnv for i64 {
    fn from_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromEnv for u64 {
    fn from_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromEnv for f64 {
    fn from_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Accepts the shell-friendly `true`/`false` family: `1`, `t`, `T`, `true`,
/// `TRUE`, `True` and their false counterparts. Anything else is malformed.
impl FromEnv for bool {
    fn from_env(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
            _ => None,
        }
    }
}

/// Splits on `,` with no trimming and no empty-segment handling; a stored
/// value always converts, so list reads never fall back to zero.
impl FromEnv for Vec<String> {
    fn from_env(raw: &str) -> Option<Self> {
        Some(raw.split(',').map(str::to_owned).collect())
    }
}
