/// Reserved key holding the directory against which the loader resolves
/// relative dotenv paths.
pub const ROOT_KEY: &str = "root";

/// Summary of a load operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Declarations installed into the store.
    pub loaded: usize,
    /// Non-blank, non-comment lines that carried no usable declaration.
    pub skipped: usize,
}
