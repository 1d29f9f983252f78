/// Names generated for the constant and linear demonstrations.
pub const DEFAULT_NAME_COUNT: usize = 100;

/// The quadratic demonstration runs on a much smaller list, otherwise the
/// n^2 diagnostics would swamp the output.
pub const QUADRATIC_NAME_COUNT: usize = 2;

/// `"Name 1"` through `"Name {count}"`.
pub fn generate_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Name {i}")).collect()
}
