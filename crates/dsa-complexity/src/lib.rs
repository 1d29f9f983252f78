//! Traversals that exhibit O(1), O(n) and O(n^2) work over a list of names.
//!
//! Every unit of work is reported as one event, so a [`foundation::Recorder`]
//! sees exactly how many elements each traversal touched and in what order.

mod names;
mod scan;

pub use names::{generate_names, DEFAULT_NAME_COUNT, QUADRATIC_NAME_COUNT};
pub use scan::{
    check_first, check_first_with, print_names, print_names_twice, print_names_twice_with,
    print_names_with,
};
