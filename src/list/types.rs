/*!
 * List Types
 * Error and result types for block list operations
 */

use miette::Diagnostic;
use thiserror::Error;

/// List operation result
pub type ListResult<T> = Result<T, ListError>;

/// Invalid-argument failures raised by the block list
///
/// Every variant is reported before any structural change is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
pub enum ListError {
    #[error("{operation}: index {index} out of bounds for list of size {size}")]
    #[diagnostic(
        code(list::index_out_of_bounds),
        help("Insertion and get_node accept 0..=size, lookups and removal accept 0..size.")
    )]
    IndexOutOfBounds {
        operation: &'static str,
        index: usize,
        size: usize,
    },

    #[error("{operation}: list is empty")]
    #[diagnostic(
        code(list::empty),
        help("Check is_empty() before removing by node or by block.")
    )]
    EmptyList { operation: &'static str },
}

impl ListError {
    pub(crate) fn out_of_bounds(operation: &'static str, index: usize, size: usize) -> Self {
        ListError::IndexOutOfBounds {
            operation,
            index,
            size,
        }
    }

    /// Name of the operation that rejected its argument
    pub fn operation(&self) -> &'static str {
        match self {
            ListError::IndexOutOfBounds { operation, .. } => operation,
            ListError::EmptyList { operation } => operation,
        }
    }
}
