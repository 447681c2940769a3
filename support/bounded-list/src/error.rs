use thiserror::Error;

/// Reasons a [`BoundedList`](crate::BoundedList) operation can be rejected.
///
/// A rejected operation leaves the list exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundedListError {
    /// An insertion was attempted while `size == max_size`.
    #[error("structure is full (max size {max_size})")]
    CapacityExceeded { max_size: usize },

    /// A position argument is outside the range the operation accepts.
    ///
    /// `insert` accepts `0..=size`; `pop` and the accessors accept `0..size`.
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// A removal or lookup was requested on an empty list.
    #[error("structure is empty")]
    EmptyStructure,

    /// `remove` was given a value with no equal element in the list.
    #[error("value not found")]
    ValueNotFound,
}

pub type Result<T, E = BoundedListError> = core::result::Result<T, E>;

/// Logs a rejected operation and hands the error back to the caller.
#[cold]
pub(crate) fn rejected(err: BoundedListError) -> BoundedListError {
    tracing::debug!(error = %err, "bounded list operation rejected");
    err
}
