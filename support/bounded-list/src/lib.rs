#![allow(unsafe_code)]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! BoundedList: a fixed-capacity, array-backed list.
//!
//! `BoundedList<T>` keeps its elements in one contiguous buffer that is
//! allocated once, at construction, and never grows:
//! - Elements live in `[0, size)`; the rest of the buffer is uninitialized
//! - Insertions fail with [`BoundedListError::CapacityExceeded`] instead of
//!   reallocating
//! - Positional inserts and removals shift the tail by one slot
//! - Every failure is reported through [`Result`]; nothing panics except the
//!   `Index` operators, which behave like slice indexing
//!
//! ```
//! use structures_bounded_list::{BoundedList, BoundedListError};
//!
//! let mut list = BoundedList::with_capacity(3);
//! list.push_back(5).unwrap();
//! list.push_back(3).unwrap();
//! list.push_back(8).unwrap();
//!
//! assert!(list.is_full());
//! assert_eq!(
//!     list.push_back(1),
//!     Err(BoundedListError::CapacityExceeded { max_size: 3 })
//! );
//! assert_eq!(list.as_slice(), &[5, 3, 8]);
//! ```

extern crate alloc;

mod error;
mod list;

pub use error::{BoundedListError, Result};
pub use list::BoundedList;

/// Capacity used by [`BoundedList::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 10;
