//! Structures - bounded, array-backed containers
//!
//! # Overview
//!
//! The crate currently provides one container, [`BoundedList`]: an ordered
//! list whose capacity is fixed when it is created. It supports:
//!
//! - Insertion at either end or at any position
//! - Sorted insertion into an ascending list
//! - Removal by position or by value
//! - Membership queries and checked indexed access
//!
//! # Quick Start
//!
//! ```
//! use structures::{BoundedList, BoundedListError};
//!
//! let mut list = BoundedList::with_capacity(5);
//! list.insert(10, 0).unwrap();
//! list.insert(20, 1).unwrap();
//! list.insert(15, 1).unwrap();
//! assert_eq!(list.as_slice(), &[10, 15, 20]);
//!
//! assert_eq!(list.pop(1), Ok(15));
//! assert_eq!(list.find(&20), Ok(Some(1)));
//! assert_eq!(list.remove(&15), Err(BoundedListError::ValueNotFound));
//! ```
//!
//! # Capacity
//!
//! [`BoundedList::new`] reserves [`DEFAULT_CAPACITY`] slots. The buffer never
//! grows: once [`BoundedList::is_full`] is true every insertion fails with
//! [`BoundedListError::CapacityExceeded`] until something is removed.

pub use structures_bounded_list::{BoundedList, BoundedListError, DEFAULT_CAPACITY, Result};
