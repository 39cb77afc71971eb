//! Domain types for seed conversion parameters
//!
//! This module contains validated newtypes and the format catalog:
//! - [`Count`] - Number of output units (1..=64)
//! - [`Format`] - Seed representations and their per-format options
//! - [`GroupDescriptor`] - One SLIP39 `M-of-N` share group
//! - [`IntsRange`] - Value range of the `ints` format
//! - [`Slip39Groups`] - Validated group threshold and group list

mod count;
mod format;
mod group;
mod ints;
mod slip39;

pub use count::Count;
pub use format::Format;
pub use group::{GroupDescriptor, GroupSpecError};
pub use ints::IntsRange;
pub use slip39::Slip39Groups;
