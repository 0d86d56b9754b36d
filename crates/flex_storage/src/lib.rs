//! Bit-packed node state for a flexbox layout engine.
//!
//! A layout tree can hold thousands of nodes, so the per-node bookkeeping
//! (dirty tracking, layout results, style configuration) is packed into the
//! fewest bits possible. This crate owns those storage shapes and the
//! process-wide identity key used to tag nodes across the host boundary;
//! the layout algorithm and tree management live elsewhere and treat these
//! records as plain data.
//!
//! Three records exist per node, each independently embedded:
//! - [`NodeFlags`] — transient bookkeeping bits (one byte)
//! - [`LayoutFlags`] — outcome of the last layout pass (one byte)
//! - [`StyleStorage`] — flex style configuration (24 bits in a `u32`)
//!
//! Field widths are load-bearing: every enum stored here is closed to the
//! cardinality its width allows, and the checked write paths reject values
//! that would alias distinct members onto the same bits.

pub mod bits;
mod error;
mod identity;
mod layout_flags;
mod node_flags;
mod style;
pub mod values;

pub use error::StorageError;
pub use identity::{LayoutKey, layout_key};
pub use layout_flags::LayoutFlags;
pub use node_flags::NodeFlags;
pub use style::{StyleField, StyleStorage};
pub use values::{
    AlignContent, AlignItems, AlignSelf, Direction, Display, FlexDirection, FlexWrap,
    JustifyContent, NodeType, Overflow, PositionType,
};
