//! Per-node bookkeeping flags: one byte, four 1-bit fields.

use crate::bits;
use crate::values::NodeType;

const HAS_NEW_LAYOUT_SHIFT: u32 = 0;
const NODE_TYPE_SHIFT: u32 = 1;
const REFERENCE_BASELINE_SHIFT: u32 = 2;
const DIRTY_SHIFT: u32 = 3;

/// Transient bookkeeping bits embedded in every layout node.
///
/// The layout engine owns the discipline around these: it marks a node
/// dirty when any layout input changes, flips dirty to new-layout when a
/// pass completes, and the host clears new-layout once it has consumed
/// the results. The record itself only guarantees the bits round-trip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeFlags(u8);

impl NodeFlags {
    pub const fn new() -> Self {
        Self(0)
    }

    /// A fresh layout result is available and not yet consumed by the host.
    pub const fn has_new_layout(self) -> bool {
        bits::get(self.0 as u32, HAS_NEW_LAYOUT_SHIFT, 1) != 0
    }

    pub const fn set_has_new_layout(&mut self, value: bool) {
        self.0 = bits::set(self.0 as u32, HAS_NEW_LAYOUT_SHIFT, 1, value as u8) as u8;
    }

    pub const fn node_type(self) -> NodeType {
        // 1-bit field, both patterns are members
        match bits::get(self.0 as u32, NODE_TYPE_SHIFT, 1) {
            0 => NodeType::Default,
            _ => NodeType::Text,
        }
    }

    pub const fn set_node_type(&mut self, value: NodeType) {
        self.0 = bits::set(self.0 as u32, NODE_TYPE_SHIFT, 1, value.bits()) as u8;
    }

    /// This node is the baseline reference among its siblings.
    /// At most one sibling per alignment context; enforced by the layout
    /// algorithm, not by the storage.
    pub const fn is_reference_baseline(self) -> bool {
        bits::get(self.0 as u32, REFERENCE_BASELINE_SHIFT, 1) != 0
    }

    pub const fn set_reference_baseline(&mut self, value: bool) {
        self.0 = bits::set(self.0 as u32, REFERENCE_BASELINE_SHIFT, 1, value as u8) as u8;
    }

    /// The cached layout result is stale and must be recomputed.
    pub const fn is_dirty(self) -> bool {
        bits::get(self.0 as u32, DIRTY_SHIFT, 1) != 0
    }

    pub const fn set_dirty(&mut self, value: bool) {
        self.0 = bits::set(self.0 as u32, DIRTY_SHIFT, 1, value as u8) as u8;
    }

    /// A layout input changed; the cached result is stale.
    pub const fn mark_dirty(&mut self) {
        self.set_dirty(true);
    }

    /// A layout pass finished for this node: the result is fresh and the
    /// dirty bit no longer applies.
    pub const fn finish_layout_pass(&mut self) {
        self.set_dirty(false);
        self.set_has_new_layout(true);
    }

    /// The host has consumed the fresh layout result.
    pub const fn acknowledge_layout(&mut self) {
        self.set_has_new_layout(false);
    }
}
