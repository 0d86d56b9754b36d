//! Outcome bits of a layout pass: resolved direction and overflow report.

use crate::bits;
use crate::error::StorageError;
use crate::values::Direction;

const DIRECTION_SHIFT: u32 = 0;
const DIRECTION_WIDTH: u32 = 2;
const OVERFLOW_SHIFT: u32 = 2;

/// Layout-result bits, written by the layout algorithm at the end of a
/// pass and read by consumers of the results.
///
/// `direction` holds the RESOLVED direction, distinct from the requested
/// direction in [`StyleStorage`](crate::StyleStorage): inheritance is
/// settled during the pass, never deferred to read time.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LayoutFlags(u8);

impl LayoutFlags {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn direction(self) -> Direction {
        // Only resolved directions are storable, so the 2-bit pattern is
        // always a member.
        Direction::from_bits(bits::get(self.0 as u32, DIRECTION_SHIFT, DIRECTION_WIDTH))
            .unwrap_or_default()
    }

    /// Record the resolved direction for the pass that just completed.
    ///
    /// `Inherit` is not a resolved value and is rejected; run the style
    /// direction through [`Direction::resolve`] first.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), StorageError> {
        if direction == Direction::Inherit {
            return Err(StorageError::InvalidStyleValue {
                field: "layout.direction",
                value: direction.bits(),
                max: Direction::Rtl.bits(),
            });
        }
        self.0 = bits::set(self.0 as u32, DIRECTION_SHIFT, DIRECTION_WIDTH, direction.bits()) as u8;
        Ok(())
    }

    /// Content exceeded the node's bounds during the last pass.
    /// Advisory only; it must never feed back into the pass that set it.
    pub const fn has_overflow(self) -> bool {
        bits::get(self.0 as u32, OVERFLOW_SHIFT, 1) != 0
    }

    pub const fn set_has_overflow(&mut self, value: bool) {
        self.0 = bits::set(self.0 as u32, OVERFLOW_SHIFT, 1, value as u8) as u8;
    }
}
