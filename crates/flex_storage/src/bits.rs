//! Shift-and-mask field access for the packed storage records.
//!
//! The records pack sub-byte fields into a single word. All of them go
//! through these routines so the overflow policy lives in one place:
//! the raw [`set`] path aliases an oversized value modulo `2^width`,
//! while the checked write paths call [`check`] first and never store
//! an out-of-range pattern.

use crate::error::StorageError;
use log::warn;

/// Low `width` bits set.
pub const fn mask(width: u32) -> u32 {
    (1 << width) - 1
}

/// Extract a `width`-bit field at `shift`.
pub const fn get(word: u32, shift: u32, width: u32) -> u8 {
    ((word >> shift) & mask(width)) as u8
}

/// Store a `width`-bit field at `shift`, returning the updated word.
///
/// This is the unchecked path: a value wider than the field aliases to
/// `value mod 2^width`. Callers that must not alias validate first.
pub const fn set(word: u32, shift: u32, width: u32, value: u8) -> u32 {
    let field = (value as u32) & mask(width);
    (word & !(mask(width) << shift)) | (field << shift)
}

/// Reject a value the named field cannot represent.
///
/// `limit` is the field's enum cardinality, which may be below `2^width`
/// when the width leaves slack; storing such a value would alias a
/// nonexistent member onto a real one, so it fails rather than truncates.
pub fn check(field: &'static str, limit: u8, value: u8) -> Result<(), StorageError> {
    if value < limit {
        Ok(())
    } else {
        warn!("rejecting out-of-range style value {value} for {field} (max {})", limit - 1);
        Err(StorageError::InvalidStyleValue { field, value, max: limit - 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_covers_declared_widths() {
        assert_eq!(mask(1), 0b1);
        assert_eq!(mask(2), 0b11);
        assert_eq!(mask(3), 0b111);
    }

    #[test]
    fn set_then_get_round_trips() {
        let word = set(0, 4, 3, 0b101);
        assert_eq!(get(word, 4, 3), 0b101);
        // Neighboring bits untouched
        assert_eq!(word & !(mask(3) << 4), 0);
    }

    #[test]
    fn set_aliases_oversized_values() {
        let word = set(0, 0, 2, 5);
        assert_eq!(get(word, 0, 2), 5 % 4);
    }

    #[test]
    fn check_rejects_at_limit() {
        assert!(check("field", 6, 5).is_ok());
        assert_eq!(
            check("field", 6, 6),
            Err(StorageError::InvalidStyleValue { field: "field", value: 6, max: 5 })
        );
    }
}
