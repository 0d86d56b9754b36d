//! Flex style configuration, 24 bits packed into one word.

use crate::bits;
use crate::error::StorageError;
use crate::values::{
    AlignContent, AlignItems, AlignSelf, Direction, Display, FlexDirection, FlexWrap,
    JustifyContent, Overflow, PositionType,
};

/// Names the packed style fields for the raw numeric access path.
///
/// Shift, width, and cardinality live here so range validation is
/// table-driven; the typed accessors on [`StyleStorage`] use the same
/// constants and cannot disagree with them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StyleField {
    Direction,
    FlexDirection,
    JustifyContent,
    AlignContent,
    AlignItems,
    AlignSelf,
    PositionType,
    FlexWrap,
    Overflow,
    Display,
}

impl StyleField {
    pub const fn shift(self) -> u32 {
        match self {
            Self::Direction => 0,
            Self::FlexDirection => 2,
            Self::JustifyContent => 4,
            Self::AlignContent => 7,
            Self::AlignItems => 10,
            Self::AlignSelf => 13,
            Self::PositionType => 16,
            Self::FlexWrap => 18,
            Self::Overflow => 20,
            Self::Display => 22,
        }
    }

    pub const fn width(self) -> u32 {
        match self {
            Self::JustifyContent | Self::AlignContent | Self::AlignItems | Self::AlignSelf => 3,
            _ => 2,
        }
    }

    /// Number of members in the field's enumeration. May sit below
    /// `2^width`; the gap is reserved, not storable.
    pub const fn cardinality(self) -> u8 {
        match self {
            Self::Direction => 3,
            Self::FlexDirection => 4,
            Self::JustifyContent => 6,
            Self::AlignContent => 6,
            Self::AlignItems => 5,
            Self::AlignSelf => 6,
            Self::PositionType => 4,
            Self::FlexWrap => 3,
            Self::Overflow => 3,
            Self::Display => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Direction => "direction",
            Self::FlexDirection => "flex-direction",
            Self::JustifyContent => "justify-content",
            Self::AlignContent => "align-content",
            Self::AlignItems => "align-items",
            Self::AlignSelf => "align-self",
            Self::PositionType => "position",
            Self::FlexWrap => "flex-wrap",
            Self::Overflow => "overflow",
            Self::Display => "display",
        }
    }
}

const ALL_FIELDS: [StyleField; 10] = [
    StyleField::Direction,
    StyleField::FlexDirection,
    StyleField::JustifyContent,
    StyleField::AlignContent,
    StyleField::AlignItems,
    StyleField::AlignSelf,
    StyleField::PositionType,
    StyleField::FlexWrap,
    StyleField::Overflow,
    StyleField::Display,
];

/// The node's flex style input, read by the layout algorithm.
///
/// All ten fields default to their zero-valued members, so the all-zero
/// word is a valid default style. Equality is bitwise, which is what
/// style change detection wants.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct StyleStorage(u32);

impl StyleStorage {
    pub const fn new() -> Self {
        Self(0)
    }

    /// All packed fields, for diffing or external serialization by width.
    pub const fn fields() -> [StyleField; 10] {
        ALL_FIELDS
    }

    /// Read a field as its raw stored bits.
    pub const fn get_raw(self, field: StyleField) -> u8 {
        bits::get(self.0, field.shift(), field.width())
    }

    /// Write a field from an untrusted numeric value, as style API layers
    /// receive across a host boundary.
    ///
    /// Values the field's enumeration cannot represent are rejected with
    /// [`StorageError::InvalidStyleValue`] and the record is untouched;
    /// nothing is ever truncated into the word.
    pub fn set_raw(&mut self, field: StyleField, value: u8) -> Result<(), StorageError> {
        bits::check(field.name(), field.cardinality(), value)?;
        self.0 = bits::set(self.0, field.shift(), field.width(), value);
        Ok(())
    }

    pub fn direction(self) -> Direction {
        Direction::from_bits(self.get_raw(StyleField::Direction)).unwrap_or_default()
    }

    pub const fn set_direction(&mut self, value: Direction) {
        self.set_field(StyleField::Direction, value.bits());
    }

    pub fn flex_direction(self) -> FlexDirection {
        FlexDirection::from_bits(self.get_raw(StyleField::FlexDirection)).unwrap_or_default()
    }

    pub const fn set_flex_direction(&mut self, value: FlexDirection) {
        self.set_field(StyleField::FlexDirection, value.bits());
    }

    pub fn justify_content(self) -> JustifyContent {
        JustifyContent::from_bits(self.get_raw(StyleField::JustifyContent)).unwrap_or_default()
    }

    pub const fn set_justify_content(&mut self, value: JustifyContent) {
        self.set_field(StyleField::JustifyContent, value.bits());
    }

    pub fn align_content(self) -> AlignContent {
        AlignContent::from_bits(self.get_raw(StyleField::AlignContent)).unwrap_or_default()
    }

    pub const fn set_align_content(&mut self, value: AlignContent) {
        self.set_field(StyleField::AlignContent, value.bits());
    }

    pub fn align_items(self) -> AlignItems {
        AlignItems::from_bits(self.get_raw(StyleField::AlignItems)).unwrap_or_default()
    }

    pub const fn set_align_items(&mut self, value: AlignItems) {
        self.set_field(StyleField::AlignItems, value.bits());
    }

    pub fn align_self(self) -> AlignSelf {
        AlignSelf::from_bits(self.get_raw(StyleField::AlignSelf)).unwrap_or_default()
    }

    pub const fn set_align_self(&mut self, value: AlignSelf) {
        self.set_field(StyleField::AlignSelf, value.bits());
    }

    pub fn position_type(self) -> PositionType {
        PositionType::from_bits(self.get_raw(StyleField::PositionType)).unwrap_or_default()
    }

    pub const fn set_position_type(&mut self, value: PositionType) {
        self.set_field(StyleField::PositionType, value.bits());
    }

    pub fn flex_wrap(self) -> FlexWrap {
        FlexWrap::from_bits(self.get_raw(StyleField::FlexWrap)).unwrap_or_default()
    }

    pub const fn set_flex_wrap(&mut self, value: FlexWrap) {
        self.set_field(StyleField::FlexWrap, value.bits());
    }

    pub fn overflow(self) -> Overflow {
        Overflow::from_bits(self.get_raw(StyleField::Overflow)).unwrap_or_default()
    }

    pub const fn set_overflow(&mut self, value: Overflow) {
        self.set_field(StyleField::Overflow, value.bits());
    }

    pub fn display(self) -> Display {
        Display::from_bits(self.get_raw(StyleField::Display)).unwrap_or_default()
    }

    pub const fn set_display(&mut self, value: Display) {
        self.set_field(StyleField::Display, value.bits());
    }

    // Typed setters funnel through here; a valid enum value is in range
    // by construction.
    const fn set_field(&mut self, field: StyleField, value: u8) {
        self.0 = bits::set(self.0, field.shift(), field.width(), value);
    }
}
