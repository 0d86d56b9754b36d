//! Flex style enumerations and their storage discriminants.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Discriminants are the exact bit patterns the storage records hold, so
//! they are fixed for the life of the format. Every enum offers a fallible
//! `from_bits` instead of a panicking conversion; a `None` there means the
//! bits came from outside the checked write paths.

/// Requested or resolved text/layout direction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    Inherit = 0,
    Ltr = 1,
    Rtl = 2,
}

impl Direction {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Inherit),
            1 => Some(Self::Ltr),
            2 => Some(Self::Rtl),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Resolve against the parent's already-resolved direction.
    ///
    /// The result is never `Inherit`: an inherit chain with no concrete
    /// ancestor bottoms out at `Ltr`.
    pub const fn resolve(self, parent: Self) -> Self {
        match self {
            Self::Inherit => match parent {
                Self::Inherit => Self::Ltr,
                resolved => resolved,
            },
            resolved => resolved,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Inherit
    }
}

/// Category of layout node; text nodes measure differently.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum NodeType {
    Default = 0,
    Text = 1,
}

impl NodeType {
    // The node flags record gives this field a single bit, so the enum is
    // closed to exactly two members.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Default),
            1 => Some(Self::Text),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for NodeType {
    fn default() -> Self {
        Self::Default
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FlexDirection {
    Column = 0,
    ColumnReverse = 1,
    Row = 2,
    RowReverse = 3,
}

impl FlexDirection {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Column),
            1 => Some(Self::ColumnReverse),
            2 => Some(Self::Row),
            3 => Some(Self::RowReverse),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::ColumnReverse | Self::RowReverse)
    }

    /// Main-axis direction under the given resolved text direction.
    /// RTL flips the row variants and leaves columns alone.
    pub const fn resolve(self, direction: Direction) -> Self {
        match (self, direction) {
            (Self::Row, Direction::Rtl) => Self::RowReverse,
            (Self::RowReverse, Direction::Rtl) => Self::Row,
            (main, _) => main,
        }
    }

    /// Cross-axis direction for this main axis.
    pub const fn cross(self, direction: Direction) -> Self {
        if self.is_column() {
            Self::Row.resolve(direction)
        } else {
            Self::Column
        }
    }
}

impl Default for FlexDirection {
    fn default() -> Self {
        Self::Column
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum JustifyContent {
    Start = 0,
    End = 1,
    Center = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
    SpaceEvenly = 5,
}

impl JustifyContent {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Start),
            1 => Some(Self::End),
            2 => Some(Self::Center),
            3 => Some(Self::SpaceBetween),
            4 => Some(Self::SpaceAround),
            5 => Some(Self::SpaceEvenly),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for JustifyContent {
    fn default() -> Self {
        Self::Start
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AlignItems {
    Stretch = 0,
    Start = 1,
    End = 2,
    Center = 3,
    Baseline = 4,
}

impl AlignItems {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Stretch),
            1 => Some(Self::Start),
            2 => Some(Self::End),
            3 => Some(Self::Center),
            4 => Some(Self::Baseline),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for AlignItems {
    fn default() -> Self {
        Self::Stretch
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
/// `Auto` defers to the parent's `align-items`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AlignSelf {
    Auto = 0,
    Start = 1,
    End = 2,
    Center = 3,
    Baseline = 4,
    Stretch = 5,
}

impl AlignSelf {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Auto),
            1 => Some(Self::Start),
            2 => Some(Self::End),
            3 => Some(Self::Center),
            4 => Some(Self::Baseline),
            5 => Some(Self::Stretch),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// The per-item alignment this overrides to, or `None` for `Auto`.
    pub const fn align_items(self) -> Option<AlignItems> {
        match self {
            Self::Auto => None,
            Self::Start => Some(AlignItems::Start),
            Self::End => Some(AlignItems::End),
            Self::Center => Some(AlignItems::Center),
            Self::Baseline => Some(AlignItems::Baseline),
            Self::Stretch => Some(AlignItems::Stretch),
        }
    }
}

impl Default for AlignSelf {
    fn default() -> Self {
        Self::Auto
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AlignContent {
    Start = 0,
    End = 1,
    Center = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
    Stretch = 5,
}

impl AlignContent {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Start),
            1 => Some(Self::End),
            2 => Some(Self::Center),
            3 => Some(Self::SpaceBetween),
            4 => Some(Self::SpaceAround),
            5 => Some(Self::Stretch),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for AlignContent {
    fn default() -> Self {
        Self::Start
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum PositionType {
    Static = 0,
    Relative = 1,
    Absolute = 2,
    Sticky = 3,
}

impl PositionType {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Static),
            1 => Some(Self::Relative),
            2 => Some(Self::Absolute),
            3 => Some(Self::Sticky),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for PositionType {
    fn default() -> Self {
        Self::Static
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FlexWrap {
    NoWrap = 0,
    Wrap = 1,
    WrapReverse = 2,
}

impl FlexWrap {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::NoWrap),
            1 => Some(Self::Wrap),
            2 => Some(Self::WrapReverse),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for FlexWrap {
    fn default() -> Self {
        Self::NoWrap
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Overflow {
    Visible = 0,
    Hidden = 1,
    Scroll = 2,
}

impl Overflow {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Visible),
            1 => Some(Self::Hidden),
            2 => Some(Self::Scroll),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn is_scrolled(self) -> bool {
        matches!(self, Self::Scroll)
    }
}

impl Default for Overflow {
    fn default() -> Self {
        Self::Visible
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Display {
    Flex = 0,
    None = 1,
    Contents = 2,
}

impl Display {
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Flex),
            1 => Some(Self::None),
            2 => Some(Self::Contents),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::Flex
    }
}
