//! Process-wide identity key for host interop tagging.

use once_cell::sync::OnceCell;

// The key's value is the address of this cell's contents; the cell only
// exists to have a stable, process-lifetime address.
static LAYOUT_KEY_ANCHOR: OnceCell<u8> = OnceCell::new();

/// Opaque token whose identity is a process-unique address.
///
/// Host interop layers use it as a collision-free map key to find "our"
/// entry in a shared tag namespace. It carries no payload: only equality
/// and hashing are meaningful, never the numeric value as data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LayoutKey(usize);

impl LayoutKey {
    /// The underlying address, exposed only for use as an opaque map key.
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

/// The process-wide identity key.
///
/// First call initializes the key; every call, from any thread, returns a
/// token equal to every other call's token. The one-time initialization
/// happens inside the accessor, so an uninitialized read is unobservable.
pub fn layout_key() -> LayoutKey {
    let anchor: &'static u8 = LAYOUT_KEY_ANCHOR.get_or_init(|| 0);
    LayoutKey(core::ptr::from_ref(anchor) as usize)
}
