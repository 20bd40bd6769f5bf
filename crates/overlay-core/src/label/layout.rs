use crate::KeyCode;

/// Source of layout-dependent key characters.
///
/// Asked only for keys missing from the static name table. Implementations
/// return the printable character the physical key produces on the current
/// keyboard layout, without modifiers applied.
pub trait LayoutResolver {
    /// Character produced by `key`, or `None` if the layout has no printable
    /// output for it.
    fn character_for(&self, key: KeyCode) -> Option<String>;
}

/// Resolver for hosts without keyboard-layout access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayout;

impl LayoutResolver for NoLayout {
    fn character_for(&self, _key: KeyCode) -> Option<String> {
        None
    }
}

impl<F> LayoutResolver for F
where
    F: Fn(KeyCode) -> Option<String>,
{
    fn character_for(&self, key: KeyCode) -> Option<String> {
        self(key)
    }
}
