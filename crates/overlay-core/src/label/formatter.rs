use crate::{
    HotkeyBinding, KeyCode,
    label::{LayoutResolver, NoLayout, key_names},
};

/// Renders bindings as compact glyph strings such as `⌃⇧A`.
///
/// Modifiers always come out in Control, Option, Shift, Command order. The
/// key goes through the static name table first, then the layout resolver,
/// then falls back to `Key<N>`, so every binding has a label.
pub struct KeyLabelFormatter {
    resolver: Box<dyn LayoutResolver>,
}

impl KeyLabelFormatter {
    /// Create a formatter backed by `resolver` for keys outside the table.
    pub fn new(resolver: impl LayoutResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Full label for a binding.
    pub fn format(&self, binding: &HotkeyBinding) -> String {
        format_with(binding, |key| self.resolver.character_for(key))
    }

    /// Label for the key part alone.
    pub fn key_label(&self, key: KeyCode) -> String {
        key_label_with(key, |key| self.resolver.character_for(key))
    }
}

impl Default for KeyLabelFormatter {
    fn default() -> Self {
        Self::new(NoLayout)
    }
}

impl std::fmt::Debug for KeyLabelFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyLabelFormatter").finish_non_exhaustive()
    }
}

pub(crate) fn format_with<F>(binding: &HotkeyBinding, layout: F) -> String
where
    F: Fn(KeyCode) -> Option<String>,
{
    let modifiers = binding.modifiers();
    let mut label: String = key_names::MODIFIER_GLYPHS
        .iter()
        .filter(|(flag, _)| modifiers.contains(*flag))
        .map(|(_, glyph)| *glyph)
        .collect();

    label.push_str(&key_label_with(binding.key(), layout));
    label
}

fn key_label_with<F>(key: KeyCode, layout: F) -> String
where
    F: Fn(KeyCode) -> Option<String>,
{
    if let Some(name) = key_names::static_name(key) {
        return name.to_string();
    }

    // Dead keys and non-printing keys can come back as whitespace or control
    // characters; those would render as an empty-looking label.
    layout(key)
        .filter(|c| !c.trim().is_empty() && !c.chars().any(char::is_control))
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| format!("Key{}", key.raw()))
}
