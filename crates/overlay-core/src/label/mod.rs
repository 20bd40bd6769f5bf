mod formatter;
mod key_names;
mod layout;

pub(crate) use formatter::format_with;

pub use {
    formatter::KeyLabelFormatter,
    layout::{LayoutResolver, NoLayout},
};
