//! Logging utilities for the counterfeit engine.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;

    /// Create a new child logger with a `src` key containing the provided name.
    fn new_with_name(&self, name: &str) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new_with_name(component_name::<T>())
    }

    fn new_with_name(&self, name: &str) -> Self {
        self.new(slog::o!("src" => name.to_owned()))
    }
}

/// Short name of a type: its last path segment, without generic parameters.
pub(crate) fn component_name<T: ?Sized>() -> &'static str {
    let complete_name = std::any::type_name::<T>();
    let without_generic = complete_name.split('<').next().unwrap_or(complete_name);
    last_path_segment(without_generic)
}

/// Type name with every path shortened to its last segment, generic arguments included, ie
/// `Option<Customer>` for `core::option::Option<my_crate::Customer>`.
pub(crate) fn short_type_name(complete_name: &str) -> String {
    let mut short_name = String::with_capacity(complete_name.len());
    let mut path_start = 0;
    for (index, character) in complete_name.char_indices() {
        if matches!(
            character,
            '<' | '>' | '(' | ')' | '[' | ']' | ',' | ';' | ' ' | '&' | '*'
        ) {
            short_name.push_str(last_path_segment(&complete_name[path_start..index]));
            short_name.push(character);
            path_start = index + character.len_utf8();
        }
    }
    short_name.push_str(last_path_segment(&complete_name[path_start..]));

    short_name
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
