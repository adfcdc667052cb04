//! Small string helpers for display names.

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a hyphenated project name into a title.
///
/// `"my-cool-app"` becomes `"My Cool App"`.
pub fn display_title(name: &str) -> String {
    name.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
