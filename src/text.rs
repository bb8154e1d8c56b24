//! Text helpers for transcript assembly.

/// Join `addition` onto `current` with a single separating space.
///
/// An empty `current` yields `addition` unchanged; a `current` that already
/// ends in whitespace gets no extra separator. Keeps the transcript free of
/// doubled or missing spaces no matter how many fragments are merged.
pub fn join_with_space(current: &str, addition: &str) -> String {
    if current.is_empty() {
        addition.to_string()
    } else if current.ends_with(char::is_whitespace) {
        format!("{}{}", current, addition)
    } else {
        format!("{} {}", current, addition)
    }
}

/// In-place variant of [`join_with_space`] for the commit path.
pub fn push_with_space(current: &mut String, addition: &str) {
    if !current.is_empty() && !current.ends_with(char::is_whitespace) {
        current.push(' ');
    }
    current.push_str(addition);
}
