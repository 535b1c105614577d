//! Small string utilities shared across the crate.

/// Truncate a string to at most `max` characters, on a character boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Uppercase the first character of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip a trailing file extension (".pdf", ".txt", ...) from a filename.
///
/// Only strips when the extension contains no path separator, matching the
/// usual `\.[^/.]+$` filename convention.
pub fn strip_extension(name: &str) -> &str {
    if let Some(idx) = name.rfind('.') {
        let ext = &name[idx + 1..];
        if !ext.is_empty() && !ext.contains('/') {
            return &name[..idx];
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("wikipedia"), "Wikipedia");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("deep-work-2016.pdf"), "deep-work-2016");
        assert_eq!(strip_extension("notes.v2.txt"), "notes.v2");
        assert_eq!(strip_extension("no_extension"), "no_extension");
        assert_eq!(strip_extension("dir.name/file"), "dir.name/file");
    }
}
