//! Slug derivation for group names

/// Derive a URL slug from a display name.
///
/// Lower-cases ASCII alphanumerics, collapses every other run of characters
/// into a single `-`, and strips leading/trailing hyphens. May return an
/// empty string when the name contains no alphanumeric characters at all;
/// callers treat that as a validation failure.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_hyphenated_words() {
        assert_eq!(slugify("Premium-Mitglieder"), "premium-mitglieder");
    }

    #[test]
    fn collapses_symbol_runs_and_trims() {
        assert_eq!(slugify("A & B!!"), "a-b");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
        assert_eq!(slugify("--already--slugged--"), "already-slugged");
    }

    #[test]
    fn empty_when_nothing_usable() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
