//! Display-name normalization into identifier-safe slugs.

/// Normalize a display name into a lowercase, URL/identifier-safe slug.
///
/// ASCII alphanumerics are lowercased and kept; runs of whitespace and
/// separator punctuation collapse into a single underscore; everything
/// else is dropped. `"Living Room"` becomes `"living_room"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || matches!(ch, '-' | '_' | '.' | '/') {
            pending_separator = true;
        }
    }

    slug
}
