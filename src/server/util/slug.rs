/// Fallback used when a name contains nothing sluggable.
pub const DEFAULT_SLUG: &str = "destination";

/// Derives a URL slug from a display name.
///
/// Lowercases, drops everything but alphanumerics, whitespace, `-` and `_`, then
/// collapses each run of whitespace, `-` or `_` into a single `-` and trims dashes
/// from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// Candidate slug for the `attempt`-th collision, starting at 1 for the bare slug.
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
