//! Normalization, tokenization and version extraction

/// Lowercase, collapse every run of characters outside `[a-z0-9.]` into a
/// single space, and trim.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for c in s.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Split the normalized form of `s` into its words, in order.
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s).split_whitespace().map(str::to_string).collect()
}

/// Extract the first version number in `s`.
///
/// A version is an optional `v`/`V` followed by digit groups separated by
/// `.`; the returned string holds the digit groups only (`"v1.6.5"` gives
/// `"1.6.5"`). A trailing dot is not part of the version.
pub fn extract_version(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    while end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    Some(s[start..end].to_string())
}

/// `1`, `1.6`, `2.0.10`
pub fn is_dotted_number(token: &str) -> bool {
    !token.is_empty()
        && token
            .split('.')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

/// A dotted number with an optional `v`/`V` prefix: `v1.6`, `V2`, `3.1`.
pub fn is_version_token(token: &str) -> bool {
    let digits = token
        .strip_prefix('v')
        .or_else(|| token.strip_prefix('V'))
        .unwrap_or(token);
    is_dotted_number(digits)
}

/// Non-empty and made only of ASCII letters.
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}
