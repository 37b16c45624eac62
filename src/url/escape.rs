use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes the `url` crate percent-encodes in paths
///
/// `?` and `#` are left alone: `?` starts the query part that robots patterns may
/// address, and `#` never reaches here (comments and fragments are stripped first).
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Brings a path or robots pattern into the form request paths are compared in
///
/// 1. Non-ASCII characters, spaces and the other path-unsafe bytes are percent-encoded
/// 2. Existing `%xx` escapes are kept, with their hex digits uppercased
///
/// `*`, `$` and a lone `%` pass through unchanged, so wildcard syntax survives.
///
/// # Examples
///
/// ```
/// use robots_checker::url::escape_path;
///
/// assert_eq!(escape_path("/café"), "/caf%C3%A9");
/// assert_eq!(escape_path("/a b/*.pdf$"), "/a%20b/*.pdf$");
/// assert_eq!(escape_path("/caf%c3%a9"), "/caf%C3%A9");
/// ```
pub fn escape_path(path: &str) -> String {
    let mut escaped = utf8_percent_encode(path, PATH).to_string();

    let escapes: Vec<usize> = escaped
        .match_indices('%')
        .map(|(idx, _)| idx)
        .filter(|&idx| {
            let hex = escaped.as_bytes().get(idx + 1..idx + 3);
            hex.map_or(false, |h| h.iter().all(u8::is_ascii_hexdigit))
        })
        .collect();

    for idx in escapes {
        escaped[idx + 1..idx + 3].make_ascii_uppercase();
    }

    escaped
}
