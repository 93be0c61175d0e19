/// Locate the query of an announce URL.
/// Returns `(query, offset)` where `offset` is the byte position of the query
/// within `input`. Everything after the first `?` is the query, fragments
/// included; no `?` yields an empty query.
pub fn extract_query(input: &str) -> (&str, usize) {
    memchr::memchr(b'?', input.as_bytes())
        .map_or(("", input.len()), |pos| (&input[pos + 1..], pos + 1))
}
