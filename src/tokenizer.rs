/// A key/value token pair still in percent-encoded form.
/// Offsets are byte positions within the full input URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPair<'a> {
    pub key: &'a str,
    pub key_start: usize,
    pub value: &'a str,
    pub value_start: usize,
}

impl<'a> RawPair<'a> {
    /// Split a non-empty token on its first `=`.
    /// A token without `=` is a key with an empty value.
    fn from_token(token: &'a str, start: usize) -> Self {
        match memchr::memchr(b'=', token.as_bytes()) {
            Some(pos) => Self {
                key: &token[..pos],
                key_start: start,
                value: &token[pos + 1..],
                value_start: start + pos + 1,
            },
            None => Self {
                key: token,
                key_start: start,
                value: "",
                value_start: start + token.len(),
            },
        }
    }
}

/// Iterator over the `&`-separated pairs of a query, skipping empty tokens.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    remaining: &'a str,
    offset: usize,
}

impl<'a> Pairs<'a> {
    /// `offset` is the position of `query` within the full input.
    pub fn new(query: &'a str, offset: usize) -> Self {
        Self {
            remaining: query,
            offset,
        }
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = RawPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            let bytes = self.remaining.as_bytes();
            let end = memchr::memchr(b'&', bytes).unwrap_or(bytes.len());
            let token = &self.remaining[..end];
            let start = self.offset;

            let consumed = (end + 1).min(bytes.len());
            self.remaining = &self.remaining[consumed..];
            self.offset += consumed;

            if !token.is_empty() {
                return Some(RawPair::from_token(token, start));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn keys_and_values(query: &str) -> Vec<(&str, &str)> {
        Pairs::new(query, 0).map(|p| (p.key, p.value)).collect()
    }

    #[test]
    fn test_split_pairs() {
        assert_eq!(
            keys_and_values("peer_id=abc&port=6881"),
            [("peer_id", "abc"), ("port", "6881")]
        );
    }

    #[test]
    fn test_empty_tokens_discarded() {
        assert_eq!(keys_and_values("&&a=1&&&b=2&"), [("a", "1"), ("b", "2")]);
        assert!(keys_and_values("").is_empty());
        assert!(keys_and_values("&&&").is_empty());
    }

    #[test]
    fn test_empty_keys_and_values() {
        assert_eq!(
            keys_and_values("peer_id=&compact&=x&="),
            [("peer_id", ""), ("compact", ""), ("", "x"), ("", "")]
        );
    }

    #[test]
    fn test_split_on_first_equals() {
        assert_eq!(keys_and_values("key=a=b=c"), [("key", "a=b=c")]);
    }

    #[test]
    fn test_offsets() {
        let pairs: Vec<RawPair<'_>> = Pairs::new("a=1&&bc&d=", 10).collect();
        assert_eq!(
            pairs,
            [
                RawPair {
                    key: "a",
                    key_start: 10,
                    value: "1",
                    value_start: 12,
                },
                RawPair {
                    key: "bc",
                    key_start: 15,
                    value: "",
                    value_start: 17,
                },
                RawPair {
                    key: "d",
                    key_start: 18,
                    value: "",
                    value_start: 20,
                },
            ]
        );
    }
}
