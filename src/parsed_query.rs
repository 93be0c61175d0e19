use crate::compat::{BTreeMap, Vec, btree_map};
use crate::error::ParseError;
use crate::percent::encode_component_into;
use core::fmt::{self, Write};

/// Decoded announce parameters.
///
/// Each name maps to exactly one fully decoded value. Values are raw bytes,
/// since `info_hash` and `peer_id` carry binary payloads. Built once by
/// [`parse`](crate::parse) and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    params: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl ParsedQuery {
    pub(crate) fn from_map(params: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Self { params }
    }

    /// Get the decoded value for a name.
    pub fn get<K: AsRef<[u8]> + ?Sized>(&self, name: &K) -> Option<&[u8]> {
        self.params.get(name.as_ref()).map(Vec::as_slice)
    }

    /// Get the decoded value as text.
    /// Returns `None` if the name is absent or the value is not valid UTF-8.
    pub fn get_str<K: AsRef<[u8]> + ?Sized>(&self, name: &K) -> Option<&str> {
        self.get(name)
            .and_then(|value| core::str::from_utf8(value).ok())
    }

    pub fn contains_key<K: AsRef<[u8]> + ?Sized>(&self, name: &K) -> bool {
        self.params.contains_key(name.as_ref())
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.params.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.params.keys().map(Vec::as_slice)
    }
}

/// Iterator over the parameters of a [`ParsedQuery`].
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, Vec<u8>, Vec<u8>>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|(key, value)| (key.as_slice(), value.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ParsedQuery {
    type Item = (&'a [u8], &'a [u8]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a query string without the leading `?`.
/// Parsing the output behind a `?` reproduces the same mapping.
impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_char('&')?;
            }
            encode_component_into(f, key)?;
            f.write_char('=')?;
            encode_component_into(f, value)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for ParsedQuery {
    type Error = ParseError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        crate::parse(url)
    }
}

impl core::str::FromStr for ParsedQuery {
    type Err = ParseError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        crate::parse(url)
    }
}
