use crate::compat::{BTreeMap, Vec};
use crate::error::{ParseError, Result};
use crate::parsed_query::ParsedQuery;
use crate::parser::options::DuplicateKeys;

/// Collects decoded pairs in tokenization order and applies the
/// duplicate-key policy.
#[derive(Debug)]
pub struct QueryAssembler {
    params: BTreeMap<Vec<u8>, Vec<u8>>,
    policy: DuplicateKeys,
}

impl QueryAssembler {
    pub fn new(policy: DuplicateKeys) -> Self {
        Self {
            params: BTreeMap::new(),
            policy,
        }
    }

    pub fn push(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        match self.policy {
            DuplicateKeys::LastWins => {
                self.params.insert(key, value);
            }
            DuplicateKeys::FirstWins => {
                self.params.entry(key).or_insert(value);
            }
            DuplicateKeys::Reject => {
                if self.params.contains_key(&key) {
                    return Err(ParseError::DuplicateKey { key });
                }
                self.params.insert(key, value);
            }
        }
        Ok(())
    }

    pub fn finish(self) -> ParsedQuery {
        ParsedQuery::from_map(self.params)
    }
}
