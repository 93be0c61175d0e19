mod assembler;
pub mod options;

use crate::compat::{ToString, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::extract_query;
use crate::parsed_query::ParsedQuery;
use crate::percent::decode_component;
use crate::tokenizer::{Pairs, RawPair};
use assembler::QueryAssembler;
use options::ParseOptions;

/// Parse the query of an announce URL with default options.
///
/// Everything after the first `?` is split on `&`, each token is split on its
/// first `=`, and both halves are strictly percent-decoded. Repeated names
/// resolve last-wins.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEscape`] if any `%` is not followed by two
/// hexadecimal digits. No partial result is produced.
///
/// # Examples
///
/// ```
/// let query = announce_query::parse("https://tracker/announce?port=6881&event=started")?;
/// assert_eq!(query.get("port"), Some(&b"6881"[..]));
/// assert_eq!(query.get_str("event"), Some("started"));
/// # Ok::<(), announce_query::ParseError>(())
/// ```
pub fn parse(url: &str) -> Result<ParsedQuery> {
    parse_with(url, &ParseOptions::default())
}

/// Parse the query of an announce URL under explicit options.
///
/// # Errors
///
/// Besides [`ParseError::InvalidEscape`], fails with
/// [`ParseError::InputTooLong`] when `max_input_len` is exceeded and with
/// [`ParseError::DuplicateKey`] under [`DuplicateKeys::Reject`].
///
/// [`DuplicateKeys::Reject`]: options::DuplicateKeys::Reject
pub fn parse_with(url: &str, options: &ParseOptions) -> Result<ParsedQuery> {
    let result = run_pipeline(url, options);
    #[cfg(feature = "tracing")]
    trace_outcome(&result);
    result
}

#[cfg(feature = "tracing")]
fn trace_outcome(result: &Result<ParsedQuery>) {
    match result {
        Ok(query) => tracing::debug!(params = query.len(), "parsed announce query"),
        Err(err) => tracing::debug!(
            kind = ?err.kind(),
            position = ?err.position(),
            "rejected announce query"
        ),
    }
}

fn run_pipeline(url: &str, options: &ParseOptions) -> Result<ParsedQuery> {
    if let Some(max) = options.max_input_len {
        if url.len() > max {
            return Err(ParseError::InputTooLong {
                len: url.len(),
                max,
            });
        }
    }

    let (query, offset) = extract_query(url);
    let mut assembler = QueryAssembler::new(options.duplicate_keys);

    for pair in Pairs::new(query, offset) {
        let (key, value) = decode_pair(&pair)?;
        assembler.push(key, value)?;
    }

    Ok(assembler.finish())
}

/// Decode both halves of a raw pair, mapping failures to absolute positions.
fn decode_pair(pair: &RawPair<'_>) -> Result<(Vec<u8>, Vec<u8>)> {
    let key =
        decode_component(pair.key).map_err(|pos| invalid_escape(pair.key, pair.key_start + pos))?;
    let value = decode_component(pair.value)
        .map_err(|pos| invalid_escape(pair.value, pair.value_start + pos))?;
    Ok((key.into_owned(), value.into_owned()))
}

fn invalid_escape(token: &str, position: usize) -> ParseError {
    ParseError::InvalidEscape {
        position,
        token: token.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use options::DuplicateKeys;

    const BASE: &str = "https://www.subdomain.tracker.com:80/announce/?";

    #[test]
    fn test_parse_announce() {
        let url = "https://host/announce/?peer_id=-TEST01-6wfG2wk6wWLc&port=6881&downloaded=1234&left=4321";
        let query = parse(url).unwrap();
        assert_eq!(query.len(), 4);
        assert_eq!(query.get_str("peer_id"), Some("-TEST01-6wfG2wk6wWLc"));
        assert_eq!(query.get_str("port"), Some("6881"));
        assert_eq!(query.get_str("downloaded"), Some("1234"));
        assert_eq!(query.get_str("left"), Some("4321"));
    }

    #[test]
    fn test_invalid_escape_position() {
        let url = "https://host/announce/?info_hash=%0%a";
        let err = parse(url).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEscape);
        assert_eq!(
            err,
            ParseError::InvalidEscape {
                position: 33,
                token: "%0%a".to_string(),
            }
        );
        assert_eq!(&url[33..34], "%");
    }

    #[test]
    fn test_invalid_escape_in_key() {
        let url = "/a?ok=1&bad%zkey=1";
        let err = parse(url).unwrap_err();
        assert_eq!(err.position(), Some(11));
        assert_eq!(&url[11..12], "%");
    }

    #[test]
    fn test_error_after_valid_pairs_discards_everything() {
        assert!(parse("/a?port=6881&left=0&peer_id=%").is_err());
    }

    #[test]
    fn test_no_query() {
        assert!(parse("https://host/announce").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
        assert!(parse(BASE).unwrap().is_empty());
    }

    #[test]
    fn test_empty_values() {
        let query = parse(&[BASE, "peer_id=&compact"].concat()).unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.get("peer_id"), Some(&b""[..]));
        assert_eq!(query.get("compact"), Some(&b""[..]));
    }

    #[test]
    fn test_max_input_len() {
        let options = ParseOptions::new().with_max_input_len(10);
        let err = parse_with("/a?port=6881", &options).unwrap_err();
        assert_eq!(err, ParseError::InputTooLong { len: 12, max: 10 });
        assert!(parse_with("/a?port=1", &options).is_ok());
    }

    #[test]
    fn test_duplicate_policy_applies_to_decoded_names() {
        // `p%6Frt` decodes to `port`
        let url = "/a?port=1&p%6Frt=2";
        assert_eq!(parse(url).unwrap().get_str("port"), Some("2"));

        let first = ParseOptions::new().with_duplicate_keys(DuplicateKeys::FirstWins);
        assert_eq!(parse_with(url, &first).unwrap().get_str("port"), Some("1"));

        let reject = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
        assert_eq!(
            parse_with(url, &reject).unwrap_err().kind(),
            ErrorKind::DuplicateKey
        );
    }
}

#[cfg(all(test, feature = "tracing", feature = "std"))]
mod tracing_tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    /// Counts events emitted from this crate
    struct EventCounter(Arc<AtomicUsize>);

    impl Subscriber for EventCounter {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            if event.metadata().target().starts_with("announce_query") {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    fn count_events(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        tracing::subscriber::with_default(EventCounter(Arc::clone(&count)), f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn test_event_on_success() {
        let events = count_events(|| {
            assert!(parse("/announce?port=6881").is_ok());
        });
        assert_eq!(events, 1);
    }

    #[test]
    fn test_event_on_rejection() {
        let events = count_events(|| {
            assert!(parse("/announce?info_hash=%0%a").is_err());

            let options = ParseOptions::new().with_max_input_len(4);
            assert!(parse_with("/announce", &options).is_err());
        });
        assert_eq!(events, 2);
    }
}
