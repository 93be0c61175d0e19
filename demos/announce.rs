/// Announce query parsing example
use announce_query::{DuplicateKeys, ParseOptions, encode_component, parse, parse_with};

fn main() {
    // Build an announce URL carrying a binary info_hash
    let info_hash: Vec<u8> = (0u8..20).map(|i| i.wrapping_mul(13)).collect();
    let url = format!(
        "https://tracker.example/announce?info_hash={}&peer_id=-TEST01-6wfG2wk6wWLc&port=6881&event=started",
        encode_component(&info_hash)
    );
    println!("URL: {url}");

    let query = parse(&url).expect("Failed to parse announce query");
    println!("Parameters: {}", query.len()); // 4
    println!("peer_id: {:?}", query.get_str("peer_id")); // Some("-TEST01-6wfG2wk6wWLc")
    println!("port: {:?}", query.get_str("port")); // Some("6881")
    println!(
        "info_hash matches: {}",
        query.get("info_hash") == Some(&info_hash[..])
    ); // true
    println!();

    // Malformed escapes are rejected outright
    match parse("https://tracker.example/announce?info_hash=%0%a") {
        Ok(query) => println!("Unexpected success: {query}"),
        Err(err) => println!("Rejected: {err}"), // Invalid percent escape at byte 43 in "%0%a"
    }
    println!();

    // Duplicate names can be made an error
    let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
    match parse_with("/announce?port=1&port=2", &options) {
        Ok(query) => println!("Unexpected success: {query}"),
        Err(err) => println!("Rejected: {err}"), // Duplicate key "port"
    }
}
