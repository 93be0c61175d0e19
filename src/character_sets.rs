use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Marker for bytes that are not hexadecimal digits in [`HEX_VALUE_TABLE`]
const NOT_HEX: u8 = 0xFF;

/// Hex digit lookup: maps `0-9a-fA-F` to their value, everything else to `NOT_HEX`
const HEX_VALUE_TABLE: [u8; 256] = {
    let mut table = [NOT_HEX; 256];

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = i - b'0';
        i += 1;
    }
    let mut i = b'a';
    while i <= b'f' {
        table[i as usize] = i - b'a' + 10;
        table[(i - b'a' + b'A') as usize] = i - b'a' + 10;
        i += 1;
    }

    table
};

/// Value of a single hexadecimal digit, case-insensitive.
#[inline]
pub fn hex_value(byte: u8) -> Option<u8> {
    match HEX_VALUE_TABLE[byte as usize] {
        NOT_HEX => None,
        value => Some(value),
    }
}

/// Decode a two-digit escape body such as the `3C` in `%3C`.
#[inline]
pub fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some((hex_value(hi)? << 4) | hex_value(lo)?)
}

/// Announce component encode set
/// Everything except ASCII alphanumerics and the unreserved marks `-`, `_`, `.`, `~`.
/// Space is in the set but gets special `+` treatment by the encoder.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');
