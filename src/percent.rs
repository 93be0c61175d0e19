use crate::character_sets::{COMPONENT_SET, decode_hex_pair};
use crate::compat::{Cow, String, Vec};
use core::fmt::{self, Write};
use percent_encoding::percent_encode;

/// Decode one raw key or value token.
///
/// `+` becomes a space, `%XX` becomes the byte `0xXX` and every other byte is
/// copied through. The output is raw bytes with no UTF-8 requirement.
///
/// Returns the offset of the offending `%` within `input` when an escape is
/// not followed by two hexadecimal digits.
pub fn decode_component(input: &str) -> core::result::Result<Cow<'_, [u8]>, usize> {
    let bytes = input.as_bytes();

    // Fast path: nothing to decode
    let Some(first) = memchr::memchr2(b'%', b'+', bytes) else {
        return Ok(Cow::Borrowed(bytes));
    };

    let mut output = Vec::with_capacity(bytes.len());
    output.extend_from_slice(&bytes[..first]);

    let mut i = first;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                output.push(b' ');
                i += 1;
            }
            b'%' => {
                let decoded = match bytes.get(i + 1..i + 3) {
                    Some(&[hi, lo]) => decode_hex_pair(hi, lo),
                    _ => None,
                };
                let Some(byte) = decoded else {
                    return Err(i);
                };
                output.push(byte);
                i += 3;
            }
            b => {
                output.push(b);
                i += 1;
            }
        }
    }

    Ok(Cow::Owned(output))
}

/// Percent-encode bytes for use as an announce query key or value.
///
/// Unreserved ASCII passes through, space becomes `+`, anything else becomes
/// `%XX`. The result always decodes back to `input` via [`decode_component`].
pub fn encode_component(input: &[u8]) -> String {
    let mut buffer = String::with_capacity(input.len());
    // Writing to a String cannot fail
    let _ = encode_component_into(&mut buffer, input);
    buffer
}

/// Write an encoded component directly to any formatter or buffer
pub fn encode_component_into<W: Write + ?Sized>(out: &mut W, input: &[u8]) -> fmt::Result {
    for (i, part) in input.split(|&b| b == b' ').enumerate() {
        if i > 0 {
            out.write_char('+')?;
        }
        for chunk in percent_encode(part, COMPONENT_SET) {
            out.write_str(chunk)?;
        }
    }
    Ok(())
}
