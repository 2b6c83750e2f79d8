use crate::errors::prelude::*;

pub fn bin2hex(b: &[u8]) -> String {
    b.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join("")
}

pub fn hex2bin(s: &str) -> ClResult<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(err_msg(
            ClErrorKind::MalformedEncoding,
            "Hex string has odd length",
        ));
    }
    if let Some(i) = s.bytes().position(|ch| !ch.is_ascii_hexdigit()) {
        return Err(err_msg(
            ClErrorKind::MalformedEncoding,
            format!("Invalid character position {}", i),
        ));
    }

    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|e| err_msg(ClErrorKind::MalformedEncoding, e))
        })
        .collect()
}
