use crate::dialect::{chars, group};
use crate::pattern::Token;

fn hex(len: usize) -> Token {
    group::non_captured([chars::hex_digits().repeat().exactly(len)]).into()
}

/// MD5 digest in hex, either case.
///
/// Example: `d41d8cd98f00b204e9800998ecf8427e`.
pub fn md5_hex() -> Token {
    hex(32)
}

/// SHA-1 digest in hex, either case.
///
/// Example: `da39a3ee5e6b4b0d3255bfef95601890afd80709`.
pub fn sha1_hex() -> Token {
    hex(40)
}

/// SHA-256 digest in hex, either case.
///
/// Example: `e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855`.
pub fn sha256_hex() -> Token {
    hex(64)
}
