//! Ready-made patterns.
//!
//! None of them is anchored; wrap them between [`chars::begin`] and
//! [`chars::end`] to match whole strings.
//!
//! [`chars::begin`]: crate::chars::begin
//! [`chars::end`]: crate::chars::end

mod hash;
pub mod number;
mod phone;
mod web;

pub use hash::{md5_hex, sha1_hex, sha256_hex};
pub use number::{RangeSynthesizer, Segment, compose, number_range, segment, steps};
pub use phone::{phone, phone_e123, phone_e164, phone_international_e123, phone_national_e123};
pub use web::{email, hostname_rfc952, hostname_rfc1123, ip, ipv4, ipv6};

#[cfg(test)]
pub(crate) fn assert_matches(token: crate::Token, accepted: &[&str], rejected: &[&str]) {
    let re = crate::Rex::new(crate::tokens![
        crate::chars::begin(),
        crate::group::non_captured(crate::tokens![token]),
        crate::chars::end(),
    ])
    .must_compile();
    for value in accepted {
        assert!(re.is_match(value), "{value:?} should match {re}");
    }
    for value in rejected {
        assert!(!re.is_match(value), "{value:?} should not match {re}");
    }
}
