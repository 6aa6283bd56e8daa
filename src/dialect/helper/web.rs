use crate::dialect::{chars, common, group};
use crate::pattern::{ClassToken, Token};
use crate::tokens;

use super::number_range;

fn alphanumeric_or_minus() -> ClassToken {
    common::class([chars::alphanumeric(), chars::single('-')])
}

/// A host name per RFC 952: ASCII letters, digits, `-` and `.`, starting
/// with a letter and ending with a letter or digit.
pub fn hostname_rfc952() -> Token {
    group::non_captured(tokens![
        chars::alphabetic(),
        group::non_captured(tokens![
            alphanumeric_or_minus().repeat().one_or_more(),
            chars::single('.').repeat().zero_or_more(),
        ])
        .repeat()
        .zero_or_more(),
        chars::alphanumeric().repeat().one_or_more(),
    ])
    .into()
}

/// A host name per RFC 1123. Like [`hostname_rfc952`], but the first
/// character may be a digit and labels are at most 63 characters long.
pub fn hostname_rfc1123() -> Token {
    group::non_captured(tokens![
        chars::alphanumeric(),
        alphanumeric_or_minus().repeat().between(0, 62),
        group::non_captured(tokens![
            chars::single('.').repeat().zero_or_more(),
            chars::alphanumeric(),
            alphanumeric_or_minus().repeat().between(0, 62),
        ])
        .repeat()
        .zero_or_more(),
        chars::alphanumeric(),
    ])
    .into()
}

/// `local@host`, with an RFC 1123 host.
///
/// The local part is unquoted: ASCII letters, digits, the characters
/// ``!#$%&'*+-/=?^_`{|}~`` and dots, except that it neither starts nor ends
/// with a dot and has no consecutive dots. It is at most 63 characters long.
pub fn email() -> Token {
    let local_char = || common::class([chars::alphanumeric(), chars::runes("!#$%&'*+-/=?^_`{|}~")]);

    let local_part = group::non_captured(tokens![
        local_char(),
        group::non_captured(tokens![
            common::class([local_char(), chars::single('.')]).repeat().zero_or_one(),
            local_char(),
        ])
        .repeat()
        .between(0, 31),
    ]);

    group::non_captured(tokens![local_part, chars::single('@'), hostname_rfc1123()]).into()
}

/// Either [`ipv4`] or [`ipv6`].
pub fn ip() -> Token {
    group::composite([ipv4(), ipv6()]).into()
}

/// Four decimal octets `0..=255` separated by dots, without leading zeros.
pub fn ipv4() -> Token {
    let octet = || number_range(0, 255);
    group::non_captured(tokens![
        group::non_captured(tokens![octet(), chars::single('.')])
            .repeat()
            .exactly(3),
        octet(),
    ])
    .into()
}

/// An IPv6 address: eight colon-separated groups of up to four hex digits,
/// with `::` compressing zero groups. Also accepts link-local addresses with
/// a zone index (`fe80::7:8%eth0`), IPv4-mapped and translated addresses
/// (`::ffff:0:255.255.255.255`) and IPv4-embedded ones (`64:ff9b::192.0.2.33`).
pub fn ipv6() -> Token {
    let hextet = || chars::hex_digits().repeat().between(1, 4);
    let colon = || chars::single(':');
    let hextet_colon = || group::non_captured(tokens![hextet(), colon()]);
    let colon_hextet = || group::non_captured(tokens![colon(), hextet()]);

    group::composite(tokens![
        // 1:2:3:4:5:6:7:8
        group::non_captured(tokens![hextet_colon().repeat().exactly(7), hextet()]),
        // 1::  1:2:3:4:5:6:7::
        group::non_captured(tokens![hextet_colon().repeat().between(1, 7), colon()]),
        // 1::8  1:2:3:4:5:6::8
        group::non_captured(tokens![
            hextet_colon().repeat().between(1, 6),
            colon_hextet(),
        ]),
        // 1::7:8  1:2:3:4:5::7:8  1:2:3:4:5::8
        group::non_captured(tokens![
            hextet_colon().repeat().between(1, 5),
            colon_hextet().repeat().between(1, 2),
        ]),
        // 1::6:7:8  1:2:3:4::6:7:8  1:2:3:4::8
        group::non_captured(tokens![
            hextet_colon().repeat().between(1, 4),
            colon_hextet().repeat().between(1, 3),
        ]),
        // 1::5:6:7:8  1:2:3::5:6:7:8  1:2:3::8
        group::non_captured(tokens![
            hextet_colon().repeat().between(1, 3),
            colon_hextet().repeat().between(1, 4),
        ]),
        // 1::4:5:6:7:8  1:2::4:5:6:7:8  1:2::8
        group::non_captured(tokens![
            hextet_colon().repeat().between(1, 2),
            colon_hextet().repeat().between(1, 5),
        ]),
        // 1::3:4:5:6:7:8  1::8
        group::non_captured(tokens![hextet_colon(), colon_hextet().repeat().between(1, 6)]),
        // ::2:3:4:5:6:7:8  ::8  ::
        group::non_captured(tokens![
            colon(),
            group::composite(tokens![colon_hextet().repeat().between(1, 7), colon()]),
        ]),
        // fe80::7:8%eth0  fe80::7:8%1
        group::non_captured(tokens![
            group::composite(tokens![common::text("fe"), common::text("FE")]),
            common::text("80"),
            colon(),
            colon_hextet().repeat().between(0, 4),
            chars::single('%'),
            chars::alphanumeric().repeat().one_or_more(),
        ]),
        // ::255.255.255.255  ::ffff:255.255.255.255  ::ffff:0:255.255.255.255
        group::non_captured(tokens![
            colon().repeat().exactly(2),
            group::non_captured(tokens![
                chars::runes("fF").repeat().exactly(4),
                group::non_captured(tokens![colon(), chars::single('0').repeat().between(1, 4)])
                    .repeat()
                    .zero_or_one(),
                colon(),
            ])
            .repeat()
            .zero_or_one(),
            ipv4(),
        ]),
        // 2001:db8:3:4::192.0.2.33  64:ff9b::192.0.2.33
        group::non_captured(tokens![hextet_colon().repeat().between(1, 4), colon(), ipv4()]),
    ])
    .into()
}
