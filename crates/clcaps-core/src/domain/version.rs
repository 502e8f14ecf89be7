//! Protocol version ordinal parsing.

/// Length of the `"OpenCL "` prefix of platform and device version strings.
pub const VERSION_PREFIX_LEN: usize = "OpenCL ".len();

/// Ordinal assumed when the version cannot be parsed ("1.0").
pub const DEFAULT_ORDINAL: u32 = 10;

/// Parse a version string into the ordinal `major * 10 + minor`.
///
/// The first `prefix_len` bytes are skipped. A missing `.minor` part yields
/// `major * 10`. Anything without a leading integer after the prefix yields
/// [`DEFAULT_ORDINAL`].
pub fn parse_ordinal(version: &str, prefix_len: usize) -> u32 {
    let Some(rest) = version.get(prefix_len..) else {
        return DEFAULT_ORDINAL;
    };

    let (major, rest) = leading_number(rest);
    let Some(major) = major else {
        return DEFAULT_ORDINAL;
    };

    let minor = rest
        .strip_prefix('.')
        .and_then(|after_dot| leading_number(after_dot).0)
        .unwrap_or(0);

    major.saturating_mul(10).saturating_add(minor)
}

fn leading_number(s: &str) -> (Option<u32>, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (s[..end].parse().ok(), &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_major_minor() {
        assert_eq!(parse_ordinal("OpenCL 1.2 AMD-APP (1214.3)", VERSION_PREFIX_LEN), 12);
        assert_eq!(parse_ordinal("OpenCL 2.0 ", VERSION_PREFIX_LEN), 20);
        assert_eq!(parse_ordinal("OpenCL 1.1 Vendor Build", VERSION_PREFIX_LEN), 11);
    }

    #[test]
    fn missing_separator_yields_major_only() {
        assert_eq!(parse_ordinal("OpenCL 2 beta", VERSION_PREFIX_LEN), 20);
        assert_eq!(parse_ordinal("OpenCL 3.", VERSION_PREFIX_LEN), 30);
    }

    #[test]
    fn unparseable_defaults_to_one_zero() {
        assert_eq!(parse_ordinal("OpenCL unknown", VERSION_PREFIX_LEN), DEFAULT_ORDINAL);
        assert_eq!(parse_ordinal("short", VERSION_PREFIX_LEN), DEFAULT_ORDINAL);
        assert_eq!(parse_ordinal("", VERSION_PREFIX_LEN), DEFAULT_ORDINAL);
    }

    #[test]
    fn prefix_inside_multibyte_char_defaults() {
        assert_eq!(parse_ordinal("OpenCL\u{e9}1.2", VERSION_PREFIX_LEN), DEFAULT_ORDINAL);
    }

    proptest! {
        #[test]
        fn ordinal_is_major_times_ten_plus_minor(
            major in 0u32..100,
            minor in 0u32..10,
            tail in "[ a-zA-Z()0-9.-]{0,20}",
        ) {
            let version = format!("OpenCL {major}.{minor} {tail}");
            prop_assert_eq!(parse_ordinal(&version, VERSION_PREFIX_LEN), major * 10 + minor);
        }

        #[test]
        fn non_numeric_text_defaults(text in "[a-zA-Z ][a-zA-Z0-9. ]{0,20}") {
            let version = format!("OpenCL {text}");
            prop_assert_eq!(parse_ordinal(&version, VERSION_PREFIX_LEN), DEFAULT_ORDINAL);
        }
    }
}
