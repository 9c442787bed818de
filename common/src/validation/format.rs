use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9(][0-9 ().\-]*[0-9]$").expect("phone pattern compiles"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*(:[0-9]+)?([/?#]\S*)?$")
        .expect("url pattern compiles")
});

const MIN_PHONE_DIGITS: usize = 6;

/// `local@domain.tld`, no whitespace.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits with optional leading `+` and the usual separators, starting with a
/// digit or `(` and ending with a digit.
pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
        && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Absolute `http` or `https` link with a host.
pub fn is_url(value: &str) -> bool {
    URL_RE.is_match(value)
}
