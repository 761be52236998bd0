//! Helpers for keeping banned paths and queries out of debug logs.
//!
//! The strings this crate inspects are exactly the ones a user wants gone, so
//! they are only logged verbatim when `WSCENSOR_ALLOW_DEBUG_PII=true`.

use once_cell::sync::Lazy;
use std::borrow::Cow;

/// Whether sensitive content may appear in debug logs. Read once per process.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("WSCENSOR_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

/// Returns `s` itself when PII logging is allowed, a length-only marker otherwise.
pub fn loggable(s: &str) -> Cow<'_, str> {
    if *PII_DEBUG_ALLOWED {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(redact_sensitive(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("a.md"), "[REDACTED]");
    }

    #[test]
    fn test_redact_sensitive_counts_chars_not_bytes() {
        assert_eq!(redact_sensitive("Référence.md"), "[REDACTED: 12 chars]");
    }
}
