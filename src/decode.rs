/// Percent-decoding that never fails
///
/// Captured path values are decoded before they are stored. Decoding is
/// forgiving by contract: input that does not decode cleanly is kept as-is
/// instead of surfacing an error, so a malformed path can never abort a
/// match.

use std::borrow::Cow;

/// Decodes percent-escapes in a captured value, falling back to the raw text
///
/// Wraps [`urlencoding::decode`] with the failure mode flattened away:
///
/// - Escapes decoding to valid UTF-8 are resolved (`"Jos%C3%A9"` → `"José"`)
/// - Lone or truncated `%` sequences pass through unchanged
/// - Escapes yielding invalid UTF-8 return the original text untouched
/// - `+` is left alone, it has no special meaning inside a path
///
/// Returns a borrowed view when the input contains no escapes at all.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use route_pattern::safe_decode;
///
/// assert_eq!(safe_decode("hello%20world"), "hello world");
/// assert_eq!(safe_decode("100%"), "100%");
/// assert_eq!(safe_decode("%FF"), "%FF");
/// assert!(matches!(safe_decode("plain"), Cow::Borrowed(_)));
/// ```
pub fn safe_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
