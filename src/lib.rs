//! # route-pattern
//!
//! Single-pass matching of a URL path against a route pattern, extracting
//! named parameters along the way.
//!
//! ## Features
//!
//! - **Literal segments** - `/about`, `/users/profile`
//! - **Named parameters** - `/users/:id` captures `id`
//! - **Optional parameters** - `/users/:id?` matches with or without the segment
//! - **Rest parameters** - `/docs/:slug+` (one or more) and `/docs/:slug*`
//!   (zero or more) capture the remaining path joined with `/`
//! - **Anonymous wildcard** - `/static/*` captures the remainder under `rest`
//! - **Safe decoding** - captured values are percent-decoded, malformed
//!   escapes are kept raw instead of failing the match
//! - **Slash tolerance** - doubled, leading or trailing slashes never change
//!   the outcome
//! - **Accumulator merging** - results from several patterns can be folded
//!   into one set of captures
//!
//! ## Quick Start
//!
//! ```rust
//! use route_pattern::match_route;
//!
//! let found = match_route("/users/42/posts/7", "/users/:user/posts/:post").unwrap();
//! assert_eq!(found.get("user"), Some("42"));
//! assert_eq!(found.get("post"), Some("7"));
//!
//! // Wildcards capture the rest of the path
//! let found = match_route("/static/css/site.css", "/static/*").unwrap();
//! assert_eq!(found.rest.as_deref(), Some("/css/site.css"));
//!
//! // No match comes back as None
//! assert!(match_route("/users", "/users/:id").is_none());
//! ```
//!
//! ## Pattern Syntax
//!
//! | Pattern segment | Matches | Captures |
//! |-----------------|---------|----------|
//! | `about` | the literal text `about` | nothing |
//! | `:id` | exactly one segment | `id` → segment value |
//! | `:id?` | one segment or nothing | `id` → value, or absent |
//! | `:slug+` | one or more segments | `slug` → joined remainder |
//! | `:slug*` | zero or more segments | `slug` → joined remainder, or absent |
//! | `*` | anything from here on | `rest` → `/`-prefixed remainder |
//!
//! A rest segment always ends the walk, so pattern segments written after a
//! `+`, `*` or anonymous wildcard are never examined.
//!
//! ## Matching Model
//!
//! Both path and pattern are split on `/` with empty pieces dropped, which is
//! why `//users//42//` and `/users/42` behave identically. The walk is a
//! single forward pass with no backtracking: every pattern segment consumes
//! at most one path segment, except rest segments which consume everything
//! left. Matching a path cannot fail with an error, the only outcomes are
//! `Some(captures)` and `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod segment;

mod decode;

pub use decode::safe_decode;
pub use segment::{classify_segment, split_modifier, split_segments, Modifier, PatternSegment};

/// Captured parameters keyed by name
///
/// The value is `None` when an optional or zero-or-more segment was declared
/// in the pattern but absent from the path. A name that never matched is
/// missing from the map entirely, which keeps "captured as absent" and
/// "never captured" apart.
pub type Params = BTreeMap<String, Option<String>>;

/// The result of a successful match
///
/// Serializes to the shape routers tend to exchange: a `params` object plus
/// an optional `rest` string holding whatever an anonymous wildcard swallowed.
///
/// # Examples
///
/// ```
/// use route_pattern::match_route;
///
/// let found = match_route("/user", "/user/:id?").unwrap();
///
/// // The flattened view hides absent captures...
/// assert_eq!(found.get("id"), None);
///
/// // ...while the params map still records that `id` was declared.
/// assert_eq!(found.params.get("id"), Some(&None));
/// assert!(!found.params.contains_key("other"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matches {
    /// Everything captured by named pattern segments
    #[serde(default)]
    pub params: Params,
    /// Remainder captured by an anonymous `*`, prefixed with `/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

impl Matches {
    /// Creates an empty result, typically to seed an accumulator for
    /// [`match_route_into`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a captured value by name, flattening absent captures away
    ///
    /// Returns `None` both for a name that never matched and for an optional
    /// segment that matched nothing. Read `params` directly when that
    /// difference matters.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|value| value.as_deref())
    }

    /// Folds another result into this one
    ///
    /// Incoming params win on name collisions. `rest` is only replaced when
    /// the incoming result actually captured one.
    pub fn merge(&mut self, other: Matches) {
        self.params.extend(other.params);
        if other.rest.is_some() {
            self.rest = other.rest;
        }
    }
}

/// Matches a path against a route pattern in a single pass
///
/// Returns `Some(captures)` when the pattern covers the whole path and `None`
/// otherwise. Matching never raises: malformed percent-escapes in the path
/// are captured raw rather than rejected.
///
/// # Examples
///
/// ```
/// use route_pattern::match_route;
///
/// let found = match_route("/users/42", "/users/:id").unwrap();
/// assert_eq!(found.get("id"), Some("42"));
///
/// let found = match_route("/docs/guide/intro", "/docs/:slug+").unwrap();
/// assert_eq!(found.get("slug"), Some("guide/intro"));
///
/// assert!(match_route("/users/42/extra", "/users/:id").is_none());
/// ```
pub fn match_route(path: &str, pattern: &str) -> Option<Matches> {
    let result = match_segments(&split_segments(path), &split_segments(pattern));
    match &result {
        Some(found) => tracing::trace!(
            "matched {:?} against {:?} ({} params)",
            path,
            pattern,
            found.params.len()
        ),
        None => tracing::trace!("no match for {:?} against {:?}", path, pattern),
    }
    result
}

/// Matches a path against a pattern, folding captures into an accumulator
///
/// On success the captures are merged into `acc` (see [`Matches::merge`]) and
/// `true` comes back. On failure `acc` is left exactly as it was, so a failed
/// pattern never leaks partial captures.
///
/// Useful when several patterns contribute to one result, for example layout
/// routes stacking params on top of page routes.
///
/// # Examples
///
/// ```
/// use route_pattern::{match_route_into, Matches};
///
/// let mut acc = Matches::new();
/// acc.params.insert("tenant".into(), Some("acme".into()));
///
/// assert!(match_route_into("/docs/guide", "/docs/:page", &mut acc));
/// assert_eq!(acc.get("tenant"), Some("acme"));
/// assert_eq!(acc.get("page"), Some("guide"));
///
/// // A miss leaves the accumulator untouched
/// assert!(!match_route_into("/blog", "/docs/:page", &mut acc));
/// assert_eq!(acc.params.len(), 2);
/// ```
pub fn match_route_into(path: &str, pattern: &str, acc: &mut Matches) -> bool {
    match match_route(path, pattern) {
        Some(found) => {
            acc.merge(found);
            true
        }
        None => false,
    }
}

/// Single forward pass over both segment lists
///
/// Captures land in a fresh `Matches` so that a mid-walk failure discards
/// them wholesale.
fn match_segments(path_segments: &[&str], pattern_segments: &[&str]) -> Option<Matches> {
    let mut found = Matches::new();
    let upper = path_segments.len().max(pattern_segments.len());

    for i in 0..upper {
        let value = path_segments.get(i).copied();

        // Path segments left over with no pattern segment to consume them.
        let Some(token) = pattern_segments.get(i) else {
            return None;
        };

        match classify_segment(token) {
            PatternSegment::Literal { text, modifier } => {
                // Exact equality wins before any wildcard interpretation.
                if value == Some(text) {
                    continue;
                }
                // An unequal literal flagged `*` acts as the anonymous wildcard.
                if modifier == Modifier::ZeroOrMore && value.is_some() {
                    let remainder = path_segments[i..].join("/");
                    found.rest = Some(format!("/{}", safe_decode(&remainder)));
                    break;
                }
                return None;
            }
            PatternSegment::Param { name, modifier } => {
                if value.is_none() && !modifier.allows_absent() {
                    return None;
                }
                // Rest params swallow everything left and end the walk.
                if modifier.is_rest() {
                    let remainder = path_segments.get(i..).unwrap_or_default().join("/");
                    let captured =
                        (!remainder.is_empty()).then(|| safe_decode(&remainder).into_owned());
                    found.params.insert(name.to_owned(), captured);
                    break;
                }
                let captured = value.map(|v| safe_decode(v).into_owned());
                found.params.insert(name.to_owned(), captured);
            }
        }
    }

    Some(found)
}
