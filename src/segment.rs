/// Repetition and optionality flag split off the tail of a pattern segment
///
/// Carries the meaning of the trailing sigil on the segment text: `?` makes
/// a segment skippable, `+` and `*` turn it into a rest segment that swallows
/// the remainder of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// No trailing sigil: matches exactly one path segment
    None,
    /// `?`: the path segment may be absent
    Optional,
    /// `+`: rest capture, requires at least one path segment
    OneOrMore,
    /// `*`: rest capture, matches zero or more path segments
    ZeroOrMore,
}

impl Modifier {
    /// Returns `true` for the rest modifiers `+` and `*`
    pub fn is_rest(self) -> bool {
        matches!(self, Modifier::OneOrMore | Modifier::ZeroOrMore)
    }

    /// Returns `true` when the path may run out of segments at this position
    /// without failing the match
    pub fn allows_absent(self) -> bool {
        matches!(self, Modifier::Optional | Modifier::ZeroOrMore)
    }
}

/// A single tokenized pattern segment
///
/// Functional sum type over the two kinds of `/`-delimited pattern pieces.
/// Borrows from the pattern string, so tokenization allocates nothing.
///
/// # Examples
///
/// ```
/// use route_pattern::segment::{classify_segment, PatternSegment};
///
/// // Literal segment
/// let seg = classify_segment("about");
/// assert!(matches!(seg, PatternSegment::Literal { .. }));
///
/// // Named parameter
/// let seg = classify_segment(":id");
/// assert!(matches!(seg, PatternSegment::Param { .. }));
///
/// // Anonymous wildcard (an empty literal carrying `*`)
/// let seg = classify_segment("*");
/// assert!(matches!(seg, PatternSegment::Literal { text: "", .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSegment<'a> {
    /// Static text, compared against the path segment by exact equality
    Literal { text: &'a str, modifier: Modifier },
    /// Named capture introduced by `:`, e.g. `:id` or `:rest+`
    Param { name: &'a str, modifier: Modifier },
}

/// Classifies one pattern segment into a typed descriptor (pure function)
///
/// **Pure functional tokenizer**: maps segment text → [`PatternSegment`].
///
/// # Tokenization Rules (evaluated in order)
///
/// 1. **Param**: the segment contains `:`. The name is the piece after the
///    last `:`, with any trailing modifier split off.
/// 2. **Literal**: anything else, again with any trailing modifier split off.
///
/// The modifier sigils are `?` (optional), `+` (one or more) and `*` (zero
/// or more). A bare `*` tokenizes as an empty literal carrying `ZeroOrMore`,
/// which is what makes the anonymous wildcard work: the empty text never
/// equals a real path segment, so matching falls through to the rest capture.
///
/// # Examples
///
/// ```
/// use route_pattern::segment::{classify_segment, Modifier, PatternSegment};
///
/// // Literal
/// let seg = classify_segment("about");
/// assert_eq!(seg, PatternSegment::Literal { text: "about", modifier: Modifier::None });
///
/// // Required parameter
/// let seg = classify_segment(":id");
/// assert_eq!(seg, PatternSegment::Param { name: "id", modifier: Modifier::None });
///
/// // Optional parameter
/// let seg = classify_segment(":id?");
/// assert_eq!(seg, PatternSegment::Param { name: "id", modifier: Modifier::Optional });
///
/// // Rest parameter
/// let seg = classify_segment(":slug+");
/// assert_eq!(seg, PatternSegment::Param { name: "slug", modifier: Modifier::OneOrMore });
///
/// // Anonymous wildcard
/// let seg = classify_segment("*");
/// assert_eq!(seg, PatternSegment::Literal { text: "", modifier: Modifier::ZeroOrMore });
/// ```
pub fn classify_segment(token: &str) -> PatternSegment<'_> {
    match token.rsplit_once(':') {
        Some((_, param)) => {
            let (name, modifier) = split_modifier(param);
            PatternSegment::Param { name, modifier }
        }
        None => {
            let (text, modifier) = split_modifier(token);
            PatternSegment::Literal { text, modifier }
        }
    }
}

/// Splits a trailing modifier sigil off a segment or parameter name
///
/// Maps `"id?"` → `("id", Modifier::Optional)` and leaves unflagged text
/// untouched. Only the final character is inspected, so interior sigils stay
/// part of the text.
pub fn split_modifier(token: &str) -> (&str, Modifier) {
    if let Some(text) = token.strip_suffix('?') {
        return (text, Modifier::Optional);
    }
    if let Some(text) = token.strip_suffix('+') {
        return (text, Modifier::OneOrMore);
    }
    if let Some(text) = token.strip_suffix('*') {
        return (text, Modifier::ZeroOrMore);
    }
    (token, Modifier::None)
}

/// Splits a path or pattern on `/`, dropping empty pieces
///
/// Leading, trailing and doubled slashes all yield empty pieces, so filtering
/// them out collapses `"//users//42//"` to the same segment list as
/// `"/users/42"`. Both sides of a match are split this way, which is where
/// the slash-normalization behavior comes from.
///
/// # Examples
///
/// ```
/// use route_pattern::segment::split_segments;
///
/// assert_eq!(split_segments("/users/42"), vec!["users", "42"]);
/// assert_eq!(split_segments("//users//42//"), vec!["users", "42"]);
/// assert_eq!(split_segments("/"), Vec::<&str>::new());
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
