//! Ordering strategies for release identifiers
//!
//! Release names are free-form, so the manifest sorts them through a
//! [`VersionOrdering`] chosen at the command line:
//! - [`SemanticOrdering`]: numeric components compared as numbers
//!   (`10.0` above `9.0`), PEP 440 dev/pre/post suffixes around the bare release
//! - [`LexicalOrdering`]: plain string comparison
//!
//! Dev builds are always ordered lexically; they embed a sortable token.

use std::cmp::Ordering;

use clap::ValueEnum;

/// Comparison strategy for version identifiers
pub trait VersionOrdering {
    /// Compare two identifiers, `Greater` meaning `a` is newer
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Sort newest first
    fn sort_descending(&self, versions: &mut [String]) {
        versions.sort_by(|a, b| self.compare(b, a));
    }
}

/// Plain string comparison
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalOrdering;

impl VersionOrdering for LexicalOrdering {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Version-aware comparison
///
/// Accepts an optional `v` prefix, dot-separated numeric release components
/// and an optional suffix. Suffixes follow PEP 440 ordering: dev releases
/// (`1.0.dev1`) come first, then pre-releases (`1.0a1` < `1.0b1` < `1.0rc1`,
/// `alpha`/`beta`/`c` spelled out or not), the bare release, and finally
/// post-releases (`1.0.post1`). Other suffixes (`1.0.0-foo`) sort between dev
/// releases and labeled pre-releases. Anything after `+` is build metadata and
/// only breaks ties. Names that do not start with a numeric component sort
/// below every parseable one, lexically among themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemanticOrdering;

impl VersionOrdering for SemanticOrdering {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (ParsedVersion::parse(a), ParsedVersion::parse(b)) {
            (Some(pa), Some(pb)) => pa.cmp(&pb).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => a.cmp(b),
        }
    }
}

/// Release ordering selectable from the CLI
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderingKind {
    /// Compare numeric components as numbers
    #[default]
    Semantic,
    /// Compare names as plain strings
    Lexical,
}

impl OrderingKind {
    pub fn strategy(self) -> Box<dyn VersionOrdering> {
        match self {
            OrderingKind::Semantic => Box::new(SemanticOrdering),
            OrderingKind::Lexical => Box::new(LexicalOrdering),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Num(u64),
    Alpha(&'a str),
}

impl Ord for Segment<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Num(a), Segment::Num(b)) => a.cmp(b),
            (Segment::Alpha(a), Segment::Alpha(b)) => a.cmp(b),
            (Segment::Num(_), Segment::Alpha(_)) => Ordering::Less,
            (Segment::Alpha(_), Segment::Num(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pre-release label, normalized (`alpha` is `a`, `c`/`pre`/`preview` are `rc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PreLabel {
    Alpha,
    Beta,
    Candidate,
}

impl PreLabel {
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Some(Self::Alpha),
            "b" | "beta" => Some(Self::Beta),
            "c" | "rc" | "pre" | "preview" => Some(Self::Candidate),
            _ => None,
        }
    }
}

/// Pre-release position of a version relative to its bare release.
///
/// Variants are declared lowest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PreRelease<'a> {
    /// Only a dev segment (`1.0.dev1`): below every pre-release
    DevOnly,
    /// A suffix outside the known grammar (`1.0.0-foo.2`)
    Other(Vec<Segment<'a>>),
    /// `1.0a1`, `1.0.0-beta`, `2.0rc2`
    Labeled(PreLabel, u64),
    /// No pre-release
    Final,
}

#[derive(Debug, PartialEq, Eq)]
struct ParsedVersion<'a> {
    release: Vec<u64>,
    pre: PreRelease<'a>,
    post: Option<u64>,
    dev: Option<u64>,
}

impl<'a> ParsedVersion<'a> {
    fn parse(input: &'a str) -> Option<Self> {
        let input = input
            .strip_prefix('v')
            .or_else(|| input.strip_prefix('V'))
            .unwrap_or(input);
        let input = input.split_once('+').map_or(input, |(head, _)| head);

        let release_end = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(input.len());
        let (release_part, suffix) = input.split_at(release_end);

        // A trailing dot belongs to the suffix separator ("1.0.rc1")
        let release_part = release_part.strip_suffix('.').unwrap_or(release_part);
        let release = release_part
            .split('.')
            .map(|component| {
                if component.is_empty() {
                    None
                } else {
                    component.parse::<u64>().ok()
                }
            })
            .collect::<Option<Vec<_>>>()?;

        let segments = split_segments(suffix);
        let parsed = match parse_suffix(&segments) {
            Some((pre, post, dev)) => Self {
                release,
                pre,
                post,
                dev,
            },
            None => Self {
                release,
                pre: PreRelease::Other(segments),
                post: None,
                dev: None,
            },
        };
        Some(parsed)
    }
}

type Suffix<'a> = (PreRelease<'a>, Option<u64>, Option<u64>);

/// Read `[pre][post][dev]` from the suffix segments, `None` when they do not
/// fit that shape.
fn parse_suffix<'a>(segments: &[Segment<'a>]) -> Option<Suffix<'a>> {
    let mut rest = segments;

    let pre = match rest.first() {
        Some(Segment::Alpha(token)) => PreLabel::from_token(token),
        _ => None,
    }
    .and_then(|kind| take_label(&mut rest, |_| true).map(|n| (kind, n)));

    let mut post = take_label(&mut rest, |token| {
        matches!(token.to_ascii_lowercase().as_str(), "post" | "rev" | "r")
    });
    // Implicit post-release: "1.0-1"
    if post.is_none() && pre.is_none() {
        if let [Segment::Num(n), tail @ ..] = rest {
            post = Some(*n);
            rest = tail;
        }
    }

    let dev = take_label(&mut rest, |token| token.eq_ignore_ascii_case("dev"));

    if !rest.is_empty() {
        return None;
    }

    let pre = match (pre, post, dev) {
        (Some((kind, n)), _, _) => PreRelease::Labeled(kind, n),
        (None, None, Some(_)) => PreRelease::DevOnly,
        (None, _, _) => PreRelease::Final,
    };
    Some((pre, post, dev))
}

/// Consume a label accepted by `accept` and its optional number (default 0)
fn take_label<'s, 'a>(
    rest: &mut &'s [Segment<'a>],
    accept: impl Fn(&str) -> bool,
) -> Option<u64> {
    match *rest {
        [Segment::Alpha(token), Segment::Num(n), tail @ ..] if accept(token) => {
            *rest = tail;
            Some(*n)
        }
        [Segment::Alpha(token), tail @ ..] if accept(token) => {
            *rest = tail;
            Some(0)
        }
        _ => None,
    }
}

fn split_segments(suffix: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = suffix;

    while let Some(start) = rest.find(|c: char| c.is_ascii_alphanumeric()) {
        rest = &rest[start..];
        let numeric = rest.starts_with(|c: char| c.is_ascii_digit());
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() || c.is_ascii_digit() != numeric)
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        segments.push(match token.parse::<u64>() {
            Ok(n) if numeric => Segment::Num(n),
            _ => Segment::Alpha(token),
        });
        rest = tail;
    }

    segments
}

impl Ord for ParsedVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.release.len().max(other.release.len());
        let component = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
        let release = (0..len)
            .map(|i| component(&self.release, i).cmp(&component(&other.release, i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal);

        // Without a dev segment a version is newer than any of its dev releases
        let dev = match (self.dev, other.dev) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        };

        release
            .then_with(|| self.pre.cmp(&other.pre))
            .then_with(|| self.post.cmp(&other.post))
            .then(dev)
    }
}

impl PartialOrd for ParsedVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(ordering: &dyn VersionOrdering, input: &[&str]) -> Vec<String> {
        let mut versions: Vec<String> = input.iter().map(ToString::to_string).collect();
        ordering.sort_descending(&mut versions);
        versions
    }

    #[test]
    fn test_semantic_multi_digit_components() {
        assert_eq!(
            sorted(&SemanticOrdering, &["9.0", "10.0", "1.10.0", "1.9.0"]),
            vec!["10.0", "9.0", "1.10.0", "1.9.0"]
        );
    }

    #[test]
    fn test_lexical_multi_digit_components() {
        assert_eq!(
            sorted(&LexicalOrdering, &["9.0", "10.0", "1.10.0", "1.9.0"]),
            vec!["9.0", "10.0", "1.9.0", "1.10.0"]
        );
    }

    #[test]
    fn test_semantic_prerelease_below_release() {
        assert_eq!(
            sorted(&SemanticOrdering, &["1.0.0-rc.1", "1.0.0", "1.0.0-beta", "0.9.0"]),
            vec!["1.0.0", "1.0.0-rc.1", "1.0.0-beta", "0.9.0"]
        );
    }

    #[test]
    fn test_semantic_prerelease_numbers() {
        assert_eq!(
            sorted(&SemanticOrdering, &["2.0rc2", "2.0rc10", "2.0a1", "2.0b1"]),
            vec!["2.0rc10", "2.0rc2", "2.0b1", "2.0a1"]
        );
    }

    #[test]
    fn test_semantic_post_and_dev_releases() {
        assert_eq!(
            sorted(&SemanticOrdering, &["1.0", "1.0.post1", "1.0a1", "1.0.dev1"]),
            vec!["1.0.post1", "1.0", "1.0a1", "1.0.dev1"]
        );
    }

    #[test]
    fn test_semantic_post_release_above_release() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("1.0.post1", "1.0"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0.post2", "1.0.post10"), Ordering::Less);
        assert_eq!(ordering.compare("1.0-1", "1.0"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0.post1", "1.0.1"), Ordering::Less);
        // A dev release of a post-release sits between the two
        assert_eq!(ordering.compare("1.0.post1.dev1", "1.0"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0.post1.dev1", "1.0.post1"), Ordering::Less);
    }

    #[test]
    fn test_semantic_dev_release_below_prereleases() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("1.0.dev1", "1.0a1"), Ordering::Less);
        assert_eq!(ordering.compare("1.0.dev1", "0.9"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0.dev2", "1.0.dev10"), Ordering::Less);
        assert_eq!(ordering.compare("1.0a1.dev1", "1.0a1"), Ordering::Less);
        assert_eq!(ordering.compare("1.0a1.dev1", "1.0.dev5"), Ordering::Greater);
    }

    #[test]
    fn test_semantic_prerelease_label_spellings() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("1.0alpha2", "1.0a1"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0alpha1", "1.0b1"), Ordering::Less);
        assert_eq!(ordering.compare("1.0beta2", "1.0b3"), Ordering::Less);
        assert_eq!(ordering.compare("1.0c1", "1.0rc2"), Ordering::Less);
        assert_eq!(ordering.compare("1.0RC3", "1.0rc2"), Ordering::Greater);
        assert_eq!(ordering.compare("1.0-preview.1", "1.0b9"), Ordering::Greater);
        assert_eq!(
            ParsedVersion::parse("1.0alpha1").map(|v| v.pre),
            ParsedVersion::parse("1.0a1").map(|v| v.pre)
        );
    }

    #[test]
    fn test_semantic_unknown_suffix_below_labeled_prerelease() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("1.0.0-foo", "1.0.0-alpha"), Ordering::Less);
        assert_eq!(ordering.compare("1.0.0-foo", "1.0.0"), Ordering::Less);
        assert_eq!(ordering.compare("1.0.0-foo", "1.0.dev1"), Ordering::Greater);
    }

    #[test]
    fn test_semantic_v_prefix_and_trailing_zeros() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("v1.2.0", "1.1.9"), Ordering::Greater);
        // Equal versions still order deterministically by name
        assert_eq!(ordering.compare("1.0", "1.0.0"), Ordering::Less);
        assert_eq!(ordering.compare("1.0.0", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_semantic_build_metadata_ignored() {
        let ordering = SemanticOrdering;
        assert_eq!(ordering.compare("1.0.0+build.5", "1.0.1"), Ordering::Less);
        assert_eq!(ordering.compare("1.0.0+build.5", "0.9.9"), Ordering::Greater);
    }

    #[test]
    fn test_semantic_unparseable_sorts_last() {
        assert_eq!(
            sorted(&SemanticOrdering, &["stable", "1.0.0", "beta", "0.1.0"]),
            vec!["1.0.0", "0.1.0", "stable", "beta"]
        );
    }

    #[test]
    fn test_semantic_rejects_empty_components() {
        assert!(ParsedVersion::parse("1..0").is_none());
        assert!(ParsedVersion::parse(".1").is_none());
        assert!(ParsedVersion::parse("release").is_none());
        assert!(ParsedVersion::parse("99999999999999999999999.0").is_none());
        assert!(ParsedVersion::parse("1.0.rc1").is_some());
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(
            split_segments("-rc.12abc"),
            vec![Segment::Alpha("rc"), Segment::Num(12), Segment::Alpha("abc")]
        );
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_ordering_kind_strategy() {
        let semantic = OrderingKind::Semantic.strategy();
        let lexical = OrderingKind::Lexical.strategy();
        assert_eq!(semantic.compare("10.0", "9.0"), Ordering::Greater);
        assert_eq!(lexical.compare("10.0", "9.0"), Ordering::Less);
        assert_eq!(OrderingKind::default(), OrderingKind::Semantic);
    }
}
