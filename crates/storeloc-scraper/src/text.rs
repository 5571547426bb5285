//! Markup stripping and whitespace normalization for captured HTML fragments.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Remove every tag from `fragment`, collapse whitespace runs (newlines
/// included) to a single space and trim both ends.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
#[must_use]
pub fn clean_text(fragment: &str) -> String {
    let untagged = TAG_RE.replace_all(fragment, "");
    WHITESPACE_RE
        .replace_all(&untagged, " ")
        .trim()
        .to_string()
}

/// [`clean_text`], mapping an empty result to `None`.
pub(crate) fn clean_nonempty(fragment: &str) -> Option<String> {
    Some(clean_text(fragment)).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        assert_eq!(
            clean_text("  <strong>Shop 12</strong>,<br/>\n  Westfield   Bondi\t "),
            "Shop 12, Westfield Bondi"
        );
    }

    #[test]
    fn is_idempotent_on_clean_input() {
        let clean = "Level 1, 500 Oxford Street";
        assert_eq!(clean_text(clean), clean);
        assert_eq!(clean_text(&clean_text("<b> a \n b </b>")), "a b");
    }

    #[test]
    fn keeps_lone_angle_brackets_that_are_not_tags() {
        assert_eq!(clean_text("open < 9am"), "open < 9am");
    }

    #[test]
    fn tag_only_fragment_is_empty() {
        assert_eq!(clean_text("<br>\n<br/>"), "");
        assert_eq!(clean_nonempty("<br>\n<br/>"), None);
        assert_eq!(clean_nonempty(" x ").as_deref(), Some("x"));
    }
}
