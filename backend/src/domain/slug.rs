//! Kebab-case slug predicate shared by customer identity types.
//!
//! Slugs are runs of lowercase ASCII letters or digits joined by single
//! hyphens, with no leading or trailing hyphen.

/// Return `true` when `value` is a valid kebab-case slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && value.split('-').all(is_slug_segment)
}

fn is_slug_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::is_valid_slug;
    use rstest::rstest;

    #[rstest]
    #[case("redbox-logistics", true)]
    #[case("acme", true)]
    #[case("a1-b2-c3", true)]
    #[case("", false)]
    #[case("-leading", false)]
    #[case("trailing-", false)]
    #[case("double--hyphen", false)]
    #[case("Upper-Case", false)]
    #[case("under_score", false)]
    #[case(" padded", false)]
    fn validates_kebab_case(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_slug(value), expected);
    }
}
