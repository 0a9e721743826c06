//! Identifier case conversion

/// Convert a snake_case identifier into PascalCase.
///
/// Empty segments are skipped, so leading, trailing and doubled underscores
/// do not leave gaps: `_resolver__rule_` becomes `ResolverRule`.
pub fn snake_to_pascal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Pascal case of `words[skip..]` joined with underscores.
pub fn words_to_pascal(words: &[&str], skip: usize) -> String {
    let rest = words.get(skip..).unwrap_or_default();
    snake_to_pascal(&rest.join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_conversion() {
        assert_eq!(snake_to_pascal("resolver_rule"), "ResolverRule");
        assert_eq!(snake_to_pascal("route_table"), "RouteTable");
        assert_eq!(snake_to_pascal("vpc_id"), "VpcId");
    }

    #[test]
    fn test_digits_are_kept() {
        assert_eq!(snake_to_pascal("route53_resolver_rule"), "Route53ResolverRule");
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(snake_to_pascal("_resolver__rule_"), "ResolverRule");
        assert_eq!(snake_to_pascal(""), "");
        assert_eq!(snake_to_pascal("___"), "");
    }

    #[test]
    fn test_words_to_pascal_drops_leading_words() {
        let words: Vec<&str> = "route53_resolver_rule".split('_').collect();
        assert_eq!(words_to_pascal(&words, 2), "Rule");
        assert_eq!(words_to_pascal(&words, 0), "Route53ResolverRule");
    }

    #[test]
    fn test_words_to_pascal_skip_past_end_is_empty() {
        let words = ["route", "table"];
        assert_eq!(words_to_pascal(&words, 5), "");
    }
}
