use crate::models::{FieldMatcher, MatcherKind, RequestFingerprint, RequestTemplate};

/// The literal value a field is pinned to, if the field holds exactly one
/// `Exact` matcher. An absent field, multiple matchers, or any other matcher
/// kind yields `None`.
fn exact_value(matchers: &[FieldMatcher]) -> Option<&str> {
    match matchers {
        [matcher] if matcher.kind == MatcherKind::Exact => Some(matcher.value.as_str()),
        _ => None,
    }
}

/// Builds the one concrete fingerprint a template reduces to, or `None` when
/// the template describes a family of requests rather than a single one.
///
/// Header constraints always disqualify a template, even exact ones: the
/// fingerprint carries no header values, so two requests differing only in
/// headers would share a key and a preloaded entry could produce a false hit.
pub fn preload_fingerprint(template: &RequestTemplate) -> Option<RequestFingerprint> {
    if !template.headers.is_empty() {
        return None;
    }
    Some(RequestFingerprint {
        method: exact_value(&template.method)?.to_owned(),
        scheme: exact_value(&template.scheme)?.to_owned(),
        destination: exact_value(&template.destination)?.to_owned(),
        path: exact_value(&template.path)?.to_owned(),
        query: exact_value(&template.query)?.to_owned(),
        body: exact_value(&template.body)?.to_owned(),
    })
}

/// Whether a template may be precomputed into a cache entry ahead of traffic.
pub fn is_preloadable(template: &RequestTemplate) -> bool {
    preload_fingerprint(template).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_exact_template() -> RequestTemplate {
        RequestTemplate {
            method: vec![FieldMatcher::exact("method")],
            scheme: vec![FieldMatcher::exact("scheme")],
            destination: vec![FieldMatcher::exact("destination")],
            path: vec![FieldMatcher::exact("path")],
            query: vec![FieldMatcher::exact("query")],
            body: vec![FieldMatcher::exact("body")],
            headers: HashMap::new(),
        }
    }

    #[test]
    fn full_exact_template_is_preloadable() {
        assert!(is_preloadable(&full_exact_template()));
    }

    #[test]
    fn preload_fingerprint_carries_template_literals() {
        let fingerprint = preload_fingerprint(&full_exact_template()).unwrap();
        assert_eq!(fingerprint.method, "method");
        assert_eq!(fingerprint.scheme, "scheme");
        assert_eq!(fingerprint.destination, "destination");
        assert_eq!(fingerprint.path, "path");
        assert_eq!(fingerprint.query, "query");
        assert_eq!(fingerprint.body, "body");
    }

    #[test]
    fn missing_field_disqualifies() {
        let mut template = full_exact_template();
        template.query = Vec::new();
        assert!(!is_preloadable(&template));
    }

    #[test]
    fn non_exact_matcher_disqualifies() {
        let mut template = full_exact_template();
        template.destination = vec![FieldMatcher::new(MatcherKind::Regex, "destination")];
        assert!(!is_preloadable(&template));
    }

    #[test]
    fn regex_on_a_single_field_with_rest_unset_disqualifies() {
        let template = RequestTemplate {
            destination: vec![FieldMatcher::new(MatcherKind::Regex, "destination")],
            ..Default::default()
        };
        assert!(!is_preloadable(&template));
    }

    #[test]
    fn multiple_matchers_on_one_field_disqualify() {
        let mut template = full_exact_template();
        template.path = vec![FieldMatcher::exact("path"), FieldMatcher::exact("path")];
        assert!(!is_preloadable(&template));
    }

    #[test]
    fn any_header_constraint_disqualifies() {
        let mut template = full_exact_template();
        template.headers.insert(
            "Content-Type".to_string(),
            vec![FieldMatcher::exact("application/json")],
        );
        assert!(!is_preloadable(&template));
    }
}
