//! URI template handling.
//!
//! Templates use `{name}` placeholder tokens. Substitution is literal
//! token replacement with the string form of the supplied value; there is
//! no escaping, encoding, or type coercion.

use super::descriptor::ParameterMap;
use super::error::ResourceError;

/// Extract the placeholder names from a template, in order of appearance.
///
/// Only well-formed `{name}` tokens are returned; an unclosed brace is
/// treated as literal text. Repeated placeholders are reported once.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !name.is_empty() && !found.contains(&name) {
                    found.push(name);
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    found
}

/// Substitute every placeholder in `template` with its supplied value.
///
/// Fails with [`ResourceError::MissingParameter`] naming the first
/// placeholder that has no entry in `parameters`. The result contains no
/// remaining placeholder tokens.
pub fn substitute(template: &str, parameters: &ParameterMap) -> Result<String, ResourceError> {
    let mut result = template.to_string();

    for name in placeholders(template) {
        let value = parameters
            .get(name)
            .ok_or_else(|| ResourceError::missing_parameter(name))?;
        result = result.replace(&format!("{{{name}}}"), value);
    }

    Ok(result)
}

/// Match a concrete URI against a template, recovering parameter values.
///
/// This is the inverse of [`substitute`]: the literal segments of the
/// template must appear in `uri` in order, and the text between them is
/// captured as the placeholder values. Values never span a literal
/// boundary; a placeholder match is the shortest text up to the next
/// literal segment. Returns `None` if the URI does not fit the template or
/// a captured value is empty.
pub fn match_uri(template: &str, uri: &str) -> Option<ParameterMap> {
    let mut params = ParameterMap::new();
    let mut remaining_template = template;
    let mut remaining_uri = uri;

    loop {
        match remaining_template.find('{') {
            None => {
                // No placeholders left: the tails must match exactly.
                return (remaining_template == remaining_uri).then_some(params);
            }
            Some(open) => {
                let literal = &remaining_template[..open];
                remaining_uri = remaining_uri.strip_prefix(literal)?;

                let after = &remaining_template[open + 1..];
                let close = after.find('}')?;
                let name = &after[..close];
                remaining_template = &after[close + 1..];

                // Capture up to the next literal character of the template,
                // or the rest of the URI if the template ends here.
                let value = match remaining_template.chars().next() {
                    None => {
                        let value = remaining_uri;
                        remaining_uri = "";
                        value
                    }
                    Some(delimiter) => {
                        let end = remaining_uri.find(delimiter)?;
                        let value = &remaining_uri[..end];
                        remaining_uri = &remaining_uri[end..];
                        value
                    }
                };

                if value.is_empty() {
                    return None;
                }
                params.insert(name.to_string(), value.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            placeholders("config://{section}/{key}"),
            vec!["section", "key"]
        );
        assert_eq!(placeholders("https://example.com/"), Vec::<&str>::new());
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        assert_eq!(placeholders("//broken/{client"), Vec::<&str>::new());
    }

    #[test]
    fn test_substitute_sample_data() {
        let result = substitute("//sampledata/{client}/", &params(&[("client", "acme")])).unwrap();
        assert_eq!(result, "//sampledata/acme/");
    }

    #[test]
    fn test_substitute_missing_parameter_named() {
        let err = substitute("//sampledata/{client}/", &ParameterMap::new()).unwrap_err();
        match err {
            ResourceError::MissingParameter { parameter } => assert_eq!(parameter, "client"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        let result = substitute("{a}/{b}/{a}", &params(&[("a", "x"), ("b", "y")])).unwrap();
        assert_eq!(result, "x/y/x");
    }

    #[test]
    fn test_substitute_ignores_extra_parameters() {
        let result = substitute(
            "https://example.com/{id}",
            &params(&[("id", "7"), ("unused", "ok")]),
        )
        .unwrap();
        assert_eq!(result, "https://example.com/7");
    }

    #[test]
    fn test_match_uri_recovers_parameters() {
        let matched = match_uri("//sampledata/{client}/", "//sampledata/acme/").unwrap();
        assert_eq!(matched, params(&[("client", "acme")]));
    }

    #[test]
    fn test_match_uri_two_placeholders() {
        let matched = match_uri("config://{section}/{key}", "config://server/name").unwrap();
        assert_eq!(matched, params(&[("section", "server"), ("key", "name")]));
    }

    #[test]
    fn test_match_uri_rejects_mismatch() {
        assert!(match_uri("//sampledata/{client}/", "//otherdata/acme/").is_none());
        assert!(match_uri("//sampledata/{client}/", "//sampledata//").is_none());
        assert!(match_uri("https://example.com/", "https://example.org/").is_none());
    }

    #[test]
    fn test_match_uri_round_trip() {
        let template = "https://example.com/data/{client}/report.csv";
        let supplied = params(&[("client", "globex")]);
        let uri = substitute(template, &supplied).unwrap();
        assert_eq!(match_uri(template, &uri).unwrap(), supplied);
    }
}
