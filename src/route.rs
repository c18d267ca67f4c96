use crate::model::RouteArgument;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{(.*?)\}").unwrap();
}

/// Extracts every `{name}` placeholder of `route`, left to right.
///
/// Duplicates are kept. An empty `{}` has no name and is skipped.
pub fn extract_route_arguments(route: &str) -> Vec<RouteArgument> {
    PLACEHOLDER_RE
        .captures_iter(route)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
        .map(|name| RouteArgument {
            name: name.to_string(),
        })
        .collect()
}
