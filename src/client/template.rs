//! Endpoint URL construction.
//!
//! Endpoint templates carry `{placeholder}` segments. Values are
//! percent-encoded before substitution (a space becomes `%20`, a plus
//! becomes `%2B`), and query parameters are appended in declared order.

use url::{form_urlencoded, Url};

use super::CallError;
use crate::scenario::PathVars;

/// Percent-encode one path segment or query component.
pub fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Substitute path variables into `template`.
///
/// Positional values fill placeholders left to right; named values are
/// matched on the placeholder name.
pub fn expand(template: &str, vars: PathVars) -> Result<String, CallError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut position = 0;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| CallError::InvalidUrl(format!("unclosed placeholder in {template}")))?;
        let name = &after[..close];

        let value = match vars {
            PathVars::None => None,
            PathVars::Positional(values) => values.get(position).copied(),
            PathVars::Named(pairs) => pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v),
        }
        .ok_or_else(|| CallError::MissingPathVariable(name.to_string()))?;

        out.push_str(&encode_component(value));
        position += 1;
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Expand `template` and append `query` to whatever query it already has.
pub fn build_url(
    template: &str,
    vars: PathVars,
    query: &[(&str, &str)],
) -> Result<Url, CallError> {
    let expanded = expand(template, vars)?;
    let mut url =
        Url::parse(&expanded).map_err(|e| CallError::InvalidUrl(format!("{expanded}: {e}")))?;

    if !query.is_empty() {
        let encoded = query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        let combined = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
            _ => encoded,
        };
        url.set_query(Some(&combined));
    }

    Ok(url)
}
