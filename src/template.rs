//! Placeholder substitution for schema fragments.
//!
//! Fragments may reference field slots inline, e.g.
//! `"If given a chance to join {company}, ..."`.
//!
//! Only `{name}` where `name` is a known slot is replaced. Every other brace
//! (unknown names, `{}`, an unclosed `{`, JSON-like text) is kept verbatim,
//! so fragment text never fails to render.

use std::collections::HashMap;

/// Slot values available to a fragment.
pub type Slots = HashMap<String, String>;

/// Render a fragment by substituting known `{slot}` placeholders.
pub fn render(fragment: &str, slots: &Slots) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find(['{', '}']).and_then(|end| {
            if !after[end..].starts_with('}') {
                return None;
            }
            slots
                .get(after[..end].trim())
                .map(|value| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Build a slot map from key/value pairs.
pub fn slots<I, K, V>(pairs: I) -> Slots
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let result = render("I am writing to apply for the ", &Slots::new());
        assert_eq!(result, "I am writing to apply for the ");
    }

    #[test]
    fn substitutes_slots() {
        let slots = slots([("company", "Acme"), ("role", "Backend Engineer")]);
        let result = render("a {role} at {company}", &slots);
        assert_eq!(result, "a Backend Engineer at Acme");
    }

    #[test]
    fn placeholder_names_are_trimmed() {
        let slots = slots([("company", "Acme")]);
        assert_eq!(render("{ company }", &slots), "Acme");
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let slots = slots([("company", "Acme")]);
        assert_eq!(render("Dear {recruiter} at {company}", &slots), "Dear {recruiter} at Acme");
    }

    #[test]
    fn json_like_text_is_kept_verbatim() {
        let text = "Engineer fluent in C, Go and JSON ({key: value}) payloads.";
        assert_eq!(render(text, &slots([("key", "x")])), text);
    }

    #[test]
    fn stray_braces_are_kept() {
        let slots = slots([("role", "SRE")]);
        assert_eq!(render("a } b {} c", &slots), "a } b {} c");
        assert_eq!(render("Dear {name", &slots), "Dear {name");
        assert_eq!(render("{{role}}", &slots), "{SRE}");
        assert_eq!(render("{ {role}", &slots), "{ SRE");
    }

    #[test]
    fn values_with_braces_are_not_rescanned() {
        let slots = slots([("company", "{role}"), ("role", "SRE")]);
        assert_eq!(render("at {company}", &slots), "at {role}");
    }
}
