//! # Text Rules
//!
//! String-shaped checks. Format rules (`alpha`, `regex`, `email`, `date`,
//! `base64`, `uuid`) fail non-strings; length and membership rules
//! (`min_s`, `max_s`, `within_s`) ignore them.
//!
//! `min_s`/`max_s` count bytes. `min_rune`/`max_rune` count Unicode scalar
//! values and inspect the value as given, without unwrapping optional
//! references, so an absent value fails them with "is not a string".

use std::sync::LazyLock;

use base64::Engine as _;
use docsieve_core::{Path, Value};
use regex::Regex;

use super::{check, join_list};
use crate::rule::{Outcome, Rule};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

fn is_string_where(value: &Value, f: impl FnOnce(&str) -> bool) -> bool {
    value.as_str().is_some_and(f)
}

/// Require a string made only of alphabetic characters. The empty string
/// passes.
pub fn alpha() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| is_string_where(v, |s| s.chars().all(char::is_alphabetic)),
            |last| format!("{last} may only contain letters"),
        )
    }
}

/// Compiled pattern rule. Built through [`regex`].
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    compiled: Regex,
}

impl Rule for Pattern {
    fn apply(&self, path: &Path, value: Value) -> Outcome {
        check(
            path,
            value,
            |v| is_string_where(v, |s| self.compiled.is_match(s)),
            |last| format!("{last} must match the pattern {}", self.source),
        )
    }
}

/// Require a string matched in full by `pattern`.
///
/// The pattern is anchored at both ends, so `[a-z]+` rejects `"abc1"`.
pub fn regex(pattern: &str) -> Result<Pattern, regex::Error> {
    let compiled = Regex::new(&format!("^(?:{pattern})$"))?;
    Ok(Pattern {
        source: pattern.to_string(),
        compiled,
    })
}

/// Stands in for a `regex` rule whose pattern did not compile: every value
/// fails, so a validator used outside a built schema never accepts it.
pub fn invalid_pattern(pattern: String) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        let msg = format!(
            "{} cannot be checked against the invalid pattern {pattern}",
            path.last()
        );
        Outcome::fail_at(value, path, msg)
    }
}

/// Require an address of the form `local@domain.tld`.
pub fn email() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| is_string_where(v, |s| EMAIL.is_match(s)),
            |last| format!("{last} must be a valid email address"),
        )
    }
}

/// Strict RFC 3339: an upper-case `T` separator and an upper-case `Z` for
/// UTC. chrono alone also takes a space or lower-case letters there.
fn is_rfc3339(s: &str) -> bool {
    s.as_bytes().get(10) == Some(&b'T')
        && !s.ends_with('z')
        && chrono::DateTime::parse_from_rfc3339(s).is_ok()
}

/// Require an RFC 3339 date-time string.
pub fn date() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        let message = match value.unwrap_optional() {
            Value::Absent | Value::Null => None,
            Value::String(s) => (!is_rfc3339(s)).then(|| {
                format!(
                    "{} must be a valid date-time in the RFC 3339 format",
                    path.last()
                )
            }),
            _ => Some(format!("{} must be a string representing a date", path.last())),
        };

        match message {
            Some(msg) => Outcome::fail_at(value, path, msg),
            None => Outcome::pass(value),
        }
    }
}

/// Require padded standard base64.
pub fn base64() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| {
                is_string_where(v, |s| {
                    base64::engine::general_purpose::STANDARD.decode(s).is_ok()
                })
            },
            |last| format!("{last} must be a base64 encoded string"),
        )
    }
}

/// Require a string that parses as a UUID.
pub fn uuid() -> impl Rule {
    |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| is_string_where(v, |s| uuid::Uuid::parse_str(s).is_ok()),
            |last| format!("{last} must be a valid UUID"),
        )
    }
}

/// Strings shorter than `n` bytes fail.
pub fn min_s(n: usize) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| v.as_str().map_or(true, |s| s.len() >= n),
            |last| format!("{last} must be at least {n} characters"),
        )
    }
}

/// Strings longer than `n` bytes fail.
pub fn max_s(n: usize) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| v.as_str().map_or(true, |s| s.len() <= n),
            |last| format!("{last} may not be greater than {n} characters"),
        )
    }
}

fn rune_bound(
    path: &Path,
    value: Value,
    within: impl Fn(usize) -> bool,
    too_far: impl FnOnce(&str) -> String,
) -> Outcome {
    let message = match &value {
        Value::String(s) if within(s.chars().count()) => None,
        Value::String(_) => Some(too_far(path.last())),
        _ => Some(format!("{} is not a string", path.last())),
    };

    match message {
        Some(msg) => Outcome::fail_at(value, path, msg),
        None => Outcome::pass(value),
    }
}

/// Require a string of at least `n` characters.
pub fn min_rune(n: usize) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        rune_bound(
            path,
            value,
            |count| count >= n,
            |last| format!("{last} must be at least {n} characters long"),
        )
    }
}

/// Require a string of at most `n` characters.
pub fn max_rune(n: usize) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        rune_bound(
            path,
            value,
            |count| count <= n,
            |last| format!("{last} must be at most {n} characters long"),
        )
    }
}

/// Strings must be one of `allowed`; other kinds pass.
pub fn within_s(allowed: Vec<String>) -> impl Rule {
    move |path: &Path, value: Value| -> Outcome {
        check(
            path,
            value,
            |v| v.as_str().map_or(true, |s| allowed.iter().any(|a| a == s)),
            |last| format!("{last} may only contain {}", join_list(&allowed)),
        )
    }
}
