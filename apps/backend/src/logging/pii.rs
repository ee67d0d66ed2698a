use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches standard email addresses.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

/// Masks every email in `input`: the first character of the local part
/// is kept, the rest becomes `***`, the domain is left intact.
pub fn redact(input: &str) -> String {
    email_regex()
        .replace_all(input, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.split_once('@') {
                Some((local, domain)) => match local.chars().next() {
                    Some(first) => format!("{first}***@{domain}"),
                    None => format!("@{domain}"),
                },
                None => full_match.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that redacts user emails when logged.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
