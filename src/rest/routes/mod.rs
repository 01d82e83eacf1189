//! Route handlers for the REST API.

pub mod contact;
pub mod health;
pub mod requests;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape check used by every submission endpoint: one `@`, at least one `.`
/// in the domain, no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
