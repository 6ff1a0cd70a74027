use std::fmt;
use std::str::FromStr;

use string_match::{is_match, Candidates};
use tracing::instrument;
use validator::validate_email;

use super::EmailError;

/// An email address.
///
/// The wrapped string is kept exactly as it was given. [Email::new] stores it
/// unchecked, [Email::parse] normalizes and validates it first. Nothing mutates
/// the value afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    /// Wraps `value` verbatim. No normalization, no validation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Trims and lowercases `s`, then checks the result is a well formed address.
    ///
    /// The error carries `s` as it was passed in.
    #[instrument(level = "trace", skip_all)]
    pub fn parse(s: &str) -> Result<Email, EmailError> {
        let normalized = Self::normalize(s);
        if Self::is_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(EmailError::InvalidFormat(s.to_string()))
        }
    }

    /// Syntax check only, the domain is never resolved.
    pub fn is_valid(s: &str) -> bool {
        validate_email(s)
    }

    pub fn normalize(s: &str) -> String {
        s.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the first `@`, or the whole value when there is none.
    pub fn user(&self) -> &str {
        self.0
            .split_once('@')
            .map_or(self.0.as_str(), |(user, _)| user)
    }

    /// Everything after the last `@`, or the whole value when there is none.
    ///
    /// With more than one `@` this does not line up with [Email::user]:
    /// `a@b@c` has user `a` and domain `c`.
    pub fn domain(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map_or(self.0.as_str(), |(_, domain)| domain)
    }

    /// Byte-for-byte comparison, case included.
    pub fn equals(&self, other: &Email) -> bool {
        self.0 == other.0
    }

    pub fn equals_any<'a, I>(&self, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Email>,
    {
        others.into_iter().any(|other| self.equals(other))
    }

    /// Masks the user part for display, the domain is left untouched.
    ///
    /// | user length | kept                        |
    /// |-------------|-----------------------------|
    /// | 0..=3       | nothing                     |
    /// | 4           | first char                  |
    /// | 5..=7       | first and last char         |
    /// | 8..         | first two and last two chars|
    ///
    /// Lengths count chars, not bytes.
    pub fn obfuscate(&self) -> String {
        let user: Vec<char> = self.user().chars().collect();
        let n = user.len();
        let masked = match n {
            0..=3 => "*".repeat(n),
            4 => format!("{}***", user[0]),
            5..=7 => format!("{}{}{}", user[0], "*".repeat(n - 2), user[n - 1]),
            _ => {
                let head: String = user[..2].iter().collect();
                let tail: String = user[n - 2..].iter().collect();
                format!("{}{}{}", head, "*".repeat(n - 4), tail)
            }
        };
        format!("{}@{}", masked, self.domain())
    }

    /// Compares [Email::domain] against one or many candidates, exactly as
    /// [string_match::is_match] does.
    pub fn match_domain<C: Candidates>(&self, candidates: C) -> bool {
        is_match(self.domain(), candidates)
    }

    /// Compares [Email::user] against one or many candidates, exactly as
    /// [string_match::is_match] does.
    pub fn match_user<C: Candidates>(&self, candidates: C) -> bool {
        is_match(self.user(), candidates)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
