//! Matching a subject string against one candidate or a set of candidates.
//!
//! ```
//! use string_match::is_match;
//!
//! assert!(is_match("example.com", "example.com"));
//! assert!(is_match("example.org", ["example.com", "example.org"]));
//! assert!(!is_match("Example.com", "example.com"));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Something a subject string can be matched against.
///
/// A single string matches when it is equal to the subject, a collection
/// matches when any of its members does.
pub trait Candidates {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool;
}

/// Exact, case-sensitive match. Nothing is trimmed.
pub fn is_match<C: Candidates>(subject: &str, candidates: C) -> bool {
    candidates.any(&mut |candidate| candidate == subject)
}

impl Candidates for str {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        pred(self)
    }
}

impl Candidates for String {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        pred(self.as_str())
    }
}

impl<T: Candidates + ?Sized> Candidates for &T {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        (**self).any(pred)
    }
}

impl<T: AsRef<str>> Candidates for [T] {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.iter().any(|candidate| pred(candidate.as_ref()))
    }
}

impl<T: AsRef<str>, const N: usize> Candidates for [T; N] {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.as_slice().any(pred)
    }
}

impl<T: AsRef<str>> Candidates for Vec<T> {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.as_slice().any(pred)
    }
}

impl<T: AsRef<str>, S: BuildHasher> Candidates for HashSet<T, S> {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.iter().any(|candidate| pred(candidate.as_ref()))
    }
}

impl<T: AsRef<str>> Candidates for BTreeSet<T> {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.iter().any(|candidate| pred(candidate.as_ref()))
    }
}

// `None` never matches.
impl<T: Candidates> Candidates for Option<T> {
    fn any(&self, pred: &mut dyn FnMut(&str) -> bool) -> bool {
        self.as_ref().map_or(false, |candidates| candidates.any(pred))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_candidate_must_be_equal() {
        assert!(is_match("example.com", "example.com"));
        assert!(is_match("example.com", String::from("example.com")));
        assert!(!is_match("example.com", "other.com"));
    }

    #[test]
    fn matching_is_case_sensitive_and_untrimmed() {
        assert!(!is_match("example.com", "EXAMPLE.com"));
        assert!(!is_match("example.com", " example.com"));
    }

    #[test]
    fn any_member_of_a_collection_matches() {
        let domains = vec!["example.com".to_string(), "example.org".to_string()];
        assert!(is_match("example.org", &domains));
        assert!(is_match("example.com", ["example.com", "example.org"]));
        assert!(!is_match("example.net", domains.as_slice()));

        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert!(is_match("b", &set));
        let set: BTreeSet<String> = ["a".to_string()].into_iter().collect();
        assert!(!is_match("b", set));
    }

    #[test]
    fn empty_collections_and_none_never_match() {
        let empty: [&str; 0] = [];
        assert!(!is_match("", empty));
        assert!(!is_match("", Vec::<String>::new()));
        assert!(!is_match("a", None::<&str>));
        assert!(is_match("a", Some("a")));
    }

    proptest! {
        #[test]
        fn subject_always_matches_itself(s in ".*") {
            prop_assert!(is_match(&s, s.as_str()));
            prop_assert!(is_match(&s, vec![String::from("other"), s.clone()]));
        }
    }
}
