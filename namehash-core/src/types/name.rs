//! Label structure of domain names.
//!
//! Namehash folds whatever `split('.')` yields, empty labels included.
//! [`NameShape`] lets callers see when that happens so they can warn or reject
//! before the hash reaches a deployed contract.

use serde::Serialize;

use crate::constants::LABEL_SEPARATOR;
use crate::error::{NamehashError, Result};

/// Label structure of a domain name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NameShape {
    /// Number of labels the fold will consume (0 for the empty name)
    pub label_count: usize,
    /// Left-to-right indices of empty labels
    pub empty_labels: Vec<usize>,
}

impl NameShape {
    /// Inspects `name` without modifying it.
    pub fn of(name: &str) -> Self {
        if name.is_empty() {
            return Self {
                label_count: 0,
                empty_labels: Vec::new(),
            };
        }

        let mut label_count = 0;
        let mut empty_labels = Vec::new();
        for (i, label) in name.split(LABEL_SEPARATOR).enumerate() {
            label_count += 1;
            if label.is_empty() {
                empty_labels.push(i);
            }
        }

        Self {
            label_count,
            empty_labels,
        }
    }

    /// Returns true if every label is non-empty.
    pub fn is_well_formed(&self) -> bool {
        self.empty_labels.is_empty()
    }
}

/// Returns the shape of `name`.
pub fn inspect_name(name: &str) -> NameShape {
    NameShape::of(name)
}

/// Fails with `MalformedName` if `name` contains empty labels.
///
/// The empty name is accepted: it is the root, not a malformed name.
pub fn ensure_well_formed(name: &str) -> Result<()> {
    let shape = NameShape::of(name);
    if shape.is_well_formed() {
        Ok(())
    } else {
        Err(NamehashError::MalformedName {
            name: name.to_string(),
            positions: shape.empty_labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0, &[] ; "empty name is root")]
    #[test_case("eth", 1, &[] ; "single label")]
    #[test_case("foo.eth", 2, &[] ; "two labels")]
    #[test_case("a..b", 3, &[1] ; "consecutive dots")]
    #[test_case(".eth", 2, &[0] ; "leading dot")]
    #[test_case("eth.", 2, &[1] ; "trailing dot")]
    #[test_case(".", 2, &[0, 1] ; "lone dot")]
    fn test_shape(name: &str, count: usize, empty: &[usize]) {
        let shape = inspect_name(name);
        assert_eq!(shape.label_count, count);
        assert_eq!(shape.empty_labels, empty);
        assert_eq!(shape.is_well_formed(), empty.is_empty());
    }

    #[test]
    fn test_ensure_well_formed() {
        assert!(ensure_well_formed("").is_ok());
        assert!(ensure_well_formed("vitalik.eth").is_ok());

        match ensure_well_formed("a..b") {
            Err(NamehashError::MalformedName { name, positions }) => {
                assert_eq!(name, "a..b");
                assert_eq!(positions, vec![1]);
            }
            other => panic!("expected MalformedName, got {:?}", other),
        }
    }

    #[test]
    fn test_unicode_labels_are_counted_once() {
        let shape = inspect_name("ünïcødé.eth");
        assert_eq!(shape.label_count, 2);
        assert!(shape.is_well_formed());
    }
}
