//! Citation lookup for assistant replies.
//!
//! Replies reference sources by index; the surface renders the resolved
//! titles under the finished message. The table is static for now - a real
//! deployment would resolve these against its document store.

use serde::{Deserialize, Serialize};

/// A resolved citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// The citation index as it appears in the reply body.
    pub index: u32,
    pub title: String,
    pub url: String,
}

/// Resolves citation indices to display entries.
///
/// Unknown indices degrade to a generic `Source {n}` entry rather than being
/// dropped, so a body's superscript markers always have a matching row.
pub fn source_refs(indices: &[u32]) -> Vec<SourceRef> {
    indices
        .iter()
        .map(|&index| {
            let (title, url) = match index {
                1 => ("Company Policy Handbook - Vacation Days", "#"),
                2 => ("HR Portal - Employee Benefits Guide", "#"),
                3 => ("Job Description Template Library", "#"),
                4 => ("Performance Review Best Practices Guide", "#"),
                5 => ("Onboarding Process Documentation", "#"),
                6 => ("HR Framework Library - Review Templates", "#"),
                _ => {
                    return SourceRef {
                        index,
                        title: format!("Source {index}"),
                        url: "#".to_string(),
                    };
                }
            };
            SourceRef {
                index,
                title: title.to_string(),
                url: url.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_indices_resolve() {
        let refs = source_refs(&[4, 6]);
        assert_eq!(refs[0].title, "Performance Review Best Practices Guide");
        assert_eq!(refs[1].title, "HR Framework Library - Review Templates");
    }

    #[test]
    fn test_unknown_index_falls_back() {
        let refs = source_refs(&[42]);
        assert_eq!(refs[0].title, "Source 42");
        assert_eq!(refs[0].url, "#");
    }

    #[test]
    fn test_order_preserved() {
        let refs = source_refs(&[2, 1]);
        assert_eq!(refs[0].index, 2);
        assert_eq!(refs[1].index, 1);
    }
}
