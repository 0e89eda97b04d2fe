//! Hierarchical inspection classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered group labels, e.g. `["Java", "Probable bugs"]`.
///
/// Equality and ordering are structural over the segments (lexicographic, like
/// tuples). Labels keep their original case and punctuation.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub(crate) fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }
}

/// Renders as `Java/Probable bugs`.
impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Parses the `/`-separated form, trimming each segment.
impl FromStr for CategoryPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::new(s.split('/').map(str::trim)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let java = CategoryPath::new(["Java"]);
        let java_bugs = CategoryPath::new(["Java", "Probable bugs"]);
        let java_style = CategoryPath::new(["Java", "Code style issues"]);
        let js = CategoryPath::new(["JavaScript"]);

        let mut paths = vec![js.clone(), java_bugs.clone(), java.clone(), java_style.clone()];
        paths.sort();
        assert_eq!(paths, vec![java, java_style, java_bugs, js]);
    }

    #[test]
    fn text_form() {
        let path: CategoryPath = " Java / Probable bugs ".parse().unwrap();
        assert_eq!(path, CategoryPath::new(["Java", "Probable bugs"]));
        assert_eq!(path.to_string(), "Java/Probable bugs");
        assert!("".parse::<CategoryPath>().unwrap().is_empty());
    }

    #[test]
    fn serializes_as_array() {
        let path = CategoryPath::new(["Java", "Probable bugs"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["Java","Probable bugs"]"#);
    }
}
