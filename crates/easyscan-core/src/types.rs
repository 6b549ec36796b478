use serde::{Deserialize, Serialize};

/// Prefix that marks a doc-comment line as an easyjson directive.
pub const DIRECTIVE_PREFIX: &str = "easyjson:";

// ── Scan Output ─────────────────────────────────────────────────────────────

/// One type selected for code generation.
///
/// `tags` is `Some` when the declaration group carried a directive (possibly
/// with an empty tag list) and `None` when the type was picked up only by the
/// include-all policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMatch {
    pub name: String,
    pub tags: Option<Vec<String>>,
}

impl TypeMatch {
    pub fn new(name: impl Into<String>, tags: Option<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            tags,
        }
    }

    /// Whether the directive carried the given tag verbatim.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Result of scanning a file or a package directory.
///
/// `matches` is in declaration order; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Import path the scanned file or directory resolves to.
    pub package_path: String,
    /// Declared package name of the last file visited.
    pub package_name: String,
    pub matches: Vec<TypeMatch>,
    /// Include-all policy the scan ran with.
    pub all_structs: bool,
}

impl ScanResult {
    pub fn new(package_path: impl Into<String>, all_structs: bool) -> Self {
        Self {
            package_path: package_path.into(),
            package_name: String::new(),
            matches: Vec::new(),
            all_structs,
        }
    }

    /// Names of all matched types, in order.
    pub fn type_names(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&TypeMatch> {
        self.matches.iter().find(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
