//! Scan orchestrator.
//!
//! Resolves the package path, obtains syntax trees, and runs one
//! [`DeclarationVisitor`] per tree over a shared [`ScanResult`].

use crate::go::GoSyntaxProvider;
use crate::resolver::GoPackageResolver;
use crate::visitor::DeclarationVisitor;
use easyscan_core::{PackagePathResolver, ScanError, ScanResult, SyntaxTree, SyntaxTreeProvider};
use std::path::Path;

/// Finds types selected for code generation in a file or package directory.
pub struct Scanner<R = GoPackageResolver, P = GoSyntaxProvider> {
    resolver: R,
    provider: P,
}

impl Scanner {
    /// Scanner using `go.mod`/GOPATH resolution and the tree-sitter Go parser.
    pub fn new() -> Self {
        Self {
            resolver: GoPackageResolver::new(),
            provider: GoSyntaxProvider::new(),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PackagePathResolver, P: SyntaxTreeProvider> Scanner<R, P> {
    pub fn with_collaborators(resolver: R, provider: P) -> Self {
        Self { resolver, provider }
    }

    /// Scan `path` (a directory when `is_dir`) and collect selected types.
    ///
    /// Resolution and parse failures abort the whole scan; nothing partial is
    /// returned.
    pub fn scan(
        &self,
        path: &Path,
        is_dir: bool,
        all_structs: bool,
    ) -> Result<ScanResult, ScanError> {
        let package_path = self.resolver.resolve(path, is_dir)?;

        let trees: Vec<SyntaxTree> = if is_dir {
            self.provider
                .parse_dir(path)?
                .into_iter()
                .map(SyntaxTree::Package)
                .collect()
        } else {
            vec![SyntaxTree::File(self.provider.parse_file(path)?)]
        };

        let mut result = ScanResult::new(package_path, all_structs);
        for tree in &trees {
            DeclarationVisitor::new(&mut result).walk_tree(tree);
        }

        tracing::info!(
            "Scanned {}: package {} ({}), {} type(s) selected",
            path.display(),
            result.package_name,
            result.package_path,
            result.matches.len(),
        );

        Ok(result)
    }
}

/// Scan with the default Go resolver and parser.
pub fn scan(path: &Path, is_dir: bool, all_structs: bool) -> Result<ScanResult, ScanError> {
    Scanner::new().scan(path, is_dir, all_structs)
}
