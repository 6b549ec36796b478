use std::path::Path;

use crate::{Package, ScanError, SourceFile};

// ── Collaborator Traits ─────────────────────────────────────────────────────

/// Maps a file or directory to the import path of the package it belongs to.
pub trait PackagePathResolver {
    fn resolve(&self, path: &Path, is_dir: bool) -> Result<String, ScanError>;
}

/// Produces syntax trees from source on disk.
pub trait SyntaxTreeProvider {
    /// Parse a single file. Malformed source yields `ScanError::Syntax`.
    fn parse_file(&self, path: &Path) -> Result<SourceFile, ScanError>;

    /// Parse every source file of a directory, grouped into packages.
    ///
    /// Fails on the first malformed file; no partial result is returned.
    fn parse_dir(&self, dir: &Path) -> Result<Vec<Package>, ScanError>;
}

impl<T: PackagePathResolver + ?Sized> PackagePathResolver for &T {
    fn resolve(&self, path: &Path, is_dir: bool) -> Result<String, ScanError> {
        (**self).resolve(path, is_dir)
    }
}

impl<T: SyntaxTreeProvider + ?Sized> SyntaxTreeProvider for &T {
    fn parse_file(&self, path: &Path) -> Result<SourceFile, ScanError> {
        (**self).parse_file(path)
    }

    fn parse_dir(&self, dir: &Path) -> Result<Vec<Package>, ScanError> {
        (**self).parse_dir(dir)
    }
}
