//! Resolves a file or directory to the Go import path of its package.
//!
//! Module mode is tried first (nearest `go.mod` upwards), then GOPATH.

use easyscan_core::{PackagePathResolver, ScanError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Import path resolver backed by `go.mod` files and `GOPATH`.
pub struct GoPackageResolver {
    gopath: Option<OsString>,
}

impl GoPackageResolver {
    /// Resolver reading `GOPATH` from the environment.
    pub fn new() -> Self {
        Self {
            gopath: std::env::var_os("GOPATH"),
        }
    }

    /// Resolver with an explicit GOPATH list (platform path-list syntax).
    pub fn with_gopath(gopath: impl Into<OsString>) -> Self {
        Self {
            gopath: Some(gopath.into()),
        }
    }

    /// GOPATH entries; `$HOME/go` when unset or empty.
    fn gopath_entries(&self) -> Vec<PathBuf> {
        match self.gopath.as_ref().filter(|g| !g.is_empty()) {
            Some(list) => std::env::split_paths(list)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => dirs::home_dir()
                .map(|home| vec![home.join("go")])
                .unwrap_or_default(),
        }
    }

    fn from_gopath(&self, dir: &Path) -> Option<String> {
        for entry in self.gopath_entries() {
            let src = entry.join("src");
            let src = std::fs::canonicalize(&src).unwrap_or(src);
            if let Ok(rel) = dir.strip_prefix(&src) {
                let import_path = slash_path(rel);
                if !import_path.is_empty() {
                    return Some(import_path);
                }
            }
        }
        None
    }
}

impl Default for GoPackageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PackagePathResolver for GoPackageResolver {
    fn resolve(&self, path: &Path, is_dir: bool) -> Result<String, ScanError> {
        let abs = std::fs::canonicalize(path)
            .map_err(|e| ScanError::path_resolution(path, e.to_string()))?;
        let dir = if is_dir {
            abs
        } else {
            abs.parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| ScanError::path_resolution(path, "file has no parent directory"))?
        };

        if let Some(import_path) = from_go_mod(&dir)? {
            tracing::debug!("Resolved {} via go.mod: {}", path.display(), import_path);
            return Ok(import_path);
        }

        if let Some(import_path) = self.from_gopath(&dir) {
            tracing::debug!("Resolved {} via GOPATH: {}", path.display(), import_path);
            return Ok(import_path);
        }

        Err(ScanError::path_resolution(
            path,
            "not inside a Go module or GOPATH",
        ))
    }
}

/// Import path from the nearest enclosing `go.mod`, if there is one.
fn from_go_mod(dir: &Path) -> Result<Option<String>, ScanError> {
    for root in dir.ancestors() {
        let go_mod = root.join("go.mod");
        if !go_mod.is_file() {
            continue;
        }
        let content = std::fs::read_to_string(&go_mod)?;
        let module = module_path(&content)
            .ok_or_else(|| ScanError::path_resolution(&go_mod, "no module directive"))?;

        let rel = dir.strip_prefix(root).unwrap_or(Path::new(""));
        let rel = slash_path(rel);
        return Ok(Some(if rel.is_empty() {
            module
        } else {
            format!("{module}/{rel}")
        }));
    }
    Ok(None)
}

/// Value of the `module` directive in go.mod content.
pub fn module_path(go_mod: &str) -> Option<String> {
    for line in go_mod.lines() {
        let line = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let Some(rest) = line.trim().strip_prefix("module") else {
            continue;
        };
        if !rest.starts_with([' ', '\t', '"', '`']) {
            continue;
        }
        let module = rest.trim().trim_matches(|c| c == '"' || c == '`');
        if !module.is_empty() {
            return Some(module.to_string());
        }
    }
    None
}

fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn module_directive_forms() {
        assert_eq!(
            module_path("module github.com/acme/app\n\ngo 1.21\n").as_deref(),
            Some("github.com/acme/app")
        );
        assert_eq!(
            module_path("// comment\nmodule \"example.com/quoted\" // trailing\n").as_deref(),
            Some("example.com/quoted")
        );
        assert_eq!(module_path("modules foo\n"), None);
        assert_eq!(module_path("go 1.21\n"), None);
    }

    #[test]
    fn resolves_directory_inside_module() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("go.mod"), "module example.com/app\n").unwrap();
        fs::create_dir_all(root.join("internal/models")).unwrap();

        let resolver = GoPackageResolver::with_gopath("");
        assert_eq!(
            resolver.resolve(&root.join("internal/models"), true).unwrap(),
            "example.com/app/internal/models"
        );
        assert_eq!(resolver.resolve(root, true).unwrap(), "example.com/app");
    }

    #[test]
    fn resolves_file_to_its_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("go.mod"), "module example.com/app\n").unwrap();
        fs::create_dir_all(root.join("api")).unwrap();
        fs::write(root.join("api/user.go"), "package api\n").unwrap();

        let resolver = GoPackageResolver::with_gopath("");
        assert_eq!(
            resolver.resolve(&root.join("api/user.go"), false).unwrap(),
            "example.com/app/api"
        );
    }

    #[test]
    fn nearest_go_mod_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("go.mod"), "module example.com/outer\n").unwrap();
        fs::create_dir_all(root.join("tools/gen")).unwrap();
        fs::write(root.join("tools/go.mod"), "module example.com/tools\n").unwrap();

        let resolver = GoPackageResolver::with_gopath("");
        assert_eq!(
            resolver.resolve(&root.join("tools/gen"), true).unwrap(),
            "example.com/tools/gen"
        );
    }

    #[test]
    fn go_mod_without_module_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("go.mod"), "go 1.21\n").unwrap();

        let err = GoPackageResolver::with_gopath("")
            .resolve(tmp.path(), true)
            .unwrap_err();
        assert!(err.is_path_resolution());
    }

    #[test]
    fn resolves_inside_gopath() {
        let tmp = tempfile::TempDir::new().unwrap();
        let pkg = tmp.path().join("src/github.com/acme/lib");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("lib.go"), "package lib\n").unwrap();

        let resolver = GoPackageResolver::with_gopath(tmp.path().as_os_str());
        assert_eq!(resolver.resolve(&pkg, true).unwrap(), "github.com/acme/lib");
        assert_eq!(
            resolver.resolve(&pkg.join("lib.go"), false).unwrap(),
            "github.com/acme/lib"
        );
    }

    #[test]
    fn outside_module_and_gopath_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let gopath = tempfile::TempDir::new().unwrap();
        let resolver = GoPackageResolver::with_gopath(gopath.path().as_os_str());
        let err = resolver.resolve(tmp.path(), true).unwrap_err();
        assert!(err.is_path_resolution(), "{err}");
    }

    #[test]
    fn missing_path_fails() {
        let resolver = GoPackageResolver::with_gopath("");
        let err = resolver
            .resolve(Path::new("/definitely/not/here.go"), false)
            .unwrap_err();
        assert!(err.is_path_resolution());
    }
}
