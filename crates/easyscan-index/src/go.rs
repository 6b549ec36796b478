//! Go syntax provider using tree-sitter-go.
//!
//! Converts the tree-sitter concrete syntax tree into the small syntax model
//! from `easyscan-core`. Doc comments are attached to declaration groups the
//! way the Go toolchain does it: the last comment group ending on the line
//! right above the declaration, normalized like `CommentGroup.Text()`.

use easyscan_core::{
    Decl, DeclGroup, GroupKeyword, Package, ScanError, SourceFile, Spec, SyntaxTreeProvider,
    TypeExpr, TypeSpec, DIRECTIVE_PREFIX,
};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// Tree-sitter backed provider for Go sources.
pub struct GoSyntaxProvider;

impl GoSyntaxProvider {
    pub fn new() -> Self {
        Self
    }

    /// Parse in-memory source. `path` is only used for diagnostics.
    pub fn parse_source(&self, path: &Path, source: &[u8]) -> Result<SourceFile, ScanError> {
        let tree = parse_tree(source)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(syntax_error_at(path, first_error(root).unwrap_or(root), source));
        }

        let package_name = package_name(root, source).ok_or_else(|| ScanError::Syntax {
            file: path.to_path_buf(),
            line: 1,
            column: 1,
            message: "expected 'package' clause".to_string(),
        })?;

        let mut decls = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if let Some(decl) = convert_decl(child, source) {
                decls.push(decl);
            }
        }

        Ok(SourceFile {
            path: path.to_path_buf(),
            package_name,
            decls,
        })
    }

    /// `.go` files directly inside `dir`, sorted by file name.
    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| {
                let message = err.to_string();
                ScanError::Io(
                    err.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other(message)),
                )
            })?;

            // Follows symlinks, unlike the entry's own file type.
            if !entry.path().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("go") {
                continue;
            }
            files.push(entry.into_path());
        }
        Ok(files)
    }
}

impl Default for GoSyntaxProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTreeProvider for GoSyntaxProvider {
    fn parse_file(&self, path: &Path) -> Result<SourceFile, ScanError> {
        let content = std::fs::read(path)?;
        self.parse_source(path, &content)
    }

    fn parse_dir(&self, dir: &Path) -> Result<Vec<Package>, ScanError> {
        let mut packages: Vec<Package> = Vec::new();
        for path in self.source_files(dir)? {
            let file = self.parse_file(&path)?;
            match packages.iter_mut().find(|p| p.name == file.package_name) {
                Some(pkg) => pkg.files.push(file),
                None => packages.push(Package {
                    name: file.package_name.clone(),
                    files: vec![file],
                }),
            }
        }
        tracing::debug!(
            "Parsed {}: {} package(s), {} file(s)",
            dir.display(),
            packages.len(),
            packages.iter().map(|p| p.files.len()).sum::<usize>()
        );
        Ok(packages)
    }
}

// ── Tree Conversion ───────────────────────────────────────────────────────

fn parse_tree(source: &[u8]) -> Result<Tree, ScanError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ScanError::Language(e.to_string()))?;
    parser
        .parse(source, None)
        .ok_or_else(|| ScanError::Language("tree-sitter returned no tree".to_string()))
}

fn package_name(root: Node, source: &[u8]) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .children(&mut cursor)
        .find(|n| n.kind() == "package_clause")?;
    let mut cursor = clause.walk();
    let ident = clause
        .children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")?;
    Some(node_text(ident, source))
}

fn convert_decl(node: Node, source: &[u8]) -> Option<Decl> {
    let keyword = match node.kind() {
        "type_declaration" => GroupKeyword::Type,
        "var_declaration" => GroupKeyword::Var,
        "const_declaration" => GroupKeyword::Const,
        "import_declaration" => GroupKeyword::Import,
        "function_declaration" | "method_declaration" => return Some(Decl::Func),
        _ => return None,
    };

    let mut specs = Vec::new();
    collect_specs(node, source, &mut specs);

    Some(Decl::Group(DeclGroup {
        keyword,
        doc: lead_comment(node, source),
        specs,
    }))
}

fn collect_specs(node: Node, source: &[u8], specs: &mut Vec<Spec>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "type_spec" | "type_alias" => {
                if let Some(ts) = convert_type_spec(child, source) {
                    specs.push(Spec::Type(ts));
                }
            }
            "var_spec" | "const_spec" | "import_spec" => specs.push(Spec::Other),
            // Parenthesized var and import groups wrap their specs in a list node.
            "var_spec_list" | "import_spec_list" => collect_specs(child, source, specs),
            _ => {}
        }
    }
}

fn convert_type_spec(spec: Node, source: &[u8]) -> Option<TypeSpec> {
    let name = node_text(spec.child_by_field_name("name")?, source);
    let type_node = spec.child_by_field_name("type")?;
    let body = match type_node.kind() {
        "struct_type" => TypeExpr::Struct,
        other => TypeExpr::Other {
            kind: other.to_string(),
        },
    };
    Some(TypeSpec { name, body })
}

// ── Doc Comments ──────────────────────────────────────────────────────────

/// Normalized text of the comment group leading `decl`, if any.
fn lead_comment(decl: Node, source: &[u8]) -> Option<String> {
    let mut comments = Vec::new();
    let mut next_row = decl.start_position().row;
    let mut prev = decl.prev_sibling();

    while let Some(sibling) = prev {
        if sibling.kind() != "comment" {
            break;
        }
        let end_row = sibling.end_position().row;
        let adjacent = if comments.is_empty() {
            end_row + 1 == next_row
        } else {
            end_row + 1 >= next_row
        };
        if !adjacent || trails_code(sibling) {
            break;
        }
        comments.push(node_text(sibling, source));
        next_row = sibling.start_position().row;
        prev = sibling.prev_sibling();
    }

    if comments.is_empty() {
        return None;
    }
    comments.reverse();
    let refs: Vec<&str> = comments.iter().map(String::as_str).collect();
    Some(comment_text(&refs))
}

/// Whether `comment` sits on the same line as the code before it.
fn trails_code(comment: Node) -> bool {
    let row = comment.start_position().row;
    let mut prev = comment.prev_sibling();
    while let Some(sibling) = prev {
        match sibling.kind() {
            "comment" => prev = sibling.prev_sibling(),
            "\n" => return false,
            _ => return sibling.end_position().row == row,
        }
    }
    false
}

/// Text of a comment group with markers removed.
///
/// Mirrors Go's `CommentGroup.Text`: a single space after `//` is dropped,
/// tool directives written without a space (`//go:generate`, `//line ...`)
/// are removed, trailing whitespace is trimmed, leading blank lines are
/// dropped and blank runs collapse to one. Non-empty results end in `\n`.
///
/// `//easyjson:...` lines look like tool directives but are kept.
pub fn comment_text(comments: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for &comment in comments {
        let body = if let Some(rest) = comment.strip_prefix("//") {
            if let Some(rest) = rest.strip_prefix(' ') {
                rest
            } else if is_directive(rest) && !rest.starts_with(DIRECTIVE_PREFIX) {
                continue;
            } else {
                rest
            }
        } else if let Some(rest) = comment.strip_prefix("/*") {
            rest.strip_suffix("*/").unwrap_or(rest)
        } else {
            comment
        };

        for line in body.split('\n') {
            lines.push(line.trim_end_matches([' ', '\t', '\n', '\r']));
        }
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    for line in lines {
        if !line.is_empty() || out.last().is_some_and(|l| !l.is_empty()) {
            out.push(line);
        }
    }
    if out.last().is_some_and(|l| !l.is_empty()) {
        out.push("");
    }
    out.join("\n")
}

/// `line `, `extern `, `export ` or `[a-z0-9]+:[a-z0-9]`, with `//` already removed.
fn is_directive(c: &str) -> bool {
    if c.starts_with("line ") || c.starts_with("extern ") || c.starts_with("export ") {
        return true;
    }
    let bytes = c.as_bytes();
    let colon = match c.find(':') {
        Some(i) if i > 0 && i + 1 < bytes.len() => i,
        _ => return false,
    };
    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != colon)
        .all(|(_, b)| b.is_ascii_lowercase() || b.is_ascii_digit())
}

// ── Helper Functions ──────────────────────────────────────────────────────

fn node_text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn syntax_error_at(path: &Path, node: Node, source: &[u8]) -> ScanError {
    let pos = node.start_position();
    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let text = node_text(node, source);
        let snippet = text.lines().next().unwrap_or("").trim();
        if snippet.is_empty() {
            "syntax error".to_string()
        } else {
            format!("syntax error near `{}`", truncate(snippet, 40))
        }
    };
    ScanError::Syntax {
        file: path.to_path_buf(),
        line: pos.row + 1,
        column: pos.column + 1,
        message,
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
