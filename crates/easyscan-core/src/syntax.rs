//! Syntax model walked by the declaration visitor.
//!
//! This is a deliberately small view of a Go source tree: only the node kinds
//! that matter for classifying type declarations are represented, everything
//! else collapses into an "other" variant. Providers build it; the visitor
//! never looks past it.

use std::path::PathBuf;

/// Root handed to the visitor: either one file or one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    Package(Package),
    File(SourceFile),
}

/// All files of one directory sharing a package clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub files: Vec<SourceFile>,
}

/// One parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub package_name: String,
    pub decls: Vec<Decl>,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Group(DeclGroup),
    /// Function or method declaration.
    Func,
}

/// Keyword introducing a declaration group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKeyword {
    Type,
    Var,
    Const,
    Import,
}

impl GroupKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKeyword::Type => "type",
            GroupKeyword::Var => "var",
            GroupKeyword::Const => "const",
            GroupKeyword::Import => "import",
        }
    }
}

impl std::fmt::Display for GroupKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `type`/`var`/`const`/`import` declaration, parenthesized or not.
///
/// `doc` is the normalized text of the lead comment attached to the whole
/// group, not to individual specs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclGroup {
    pub keyword: GroupKeyword,
    pub doc: Option<String>,
    pub specs: Vec<Spec>,
}

/// One entry inside a declaration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Type(TypeSpec),
    /// `var`/`const` value spec or import spec.
    Other,
}

/// `Name [TypeParams] Type` or `Name = Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub body: TypeExpr,
}

/// Right-hand side of a type spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Struct,
    /// Anything else, labelled with the grammar's node kind.
    Other { kind: String },
}

impl TypeExpr {
    pub fn is_struct(&self) -> bool {
        matches!(self, TypeExpr::Struct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_detection() {
        assert!(TypeExpr::Struct.is_struct());
        assert!(!TypeExpr::Other {
            kind: "type_identifier".into()
        }
        .is_struct());
    }

    #[test]
    fn keyword_displays_as_go_keyword() {
        assert_eq!(GroupKeyword::Type.to_string(), "type");
        assert_eq!(GroupKeyword::Import.to_string(), "import");
    }
}
