//! Declaration walk deciding which types are selected.
//!
//! The walk goes package → file → declaration group → type spec → struct
//! body. Each node kind answers with [`Walk::Descend`] or [`Walk::Skip`]:
//!
//! - a group's doc comment is run through the tag extractor; groups without a
//!   directive are pruned unless the include-all policy is on,
//! - a type spec under a directive is recorded right away, whatever its body,
//! - otherwise a struct body records its enclosing type with absent tags.

use crate::tags::extract_tags;
use easyscan_core::{
    Decl, DeclGroup, Package, ScanResult, SourceFile, Spec, SyntaxTree, TypeExpr, TypeMatch,
    TypeSpec,
};

/// Node kinds the visitor distinguishes.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Package(&'a Package),
    File(&'a SourceFile),
    Group(&'a DeclGroup),
    TypeSpec(&'a TypeSpec),
    /// Struct body of the enclosing type spec.
    Struct,
    Other,
}

/// Whether to walk into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Descend,
    Skip,
}

impl<'a> Node<'a> {
    /// Children in source order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Package(pkg) => pkg.files.iter().map(Node::File).collect(),
            Node::File(file) => file
                .decls
                .iter()
                .map(|decl| match decl {
                    Decl::Group(group) => Node::Group(group),
                    Decl::Func => Node::Other,
                })
                .collect(),
            Node::Group(group) => group
                .specs
                .iter()
                .map(|spec| match spec {
                    Spec::Type(ts) => Node::TypeSpec(ts),
                    Spec::Other => Node::Other,
                })
                .collect(),
            Node::TypeSpec(ts) => match &ts.body {
                TypeExpr::Struct => vec![Node::Struct],
                TypeExpr::Other { .. } => vec![Node::Other],
            },
            Node::Struct | Node::Other => Vec::new(),
        }
    }
}

impl<'a> From<&'a SyntaxTree> for Node<'a> {
    fn from(tree: &'a SyntaxTree) -> Self {
        match tree {
            SyntaxTree::Package(pkg) => Node::Package(pkg),
            SyntaxTree::File(file) => Node::File(file),
        }
    }
}

/// Walks one syntax tree, appending selected types to a shared result.
pub struct DeclarationVisitor<'r> {
    result: &'r mut ScanResult,
    name: String,
    tags: Option<Vec<String>>,
}

impl<'r> DeclarationVisitor<'r> {
    /// The include-all policy is read from `result.all_structs`.
    pub fn new(result: &'r mut ScanResult) -> Self {
        Self {
            result,
            name: String::new(),
            tags: None,
        }
    }

    /// Walk a whole tree.
    pub fn walk_tree(&mut self, tree: &SyntaxTree) {
        self.walk(Node::from(tree));
    }

    /// Visit `node` and, if asked to, its children depth-first.
    pub fn walk(&mut self, node: Node<'_>) {
        if self.visit(node) == Walk::Descend {
            for child in node.children() {
                self.walk(child);
            }
        }
    }

    /// Handle a single node.
    pub fn visit(&mut self, node: Node<'_>) -> Walk {
        match node {
            Node::Package(_) => Walk::Descend,
            Node::File(file) => {
                tracing::debug!("Visiting {} (package {})", file.path.display(), file.package_name);
                self.result.package_name = file.package_name.clone();
                Walk::Descend
            }
            Node::Group(group) => {
                self.tags = group.doc.as_deref().and_then(extract_tags);
                if self.tags.is_none() && !self.result.all_structs {
                    tracing::trace!("Skipping undirected {} group", group.keyword);
                    return Walk::Skip;
                }
                Walk::Descend
            }
            Node::TypeSpec(ts) => {
                self.name = ts.name.clone();
                // A directive selects the type regardless of its shape.
                if self.tags.is_some() {
                    self.record();
                    return Walk::Skip;
                }
                Walk::Descend
            }
            Node::Struct => {
                self.record();
                Walk::Skip
            }
            Node::Other => Walk::Skip,
        }
    }

    fn record(&mut self) {
        tracing::debug!("Selected type {} (tags: {:?})", self.name, self.tags);
        self.result
            .matches
            .push(TypeMatch::new(self.name.clone(), self.tags.clone()));
    }
}
