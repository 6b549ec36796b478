//! easyscan-index: Finds Go types marked for easyjson code generation.
//!
//! Parses Go sources with tree-sitter, walks their type declarations, and
//! collects the types selected either by an `easyjson:` doc-comment directive
//! or by the include-all policy.
//!
//! # Architecture
//!
//! - **tags** — Directive extraction from doc-comment text
//! - **visitor** — Declaration walk deciding which types are selected
//! - **go** — Tree-sitter Go provider building the syntax model
//! - **resolver** — File/directory to Go import path resolution
//! - **scanner** — Orchestrator tying resolution, parsing, and the walk together

pub mod go;
pub mod resolver;
pub mod scanner;
pub mod tags;
pub mod visitor;

pub use go::GoSyntaxProvider;
pub use resolver::GoPackageResolver;
pub use scanner::{scan, Scanner};
pub use tags::{extract_tags, extract_tags_with_prefix};
pub use visitor::{DeclarationVisitor, Node, Walk};
