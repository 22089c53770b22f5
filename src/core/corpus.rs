// src/core/corpus.rs - External Resolver contract and bound syntax model
use crate::error::Result;

use super::symbol::{SymbolId, SymbolTable};

/// One source compilation unit, addressed by an opaque identifier.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub identifier: String,
    pub text: String,
}

/// The full set of source units analyzed together.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub units: Vec<SourceUnit>,
}

impl Corpus {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    /// Single-unit corpus, the common case for ad-hoc analysis.
    pub fn from_source(text: impl Into<String>) -> Self {
        Self {
            units: vec![SourceUnit {
                identifier: String::new(),
                text: text.into(),
            }],
        }
    }
}

/// Opaque syntax-node id assigned by the binder. Only meaningful to the
/// `BoundCorpus` that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

/// The callee shape of a call site, as far as the graph builder needs it.
#[derive(Debug, Clone)]
pub enum Callee {
    /// Plain invocation of a named callee: `Foo(...)`.
    Identifier(String),
    /// Member access on a simple identifier receiver: `receiver.Member(...)`.
    MemberAccess { receiver: String, member: String },
}

/// A single call expression inside a method body, in source order.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub id: DeclId,
    pub callee: Callee,
}

impl CallExpr {
    /// The short name used for the identity-cache fallback.
    pub fn short_name(&self) -> &str {
        match &self.callee {
            Callee::Identifier(name) => name,
            Callee::MemberAccess { member, .. } => member,
        }
    }
}

/// A method declaration with the call sites of its body, in source order.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub id: DeclId,
    pub name: String,
    pub calls: Vec<CallExpr>,
}

/// One class declaration fragment. A partial class split across units
/// appears as several fragments resolving to the same class symbol.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub id: DeclId,
    pub name: String,
    pub methods: Vec<MethodDecl>,
}

/// A corpus after semantic binding: declarations in source order plus the
/// Resolver's symbol table and resolution operations.
///
/// Implemented by the external Resolver, not by this crate. All operations
/// are best-effort: `None` means the Resolver could not bind the node, which
/// is recoverable for single declarations and call sites.
pub trait BoundCorpus {
    /// Class declaration fragments in source traversal order.
    fn classes(&self) -> &[ClassDecl];

    /// The symbol table backing every id this corpus hands out.
    fn symbols(&self) -> &SymbolTable;

    fn resolve_class(&self, class: &ClassDecl) -> Option<SymbolId>;

    fn resolve_declaration(&self, method: &MethodDecl) -> Option<SymbolId>;

    /// Direct semantic resolution of a call expression to its target.
    fn resolve_invocation(&self, call: &CallExpr) -> Option<SymbolId>;

    /// Resolve a bare identifier in scope, e.g. a member-access receiver.
    fn resolve_identifier(&self, name: &str) -> Option<SymbolId>;
}

/// The external front end: parses and binds a corpus. A failure here is
/// fatal for the whole corpus ([`crate::CallscopeError::Bind`]).
pub trait Resolver {
    type Output: BoundCorpus;

    fn bind(&self, corpus: &Corpus) -> Result<Self::Output>;
}
