//! callscope - call-dependency analysis over a semantically bound corpus.
//!
//! The pipeline is strictly staged: an external [`Resolver`] binds source to
//! symbols, [`CallGraphBuilder`] extracts the method call graph,
//! [`ClassAggregator`] groups it by declaring class, and
//! [`CycleEnumerator`] / [`DotRenderer`] answer queries over the finished
//! graph. Parsing, project discovery, file I/O and CLI concerns live in the
//! embedding application, not here.

pub mod core;
mod error;
pub mod render;

pub use crate::core::{
    BoundCorpus, BuildStats, CallExpr, CallGraphBuilder, CallRetargetMap, Callee, ClassAggregator,
    ClassDecl, ClassDependencyMap, Corpus, CycleEnumerator, DeclId, MethodCallGraph, MethodDecl,
    RecursionRoute, Resolver, SearchLimits, SourceUnit, Symbol, SymbolId, SymbolIdentityCache,
    SymbolKind, SymbolTable,
};
pub use error::{CallscopeError, Result};
pub use render::{DotRenderer, SymbolAnnotator};
