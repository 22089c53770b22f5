// src/core/mod.rs
//! Call-dependency analysis pipeline: graph extraction, per-class
//! aggregation and recursion-route enumeration over a bound corpus.

mod call_graph;
mod class_map;
mod corpus;
mod cycles;
mod symbol;
mod symbol_cache;

pub use call_graph::{BuildStats, CallGraphBuilder, CallRetargetMap, MethodCallGraph};
pub use class_map::{ClassAggregator, ClassDependencyMap};
pub use corpus::{
    BoundCorpus, CallExpr, Callee, ClassDecl, Corpus, DeclId, MethodDecl, Resolver, SourceUnit,
};
pub use cycles::{CycleEnumerator, RecursionRoute, SearchLimits};
pub use symbol::{Symbol, SymbolId, SymbolKind, SymbolTable};
pub use symbol_cache::SymbolIdentityCache;
