// src/core/call_graph.rs - Method call graph extraction
use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::corpus::{BoundCorpus, CallExpr, Callee};
use super::symbol::{SymbolId, SymbolKind, SymbolTable};
use super::symbol_cache::SymbolIdentityCache;

/// Mapping from a declared method to the distinct symbols it invokes.
///
/// Key order is first-declaration order, edge order is first-call-site order,
/// so iterating the graph reproduces source traversal order exactly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MethodCallGraph {
    edges: IndexMap<SymbolId, Vec<SymbolId>>,
}

impl MethodCallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `method` has an entry, creating an empty one if needed.
    /// Re-adding an existing method (a partial class fragment) keeps the
    /// entry already collected.
    pub fn add_method(&mut self, method: SymbolId) {
        self.edges.entry(method).or_default();
    }

    /// Record one `from -> to` call edge. Duplicate targets of the same
    /// method are suppressed; the first occurrence fixes the position.
    /// Returns whether the edge was new.
    pub fn add_edge(&mut self, from: SymbolId, to: SymbolId) -> bool {
        let targets = self.edges.entry(from).or_default();
        if targets.contains(&to) {
            return false;
        }
        targets.push(to);
        true
    }

    pub fn contains_method(&self, method: SymbolId) -> bool {
        self.edges.contains_key(&method)
    }

    /// The distinct targets `method` invokes, in first-occurrence order.
    pub fn dependencies(&self, method: SymbolId) -> Option<&[SymbolId]> {
        self.edges.get(&method).map(Vec::as_slice)
    }

    pub fn methods(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.edges.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &[SymbolId])> {
        self.edges.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total edge count across all methods.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Counters collected while building a call graph. Diagnostics only - the
/// graph itself is unaffected by what was skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Methods that produced a graph entry.
    pub methods_declared: usize,
    /// Method declarations the Resolver could not bind (skipped).
    pub methods_skipped: usize,
    /// Distinct edges recorded.
    pub edges_added: usize,
    /// Call sites that resolved through no strategy (dropped).
    pub calls_unresolved: usize,
}

/// Optional, externally supplied interface-to-implementation mapping.
///
/// Keys are `Interface.member` qualified names. When a call resolves to a
/// method declared by an interface and the map holds its qualified name, the
/// edge targets the mapped concrete method instead of the abstract one.
/// Without a map, interface calls keep the abstract declaration - precise
/// virtual-dispatch resolution is out of scope.
#[derive(Debug, Clone, Default)]
pub struct CallRetargetMap {
    targets: HashMap<String, SymbolId>,
}

impl CallRetargetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, qualified_name: impl Into<String>, concrete: SymbolId) {
        self.targets.insert(qualified_name.into(), concrete);
    }

    fn retarget(&self, symbols: &SymbolTable, target: SymbolId) -> SymbolId {
        let sym = symbols.get(target);
        if sym.kind != SymbolKind::Method {
            return target;
        }
        let declared_by_interface = sym
            .containing_type
            .map(|t| symbols.get(t).kind == SymbolKind::Interface)
            .unwrap_or(false);
        if !declared_by_interface {
            return target;
        }
        let owner = match sym.containing_type {
            Some(t) => &symbols.get(t).name,
            None => return target,
        };
        let qualified = format!("{}.{}", owner, sym.name);
        self.targets.get(&qualified).copied().unwrap_or(target)
    }
}

/// Builds a [`MethodCallGraph`] from a bound corpus.
///
/// Call targets resolve through three strategies, in order: direct semantic
/// resolution, the receiver probe for member accesses on simple identifiers,
/// and the short-name identity cache. A call all three miss is dropped
/// silently (counted in [`BuildStats`]). A single declaration the Resolver
/// cannot bind is skipped; only a whole-corpus bind failure is fatal, and
/// that is the Resolver's to report.
pub struct CallGraphBuilder<'a> {
    cache: Option<&'a SymbolIdentityCache>,
    retarget: Option<&'a CallRetargetMap>,
}

impl<'a> CallGraphBuilder<'a> {
    pub fn new() -> Self {
        Self {
            cache: None,
            retarget: None,
        }
    }

    /// Enable the short-name fallback against a previously populated cache.
    pub fn with_identity_cache(mut self, cache: &'a SymbolIdentityCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enable interface-call retargeting through an external name mapping.
    pub fn with_retarget_map(mut self, map: &'a CallRetargetMap) -> Self {
        self.retarget = Some(map);
        self
    }

    /// Walk every class fragment and method in source order and collect the
    /// call edges.
    pub fn build(&self, corpus: &dyn BoundCorpus) -> (MethodCallGraph, BuildStats) {
        let mut graph = MethodCallGraph::new();
        let mut stats = BuildStats::default();

        for class in corpus.classes() {
            for method in &class.methods {
                let Some(method_symbol) = corpus.resolve_declaration(method) else {
                    debug!(class = %class.name, method = %method.name, "undeclarable method, skipping");
                    stats.methods_skipped += 1;
                    continue;
                };
                if !graph.contains_method(method_symbol) {
                    stats.methods_declared += 1;
                }
                graph.add_method(method_symbol);

                for call in &method.calls {
                    match self.resolve_call(corpus, call) {
                        Some(target) => {
                            if graph.add_edge(method_symbol, target) {
                                stats.edges_added += 1;
                            }
                        }
                        None => {
                            debug!(
                                method = %method.name,
                                callee = %call.short_name(),
                                "unresolved call site, no edge emitted"
                            );
                            stats.calls_unresolved += 1;
                        }
                    }
                }
            }
        }

        info!(
            methods = stats.methods_declared,
            edges = stats.edges_added,
            unresolved = stats.calls_unresolved,
            "call graph built"
        );
        (graph, stats)
    }

    fn resolve_call(&self, corpus: &dyn BoundCorpus, call: &CallExpr) -> Option<SymbolId> {
        if let Some(target) = corpus.resolve_invocation(call) {
            return Some(self.apply_retarget(corpus.symbols(), target));
        }

        // Receiver probe: resolve the receiver identifier on its own, then
        // look the member up on the receiver's type.
        if let Callee::MemberAccess { receiver, member } = &call.callee {
            if let Some(target) = self.probe_member(corpus, receiver, member) {
                return Some(self.apply_retarget(corpus.symbols(), target));
            }
        }

        self.cache
            .and_then(|cache| cache.lookup(call.short_name()))
            .map(|target| self.apply_retarget(corpus.symbols(), target))
    }

    fn probe_member(
        &self,
        corpus: &dyn BoundCorpus,
        receiver: &str,
        member: &str,
    ) -> Option<SymbolId> {
        let receiver_symbol = corpus.resolve_identifier(receiver)?;
        let symbols = corpus.symbols();
        // The receiver may be the type itself (static-style call) or a
        // value whose symbol carries its declaring type.
        let receiver_type = match symbols.get(receiver_symbol).kind {
            SymbolKind::Class | SymbolKind::Interface => receiver_symbol,
            SymbolKind::Method => symbols.containing_type(receiver_symbol)?,
        };
        symbols.find_member(receiver_type, member)
    }

    fn apply_retarget(&self, symbols: &SymbolTable, target: SymbolId) -> SymbolId {
        match self.retarget {
            Some(map) => map.retarget(symbols, target),
            None => target,
        }
    }
}

impl Default for CallGraphBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
