// src/core/class_map.rs - Per-class aggregation of the call graph
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use super::call_graph::MethodCallGraph;
use super::corpus::BoundCorpus;
use super::symbol::SymbolId;
use super::symbol_cache::SymbolIdentityCache;

/// The call graph grouped by declaring class: class symbol -> (method symbol
/// -> its call edges).
///
/// Every method key is also a key of the global [`MethodCallGraph`] the map
/// was aggregated from. Partial fragments of one class merge into a single
/// entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassDependencyMap {
    classes: IndexMap<SymbolId, IndexMap<SymbolId, Vec<SymbolId>>>,
}

impl ClassDependencyMap {
    pub fn contains_class(&self, class: SymbolId) -> bool {
        self.classes.contains_key(&class)
    }

    pub fn classes(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.classes.keys().copied()
    }

    /// Methods of one class with their edges, in first-declaration order.
    pub fn methods_of(
        &self,
        class: SymbolId,
    ) -> Option<impl Iterator<Item = (SymbolId, &[SymbolId])>> {
        self.classes
            .get(&class)
            .map(|methods| methods.iter().map(|(m, deps)| (*m, deps.as_slice())))
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (SymbolId, impl Iterator<Item = (SymbolId, &[SymbolId])>)> {
        self.classes
            .iter()
            .map(|(c, methods)| (*c, methods.iter().map(|(m, deps)| (*m, deps.as_slice()))))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn merge_method(&mut self, class: SymbolId, method: SymbolId, edges: &[SymbolId]) {
        let methods = self.classes.entry(class).or_default();
        let collected = methods.entry(method).or_default();
        // Fragment union: the same method symbol seen again contributes no
        // duplicate edges.
        for edge in edges {
            if !collected.contains(edge) {
                collected.push(*edge);
            }
        }
    }
}

/// Groups a built call graph by declaring class.
pub struct ClassAggregator;

impl ClassAggregator {
    /// One-shot aggregation: build the call graph for `corpus`, then group
    /// it. Use [`ClassAggregator::aggregate`] to reuse an already-built
    /// graph.
    pub fn build_class_map(
        corpus: &dyn BoundCorpus,
        cache: &mut SymbolIdentityCache,
    ) -> ClassDependencyMap {
        let (graph, _) = super::call_graph::CallGraphBuilder::new().build(corpus);
        Self::aggregate(corpus, &graph, cache)
    }

    /// For each class fragment in source order: resolve the class symbol
    /// (skipping unresolvable fragments), register it in the identity cache,
    /// and copy the edges of every declared method that is a key of `graph`.
    pub fn aggregate(
        corpus: &dyn BoundCorpus,
        graph: &MethodCallGraph,
        cache: &mut SymbolIdentityCache,
    ) -> ClassDependencyMap {
        let mut map = ClassDependencyMap::default();

        for class in corpus.classes() {
            let Some(class_symbol) = corpus.resolve_class(class) else {
                debug!(class = %class.name, "unresolvable class fragment, skipping");
                continue;
            };
            cache.register(corpus.symbols().get(class_symbol));
            // A class with no analyzable methods still gets its entry.
            map.classes.entry(class_symbol).or_default();

            for method in &class.methods {
                let Some(method_symbol) = corpus.resolve_declaration(method) else {
                    continue;
                };
                let Some(edges) = graph.dependencies(method_symbol) else {
                    continue;
                };
                map.merge_method(class_symbol, method_symbol, edges);
            }
        }

        info!(classes = map.len(), "class dependency map aggregated");
        map
    }
}
