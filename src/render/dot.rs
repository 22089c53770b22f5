// src/render/dot.rs - DOT (Graphviz) emission for the analysis views
use std::collections::HashMap;

use crate::core::{
    ClassDependencyMap, CycleEnumerator, MethodCallGraph, RecursionRoute, SearchLimits, SymbolId,
    SymbolKind, SymbolTable,
};

use super::annotate::SymbolAnnotator;
use super::color::route_color;

const HEADER: &str = "digraph G {\n";
const FOOTER: &str = "}";

/// Ordinal/color bookkeeping for a single recursion render. Owned by one
/// render call; a fresh session starts every render so indices are
/// session-scoped, not global.
#[derive(Default)]
struct RenderSession {
    counter: usize,
    ordinals: HashMap<RecursionRoute, usize>,
}

impl RenderSession {
    /// First-seen ordinal of a route, starting at 1.
    fn ordinal(&mut self, route: &RecursionRoute) -> usize {
        if let Some(index) = self.ordinals.get(route) {
            return *index;
        }
        self.counter += 1;
        self.ordinals.insert(route.clone(), self.counter);
        self.counter
    }
}

/// Emits directed-graph text for the three analysis views.
///
/// Feeding a graph or class map whose ids come from a different symbol table
/// is a precondition violation and panics; it is not a recoverable error.
pub struct DotRenderer<'a> {
    symbols: &'a SymbolTable,
    annotator: SymbolAnnotator<'a>,
    limits: SearchLimits,
}

impl<'a> DotRenderer<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self {
            symbols,
            annotator: SymbolAnnotator::new(symbols),
            limits: SearchLimits::default(),
        }
    }

    /// Override the cycle-search caps used by the recursion view.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// One edge statement per (method, invoked symbol) pair.
    pub fn render_flat(&self, graph: &MethodCallGraph) -> String {
        let mut out = String::from(HEADER);
        for (method, dependencies) in graph.iter() {
            let from = self.annotator.annotate(method);
            for dependency in dependencies {
                self.push_edge(&mut out, &from, &self.annotator.annotate(*dependency));
            }
        }
        out.push_str(FOOTER);
        out
    }

    /// Like the flat view, restricted to edges whose target is a method of a
    /// class present in the map. Edges into un-analyzed code are suppressed.
    pub fn render_classes(&self, map: &ClassDependencyMap) -> String {
        let mut out = String::from(HEADER);
        for (_, methods) in map.iter() {
            for (method, dependencies) in methods {
                let from = self.annotator.annotate(method);
                for dependency in dependencies {
                    if !self.targets_analyzed_class(map, *dependency) {
                        continue;
                    }
                    self.push_edge(&mut out, &from, &self.annotator.annotate(*dependency));
                }
            }
        }
        out.push_str(FOOTER);
        out
    }

    /// One edge chain per recursion route, indexed and colored per session.
    ///
    /// Routes of one origin are emitted shortest first; each distinct route
    /// gets a first-seen ordinal label and a color derived from a stable
    /// hash of its annotated text.
    pub fn render_recursion(&self, graph: &MethodCallGraph) -> String {
        let enumerator = CycleEnumerator::with_limits(self.limits);
        let mut session = RenderSession::default();
        let mut out = String::from(HEADER);

        for origin in graph.methods() {
            let mut routes: Vec<RecursionRoute> = enumerator
                .find_cycles(origin, graph)
                .into_iter()
                .filter(RecursionRoute::is_cycle)
                .collect();
            routes.sort_by_key(RecursionRoute::len);

            for route in routes {
                let index = session.ordinal(&route);
                let chain: Vec<String> = std::iter::once(route.origin)
                    .chain(route.route.iter().copied())
                    .map(|s| format!("\"{}\"", self.annotator.annotate(s)))
                    .collect();
                let chain = chain.join(" -> ");
                let color = route_color(&chain);
                out.push_str(&format!(
                    "\t {} [color={}, label=\"{}\"];\n",
                    chain, color, index
                ));
            }
        }

        out.push_str(FOOTER);
        out
    }

    fn targets_analyzed_class(&self, map: &ClassDependencyMap, target: SymbolId) -> bool {
        let sym = self.symbols.get(target);
        if sym.kind != SymbolKind::Method {
            return false;
        }
        sym.containing_type
            .map(|class| map.contains_class(class))
            .unwrap_or(false)
    }

    fn push_edge(&self, out: &mut String, from: &str, to: &str) {
        out.push_str(&format!("\t \"{}\" -> \"{}\"\n", from, to));
    }
}
