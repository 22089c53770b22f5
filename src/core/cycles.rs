// src/core/cycles.rs - Recursion route enumeration
use serde::Serialize;

use super::call_graph::MethodCallGraph;
use super::symbol::SymbolId;

/// One route through the call graph starting after `origin`. The route is a
/// cycle iff its last element returns to the origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecursionRoute {
    pub origin: SymbolId,
    pub route: Vec<SymbolId>,
}

impl RecursionRoute {
    pub fn is_cycle(&self) -> bool {
        self.route.last() == Some(&self.origin)
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Caps on the exhaustive search. The enumeration is exponential in
/// branching x depth in the worst case (no cross-branch memoization), so
/// pathological graphs are bounded rather than exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchLimits {
    /// Maximum intermediate nodes on one branch.
    pub max_depth: usize,
    /// Maximum routes returned from one search.
    pub max_routes: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_routes: 1024,
        }
    }
}

/// Exhaustive depth-first enumeration of the cyclic call routes reachable
/// from an origin method.
///
/// Each branch owns its visited path, cloned at branch points, so distinct
/// branches may revisit nodes their siblings saw. A branch stops when it
/// returns to the origin (a cycle, recorded) or revisits any node on its own
/// path (dropped silently). The walk uses an explicit stack, not recursion,
/// so deep graphs cannot exhaust the call stack. Termination is guaranteed:
/// every branch's path strictly grows and revisits end it.
pub struct CycleEnumerator {
    limits: SearchLimits,
}

impl CycleEnumerator {
    pub fn new() -> Self {
        Self {
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// All distinct cyclic routes from `origin`. Absence of cycles is a
    /// normal empty result, never an error.
    pub fn find_cycles(&self, origin: SymbolId, graph: &MethodCallGraph) -> Vec<RecursionRoute> {
        let mut routes = Vec::new();
        let Some(roots) = graph.dependencies(origin) else {
            return routes;
        };

        // Frontier entries carry the branch's own visited path (the nodes
        // after the origin, excluding the entry itself). Children are pushed
        // in reverse so siblings pop in dependency order.
        let mut frontier: Vec<(SymbolId, Vec<SymbolId>)> = roots
            .iter()
            .rev()
            .map(|dep| (*dep, Vec::new()))
            .collect();

        while let Some((dep, mut path)) = frontier.pop() {
            if dep == origin {
                path.push(dep);
                routes.push(RecursionRoute {
                    origin,
                    route: path,
                });
                if routes.len() >= self.limits.max_routes {
                    break;
                }
                continue;
            }
            if path.contains(&dep) {
                // Revisit of a non-origin node on this branch: the sub-branch
                // yields nothing.
                continue;
            }
            if path.len() >= self.limits.max_depth {
                continue;
            }
            path.push(dep);
            if let Some(deps) = graph.dependencies(dep) {
                for next in deps.iter().rev() {
                    frontier.push((*next, path.clone()));
                }
            }
        }

        routes
    }
}

impl Default for CycleEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
