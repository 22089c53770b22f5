// tests/common/mod.rs - Hand-built Resolver stand-in for pipeline tests
//
// The real front end (parser + semantic binder) is an external collaborator,
// so tests bind tiny synthetic corpora by hand: declare classes, methods and
// call sites, then `bind()` into a `FixtureCorpus` implementing the
// `BoundCorpus` contract.
use std::collections::HashMap;

use callscope::{
    BoundCorpus, CallExpr, Callee, CallscopeError, ClassDecl, Corpus, DeclId, MethodDecl,
    Resolver, Result, SymbolId, SymbolKind, SymbolTable,
};

pub struct FixtureMethod {
    name: String,
    type_params: Vec<String>,
    param_types: Vec<String>,
    calls: Vec<Callee>,
    declarable: bool,
}

pub struct FixtureClass {
    name: String,
    methods: Vec<FixtureMethod>,
    resolvable: bool,
}

impl FixtureClass {
    /// Declare a method whose body calls the named targets in order.
    /// A target containing a dot becomes a member access on an identifier
    /// receiver, e.g. `"svc.Run"`.
    pub fn method(&mut self, name: &str, calls: &[&str]) -> &mut Self {
        self.method_full(name, &[], &[], calls)
    }

    pub fn method_full(
        &mut self,
        name: &str,
        type_params: &[&str],
        param_types: &[&str],
        calls: &[&str],
    ) -> &mut Self {
        self.methods.push(FixtureMethod {
            name: name.to_string(),
            type_params: type_params.iter().map(|s| s.to_string()).collect(),
            param_types: param_types.iter().map(|s| s.to_string()).collect(),
            calls: calls.iter().map(|c| parse_callee(c)).collect(),
            declarable: true,
        });
        self
    }

    /// A method declaration the binder cannot resolve to a symbol.
    pub fn undeclarable_method(&mut self, name: &str, calls: &[&str]) -> &mut Self {
        self.methods.push(FixtureMethod {
            name: name.to_string(),
            type_params: Vec::new(),
            param_types: Vec::new(),
            calls: calls.iter().map(|c| parse_callee(c)).collect(),
            declarable: false,
        });
        self
    }
}

fn parse_callee(target: &str) -> Callee {
    match target.split_once('.') {
        Some((receiver, member)) => Callee::MemberAccess {
            receiver: receiver.to_string(),
            member: member.to_string(),
        },
        None => Callee::Identifier(target.to_string()),
    }
}

/// Builder for a synthetic bound corpus.
#[derive(Default)]
pub struct CorpusFixture {
    classes: Vec<FixtureClass>,
    interfaces: Vec<FixtureClass>,
    direct_member_resolution: bool,
    bind_diagnostics: Vec<String>,
}

impl CorpusFixture {
    pub fn new() -> Self {
        Self {
            direct_member_resolution: true,
            ..Self::default()
        }
    }

    /// Make the binder fail member-access call sites, forcing the builder's
    /// receiver probe to do the work.
    pub fn without_direct_member_resolution(mut self) -> Self {
        self.direct_member_resolution = false;
        self
    }

    /// Make `bind` fail wholesale with the given diagnostics.
    pub fn failing_with(mut self, diagnostics: &[&str]) -> Self {
        self.bind_diagnostics = diagnostics.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Open a class declaration fragment. Calling this twice with one name
    /// models a partial class split across units.
    pub fn class(&mut self, name: &str) -> &mut FixtureClass {
        self.classes.push(FixtureClass {
            name: name.to_string(),
            methods: Vec::new(),
            resolvable: true,
        });
        self.classes.last_mut().unwrap()
    }

    /// A class fragment the binder cannot resolve. Its methods resolve to
    /// nothing either.
    pub fn unresolvable_class(&mut self, name: &str) -> &mut FixtureClass {
        self.classes.push(FixtureClass {
            name: name.to_string(),
            methods: Vec::new(),
            resolvable: false,
        });
        self.classes.last_mut().unwrap()
    }

    /// An interface declaration: its symbols exist for resolution, but it is
    /// not part of the analyzed class list.
    pub fn interface(&mut self, name: &str) -> &mut FixtureClass {
        self.interfaces.push(FixtureClass {
            name: name.to_string(),
            methods: Vec::new(),
            resolvable: true,
        });
        self.interfaces.last_mut().unwrap()
    }

    pub fn bind(&self) -> FixtureCorpus {
        let mut table = SymbolTable::new();
        let mut next_decl = 0u32;
        let mut next_decl = move || {
            next_decl += 1;
            DeclId(next_decl)
        };

        let mut type_by_name: HashMap<String, SymbolId> = HashMap::new();
        let mut method_by_name: HashMap<String, SymbolId> = HashMap::new();
        let mut class_syms: HashMap<DeclId, SymbolId> = HashMap::new();
        let mut method_syms: HashMap<DeclId, SymbolId> = HashMap::new();

        // Interfaces bind first so their members exist before class bodies
        // resolve against them.
        for iface in &self.interfaces {
            let ty = *type_by_name
                .entry(iface.name.clone())
                .or_insert_with(|| table.intern_interface(&iface.name));
            for m in &iface.methods {
                let sym =
                    table.intern_method(ty, &m.name, m.type_params.clone(), m.param_types.clone());
                method_by_name.entry(m.name.clone()).or_insert(sym);
            }
        }

        let mut classes = Vec::new();
        for fragment in &self.classes {
            let class_id = next_decl();
            let class_symbol = if fragment.resolvable {
                Some(
                    *type_by_name
                        .entry(fragment.name.clone())
                        .or_insert_with(|| table.intern_class(&fragment.name)),
                )
            } else {
                None
            };
            if let Some(sym) = class_symbol {
                class_syms.insert(class_id, sym);
            }

            let mut methods = Vec::new();
            for m in &fragment.methods {
                let method_id = next_decl();
                if m.declarable {
                    if let Some(class_symbol) = class_symbol {
                        let sym = table.intern_method(
                            class_symbol,
                            &m.name,
                            m.type_params.clone(),
                            m.param_types.clone(),
                        );
                        method_syms.insert(method_id, sym);
                        method_by_name.entry(m.name.clone()).or_insert(sym);
                    }
                }
                let calls = m
                    .calls
                    .iter()
                    .map(|callee| CallExpr {
                        id: next_decl(),
                        callee: callee.clone(),
                    })
                    .collect();
                methods.push(MethodDecl {
                    id: method_id,
                    name: m.name.clone(),
                    calls,
                });
            }
            classes.push(ClassDecl {
                id: class_id,
                name: fragment.name.clone(),
                methods,
            });
        }

        FixtureCorpus {
            classes,
            table,
            type_by_name,
            method_by_name,
            class_syms,
            method_syms,
            direct_member_resolution: self.direct_member_resolution,
        }
    }
}

impl Resolver for CorpusFixture {
    type Output = FixtureCorpus;

    fn bind(&self, _corpus: &Corpus) -> Result<FixtureCorpus> {
        if !self.bind_diagnostics.is_empty() {
            return Err(CallscopeError::bind_failure(self.bind_diagnostics.clone()));
        }
        Ok(self.bind())
    }
}

#[derive(Debug)]
pub struct FixtureCorpus {
    classes: Vec<ClassDecl>,
    table: SymbolTable,
    type_by_name: HashMap<String, SymbolId>,
    method_by_name: HashMap<String, SymbolId>,
    class_syms: HashMap<DeclId, SymbolId>,
    method_syms: HashMap<DeclId, SymbolId>,
    direct_member_resolution: bool,
}

impl FixtureCorpus {
    pub fn class_symbol(&self, name: &str) -> SymbolId {
        self.type_by_name[name]
    }

    pub fn method_symbol(&self, class: &str, method: &str) -> SymbolId {
        self.table
            .iter()
            .find(|s| {
                s.kind == SymbolKind::Method
                    && s.name == method
                    && s.containing_type
                        .map(|t| self.table.get(t).name == class)
                        .unwrap_or(false)
            })
            .map(|s| s.id)
            .unwrap_or_else(|| panic!("no method symbol {class}.{method}"))
    }
}

impl BoundCorpus for FixtureCorpus {
    fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    fn resolve_class(&self, class: &ClassDecl) -> Option<SymbolId> {
        self.class_syms.get(&class.id).copied()
    }

    fn resolve_declaration(&self, method: &MethodDecl) -> Option<SymbolId> {
        self.method_syms.get(&method.id).copied()
    }

    fn resolve_invocation(&self, call: &CallExpr) -> Option<SymbolId> {
        match &call.callee {
            Callee::Identifier(name) => self.method_by_name.get(name).copied(),
            Callee::MemberAccess { receiver, member } => {
                if !self.direct_member_resolution {
                    return None;
                }
                let ty = self.type_by_name.get(receiver)?;
                self.table.find_member(*ty, member)
            }
        }
    }

    fn resolve_identifier(&self, name: &str) -> Option<SymbolId> {
        self.type_by_name.get(name).copied()
    }
}
