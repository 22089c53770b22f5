// src/core/symbol.rs - Symbol identity and metadata
use serde::{Deserialize, Serialize};

/// Opaque handle for a declared program entity (class, interface or method).
///
/// Ids are minted only by a [`SymbolTable`]; two handles are the same entity
/// iff they are equal and came from the same table. Identity is never derived
/// from display strings - distinct declarations may share a short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What kind of declaration a symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    Class,
    Interface,
    Method,
}

/// Metadata the Resolver attaches to a declared entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub kind: SymbolKind,
    /// Short display name (no namespace qualification).
    pub name: String,
    /// Declaring type, for methods. `None` for top-level types.
    pub containing_type: Option<SymbolId>,
    /// Type parameter names, in declaration order. Methods only.
    pub type_params: Vec<String>,
    /// Parameter *type* names, in declaration order. Methods only.
    pub param_types: Vec<String>,
}

/// Arena of all symbols bound for one corpus.
///
/// The table is produced once per immutable corpus and never mutated
/// afterwards by the analysis stages. Looking up a [`SymbolId`] minted by a
/// different table is a precondition violation and panics.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, mut symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        symbol.id = id;
        self.symbols.push(symbol);
        id
    }

    /// Register a class (or struct-like) type symbol.
    pub fn intern_class(&mut self, name: impl Into<String>) -> SymbolId {
        self.push(Symbol {
            id: SymbolId(0),
            kind: SymbolKind::Class,
            name: name.into(),
            containing_type: None,
            type_params: Vec::new(),
            param_types: Vec::new(),
        })
    }

    /// Register an interface type symbol.
    pub fn intern_interface(&mut self, name: impl Into<String>) -> SymbolId {
        self.push(Symbol {
            id: SymbolId(0),
            kind: SymbolKind::Interface,
            name: name.into(),
            containing_type: None,
            type_params: Vec::new(),
            param_types: Vec::new(),
        })
    }

    /// Register a method symbol declared by `containing_type`.
    pub fn intern_method(
        &mut self,
        containing_type: SymbolId,
        name: impl Into<String>,
        type_params: Vec<String>,
        param_types: Vec<String>,
    ) -> SymbolId {
        self.push(Symbol {
            id: SymbolId(0),
            kind: SymbolKind::Method,
            name: name.into(),
            containing_type: Some(containing_type),
            type_params,
            param_types,
        })
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// The declaring type of `id`, if any.
    pub fn containing_type(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id).containing_type
    }

    /// Look up a method named `member` declared by the type `ty`.
    ///
    /// Supports the best-effort receiver probe: once a receiver expression
    /// resolves to a type, the called member is found by name on that type.
    /// First declaration wins on overloads.
    pub fn find_member(&self, ty: SymbolId, member: &str) -> Option<SymbolId> {
        self.symbols
            .iter()
            .find(|s| {
                s.kind == SymbolKind::Method
                    && s.containing_type == Some(ty)
                    && s.name == member
            })
            .map(|s| s.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
