// src/render/annotate.rs - Canonical symbol display strings
use crate::core::{SymbolId, SymbolKind, SymbolTable};

/// Renders a symbol to its canonical display string.
///
/// Methods render as `ContainingClass.MethodName<T1, T2>(ParamType,ParamType)`:
/// the angle-bracket list is omitted entirely when there are no type
/// parameters, and the parenthesized list holds parameter *type* names only.
/// Non-method symbols render as their bare name.
pub struct SymbolAnnotator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> SymbolAnnotator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn annotate(&self, id: SymbolId) -> String {
        let sym = self.symbols.get(id);
        if sym.kind != SymbolKind::Method {
            return sym.name.clone();
        }

        let class = match sym.containing_type {
            Some(ty) => self.symbols.get(ty).name.as_str(),
            None => "",
        };
        let type_params = if sym.type_params.is_empty() {
            String::new()
        } else {
            format!("<{}>", sym.type_params.join(", "))
        };
        let params = sym.param_types.join(",");
        format!("{}.{}{}({})", class, sym.name, type_params, params)
    }
}
