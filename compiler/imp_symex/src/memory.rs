//! Per-path symbolic memory.
//!
//! A memory binds the function's declared parameters - and nothing else -
//! to their current symbolic values along one execution path. The key set
//! is fixed at construction; `get` and `set` on any other name fail with
//! [`ExecError::UnknownVariable`].
//!
//! Every conditional clones one memory, so cloning must stay cheap: the
//! name-to-slot layout is built once and shared behind an `Rc`, and a
//! clone copies only the slot vector of `Rc`'d values.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use imp_ir::Param;

use crate::{ExecError, SymValue};

/// Name-to-slot layout, shared by all clones of one root memory.
#[derive(Debug)]
struct Layout {
    /// Parameter names in declaration order.
    names: Vec<String>,
    index: FxHashMap<String, usize>,
}

/// Symbolic bindings for one execution path.
#[derive(Clone, Debug)]
pub struct SymbolicMemory {
    layout: Rc<Layout>,
    /// Current values, parallel to `layout.names`.
    slots: Vec<SymValue>,
}

impl SymbolicMemory {
    /// Build the root memory for `params`, one slot per parameter in
    /// declaration order, each initialized to a symbol of the parameter's
    /// own name and sort.
    pub fn from_params(params: &[Param]) -> Self {
        let mut names = Vec::with_capacity(params.len());
        let mut index = FxHashMap::default();
        let mut slots = Vec::with_capacity(params.len());
        for param in params {
            index.insert(param.name.clone(), names.len());
            names.push(param.name.clone());
            slots.push(SymValue::symbol(&param.name, param.ty));
        }
        SymbolicMemory {
            layout: Rc::new(Layout { names, index }),
            slots,
        }
    }

    /// Current binding of `name`.
    pub fn get(&self, name: &str) -> Result<&SymValue, ExecError> {
        let slot = self.slot(name)?;
        Ok(&self.slots[slot])
    }

    /// Replace the binding of `name`.
    ///
    /// No sort check happens here; sort correctness is guaranteed by the
    /// upstream validator and by expression construction.
    pub fn set(&mut self, name: &str, value: SymValue) -> Result<(), ExecError> {
        let slot = self.slot(name)?;
        self.slots[slot] = value;
        Ok(())
    }

    /// Bindings as `(name, value)` pairs in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &SymValue)> {
        self.layout
            .names
            .iter()
            .map(String::as_str)
            .zip(self.slots.iter())
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot(&self, name: &str) -> Result<usize, ExecError> {
        self.layout
            .index
            .get(name)
            .copied()
            .ok_or_else(|| ExecError::UnknownVariable {
                name: name.to_owned(),
            })
    }
}
