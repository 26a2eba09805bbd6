// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::{Expr, Function, GlobalArray, MemorySpace};
use crate::interned_string::InternedString;
use crate::machine_model::MachineModel;
use std::collections::BTreeMap;
use tracing::debug;

/// A translated kernel module: the root of the IR. It owns the functions, the global arrays
/// and the axioms, and records the machine model the kernel was compiled for.
///
/// Functions and arrays are kept in insertion order, which is the order the consumer
/// emits them in.
#[derive(Debug)]
pub struct Module {
    name: InternedString,
    machine_model: MachineModel,
    global_arrays: Vec<GlobalArray>,
    functions: Vec<Function>,
    /// Function name to index in `functions`
    function_index: BTreeMap<InternedString, usize>,
    axioms: Vec<Expr>,
}

/// Constructors
impl Module {
    pub fn new<T: Into<InternedString>>(name: T, machine_model: MachineModel) -> Module {
        Module {
            name: name.into(),
            machine_model,
            global_arrays: Vec::new(),
            functions: Vec::new(),
            function_index: BTreeMap::new(),
            axioms: Vec::new(),
        }
    }
}

/// Getters
impl Module {
    pub fn name(&self) -> InternedString {
        self.name
    }

    pub fn machine_model(&self) -> &MachineModel {
        &self.machine_model
    }

    pub fn global_arrays(&self) -> &[GlobalArray] {
        &self.global_arrays
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Looking up a name that was never interned finds nothing and leaves the interner as is.
    pub fn function_by_name(&self, name: &str) -> Option<&Function> {
        let name = InternedString::lookup(name)?;
        self.function_index.get(&name).map(|&i| &self.functions[i])
    }

    pub fn axioms(&self) -> &[Expr] {
        &self.axioms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }
}

/// Setters
impl Module {
    pub fn add_global_array<T: Into<InternedString>>(
        &mut self,
        name: T,
        space: MemorySpace,
    ) -> GlobalArray {
        let array = GlobalArray::new(name, space);
        debug!(module=%self.name, array=%array.name(), ?space, "add_global_array");
        self.global_arrays.push(array.clone());
        array
    }

    /// Take ownership of a fully built `function`. Every `Goto` in it must target one of its
    /// own blocks, and no other function of the module may have the same name.
    pub fn add_function(&mut self, function: Function) {
        function.check_goto_targets();
        let name = function.name();
        assert!(
            !self.function_index.contains_key(&name),
            "Module {} already has a function named {name}",
            self.name
        );
        debug!(
            module=%self.name,
            function=%name,
            blocks=function.blocks().len(),
            "add_function"
        );
        self.function_index.insert(name, self.functions.len());
        self.functions.push(function);
    }

    /// Assume `pred` holds everywhere in the module.
    pub fn add_axiom(&mut self, pred: Expr) {
        assert!(pred.typ().is_bool(), "Axiom must be a predicate, got {pred:?}");
        self.axioms.push(pred);
    }
}

impl<'a> IntoIterator for &'a Module {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
