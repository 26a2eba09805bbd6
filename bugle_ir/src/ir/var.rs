// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::Type;
use crate::interned_string::InternedString;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A named, typed storage location of a function: a parameter, a return slot or a local
/// (phi nodes are lowered onto locals).
///
/// `Var` is a handle. Cloning it yields the same variable, and equality is identity: two
/// variables created with the same name and type are still different variables.
/// Variables are created by the owning [`super::Function`].
#[derive(Clone)]
pub struct Var(Rc<VarData>);

struct VarData {
    name: InternedString,
    typ: Type,
}

impl Var {
    pub(crate) fn new<T: Into<InternedString>>(name: T, typ: Type) -> Self {
        Var(Rc::new(VarData { name: name.into(), typ }))
    }

    pub fn name(&self) -> InternedString {
        self.0.name
    }

    pub fn typ(&self) -> &Type {
        &self.0.typ
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Var({}: {})", self.0.name, self.0.typ)
    }
}
