// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::interned_string::InternedString;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The GPU memory space an array lives in. A consumer needs this to decide which arrays are
/// visible to all threads (and so subject to race checks) and which are read-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemorySpace {
    /// `__global` / device memory
    Global,
    /// `__local` / `__shared__` memory, shared by a work group
    GroupShared,
    /// `__constant` memory
    Constant,
    /// Memory private to one thread
    Private,
}

/// An addressable array of the kernel module, referenced by `GlobalArrayRef` expressions.
/// Like [`super::Var`], this is an identity-compared handle; the owning [`super::Module`]
/// creates it.
#[derive(Clone)]
pub struct GlobalArray(Rc<GlobalArrayData>);

struct GlobalArrayData {
    name: InternedString,
    space: MemorySpace,
}

impl GlobalArray {
    pub(crate) fn new<T: Into<InternedString>>(name: T, space: MemorySpace) -> Self {
        GlobalArray(Rc::new(GlobalArrayData { name: name.into(), space }))
    }

    pub fn name(&self) -> InternedString {
        self.0.name
    }

    pub fn space(&self) -> MemorySpace {
        self.0.space
    }

    /// Visible to more than one thread
    pub fn is_shared(&self) -> bool {
        match self.0.space {
            MemorySpace::Global | MemorySpace::GroupShared => true,
            MemorySpace::Constant | MemorySpace::Private => false,
        }
    }
}

impl PartialEq for GlobalArray {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for GlobalArray {}

impl Hash for GlobalArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl Debug for GlobalArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GlobalArray({}, {:?})", self.0.name, self.0.space)
    }
}
