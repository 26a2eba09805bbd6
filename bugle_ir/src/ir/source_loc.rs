// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use crate::interned_string::InternedString;
use serde::Serialize;
use std::fmt::Debug;
use std::rc::Rc;

/// A `SourceLoc` is a position in the kernel source a statement was translated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceLoc {
    /// File name as written in the debug info, e.g. `kernel.cl`
    file: InternedString,
    /// Directory the file name is relative to
    path: InternedString,
    line: u64,
    column: u64,
}

/// The locations attached to one statement.
///
/// A statement inlined from a callee carries the whole chain, innermost first. The list is
/// immutable and shared: the producer typically reuses one list for every statement generated
/// from the same instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocs(Rc<[SourceLoc]>);

/// Constructors
impl SourceLoc {
    pub fn new<T, U: Into<InternedString>, V: Into<InternedString>>(
        file: U,
        path: V,
        line: T,
        column: T,
    ) -> SourceLoc
    where
        T: TryInto<u64>,
        T::Error: Debug,
    {
        SourceLoc {
            file: file.into(),
            path: path.into(),
            line: line.try_into().unwrap(),
            column: column.try_into().unwrap(),
        }
    }
}

/// Getters
impl SourceLoc {
    pub fn file(&self) -> InternedString {
        self.file
    }

    pub fn path(&self) -> InternedString {
        self.path
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn column(&self) -> u64 {
        self.column
    }

    /// `file:line:column`, for logging.
    pub fn short_string(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

impl SourceLocs {
    pub fn new(locs: Vec<SourceLoc>) -> Self {
        SourceLocs(locs.into())
    }

    pub fn single(loc: SourceLoc) -> Self {
        SourceLocs::new(vec![loc])
    }

    /// No known location
    pub fn none() -> Self {
        SourceLocs::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceLoc> {
        self.0.iter()
    }

    /// The location the statement itself came from (the innermost one).
    pub fn innermost(&self) -> Option<&SourceLoc> {
        self.0.first()
    }

    /// Whether `self` and `other` are the same shared list, not merely equal ones.
    pub fn ptr_eq(&self, other: &SourceLocs) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<'a> IntoIterator for &'a SourceLocs {
    type Item = &'a SourceLoc;
    type IntoIter = std::slice::Iter<'a, SourceLoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
