// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::{Expr, SourceLocs};

/// The `requires` and `ensures` clauses of a function, as given by the kernel annotations.
/// Clauses are only added through [`super::Function::add_requires`] and
/// [`super::Function::add_ensures`].
#[derive(Clone, Debug, Default)]
pub struct Contract {
    pub(super) requires: Vec<Clause>,
    pub(super) ensures: Vec<Clause>,
}

/// A single contract clause: a boolean predicate over the function's arguments (and, for
/// `ensures`, its return values).
#[derive(Clone, Debug)]
pub struct Clause {
    clause: Expr,
    source_locs: SourceLocs,
}

/// Getters
impl Contract {
    pub fn requires(&self) -> &[Clause] {
        &self.requires
    }

    pub fn ensures(&self) -> &[Clause] {
        &self.ensures
    }

    pub fn is_empty(&self) -> bool {
        self.requires.is_empty() && self.ensures.is_empty()
    }
}

/// Getters
impl Clause {
    pub fn clause(&self) -> &Expr {
        &self.clause
    }

    pub fn source_locs(&self) -> &SourceLocs {
        &self.source_locs
    }
}

/// Constructor
impl Clause {
    pub(super) fn new(clause: Expr, source_locs: SourceLocs) -> Self {
        assert!(clause.typ().is_bool(), "Contract clause must be a predicate, got {:?}", clause);
        Clause { clause, source_locs }
    }
}
