// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! This crate contains the intermediate representation a GPU kernel is translated into before
//! it is handed to a verifier backend.
//!
//! The IR has four levels:
//! 1. [ir::Module] is the translated kernel module, with its global arrays and axioms.
//! 2. [ir::Function] owns its variables and a list of [ir::BasicBlock]s.
//! 3. [ir::BasicBlock] is an ordered list of [ir::Stmt]s; control flow is given by `Goto`
//!    statements.
//! 4. [ir::Expr] is a typed, shared value expression.
//!
//! Expressions are built bottom up through checked constructors that compute the result
//! [ir::Type] and apply a handful of local simplifications; see [ir::Expr] for the list.
//! Memory is modelled as byte arrays: a pointer is an `(array id, offset)` pair, and loads
//! and stores move single bytes.
//!
//! Building an ill-typed expression or statement is a bug in the producer and panics.

pub mod ir;
mod interned_string;
mod machine_model;

pub use interned_string::{InternString, InternedString};
pub use machine_model::MachineModel;
