// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This module contains the typed representation of a translated kernel: expressions,
//! statements, basic blocks, functions and the module that owns them.

// There are a fair number of constructs in this module that are better maintained as
// explicit pattern matching versus using the `matches!` macro.
#![allow(clippy::match_like_matches_macro)]

mod basic_block;
mod contract;
mod expr;
mod function;
mod global_array;
mod module;
mod source_loc;
mod stmt;
mod typ;
mod var;

pub use basic_block::{BasicBlock, BlockId};
pub use contract::{Clause, Contract};
pub use expr::{BinaryOperator, Expr, ExprKind, ExprValue, UnaryOperator};
pub use function::{Function, FunctionRef};
pub use global_array::{GlobalArray, MemorySpace};
pub use module::Module;
pub use source_loc::{SourceLoc, SourceLocs};
pub use stmt::{AssertFacets, Stmt, StmtBody, StmtKind};
pub use typ::Type;
pub use var::Var;
