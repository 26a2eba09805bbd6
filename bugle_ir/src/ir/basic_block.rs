// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::{Expr, SourceLocs, Stmt};
use crate::interned_string::InternedString;
use tracing::trace;

/// The position of a block in its function. Statements refer to blocks (as `Goto` targets,
/// or as their parent) by id, so blocks never hold references to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(usize);

impl BlockId {
    pub fn new(index: usize) -> Self {
        BlockId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named, ordered sequence of statements. The block owns its statements: dropping it drops
/// them, which in turn releases their expressions.
#[derive(Debug)]
pub struct BasicBlock {
    id: BlockId,
    name: InternedString,
    stmts: Vec<Stmt>,
}

impl BasicBlock {
    pub fn new<T: Into<InternedString>>(id: BlockId, name: T) -> Self {
        BasicBlock { id, name: name.into(), stmts: Vec::new() }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn name(&self) -> InternedString {
        self.name
    }

    /// Append `stmt`, which must not already belong to a block.
    pub fn add_stmt(&mut self, mut stmt: Stmt) {
        stmt.set_parent(self.id);
        self.stmts.push(stmt);
    }

    /// Append `Eval(e)`, unless `e` already has a live `Eval` statement or its producer
    /// prevented evaluation, in which case nothing happens.
    pub fn add_eval_stmt(&mut self, e: Expr, locs: SourceLocs) {
        if e.has_eval_stmt() || e.prevents_eval_stmt() {
            trace!(block=%self.name, expr=?e.kind(), "skipped eval");
            return;
        }
        self.add_stmt(Stmt::eval(e, locs));
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.stmts.iter()
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// The blocks control may continue to, in `Goto` order.
    pub fn successors(&self) -> Vec<BlockId> {
        self.stmts.iter().flat_map(|s| s.targets().iter().copied()).collect()
    }
}

impl<'a> IntoIterator for &'a BasicBlock {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{BasicBlock, BlockId};
    use crate::ir::{Expr, GlobalArray, MemorySpace, SourceLocs, Stmt, StmtKind, Type, Var};

    fn load() -> Expr {
        let a = Expr::global_array_ref(&GlobalArray::new("$A", MemorySpace::Global));
        Expr::load(a, Expr::var_ref(&Var::new("i", Type::bv(32))))
    }

    #[test]
    fn eval_is_added_once() {
        let mut bb = BasicBlock::new(BlockId::new(0), "entry");
        let e = load();
        bb.add_eval_stmt(e.clone(), SourceLocs::none());
        bb.add_eval_stmt(e.clone(), SourceLocs::none());
        assert_eq!(bb.len(), 1);
        assert_eq!(bb.stmts()[0].kind(), StmtKind::Eval);
        assert_eq!(bb.stmts()[0].parent(), Some(BlockId::new(0)));
        assert!(e.has_eval_stmt());
    }

    #[test]
    fn prevented_eval_is_skipped() {
        let mut bb = BasicBlock::new(BlockId::new(0), "entry");
        let e = load();
        e.prevent_eval_stmt();
        bb.add_eval_stmt(e.clone(), SourceLocs::none());
        assert!(bb.is_empty());
        assert!(!e.has_eval_stmt());
    }

    #[test]
    fn dropping_a_block_releases_its_expressions() {
        let e = load();
        let mut b1 = BasicBlock::new(BlockId::new(0), "b1");
        let mut b2 = BasicBlock::new(BlockId::new(1), "b2");
        b1.add_eval_stmt(e.clone(), SourceLocs::none());
        b2.add_stmt(Stmt::assume(e.clone().eq(Expr::bv_zero(8))));
        let before = e.ref_count();

        drop(b1);
        assert!(!e.has_eval_stmt());
        assert_eq!(e.ref_count(), before - 1);

        // The eval marker is clear again, so another block may evaluate `e`.
        b2.add_eval_stmt(e.clone(), SourceLocs::none());
        assert_eq!(b2.len(), 2);
        drop(b2);
        assert_eq!(e.ref_count(), 1);
    }

    #[test]
    fn dropping_another_eval_keeps_the_block_eval() {
        let mut bb = BasicBlock::new(BlockId::new(0), "entry");
        let e = load();
        bb.add_eval_stmt(e.clone(), SourceLocs::none());
        drop(Stmt::eval(e.clone(), SourceLocs::none()));
        assert!(e.has_eval_stmt());
        bb.add_eval_stmt(e.clone(), SourceLocs::none());
        assert_eq!(bb.len(), 1);
    }

    #[test]
    fn eval_survives_while_any_block_holds_one() {
        let e = load();
        let mut b1 = BasicBlock::new(BlockId::new(0), "b1");
        let mut b2 = BasicBlock::new(BlockId::new(1), "b2");
        b1.add_eval_stmt(e.clone(), SourceLocs::none());
        b2.add_stmt(Stmt::eval(e.clone(), SourceLocs::none()));

        drop(b1);
        assert!(e.has_eval_stmt());
        b2.add_eval_stmt(e.clone(), SourceLocs::none());
        assert_eq!(b2.len(), 1);

        drop(b2);
        assert!(!e.has_eval_stmt());
    }

    #[test]
    #[should_panic(expected = "already belongs to")]
    fn statements_are_not_reparented() {
        let mut s = Stmt::ret();
        s.set_parent(BlockId::new(0));
        BasicBlock::new(BlockId::new(1), "other").add_stmt(s);
    }

    #[test]
    fn successors_follow_gotos() {
        let mut bb = BasicBlock::new(BlockId::new(0), "head");
        bb.add_stmt(Stmt::assume(Expr::bool_true()));
        bb.add_stmt(Stmt::goto_many(vec![BlockId::new(2), BlockId::new(1)]));
        assert_eq!(bb.successors(), vec![BlockId::new(2), BlockId::new(1)]);
        assert_eq!((&bb).into_iter().count(), 2);
        assert!(BasicBlock::new(BlockId::new(3), "exit").successors().is_empty());
    }
}
