// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use self::StmtBody::*;
use super::{BlockId, Expr, FunctionRef, SourceLocs, Type, Var};

///////////////////////////////////////////////////////////////////////////////////////////////
/// Datatypes
///////////////////////////////////////////////////////////////////////////////////////////////

/// A `Stmt` is an effectful step of a basic block: a store, an assignment, a control transfer,
/// an assumption or assertion, or a call.
///
/// Unlike [`Expr`], a statement is not shared: it is owned by exactly one [`super::BasicBlock`]
/// (or, for the calls of a `CallMemberOf`, by that statement), and is not `Clone`. Once added
/// to a block the statement records the block's [`BlockId`], and it can never be moved to
/// another block.
///
/// The fields are private and there are no mutable getters: the constructors check the
/// operand types and are the only way to build a statement.
///
/// An expression counts its live `Eval` statements. Once the last one is dropped,
/// `has_eval_stmt` is false again and a later `add_eval_stmt` may evaluate it again.
#[derive(Debug)]
pub struct Stmt {
    body: Box<StmtBody>,
    parent: Option<BlockId>,
    source_locs: SourceLocs,
}

/// The different kinds of bodies a statement can have.
#[derive(Debug)]
pub enum StmtBody {
    /// Evaluate `e` at this program point and discard the result. Used to pin where a load
    /// (or a call) happens.
    Eval(Expr),
    /// `array[offset] = value;` for one byte `value`
    Store { array: Expr, offset: Expr, value: Expr },
    /// `vars[0], vars[1], ... = values[0], values[1], ...;` as one parallel assignment
    VarAssign { vars: Vec<Var>, values: Vec<Expr> },
    /// Nondeterministic jump to one of `targets`
    Goto(Vec<BlockId>),
    /// `return;`
    Return,
    /// `assume(pred);` A partition assume marks the split of a barrier-interval partition.
    Assume { pred: Expr, partition: bool },
    /// `assert(pred);`
    Assert { pred: Expr, facets: AssertFacets },
    /// `callee(arguments);` with the results, if any, discarded.
    Call { callee: FunctionRef, arguments: Vec<Expr> },
    /// An indirect call through `func`, which is known to call one of the `Call` statements
    /// in `call_stmts`.
    CallMemberOf { func: Expr, call_stmts: Vec<Stmt> },
    /// Wait on the asynchronous copy identified by `handle`.
    WaitGroupEvent(Expr),
}

/// The flags qualifying an assertion. Only the `Stmt::assert*` constructors set them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssertFacets {
    global: bool,
    candidate: bool,
    invariant: bool,
    bad_access: bool,
    block_source_loc: bool,
}

/// The kind of a statement, without its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StmtKind {
    Eval,
    Store,
    VarAssign,
    Goto,
    Return,
    Assume,
    Assert,
    Call,
    CallMemberOf,
    WaitGroupEvent,
}

///////////////////////////////////////////////////////////////////////////////////////////////
/// Implementations
///////////////////////////////////////////////////////////////////////////////////////////////

/// Getters
impl AssertFacets {
    /// The assertion holds for all threads, not only the current one.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// A candidate for invariant inference, which may be dropped if it cannot be proved.
    pub fn is_candidate(&self) -> bool {
        self.candidate
    }

    /// A loop invariant.
    pub fn is_invariant(&self) -> bool {
        self.invariant
    }

    /// Marks an access the frontend proved out of bounds.
    pub fn is_bad_access(&self) -> bool {
        self.bad_access
    }

    /// Only records that the block was reached from the attached source location.
    pub fn is_block_source_loc(&self) -> bool {
        self.block_source_loc
    }
}

/// Getters
impl Stmt {
    pub fn body(&self) -> &StmtBody {
        &self.body
    }

    pub fn kind(&self) -> StmtKind {
        match *self.body {
            Eval(_) => StmtKind::Eval,
            Store { .. } => StmtKind::Store,
            VarAssign { .. } => StmtKind::VarAssign,
            Goto(_) => StmtKind::Goto,
            Return => StmtKind::Return,
            Assume { .. } => StmtKind::Assume,
            Assert { .. } => StmtKind::Assert,
            Call { .. } => StmtKind::Call,
            CallMemberOf { .. } => StmtKind::CallMemberOf,
            WaitGroupEvent(_) => StmtKind::WaitGroupEvent,
        }
    }

    /// The block this statement belongs to, once it has been added to one.
    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }

    /// The source locations of the statement. `Return` has none.
    ///
    /// Asking a `VarAssign`, `Goto` or `Assume` is a bug in the consumer: those statements
    /// are synthesized and never carry a location.
    pub fn source_locs(&self) -> &SourceLocs {
        match self.kind() {
            kind @ (StmtKind::VarAssign | StmtKind::Goto | StmtKind::Assume) => {
                unreachable!("{kind:?} statements have no source location")
            }
            _ => &self.source_locs,
        }
    }

    /// The facets of an `Assert`, `None` for other statements.
    pub fn assert_facets(&self) -> Option<AssertFacets> {
        match *self.body {
            Assert { facets, .. } => Some(facets),
            _ => None,
        }
    }

    /// The control transfer targets of a `Goto`, empty for other statements.
    pub fn targets(&self) -> &[BlockId] {
        match &*self.body {
            Goto(targets) => targets,
            _ => &[],
        }
    }
}

/// Setters
impl Stmt {
    /// Record the owning block. A statement is added to a block at most once.
    pub(crate) fn set_parent(&mut self, parent: BlockId) {
        assert!(
            self.parent.is_none(),
            "{:?} statement already belongs to {:?}, cannot add it to {parent:?}",
            self.kind(),
            self.parent
        );
        self.parent = Some(parent);
    }
}

/// Private constructor.
macro_rules! stmt {
    ( $body:expr, $locs:expr ) => {{
        let body = Box::new($body);
        let source_locs = $locs;
        Stmt { body, parent: None, source_locs }
    }};
}

/// Constructors
impl Stmt {
    /// Evaluate `e` here. Counts as a live `Eval` of `e` until this statement is dropped.
    ///
    /// Blocks should normally use [`super::BasicBlock::add_eval_stmt`], which avoids
    /// evaluating the same expression twice.
    pub fn eval(e: Expr, locs: SourceLocs) -> Self {
        e.add_eval_stmt_ref();
        stmt!(Eval(e), locs)
    }

    /// `array[offset] = value;`
    pub fn store(array: Expr, offset: Expr, value: Expr, locs: SourceLocs) -> Self {
        assert!(array.typ().is_array_id(), "Store to a non-array {array:?}");
        assert!(offset.typ().is_bv(), "Store offset must be a bit-vector, got {:?}", offset.typ());
        assert_eq!(*value.typ(), Type::bv(8), "Store value must be a byte: {value:?}");
        stmt!(Store { array, offset, value }, locs)
    }

    /// `var = value;`
    pub fn var_assign(var: Var, value: Expr) -> Self {
        Stmt::var_assign_many(vec![var], vec![value])
    }

    /// `vars = values;` as a parallel assignment. Both lists are non-empty and of the same
    /// length, and each value has the type of its variable.
    pub fn var_assign_many(vars: Vec<Var>, values: Vec<Expr>) -> Self {
        assert!(!vars.is_empty(), "VarAssign needs at least one variable");
        assert_eq!(
            vars.len(),
            values.len(),
            "VarAssign to {} variables of {} values",
            vars.len(),
            values.len()
        );
        for (var, value) in vars.iter().zip(values.iter()) {
            assert_eq!(
                var.typ(),
                value.typ(),
                "VarAssign does not type check:\nvar: {var:?}\nvalue: {value:?}"
            );
        }
        stmt!(VarAssign { vars, values }, SourceLocs::none())
    }

    /// `goto target;`
    pub fn goto(target: BlockId) -> Self {
        Stmt::goto_many(vec![target])
    }

    /// Nondeterministic `goto` to any of `targets`.
    pub fn goto_many(targets: Vec<BlockId>) -> Self {
        stmt!(Goto(targets), SourceLocs::none())
    }

    /// `return;`
    pub fn ret() -> Self {
        stmt!(Return, SourceLocs::none())
    }

    /// `assume(pred);`
    pub fn assume(pred: Expr) -> Self {
        assert!(pred.typ().is_bool(), "Assume of a non-predicate {pred:?}");
        stmt!(Assume { pred, partition: false }, SourceLocs::none())
    }

    /// `assume(pred);` opening a barrier-interval partition
    pub fn assume_partition(pred: Expr) -> Self {
        assert!(pred.typ().is_bool(), "Assume of a non-predicate {pred:?}");
        stmt!(Assume { pred, partition: true }, SourceLocs::none())
    }

    fn assert_with(pred: Expr, facets: AssertFacets, locs: SourceLocs) -> Self {
        assert!(pred.typ().is_bool(), "Assert of a non-predicate {pred:?}");
        stmt!(Assert { pred, facets }, locs)
    }

    /// `assert(pred);`
    pub fn assert(pred: Expr, global: bool, candidate: bool, locs: SourceLocs) -> Self {
        Stmt::assert_with(pred, AssertFacets { global, candidate, ..Default::default() }, locs)
    }

    /// A loop invariant `assert(pred);`
    pub fn assert_invariant(pred: Expr, global: bool, candidate: bool, locs: SourceLocs) -> Self {
        Stmt::assert_with(
            pred,
            AssertFacets { global, candidate, invariant: true, ..Default::default() },
            locs,
        )
    }

    /// `assert(false);` at an access known to be out of bounds
    pub fn assert_bad_access(locs: SourceLocs) -> Self {
        Stmt::assert_with(
            Expr::bool_false(),
            AssertFacets { bad_access: true, ..Default::default() },
            locs,
        )
    }

    /// `assert(true);` recording that the block starts at `locs`
    pub fn assert_block_source_loc(locs: SourceLocs) -> Self {
        Stmt::assert_with(
            Expr::bool_true(),
            AssertFacets { block_source_loc: true, ..Default::default() },
            locs,
        )
    }

    /// `callee(arguments);`
    pub fn call(callee: &FunctionRef, arguments: Vec<Expr>, locs: SourceLocs) -> Self {
        assert!(
            Expr::typecheck_call(callee, &arguments),
            "Function call does not type check:\nfunc: {callee:?}\nargs: {arguments:?}"
        );
        stmt!(Call { callee: callee.clone(), arguments }, locs)
    }

    /// `(*func)(...);` where `func` is one of the callees of `call_stmts`.
    pub fn call_member_of(func: Expr, call_stmts: Vec<Stmt>, locs: SourceLocs) -> Self {
        assert!(func.typ().is_pointer(), "Indirect call through a non-pointer {func:?}");
        for stmt in &call_stmts {
            assert_eq!(stmt.kind(), StmtKind::Call, "CallMemberOf may only hold calls: {stmt:?}");
        }
        stmt!(CallMemberOf { func, call_stmts }, locs)
    }

    /// `wait_group_events(1, &handle);`
    pub fn wait_group_event(handle: Expr, locs: SourceLocs) -> Self {
        stmt!(WaitGroupEvent(handle), locs)
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        if let Eval(e) = &*self.body {
            e.release_eval_stmt_ref();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BlockId, Function, GlobalArray, MemorySpace, SourceLoc};

    fn locs() -> SourceLocs {
        SourceLocs::single(SourceLoc::new("kernel.cl", "/src", 7, 5))
    }

    fn array() -> Expr {
        Expr::global_array_ref(&GlobalArray::new("$A", MemorySpace::Global))
    }

    #[test]
    fn eval_marks_until_dropped() {
        let e = Expr::bv_const(32, 1).bv_add(Expr::var_ref(&Var::new("x", Type::bv(32))));
        assert!(!e.has_eval_stmt());
        let s = Stmt::eval(e.clone(), locs());
        assert!(e.has_eval_stmt());
        assert_eq!(s.kind(), StmtKind::Eval);
        drop(s);
        assert!(!e.has_eval_stmt());
    }

    #[test]
    fn store_of_a_byte() {
        let s = Stmt::store(array(), Expr::bv_const(64, 4), Expr::bv_const(8, 0xff), locs());
        assert_eq!(s.kind(), StmtKind::Store);
        assert!(s.source_locs().ptr_eq(&s.source_locs().clone()));
        assert_eq!(s.source_locs().innermost().unwrap().line(), 7);
        assert!(s.parent().is_none());
    }

    #[test]
    #[should_panic(expected = "Store value must be a byte")]
    fn store_of_a_word() {
        Stmt::store(array(), Expr::bv_const(64, 4), Expr::bv_const(32, 0), locs());
    }

    #[test]
    fn parallel_assignment() {
        let a = Var::new("a", Type::bv(32));
        let b = Var::new("b", Type::bv(32));
        let s = Stmt::var_assign_many(
            vec![a.clone(), b.clone()],
            vec![Expr::var_ref(&b), Expr::var_ref(&a)],
        );
        match s.body() {
            VarAssign { vars, values } => {
                assert_eq!(vars, &[a, b.clone()]);
                assert_eq!(values[0].var(), Some(&b));
            }
            body => panic!("unexpected {body:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "VarAssign to 2 variables of 1 values")]
    fn assignment_arity() {
        let a = Var::new("a", Type::bool());
        Stmt::var_assign_many(vec![a.clone(), a], vec![Expr::bool_true()]);
    }

    #[test]
    #[should_panic(expected = "VarAssign does not type check")]
    fn assignment_types() {
        Stmt::var_assign(Var::new("a", Type::bool()), Expr::bv_zero(1));
    }

    #[test]
    fn assert_facets() {
        let s = Stmt::assert(Expr::bool_true(), true, false, locs());
        let facets = s.assert_facets().unwrap();
        assert!(facets.is_global());
        assert!(!facets.is_candidate());
        assert!(!facets.is_invariant());

        let inv = Stmt::assert_invariant(Expr::bool_true(), false, true, locs());
        assert!(inv.assert_facets().unwrap().is_invariant());
        assert!(inv.assert_facets().unwrap().is_candidate());

        let bad = Stmt::assert_bad_access(locs());
        assert!(bad.assert_facets().unwrap().is_bad_access());
        match bad.body() {
            Assert { pred, .. } => assert_eq!(pred.bool_const_value(), Some(false)),
            body => panic!("unexpected {body:?}"),
        }

        let bsl = Stmt::assert_block_source_loc(locs());
        assert!(bsl.assert_facets().unwrap().is_block_source_loc());
        match bsl.body() {
            Assert { pred, .. } => assert_eq!(pred.bool_const_value(), Some(true)),
            body => panic!("unexpected {body:?}"),
        }
        assert_eq!(Stmt::ret().assert_facets(), None);
    }

    #[test]
    fn return_has_no_locations() {
        assert!(Stmt::ret().source_locs().is_empty());
    }

    #[test]
    #[should_panic(expected = "Goto statements have no source location")]
    fn goto_has_no_location_at_all() {
        Stmt::goto(BlockId::new(0)).source_locs();
    }

    #[test]
    #[should_panic(expected = "Assume statements have no source location")]
    fn assume_has_no_location_at_all() {
        Stmt::assume_partition(Expr::bool_true()).source_locs();
    }

    #[test]
    fn goto_targets() {
        let s = Stmt::goto_many(vec![BlockId::new(1), BlockId::new(3)]);
        assert_eq!(s.targets(), &[BlockId::new(1), BlockId::new(3)]);
        assert!(Stmt::ret().targets().is_empty());
    }

    #[test]
    fn calls() {
        let mut f = Function::new("barrier");
        f.add_arg("flags", Type::bv(32));
        let callee = f.callee();

        let direct = Stmt::call(&callee, vec![Expr::bv_const(32, 1)], locs());
        assert_eq!(direct.kind(), StmtKind::Call);

        let fp = Expr::var_ref(&Var::new("fp", Type::pointer(64)));
        let indirect = Stmt::call_member_of(fp, vec![direct], locs());
        match indirect.body() {
            CallMemberOf { call_stmts, .. } => assert_eq!(call_stmts.len(), 1),
            body => panic!("unexpected {body:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "Function call does not type check")]
    fn call_arity() {
        let f = Function::new("noargs");
        Stmt::call(&f.callee(), vec![Expr::bool_true()], locs());
    }

    #[test]
    #[should_panic(expected = "CallMemberOf may only hold calls")]
    fn call_member_of_non_call() {
        let fp = Expr::var_ref(&Var::new("fp", Type::pointer(64)));
        Stmt::call_member_of(fp, vec![Stmt::ret()], locs());
    }
}
