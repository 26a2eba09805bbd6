// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small kernel the way a frontend would, then walks it the way a backend would.

use bugle_ir::MachineModel;
use bugle_ir::ir::{
    BasicBlock, BlockId, Expr, ExprKind, Function, GlobalArray, MemorySpace, Module, SourceLoc,
    SourceLocs, Stmt, StmtBody, StmtKind, Type,
};
use num::BigUint;

/// ```c
/// __kernel void store_then_load(__global char *arr) {
///   arr[0] = 42;  // A
///   arr[0];       // B
/// }
/// ```
fn build() -> (Module, GlobalArray, Expr) {
    let mm = MachineModel::spir();
    let width = mm.pointer_width;
    let mut module = Module::new("store_then_load.bc", mm);
    let arr = module.add_global_array("$arr", MemorySpace::Global);
    let locs = SourceLocs::single(SourceLoc::new("store_then_load.cl", "/k", 2, 3));

    let mut f = Function::new("store_then_load");
    f.add_attribute("kernel");
    let a = f.add_block("A");
    let b = f.add_block("B");

    f.block_mut(a).add_stmt(Stmt::store(
        Expr::global_array_ref(&arr),
        Expr::bv_zero(width),
        Expr::bv_const(8, 42),
        locs.clone(),
    ));
    f.block_mut(a).add_stmt(Stmt::goto(b));

    let load = Expr::load(Expr::global_array_ref(&arr), Expr::bv_zero(width));
    f.block_mut(b).add_eval_stmt(load.clone(), locs);
    f.block_mut(b).add_stmt(Stmt::ret());

    module.add_function(f);
    (module, arr, load)
}

#[test]
fn store_jump_load_return() {
    let (module, arr, load) = build();
    assert_eq!(*load.typ(), Type::bv(8));
    assert!(load.has_eval_stmt());

    let f = module.function_by_name("store_then_load").expect("function was added");
    assert!(f.has_attribute("kernel"));
    let kinds = |bb: &BasicBlock| bb.iter().map(|s| s.kind()).collect::<Vec<_>>();

    let a = f.entry_block().unwrap();
    let b = BlockId::new(1);
    assert_eq!(a.name(), "A");
    assert_eq!(kinds(a), [StmtKind::Store, StmtKind::Goto]);
    match a.stmts()[0].body() {
        StmtBody::Store { array, offset, value } => {
            assert_eq!(array.global_array(), Some(&arr));
            assert_eq!(offset.bv_const_value().cloned(), Some(BigUint::from(0u32)));
            assert_eq!(*value.typ(), Type::bv(8));
            assert_eq!(value.bv_const_value().cloned(), Some(BigUint::from(42u32)));
        }
        body => panic!("expected a store, got {body:?}"),
    }
    assert_eq!(a.stmts()[1].targets(), [b]);
    let loc = a.stmts()[0].source_locs().innermost().unwrap();
    assert_eq!(loc.short_string(), "store_then_load.cl:2:3");

    let block_b = f.block(b);
    assert_eq!(block_b.name(), "B");
    assert_eq!(kinds(block_b), [StmtKind::Eval, StmtKind::Return]);
    assert!(block_b.successors().is_empty());
    assert!(block_b.stmts().iter().all(|s| s.parent() == Some(b)));
    match block_b.stmts()[0].body() {
        StmtBody::Eval(e) => {
            assert!(e.ptr_eq(&load));
            assert_eq!(e.kind(), ExprKind::Load);
            let operands = e.operands();
            assert_eq!(operands[0].global_array(), Some(&arr));
            assert_eq!(operands[1].bv_const_value().cloned(), Some(BigUint::from(0u32)));
            assert_eq!(*e.typ(), Type::bv(8));
        }
        body => panic!("expected an eval, got {body:?}"),
    }

    drop(module);
    assert!(!load.has_eval_stmt());
    assert_eq!(load.ref_count(), 1);
}
