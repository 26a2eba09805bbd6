// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// This file has a lot of function with names like "not" and "eq"
#![allow(clippy::should_implement_trait)]

use self::BinaryOperator::*;
use self::ExprValue::*;
use self::UnaryOperator::*;
use super::{FunctionRef, GlobalArray, Type, Var};
use num::bigint::{BigInt, BigUint};
use num::Integer;
use num_traits::{One, Zero};
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use tracing::{error, trace};

///////////////////////////////////////////////////////////////////////////////////////////////
/// Datatypes
///////////////////////////////////////////////////////////////////////////////////////////////

/// An `Expr` is a shared, immutable value expression with a type.
///
/// `Expr` is a reference counted handle: cloning it adds a holder to the same node, and the
/// node is freed when its last holder (a parent expression, a statement, or the producer) is
/// dropped. Sub-expressions are held the same way, so expressions form a DAG in which one
/// node may have many parents. Nodes are built bottom up and never modified, so no cycle can
/// be created.
///
/// The fields are private and there are no mutable getters: the constructors below are the
/// only way to build an `Expr`. Each constructor checks the operand types (panicking on a
/// mismatch, which is a bug in the producer), computes the result type, and applies the few
/// local simplifications the backend expects:
///  - `array_id(pointer(a, o)) == a` and `array_offset(pointer(a, o)) == o`
///  - `bv_to_float(float_to_bv(x)) == x` and `float_to_bv(bv_to_float(x)) == x`
///  - `bv_to_ptr(ptr_to_bv(x)) == x` and `ptr_to_bv(bv_to_ptr(x)) == x`
///  - `bv_add` of two constants is the constant sum, modulo `2^width`
///
/// Nothing else is folded, and there is no hash-consing: building the same expression twice
/// yields two nodes.
///
/// Expressions are built in a "chained" style, e.g. `*(p + 4)` as a byte load is
/// `Expr::load(p.clone().array_id(), p.array_offset().bv_add(Expr::bv_const(64, 4)))`.
#[derive(Clone)]
pub struct Expr(Rc<ExprNode>);

struct ExprNode {
    value: ExprValue,
    typ: Type,
    /// Number of live `Eval` statements for this expression
    eval_stmts: Cell<usize>,
    /// The producer does not want `Eval` statements for this expression
    prevent_eval_stmt: Cell<bool>,
}

/// The different kinds of values an expression can have.
#[derive(Debug)]
pub enum ExprValue {
    /// `42bv8`. The value is kept in `[0, 2^width)`.
    BvConst(BigUint),
    /// `true` / `false`
    BoolConst(bool),
    /// The identity of a module level array
    GlobalArrayRef(GlobalArray),
    /// `(array, offset)`
    Pointer { array: Expr, offset: Expr },
    /// `array[offset]`, one byte
    Load { array: Expr, offset: Expr },
    /// A function local variable
    VarRef(Var),
    /// `callee(arguments)` for a callee without side effects on memory
    Call { callee: FunctionRef, arguments: Vec<Expr> },
    /// `e[offset + width - 1 : offset]`. Width is in the outer `Expr` type.
    BvExtract { e: Expr, offset: u64 },
    /// Zero extension of `e` to the outer `Expr` width
    BvZExt(Expr),
    /// Sign extension of `e` to the outer `Expr` width
    BvSExt(Expr),
    /// `op e`
    UnOp { op: UnaryOperator, e: Expr },
    /// `lhs op rhs`
    BinOp { op: BinaryOperator, lhs: Expr, rhs: Expr },
}

/// Unary operators. Conversions between value categories, plus boolean negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Array part of a pointer
    ArrayId,
    /// Offset part of a pointer
    ArrayOffset,
    /// Reinterpret a 32 or 64 bit bit-vector as a float
    BvToFloat,
    /// Reinterpret a float as a bit-vector
    FloatToBv,
    BvToPtr,
    PtrToBv,
    /// `bv1` to bool
    BvToBool,
    /// bool to `bv1`
    BoolToBv,
    /// `!e`
    Not,
}

/// Binary operators. Unless noted, both operands are bit-vectors of the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    BvAdd,
    BvSub,
    BvMul,
    BvSDiv,
    BvUDiv,
    BvSRem,
    BvURem,
    /// `lhs ++ rhs`, twice the operand width
    BvConcat,
    BvAnd,
    BvOr,
    BvXor,
    BvShl,
    BvLShr,
    BvAShr,
    BvSgt,
    BvSge,
    BvSlt,
    BvSle,
    BvUgt,
    BvUge,
    BvUlt,
    BvUle,
    /// Any two operands of the same type
    Eq,
    /// Any two operands of the same type
    Ne,
    /// Boolean operands
    And,
    /// Boolean operands
    Or,
}

/// The closed set of expression kinds, one per concrete node shape.
/// Unary and binary operators are grouped by `is_unary` / `is_binary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    BvConst,
    BoolConst,
    GlobalArrayRef,
    Pointer,
    Load,
    VarRef,
    Call,
    BvExtract,
    BvZExt,
    BvSExt,
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl ExprKind {
    pub fn is_unary(&self) -> bool {
        match self {
            ExprKind::Unary(_) => true,
            _ => false,
        }
    }

    pub fn is_binary(&self) -> bool {
        match self {
            ExprKind::Binary(_) => true,
            _ => false,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////
/// Implementations
///////////////////////////////////////////////////////////////////////////////////////////////

impl Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expr").field("value", &self.0.value).field("typ", &self.0.typ).finish()
    }
}

/// Getters
impl Expr {
    pub fn typ(&self) -> &Type {
        &self.0.typ
    }

    pub fn value(&self) -> &ExprValue {
        &self.0.value
    }

    pub fn kind(&self) -> ExprKind {
        match self.value() {
            BvConst(_) => ExprKind::BvConst,
            BoolConst(_) => ExprKind::BoolConst,
            GlobalArrayRef(_) => ExprKind::GlobalArrayRef,
            Pointer { .. } => ExprKind::Pointer,
            Load { .. } => ExprKind::Load,
            VarRef(_) => ExprKind::VarRef,
            Call { .. } => ExprKind::Call,
            BvExtract { .. } => ExprKind::BvExtract,
            BvZExt(_) => ExprKind::BvZExt,
            BvSExt(_) => ExprKind::BvSExt,
            UnOp { op, .. } => ExprKind::Unary(*op),
            BinOp { op, .. } => ExprKind::Binary(*op),
        }
    }

    /// If the expression is a bit-vector constant, return its (unsigned) value
    pub fn bv_const_value(&self) -> Option<&BigUint> {
        match self.value() {
            BvConst(v) => Some(v),
            _ => None,
        }
    }

    pub fn bool_const_value(&self) -> Option<bool> {
        match self.value() {
            BoolConst(b) => Some(*b),
            _ => None,
        }
    }

    /// The variable of a `VarRef`
    pub fn var(&self) -> Option<&Var> {
        match self.value() {
            VarRef(v) => Some(v),
            _ => None,
        }
    }

    /// The array of a `GlobalArrayRef`
    pub fn global_array(&self) -> Option<&GlobalArray> {
        match self.value() {
            GlobalArrayRef(a) => Some(a),
            _ => None,
        }
    }

    /// The operand of a unary operator or an extract/extension
    pub fn sub_expr(&self) -> Option<&Expr> {
        match self.value() {
            UnOp { e, .. } | BvExtract { e, .. } | BvZExt(e) | BvSExt(e) => Some(e),
            _ => None,
        }
    }

    /// Direct sub-expressions, left to right.
    pub fn operands(&self) -> Vec<&Expr> {
        match self.value() {
            BvConst(_) | BoolConst(_) | GlobalArrayRef(_) | VarRef(_) => vec![],
            Pointer { array, offset } | Load { array, offset } => vec![array, offset],
            Call { arguments, .. } => arguments.iter().collect(),
            BvExtract { e, .. } | BvZExt(e) | BvSExt(e) | UnOp { e, .. } => vec![e],
            BinOp { lhs, rhs, .. } => vec![lhs, rhs],
        }
    }

    /// Whether `self` and `other` are the same node (not merely structurally equal).
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The number of live holders of this node, including `self`.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

/// Evaluation markers
impl Expr {
    /// At least one `Eval` statement for this expression is alive.
    pub fn has_eval_stmt(&self) -> bool {
        self.0.eval_stmts.get() > 0
    }

    pub fn prevents_eval_stmt(&self) -> bool {
        self.0.prevent_eval_stmt.get()
    }

    /// Forbid `Eval` statements for this expression from now on.
    pub fn prevent_eval_stmt(&self) {
        self.0.prevent_eval_stmt.set(true);
    }

    pub(crate) fn add_eval_stmt_ref(&self) {
        self.0.eval_stmts.set(self.0.eval_stmts.get() + 1);
    }

    pub(crate) fn release_eval_stmt_ref(&self) {
        let live = self.0.eval_stmts.get();
        assert!(live > 0, "Eval statement released for an expression with no live Eval");
        self.0.eval_stmts.set(live - 1);
    }
}

/// Private constructor. The type is evaluated before the value so that it may borrow operands
/// the value then moves.
macro_rules! expr {
    ( $value:expr, $typ:expr ) => {{
        let typ = $typ;
        let value = $value;
        Expr(Rc::new(ExprNode {
            value,
            typ,
            eval_stmts: Cell::new(0),
            prevent_eval_stmt: Cell::new(false),
        }))
    }};
}

/// Constructors for the leaf and memory expressions
impl Expr {
    /// `value bv<width>`, wrapped into `[0, 2^width)`. Negative values are taken in two's
    /// complement, so `bv_const(8, -1)` is `255bv8`.
    pub fn bv_const<T: Into<BigInt>>(width: u64, value: T) -> Self {
        let typ = Type::bv(width);
        let modulus = BigInt::one() << width;
        let value: BigInt = value.into();
        // mod_floor by a positive modulus is never negative
        let (_, magnitude) = value.mod_floor(&modulus).into_parts();
        expr!(BvConst(magnitude), typ)
    }

    /// `0bv<width>`
    pub fn bv_zero(width: u64) -> Self {
        expr!(BvConst(BigUint::zero()), Type::bv(width))
    }

    pub fn bool_constant(c: bool) -> Self {
        expr!(BoolConst(c), Type::bool())
    }

    pub fn bool_true() -> Self {
        Expr::bool_constant(true)
    }

    pub fn bool_false() -> Self {
        Expr::bool_constant(false)
    }

    pub fn global_array_ref(array: &GlobalArray) -> Self {
        expr!(GlobalArrayRef(array.clone()), Type::array_id())
    }

    /// `(array, offset)`. The pointer is as wide as the offset.
    pub fn pointer(array: Expr, offset: Expr) -> Self {
        assert!(
            array.typ().is_array_id(),
            "Pointer requires an array id as first operand, got {}",
            array.typ()
        );
        assert!(
            offset.typ().is_bv(),
            "Pointer requires a bit-vector offset, got {}",
            offset.typ()
        );
        expr!(Pointer { array, offset }, Type::pointer(offset.typ().expect_width()))
    }

    /// `array[offset]`. Memory is byte addressed, so the result is always `bv8`.
    pub fn load(array: Expr, offset: Expr) -> Self {
        assert!(
            array.typ().is_array_id(),
            "Load requires an array id as first operand, got {}",
            array.typ()
        );
        assert!(offset.typ().is_bv(), "Load requires a bit-vector offset, got {}", offset.typ());
        expr!(Load { array, offset }, Type::bv(8))
    }

    /// A reference to `var`, with the variable's type
    pub fn var_ref(var: &Var) -> Self {
        expr!(VarRef(var.clone()), *var.typ())
    }

    pub fn typecheck_call(callee: &FunctionRef, arguments: &[Expr]) -> bool {
        let parameters = callee.parameters();
        if arguments.len() != parameters.len() {
            error!(
                callee=%callee.name(),
                expected=parameters.len(),
                got=arguments.len(),
                "Wrong number of arguments"
            );
            return false;
        }
        parameters.iter().zip(arguments.iter()).all(|(p, a)| {
            if a.typ() == p {
                true
            } else {
                error!(param=?p, arg=?a.typ(), "Argument doesn't check");
                false
            }
        })
    }

    /// `callee(arguments)` as a value. The callee must have exactly one return value.
    ///
    /// For a call in statement position use `Stmt::call`.
    pub fn call(callee: &FunctionRef, arguments: Vec<Expr>) -> Self {
        assert!(
            Expr::typecheck_call(callee, &arguments),
            "Function call does not type check:\nfunc: {callee:?}\nargs: {arguments:?}"
        );
        let typ = match callee.returns() {
            [ret] => *ret,
            rets => unreachable!(
                "Call expression needs exactly one return value, {} has {}",
                callee.name(),
                rets.len()
            ),
        };
        expr!(Call { callee: callee.clone(), arguments }, typ)
    }
}

/// Constructors for bit-vector slicing
impl Expr {
    /// Bits `[offset, offset + width)` of `self`
    pub fn bv_extract(self, offset: u64, width: u64) -> Self {
        assert!(self.typ().is_bv(), "BvExtract requires a bit-vector, got {}", self.typ());
        let src = self.typ().expect_width();
        assert!(
            width > 0 && width <= src && offset <= src - width,
            "BvExtract of {width} bits at offset {offset} out of range for {}",
            self.typ()
        );
        expr!(BvExtract { e: self, offset }, Type::bv(width))
    }

    fn typecheck_extension(&self, width: u64) -> bool {
        match self.typ() {
            Type::Bv { width: src } => *src <= width,
            _ => false,
        }
    }

    /// Zero extend `self` to `width` bits
    pub fn bv_zext(self, width: u64) -> Self {
        assert!(
            self.typecheck_extension(width),
            "BvZExt to {width} bits does not type check for {}",
            self.typ()
        );
        expr!(BvZExt(self), Type::bv(width))
    }

    /// Sign extend `self` to `width` bits
    pub fn bv_sext(self, width: u64) -> Self {
        assert!(
            self.typecheck_extension(width),
            "BvSExt to {width} bits does not type check for {}",
            self.typ()
        );
        expr!(BvSExt(self), Type::bv(width))
    }
}

/// Constructors for unary operators
impl Expr {
    fn typecheck_unop_arg(op: UnaryOperator, arg: &Expr) -> bool {
        match op {
            ArrayId | ArrayOffset | PtrToBv => arg.typ().is_pointer(),
            BvToFloat => arg.typ().is_bv_of_width(32) || arg.typ().is_bv_of_width(64),
            FloatToBv => arg.typ().is_float(),
            BvToPtr => arg.typ().is_bv(),
            BvToBool => arg.typ().is_bv_of_width(1),
            BoolToBv | Not => arg.typ().is_bool(),
        }
    }

    fn unop_return_type(op: UnaryOperator, arg: &Expr) -> Type {
        match op {
            ArrayId => Type::array_id(),
            ArrayOffset | FloatToBv | PtrToBv => Type::bv(arg.typ().expect_width()),
            BvToFloat => Type::float(arg.typ().expect_width()),
            BvToPtr => Type::pointer(arg.typ().expect_width()),
            BvToBool | Not => Type::bool(),
            BoolToBv => Type::bv(1),
        }
    }

    /// Private helper function to make unary operators
    fn unop(self, op: UnaryOperator) -> Expr {
        assert!(
            Expr::typecheck_unop_arg(op, &self),
            "{op:?} does not type check for operand of type {}",
            self.typ()
        );
        let typ = Expr::unop_return_type(op, &self);
        expr!(UnOp { op, e: self }, typ)
    }

    /// If `self` is `inverse(x)`, return `x`
    fn strip_unop(&self, inverse: UnaryOperator) -> Option<Expr> {
        match self.value() {
            UnOp { op, e } if *op == inverse => Some(e.clone()),
            _ => None,
        }
    }

    /// The array part of pointer `self`
    pub fn array_id(self) -> Expr {
        assert!(self.typ().is_pointer(), "ArrayId requires a pointer, got {}", self.typ());
        if let Pointer { array, .. } = self.value() {
            trace!(rule = "array_id_of_pointer", "simplified");
            return array.clone();
        }
        self.unop(ArrayId)
    }

    /// The offset part of pointer `self`
    pub fn array_offset(self) -> Expr {
        assert!(self.typ().is_pointer(), "ArrayOffset requires a pointer, got {}", self.typ());
        if let Pointer { offset, .. } = self.value() {
            trace!(rule = "array_offset_of_pointer", "simplified");
            return offset.clone();
        }
        self.unop(ArrayOffset)
    }

    pub fn bv_to_float(self) -> Expr {
        assert!(
            Expr::typecheck_unop_arg(BvToFloat, &self),
            "BvToFloat requires bv32 or bv64, got {}",
            self.typ()
        );
        if let Some(x) = self.strip_unop(FloatToBv) {
            trace!(rule = "bv_to_float_of_float_to_bv", "simplified");
            return x;
        }
        self.unop(BvToFloat)
    }

    pub fn float_to_bv(self) -> Expr {
        assert!(self.typ().is_float(), "FloatToBv requires a float, got {}", self.typ());
        if let Some(x) = self.strip_unop(BvToFloat) {
            trace!(rule = "float_to_bv_of_bv_to_float", "simplified");
            return x;
        }
        self.unop(FloatToBv)
    }

    pub fn bv_to_ptr(self) -> Expr {
        assert!(self.typ().is_bv(), "BvToPtr requires a bit-vector, got {}", self.typ());
        if let Some(x) = self.strip_unop(PtrToBv) {
            trace!(rule = "bv_to_ptr_of_ptr_to_bv", "simplified");
            return x;
        }
        self.unop(BvToPtr)
    }

    pub fn ptr_to_bv(self) -> Expr {
        assert!(self.typ().is_pointer(), "PtrToBv requires a pointer, got {}", self.typ());
        if let Some(x) = self.strip_unop(BvToPtr) {
            trace!(rule = "ptr_to_bv_of_bv_to_ptr", "simplified");
            return x;
        }
        self.unop(PtrToBv)
    }

    /// `bv1` to bool
    pub fn bv_to_bool(self) -> Expr {
        self.unop(BvToBool)
    }

    /// bool to `bv1`
    pub fn bool_to_bv(self) -> Expr {
        self.unop(BoolToBv)
    }

    /// `!self`
    pub fn not(self) -> Expr {
        self.unop(Not)
    }
}

/// Constructors for binary operators
impl Expr {
    fn typecheck_binop_args(op: BinaryOperator, lhs: &Expr, rhs: &Expr) -> bool {
        match op {
            // Arithmetic and bitwise
            BvAdd | BvSub | BvMul | BvSDiv | BvUDiv | BvSRem | BvURem | BvConcat | BvAnd | BvOr
            | BvXor | BvShl | BvLShr | BvAShr => lhs.typ().is_bv() && lhs.typ() == rhs.typ(),
            // Comparisons
            BvSgt | BvSge | BvSlt | BvSle | BvUgt | BvUge | BvUlt | BvUle => {
                lhs.typ().is_bv() && lhs.typ() == rhs.typ()
            }
            // Equalities
            Eq | Ne => lhs.typ() == rhs.typ(),
            // Boolean ops
            And | Or => lhs.typ().is_bool() && rhs.typ().is_bool(),
        }
    }

    fn binop_return_type(op: BinaryOperator, lhs: &Expr, rhs: &Expr) -> Type {
        match op {
            BvAdd | BvSub | BvMul | BvSDiv | BvUDiv | BvSRem | BvURem | BvAnd | BvOr | BvXor
            | BvShl | BvLShr | BvAShr => *lhs.typ(),
            BvConcat => Type::bv(lhs.typ().expect_width() + rhs.typ().expect_width()),
            BvSgt | BvSge | BvSlt | BvSle | BvUgt | BvUge | BvUlt | BvUle | Eq | Ne | And
            | Or => Type::bool(),
        }
    }

    /// Private helper function to make binary operators
    fn binop(self, op: BinaryOperator, rhs: Expr) -> Expr {
        assert!(
            Expr::typecheck_binop_args(op, &self, &rhs),
            "{op:?} does not type check for operands of type {} and {}",
            self.typ(),
            rhs.typ()
        );
        let typ = Expr::binop_return_type(op, &self, &rhs);
        expr!(BinOp { op, lhs: self, rhs }, typ)
    }

    /// `self + e`. Two constants fold into their sum modulo `2^width`.
    pub fn bv_add(self, e: Expr) -> Expr {
        assert!(
            Expr::typecheck_binop_args(BvAdd, &self, &e),
            "BvAdd does not type check for operands of type {} and {}",
            self.typ(),
            e.typ()
        );
        if let (Some(a), Some(b)) = (self.bv_const_value(), e.bv_const_value()) {
            let width = self.typ().expect_width();
            let sum = (a + b) % (BigUint::one() << width);
            trace!(rule = "bv_add_constants", "simplified");
            return expr!(BvConst(sum), Type::bv(width));
        }
        self.binop(BvAdd, e)
    }

    /// `self - e`
    pub fn bv_sub(self, e: Expr) -> Expr {
        self.binop(BvSub, e)
    }

    /// `self * e`
    pub fn bv_mul(self, e: Expr) -> Expr {
        self.binop(BvMul, e)
    }

    /// `self / e`, signed
    pub fn bv_sdiv(self, e: Expr) -> Expr {
        self.binop(BvSDiv, e)
    }

    /// `self / e`, unsigned
    pub fn bv_udiv(self, e: Expr) -> Expr {
        self.binop(BvUDiv, e)
    }

    /// `self % e`, signed
    pub fn bv_srem(self, e: Expr) -> Expr {
        self.binop(BvSRem, e)
    }

    /// `self % e`, unsigned
    pub fn bv_urem(self, e: Expr) -> Expr {
        self.binop(BvURem, e)
    }

    /// `self ++ e`, with `self` in the high bits
    pub fn bv_concat(self, e: Expr) -> Expr {
        self.binop(BvConcat, e)
    }

    pub fn bv_and(self, e: Expr) -> Expr {
        self.binop(BvAnd, e)
    }

    pub fn bv_or(self, e: Expr) -> Expr {
        self.binop(BvOr, e)
    }

    pub fn bv_xor(self, e: Expr) -> Expr {
        self.binop(BvXor, e)
    }

    pub fn bv_shl(self, e: Expr) -> Expr {
        self.binop(BvShl, e)
    }

    /// `self >> e` (unsigned logical shift)
    pub fn bv_lshr(self, e: Expr) -> Expr {
        self.binop(BvLShr, e)
    }

    /// `self >> e` (signed arithmetic shift)
    pub fn bv_ashr(self, e: Expr) -> Expr {
        self.binop(BvAShr, e)
    }

    /// `self > e`, signed
    pub fn bv_sgt(self, e: Expr) -> Expr {
        self.binop(BvSgt, e)
    }

    pub fn bv_sge(self, e: Expr) -> Expr {
        self.binop(BvSge, e)
    }

    pub fn bv_slt(self, e: Expr) -> Expr {
        self.binop(BvSlt, e)
    }

    pub fn bv_sle(self, e: Expr) -> Expr {
        self.binop(BvSle, e)
    }

    /// `self > e`, unsigned
    pub fn bv_ugt(self, e: Expr) -> Expr {
        self.binop(BvUgt, e)
    }

    pub fn bv_uge(self, e: Expr) -> Expr {
        self.binop(BvUge, e)
    }

    pub fn bv_ult(self, e: Expr) -> Expr {
        self.binop(BvUlt, e)
    }

    pub fn bv_ule(self, e: Expr) -> Expr {
        self.binop(BvUle, e)
    }

    /// `self == e`
    pub fn eq(self, e: Expr) -> Expr {
        self.binop(Eq, e)
    }

    /// `self != e`
    pub fn neq(self, e: Expr) -> Expr {
        self.binop(Ne, e)
    }

    /// `self && e`
    pub fn and(self, e: Expr) -> Expr {
        self.binop(And, e)
    }

    /// `self || e`
    pub fn or(self, e: Expr) -> Expr {
        self.binop(Or, e)
    }
}
