// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use super::{BasicBlock, BlockId, Clause, Contract, Expr, SourceLocs, StmtBody, Type, Var};
use crate::interned_string::InternedString;
use std::cell::OnceCell;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The identity and signature of a function, as seen from a call site.
///
/// Call expressions and statements hold a `FunctionRef` rather than the [`Function`] itself,
/// so that a function can call itself without creating an ownership cycle. Like the other
/// handles it compares by identity.
#[derive(Clone)]
pub struct FunctionRef(Rc<FunctionSignature>);

struct FunctionSignature {
    name: InternedString,
    parameters: Vec<Type>,
    returns: Vec<Type>,
}

impl FunctionRef {
    pub fn name(&self) -> InternedString {
        self.0.name
    }

    pub fn parameters(&self) -> &[Type] {
        &self.0.parameters
    }

    pub fn returns(&self) -> &[Type] {
        &self.0.returns
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for FunctionRef {}

impl Hash for FunctionRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl Debug for FunctionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FunctionRef({}: {:?} -> {:?})", self.0.name, self.0.parameters, self.0.returns)
    }
}

/// A function of the kernel module. It owns its variables and its basic blocks; the control
/// flow graph is given by the `Goto` statements of the blocks, and the first block is the
/// entry.
///
/// Parameters and return slots must all be added before the first call to [`Function::callee`]:
/// from then on the signature is shared with call sites and is frozen.
#[derive(Debug)]
pub struct Function {
    name: InternedString,
    args: Vec<Var>,
    returns: Vec<Var>,
    locals: Vec<Var>,
    blocks: Vec<BasicBlock>,
    contract: Contract,
    attributes: Vec<InternedString>,
    callee: OnceCell<FunctionRef>,
}

/// Constructors
impl Function {
    pub fn new<T: Into<InternedString>>(name: T) -> Self {
        Function {
            name: name.into(),
            args: Vec::new(),
            returns: Vec::new(),
            locals: Vec::new(),
            blocks: Vec::new(),
            contract: Contract::default(),
            attributes: Vec::new(),
            callee: OnceCell::new(),
        }
    }
}

/// Getters
impl Function {
    pub fn name(&self) -> InternedString {
        self.name
    }

    pub fn args(&self) -> &[Var] {
        &self.args
    }

    pub fn returns(&self) -> &[Var] {
        &self.returns
    }

    pub fn locals(&self) -> &[Var] {
        &self.locals
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> &BasicBlock {
        &self.blocks[id.index()]
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut BasicBlock {
        &mut self.blocks[id.index()]
    }

    /// The block execution starts in; `None` for a declaration without a body.
    pub fn entry_block(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }

    pub fn contract(&self) -> &Contract {
        &self.contract
    }

    pub fn attributes(&self) -> &[InternedString] {
        &self.attributes
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| *a == attribute)
    }

    /// The handle call sites use to refer to this function. Freezes the signature.
    pub fn callee(&self) -> FunctionRef {
        self.callee
            .get_or_init(|| {
                FunctionRef(Rc::new(FunctionSignature {
                    name: self.name,
                    parameters: self.args.iter().map(|v| *v.typ()).collect(),
                    returns: self.returns.iter().map(|v| *v.typ()).collect(),
                }))
            })
            .clone()
    }
}

/// Setters
impl Function {
    fn assert_signature_open(&self, what: &str) {
        assert!(
            self.callee.get().is_none(),
            "Cannot add {what} to {}: its signature is already used by call sites",
            self.name
        );
    }

    pub fn add_arg<T: Into<InternedString>>(&mut self, name: T, typ: Type) -> Var {
        self.assert_signature_open("a parameter");
        let var = Var::new(name, typ);
        self.args.push(var.clone());
        var
    }

    pub fn add_return<T: Into<InternedString>>(&mut self, name: T, typ: Type) -> Var {
        self.assert_signature_open("a return value");
        let var = Var::new(name, typ);
        self.returns.push(var.clone());
        var
    }

    pub fn add_local<T: Into<InternedString>>(&mut self, name: T, typ: Type) -> Var {
        let var = Var::new(name, typ);
        self.locals.push(var.clone());
        var
    }

    /// Append an empty block. The first block added is the entry block.
    pub fn add_block<T: Into<InternedString>>(&mut self, name: T) -> BlockId {
        let id = BlockId::new(self.blocks.len());
        self.blocks.push(BasicBlock::new(id, name));
        id
    }

    /// `requires pred`
    pub fn add_requires(&mut self, pred: Expr, locs: SourceLocs) {
        self.contract.requires.push(Clause::new(pred, locs));
    }

    /// `ensures pred`
    pub fn add_ensures(&mut self, pred: Expr, locs: SourceLocs) {
        self.contract.ensures.push(Clause::new(pred, locs));
    }

    pub fn add_attribute<T: Into<InternedString>>(&mut self, attribute: T) {
        self.attributes.push(attribute.into());
    }
}

impl Function {
    /// Panics if a `Goto` names a block this function does not have.
    pub(crate) fn check_goto_targets(&self) {
        for block in &self.blocks {
            for stmt in block.iter() {
                if let StmtBody::Goto(targets) = stmt.body() {
                    for target in targets {
                        assert!(
                            target.index() < self.blocks.len(),
                            "Goto in {}::{} targets {target:?}, which is not a block of {}",
                            self.name,
                            block.name(),
                            self.name
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Function;
    use crate::ir::{Expr, SourceLocs, Stmt, Type};

    #[test]
    fn signature_comes_from_args_and_returns() {
        let mut f = Function::new("saxpy");
        let a = f.add_arg("a", Type::float(32));
        f.add_arg("n", Type::bv(32));
        f.add_return("r", Type::bool());
        f.add_local("i", Type::bv(32));

        let callee = f.callee();
        assert_eq!(callee.name(), "saxpy");
        assert_eq!(callee.parameters(), &[Type::float(32), Type::bv(32)]);
        assert_eq!(callee.returns(), &[Type::bool()]);
        assert_eq!(callee, f.callee());
        assert_eq!(f.args()[0], a);
        assert_eq!(f.locals().len(), 1);
    }

    #[test]
    #[should_panic(expected = "signature is already used")]
    fn signature_is_frozen() {
        let mut f = Function::new("g");
        let _ = f.callee();
        f.add_arg("late", Type::bv(8));
    }

    #[test]
    fn blocks_in_creation_order() {
        let mut f = Function::new("k");
        assert!(f.entry_block().is_none());
        let entry = f.add_block("entry");
        let exit = f.add_block("exit");
        f.block_mut(entry).add_stmt(Stmt::goto(exit));
        f.block_mut(exit).add_stmt(Stmt::ret());

        assert_eq!(f.entry_block().unwrap().id(), entry);
        assert_eq!(f.block(exit).name(), "exit");
        assert_eq!(f.blocks().len(), 2);
        f.check_goto_targets();
    }

    #[test]
    fn contract_and_attributes() {
        let mut f = Function::new("kernel_main");
        let n = f.add_arg("n", Type::bv(32));
        f.add_requires(Expr::var_ref(&n).bv_sgt(Expr::bv_zero(32)), SourceLocs::none());
        f.add_ensures(Expr::bool_true(), SourceLocs::none());
        f.add_attribute("kernel");

        assert_eq!(f.contract().requires().len(), 1);
        assert_eq!(f.contract().ensures().len(), 1);
        assert!(f.has_attribute("kernel"));
        assert!(!f.has_attribute("inline"));
    }
}
