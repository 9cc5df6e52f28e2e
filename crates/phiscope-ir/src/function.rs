use crate::block::{BasicBlock, BlockIndex};
use crate::expr::Expression;
use crate::stmt::{Statement, StmtId};
use crate::IrError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One compiled function as handed over by the host after SSA construction.
///
/// Block order is whatever the host chose; rendering preserves it. All statements,
/// including phi-merges that blocks never list directly, live in `stmts` so that
/// `Expression::SsaName` back-references stay plain indices instead of owning pointers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub blocks: IndexMap<BlockIndex, BasicBlock>,
    pub stmts: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: IndexMap::new(),
            stmts: Vec::new(),
        }
    }

    pub fn add_stmt(&mut self, stmt: Statement) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    pub fn stmt(&self, id: StmtId) -> Option<&Statement> {
        self.stmts.get(id.index())
    }

    pub fn add_block(&mut self, block: BasicBlock) -> crate::Result<()> {
        let index = block.index;
        if self.blocks.contains_key(&index) {
            return Err(IrError::DuplicateBlock(index));
        }
        self.blocks.insert(index, block);
        Ok(())
    }

    pub fn block(&self, index: BlockIndex) -> Option<&BasicBlock> {
        self.blocks.get(&index)
    }

    /// Structural sanity check hosts can run before rendering.
    ///
    /// Rendering never requires it: the emitter degrades gracefully on anything this
    /// rejects. It exists so a host can surface construction bugs early.
    pub fn validate(&self) -> crate::Result<()> {
        for block in self.blocks.values() {
            for &id in &block.stmts {
                let stmt = self.stmt(id).ok_or(IrError::UnknownStatement {
                    block: block.index,
                    id,
                })?;
                if let Statement::Assign { op, rhs2, .. } = stmt {
                    if op.is_some() != rhs2.is_some() {
                        return Err(IrError::MalformedAssign { block: block.index });
                    }
                }
            }
        }

        for stmt in &self.stmts {
            for operand in stmt.operands() {
                self.check_ssa_defs(operand)?;
            }
        }

        Ok(())
    }

    fn check_ssa_defs(&self, root: &Expression) -> crate::Result<()> {
        let mut pending = vec![root];
        while let Some(expr) = pending.pop() {
            if let Expression::SsaName { name, version, def } = expr {
                if self.stmt(*def).is_none() {
                    let label = format!(
                        "{}__v{}",
                        name.as_deref().unwrap_or("unk_ssa_name"),
                        version
                    );
                    return Err(IrError::DanglingSsaDef { label, id: *def });
                }
            }
            pending.extend(expr.children());
        }
        Ok(())
    }
}
