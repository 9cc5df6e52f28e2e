use crate::block::{BasicBlock, BlockIndex};
use crate::function::Function;
use crate::stmt::{Statement, StmtId};

/// Chainable construction helper for hosts (and tests) assembling a `Function`.
pub struct FunctionBuilder {
    function: Function,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            function: Function::new(name),
        }
    }

    /// Adds a statement to the arena without attaching it to any block. Phi-merges
    /// referenced only through SSA back-references go in this way.
    pub fn stmt(&mut self, stmt: Statement) -> StmtId {
        self.function.add_stmt(stmt)
    }

    pub fn block(&mut self, index: u32) -> crate::Result<BlockBuilder<'_>> {
        let index = BlockIndex(index);
        self.function.add_block(BasicBlock::new(index))?;
        Ok(BlockBuilder {
            function: &mut self.function,
            index,
        })
    }

    pub fn finish(self) -> Function {
        self.function
    }
}

pub struct BlockBuilder<'a> {
    function: &'a mut Function,
    index: BlockIndex,
}

impl BlockBuilder<'_> {
    pub fn pred(self, index: u32) -> Self {
        self.with_block(|block| block.add_pred(BlockIndex(index)))
    }

    pub fn succ(self, index: u32) -> Self {
        self.with_block(|block| block.add_succ(BlockIndex(index)))
    }

    /// Adds a statement to the arena and appends it to this block.
    pub fn stmt(self, stmt: Statement) -> Self {
        let id = self.function.add_stmt(stmt);
        self.attach(id)
    }

    /// Appends an already-added arena statement to this block.
    pub fn attach(self, id: StmtId) -> Self {
        self.with_block(|block| block.add_stmt(id))
    }

    fn with_block(self, apply: impl FnOnce(&mut BasicBlock)) -> Self {
        // The block was inserted by FunctionBuilder::block, so the lookup holds.
        if let Some(block) = self.function.blocks.get_mut(&self.index) {
            apply(block);
        }
        self
    }
}
