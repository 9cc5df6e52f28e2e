use crate::stmt::StmtId;
use serde::{Deserialize, Serialize};

/// Host-assigned block number, unique within one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockIndex(pub u32);

impl std::fmt::Display for BlockIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A straight-line run of statements with resolved CFG edges.
///
/// Edge lists name block indices, not blocks; the host may reference blocks it never
/// hands over (entry/exit pseudo-blocks), so the lists are kept as plain indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub index: BlockIndex,
    pub preds: Vec<BlockIndex>,
    pub succs: Vec<BlockIndex>,
    pub stmts: Vec<StmtId>,
}

impl BasicBlock {
    pub fn new(index: BlockIndex) -> Self {
        Self {
            index,
            preds: Vec::new(),
            succs: Vec::new(),
            stmts: Vec::new(),
        }
    }

    pub fn add_pred(&mut self, index: BlockIndex) {
        self.preds.push(index);
    }

    pub fn add_succ(&mut self, index: BlockIndex) {
        self.succs.push(index);
    }

    pub fn add_stmt(&mut self, id: StmtId) {
        self.stmts.push(id);
    }
}
