/*! IR view types for post-SSA diagnostic rendering.
 *
 * A host compiler hands over one `Function` per compiled function: basic blocks with
 * resolved predecessor/successor lists, statements in execution order, and tree-structured
 * expressions. Statements live in a per-function arena so SSA values can point back at
 * their defining statement without owning it. The renderer in `phiscope-emit` borrows
 * these views read-only for the duration of one report.
 */

pub mod block;
pub mod builder;
pub mod expr;
pub mod function;
pub mod op;
pub mod stmt;

pub use block::{BasicBlock, BlockIndex};
pub use builder::{BlockBuilder, FunctionBuilder};
pub use expr::{DeclKind, Expression};
pub use function::Function;
pub use op::Operator;
pub use stmt::{Statement, StmtId};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IrError {
    #[error("duplicate block index {0}")]
    DuplicateBlock(BlockIndex),
    #[error("block {block} references unknown statement {id}")]
    UnknownStatement { block: BlockIndex, id: StmtId },
    #[error("ssa value {label} references unknown defining statement {id}")]
    DanglingSsaDef { label: String, id: StmtId },
    #[error("assign in block {block} must carry an operator and a second operand together")]
    MalformedAssign { block: BlockIndex },
}

pub type Result<T> = std::result::Result<T, IrError>;
