/*! Unified interface for post-SSA IR diagnostic reports.
 *
 * Single import for a host driver: build or receive `Function` views, then hand them to
 * `FunctionReportEmitter` (or a `SharedSink` when compiling concurrently) once per
 * compiled function.
 */

pub use phiscope_emit as emit;
pub use phiscope_ir as ir;

pub use phiscope_ir::{
    BasicBlock, BlockIndex, DeclKind, Expression, Function, FunctionBuilder, IrError, Operator,
    Statement, StmtId,
};

pub use phiscope_emit::{EmitContext, Emitter, FunctionReportEmitter, SharedSink};
