/*! Render post-SSA IR into human-readable diagnostic text.
 *
 * One report per function: a `func` wrapper, a CFG identity line per basic block, and one
 * line per statement with nested expressions reconstructed from their tree form. SSA
 * values defined by a phi-merge expand inline so the merge arguments are visible where
 * the value is used. Every dispatch has a catch-all, so IR kinds this crate was never
 * taught about degrade to labeled placeholders instead of failing the host compilation.
 */

pub mod emitter;
pub mod expr;
pub mod ops;
pub mod report;
pub mod sink;

pub use emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
pub use expr::ExprFormatter;
pub use ops::op_symbol;
pub use report::FunctionReportEmitter;
pub use sink::SharedSink;
