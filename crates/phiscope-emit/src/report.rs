use crate::emitter::{EmitContext, EmitHelper, EmitResult, Emitter};
use crate::expr::ExprFormatter;
use crate::ops::op_symbol;
use phiscope_ir::{BasicBlock, BlockIndex, Function, Statement};
use std::io::Write;

/// Renders one complete per-function report:
///
/// ```text
/// func: "<name>" {
///     bb: (<preds>) -> (<index>) -> (<succs>) {
///         stmt: "<KIND>" (<code>) { <body> }
///     }
/// }
/// ```
///
/// Blocks and statements come out in host order, one tab level for blocks and two for
/// statements. Nothing aborts a report: unknown statement kinds and dangling statement
/// ids degrade to `GIMPLE_UNKNOWN` lines.
pub struct FunctionReportEmitter;

impl FunctionReportEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Block identity line. The edge lists join separator-correctly for 0, 1 and N
    /// elements.
    pub fn block_header(block: &BasicBlock) -> String {
        format!(
            "bb: ({}) -> ({}) -> ({})",
            join_indices(&block.preds),
            block.index,
            join_indices(&block.succs)
        )
    }

    fn statement_line(&self, function: &Function, stmt: &Statement) -> String {
        let body = self.statement_body(function, stmt);
        if body.is_empty() {
            format!("stmt: \"{}\" ({}) {{}}", stmt.kind_name(), stmt.kind_code())
        } else {
            format!(
                "stmt: \"{}\" ({}) {{ {} }}",
                stmt.kind_name(),
                stmt.kind_code(),
                body
            )
        }
    }

    fn statement_body(&self, function: &Function, stmt: &Statement) -> String {
        let mut exprs = ExprFormatter::new(function);
        match stmt {
            Statement::Assign {
                lhs,
                op,
                rhs1,
                rhs2,
            } => match (op, rhs2) {
                (Some(op), Some(rhs2)) => format!(
                    "{} = {} {} {}",
                    exprs.format(lhs),
                    exprs.format(rhs1),
                    op_symbol(*op),
                    exprs.format(rhs2)
                ),
                // A plain copy, or a malformed half-binary assign degraded to one.
                _ => format!("{} = {}", exprs.format(lhs), exprs.format(rhs1)),
            },
            Statement::Call { lhs, callee, args } => {
                let prefix = match lhs {
                    Some(lhs) => format!("{} = ", exprs.format(lhs)),
                    None => String::new(),
                };
                let args: Vec<String> = args.iter().map(|arg| exprs.format(arg)).collect();
                format!("{}{}({})", prefix, callee, args.join(", "))
            }
            Statement::Cond { lhs, op, rhs } => format!(
                "{} {} {}",
                exprs.format(lhs),
                op_symbol(*op),
                exprs.format(rhs)
            ),
            Statement::Label
            | Statement::Return
            | Statement::Phi { .. }
            | Statement::Other { .. } => String::new(),
        }
    }
}

impl Default for FunctionReportEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for FunctionReportEmitter {
    type Item = Function;

    fn emit<W: Write>(
        &self,
        function: &Function,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        EmitHelper::write_line(writer, context, &format!("func: \"{}\" {{", function.name))?;
        context.indent();

        for block in function.blocks.values() {
            EmitHelper::write_line(
                writer,
                context,
                &format!("{} {{", Self::block_header(block)),
            )?;
            context.indent();

            for &id in &block.stmts {
                let line = match function.stmt(id) {
                    Some(stmt) => self.statement_line(function, stmt),
                    // Host handed over a block referencing a statement it never
                    // supplied; report the id rather than dropping the line.
                    None => self.statement_line(function, &Statement::Other { raw_kind: id.0 }),
                };
                EmitHelper::write_line(writer, context, &line)?;
            }

            context.dedent();
            EmitHelper::write_line(writer, context, "}")?;
        }

        context.dedent();
        EmitHelper::write_line(writer, context, "}")?;
        writeln!(writer)?;
        Ok(())
    }
}

fn join_indices(indices: &[BlockIndex]) -> String {
    indices
        .iter()
        .map(BlockIndex::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
