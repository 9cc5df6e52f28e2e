use phiscope_ir::Operator;

/// Display symbol for an operator code. Total: codes outside the table come back as
/// `?(<code>)?` so an unrecognized host operator never aborts a report.
pub fn op_symbol(op: Operator) -> String {
    use Operator::*;

    match op {
        // Arithmetic.
        PointerPlus | Plus => "+".to_string(),
        Negate | Minus => "-".to_string(),
        Mult => "*".to_string(),
        TruncDiv | CeilDiv | FloorDiv | RoundDiv | ExactDiv | RealDiv => "/".to_string(),
        // Shifts.
        Lshift => "<<".to_string(),
        Rshift => ">>".to_string(),
        // Bitwise.
        BitIor => "|".to_string(),
        BitXor => "^".to_string(),
        BitAnd => "&".to_string(),
        BitNot => "!".to_string(),
        // Truth-logical.
        TruthAndif | TruthAnd => "&&".to_string(),
        TruthOrif | TruthOr => "||".to_string(),
        TruthXor => "^^".to_string(),
        TruthNot => "!".to_string(),
        // Relational.
        Lt | UnLt => "<".to_string(),
        Le | UnLe => "<=".to_string(),
        Gt | UnGt => ">".to_string(),
        Ge | UnGe => ">=".to_string(),
        Eq | UnEq => "==".to_string(),
        Ne | LtGt => "!=".to_string(),
        Unordered => "unord".to_string(),
        Ordered => "ord".to_string(),
        Unknown(code) => format!("?({})?", code),
    }
}
