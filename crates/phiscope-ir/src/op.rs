use serde::{Deserialize, Serialize};

/// Abstract operator code attached to assignments and conditionals.
///
/// The set mirrors the host compiler's expression-code enumeration for the operators a
/// mid-level diagnostic cares about; anything else arrives as `Unknown` with the raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Arithmetic.
    PointerPlus,
    Plus,
    Negate,
    Minus,
    Mult,
    TruncDiv,
    CeilDiv,
    FloorDiv,
    RoundDiv,
    ExactDiv,
    RealDiv,
    // Shifts.
    Lshift,
    Rshift,
    // Bitwise.
    BitIor,
    BitXor,
    BitAnd,
    BitNot,
    // Truth-logical.
    TruthAndif,
    TruthAnd,
    TruthOrif,
    TruthOr,
    TruthXor,
    TruthNot,
    // Relational.
    Lt,
    UnLt,
    Le,
    UnLe,
    Gt,
    UnGt,
    Ge,
    UnGe,
    Eq,
    UnEq,
    Ne,
    LtGt,
    Unordered,
    Ordered,
    // Anything the host defines that this enum does not know.
    Unknown(u32),
}
