use crate::expr::Expression;
use crate::op::Operator;
use serde::{Deserialize, Serialize};

/// Index into the owning function's statement arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StmtId(pub u32);

impl StmtId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StmtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stmt{}", self.0)
    }
}

/// Diagnostic codes mirroring the host compiler's statement-code enumeration.
pub mod codes {
    pub const COND: u32 = 1;
    pub const LABEL: u32 = 4;
    pub const ASSIGN: u32 = 6;
    pub const CALL: u32 = 8;
    pub const RETURN: u32 = 10;
    pub const PHI: u32 = 22;
}

/// One mid-level statement.
///
/// `Assign` carries an operator and second operand together or not at all (plain copy).
/// `Phi` exists so SSA back-references can resolve to a merge; the statement dispatcher
/// has no dedicated template for it and renders it like any unrecognized kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Assign {
        lhs: Expression,
        op: Option<Operator>,
        rhs1: Expression,
        rhs2: Option<Expression>,
    },
    Call {
        lhs: Option<Expression>,
        callee: String,
        args: Vec<Expression>,
    },
    Cond {
        lhs: Expression,
        op: Operator,
        rhs: Expression,
    },
    Label,
    Return,
    Phi {
        args: Vec<Expression>,
    },
    Other {
        raw_kind: u32,
    },
}

impl Statement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Assign { .. } => "GIMPLE_ASSIGN",
            Statement::Call { .. } => "GIMPLE_CALL",
            Statement::Cond { .. } => "GIMPLE_COND",
            Statement::Label => "GIMPLE_LABEL",
            Statement::Return => "GIMPLE_RETURN",
            Statement::Phi { .. } | Statement::Other { .. } => "GIMPLE_UNKNOWN",
        }
    }

    pub fn kind_code(&self) -> u32 {
        match self {
            Statement::Cond { .. } => codes::COND,
            Statement::Label => codes::LABEL,
            Statement::Assign { .. } => codes::ASSIGN,
            Statement::Call { .. } => codes::CALL,
            Statement::Return => codes::RETURN,
            Statement::Phi { .. } => codes::PHI,
            Statement::Other { raw_kind } => *raw_kind,
        }
    }

    pub fn is_phi(&self) -> bool {
        matches!(self, Statement::Phi { .. })
    }

    /// Top-level operand expressions, for structural walks.
    pub fn operands(&self) -> Vec<&Expression> {
        match self {
            Statement::Assign {
                lhs, rhs1, rhs2, ..
            } => {
                let mut ops = vec![lhs, rhs1];
                if let Some(rhs2) = rhs2 {
                    ops.push(rhs2);
                }
                ops
            }
            Statement::Call { lhs, args, .. } => {
                lhs.iter().chain(args.iter()).collect()
            }
            Statement::Cond { lhs, rhs, .. } => vec![lhs, rhs],
            Statement::Phi { args } => args.iter().collect(),
            Statement::Label | Statement::Return | Statement::Other { .. } => Vec::new(),
        }
    }
}
