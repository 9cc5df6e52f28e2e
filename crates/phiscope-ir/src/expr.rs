use crate::stmt::StmtId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Label,
    Field,
    Var,
    Const,
}

impl DeclKind {
    /// Token used in the `unk_<kind>_decl` fallback for nameless declarations.
    pub fn token(self) -> &'static str {
        match self {
            DeclKind::Label => "label",
            DeclKind::Field => "field",
            DeclKind::Var => "var",
            DeclKind::Const => "const",
        }
    }
}

/// Tree-structured expression as the host supplies it after SSA construction.
///
/// Real, fixed, complex and vector constants carry no decoded payload; the renderer
/// prints a placeholder token for them. `SsaName::def` is a back-reference into the
/// owning function's statement arena and is only followed when that statement is a
/// phi-merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    IntConst(i128),
    RealConst,
    FixedConst,
    ComplexConst,
    VectorConst,
    StringConst(String),
    Decl {
        kind: DeclKind,
        name: Option<String>,
    },
    FieldAccess {
        base: Box<Expression>,
        field: Box<Expression>,
    },
    BitFieldAccess {
        base: Box<Expression>,
        offset: Box<Expression>,
        size: Box<Expression>,
    },
    ArrayAccess {
        base: Box<Expression>,
        index: Box<Expression>,
    },
    ArrayRangeAccess {
        base: Box<Expression>,
        lo: Box<Expression>,
        hi: Box<Expression>,
    },
    Deref {
        base: Box<Expression>,
    },
    Constructor,
    AddrOf {
        base: Box<Expression>,
    },
    TargetMemRef {
        base: Box<Expression>,
        offset: Box<Expression>,
        step: Box<Expression>,
        index1: Box<Expression>,
        index2: Box<Expression>,
    },
    MemRef {
        base: Box<Expression>,
        type_expr: Box<Expression>,
    },
    SsaName {
        name: Option<String>,
        version: u32,
        def: StmtId,
    },
    Unknown {
        raw_kind: u32,
    },
}

impl Expression {
    pub fn int(value: i128) -> Self {
        Expression::IntConst(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expression::StringConst(text.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expression::Decl {
            kind: DeclKind::Var,
            name: Some(name.into()),
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Expression::Decl {
            kind: DeclKind::Field,
            name: Some(name.into()),
        }
    }

    pub fn ssa(name: impl Into<String>, version: u32, def: StmtId) -> Self {
        Expression::SsaName {
            name: Some(name.into()),
            version,
            def,
        }
    }

    /// Direct children, for structural walks. Leaf variants return nothing.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::FieldAccess { base, field } => vec![&**base, &**field],
            Expression::BitFieldAccess { base, offset, size } => {
                vec![&**base, &**offset, &**size]
            }
            Expression::ArrayAccess { base, index } => vec![&**base, &**index],
            Expression::ArrayRangeAccess { base, lo, hi } => vec![&**base, &**lo, &**hi],
            Expression::Deref { base } | Expression::AddrOf { base } => vec![&**base],
            Expression::TargetMemRef {
                base,
                offset,
                step,
                index1,
                index2,
            } => vec![&**base, &**offset, &**step, &**index1, &**index2],
            Expression::MemRef { base, type_expr } => vec![&**base, &**type_expr],
            _ => Vec::new(),
        }
    }
}
