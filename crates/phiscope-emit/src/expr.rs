use phiscope_ir::{DeclKind, Expression, Function, Statement, StmtId};

/// Recursive expression-to-text renderer.
///
/// Total over the expression variant space. SSA values whose defining statement is a
/// phi-merge expand to `(<label> = PHI(<args>))`; the merge statements currently being
/// expanded are tracked so a loop-carried phi that reaches itself renders its bare
/// label instead of recursing forever.
pub struct ExprFormatter<'a> {
    function: &'a Function,
    phi_stack: Vec<StmtId>,
}

impl<'a> ExprFormatter<'a> {
    pub fn new(function: &'a Function) -> Self {
        Self {
            function,
            phi_stack: Vec::new(),
        }
    }

    pub fn format(&mut self, expr: &Expression) -> String {
        match expr {
            Expression::IntConst(value) => value.to_string(),
            Expression::RealConst => "REAL_CST".to_string(),
            Expression::FixedConst => "FIXED_CST".to_string(),
            Expression::ComplexConst => "COMPLEX_CST".to_string(),
            Expression::VectorConst => "VECTOR_CST".to_string(),
            Expression::StringConst(text) => format!("\"{}\"", text),
            Expression::Decl { kind, name } => {
                let name = name
                    .clone()
                    .unwrap_or_else(|| format!("unk_{}_decl", kind.token()));
                if matches!(kind, DeclKind::Label) {
                    format!("{}:", name)
                } else {
                    name
                }
            }
            Expression::FieldAccess { base, field } => {
                format!("{}->{}", self.format(base), self.format(field))
            }
            Expression::BitFieldAccess { base, offset, size } => format!(
                "{}->({} : {})",
                self.format(base),
                self.format(offset),
                self.format(size)
            ),
            Expression::ArrayAccess { base, index } => {
                format!("{}[{}]", self.format(base), self.format(index))
            }
            Expression::ArrayRangeAccess { base, lo, hi } => format!(
                "{}[{}:{}]",
                self.format(base),
                self.format(lo),
                self.format(hi)
            ),
            Expression::Deref { base } => format!("*{}", self.format(base)),
            Expression::Constructor => "constructor".to_string(),
            Expression::AddrOf { base } => format!("&{}", self.format(base)),
            Expression::TargetMemRef {
                base,
                offset,
                step,
                index1,
                index2,
            } => format!(
                "TMR(BASE: {}, OFFSET: {}, STEP: {}, INDEX1: {}, INDEX2: {} )",
                self.format(base),
                self.format(offset),
                self.format(step),
                self.format(index1),
                self.format(index2)
            ),
            Expression::MemRef { base, type_expr } => format!(
                "((typeof({})){})",
                self.format(type_expr),
                self.format(base)
            ),
            Expression::SsaName { name, version, def } => {
                self.format_ssa(name.as_deref(), *version, *def)
            }
            Expression::Unknown { raw_kind } => format!("unk_tree_code({})", raw_kind),
        }
    }

    fn format_ssa(&mut self, name: Option<&str>, version: u32, def: StmtId) -> String {
        let label = format!("{}__v{}", name.unwrap_or("unk_ssa_name"), version);

        // The back-reference is followed only when it resolves to a merge; anything
        // else, including a dangling id, renders as the bare label.
        let function = self.function;
        match function.stmt(def) {
            Some(Statement::Phi { args }) if !self.phi_stack.contains(&def) => {
                self.phi_stack.push(def);
                let rendered: Vec<String> = args.iter().map(|arg| self.format(arg)).collect();
                self.phi_stack.pop();
                format!("({} = PHI({}))", label, rendered.join(", "))
            }
            _ => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phiscope_ir::{DeclKind, Expression, Function, Statement, StmtId};
    use pretty_assertions::assert_eq;

    fn render(expr: &Expression) -> String {
        let function = Function::new("t");
        ExprFormatter::new(&function).format(expr)
    }

    #[test]
    fn constants() {
        assert_eq!(render(&Expression::int(-42)), "-42");
        assert_eq!(render(&Expression::RealConst), "REAL_CST");
        assert_eq!(render(&Expression::FixedConst), "FIXED_CST");
        assert_eq!(render(&Expression::ComplexConst), "COMPLEX_CST");
        assert_eq!(render(&Expression::VectorConst), "VECTOR_CST");
        assert_eq!(render(&Expression::string("hi")), "\"hi\"");
        assert_eq!(render(&Expression::Constructor), "constructor");
    }

    #[test]
    fn decl_fallbacks_and_label_suffix() {
        assert_eq!(render(&Expression::var("x")), "x");
        assert_eq!(
            render(&Expression::Decl {
                kind: DeclKind::Var,
                name: None,
            }),
            "unk_var_decl"
        );
        assert_eq!(
            render(&Expression::Decl {
                kind: DeclKind::Label,
                name: Some("out".to_string()),
            }),
            "out:"
        );
        assert_eq!(
            render(&Expression::Decl {
                kind: DeclKind::Label,
                name: None,
            }),
            "unk_label_decl:"
        );
    }

    #[test]
    fn nested_memory_references() {
        let expr = Expression::ArrayAccess {
            base: Box::new(Expression::FieldAccess {
                base: Box::new(Expression::var("p")),
                field: Box::new(Expression::field("data")),
            }),
            index: Box::new(Expression::int(3)),
        };
        assert_eq!(render(&expr), "p->data[3]");

        let expr = Expression::Deref {
            base: Box::new(Expression::AddrOf {
                base: Box::new(Expression::var("x")),
            }),
        };
        assert_eq!(render(&expr), "*&x");
    }

    #[test]
    fn bit_field_and_range_access() {
        let expr = Expression::BitFieldAccess {
            base: Box::new(Expression::var("flags")),
            offset: Box::new(Expression::int(4)),
            size: Box::new(Expression::int(2)),
        };
        assert_eq!(render(&expr), "flags->(4 : 2)");

        let expr = Expression::ArrayRangeAccess {
            base: Box::new(Expression::var("buf")),
            lo: Box::new(Expression::int(0)),
            hi: Box::new(Expression::int(8)),
        };
        assert_eq!(render(&expr), "buf[0:8]");
    }

    #[test]
    fn target_mem_ref_template() {
        let expr = Expression::TargetMemRef {
            base: Box::new(Expression::var("p")),
            offset: Box::new(Expression::int(8)),
            step: Box::new(Expression::int(4)),
            index1: Box::new(Expression::var("i")),
            index2: Box::new(Expression::var("j")),
        };
        assert_eq!(
            render(&expr),
            "TMR(BASE: p, OFFSET: 8, STEP: 4, INDEX1: i, INDEX2: j )"
        );
    }

    #[test]
    fn mem_ref_prints_type_cast_form() {
        let expr = Expression::MemRef {
            base: Box::new(Expression::var("p")),
            type_expr: Box::new(Expression::var("q")),
        };
        assert_eq!(render(&expr), "((typeof(q))p)");
    }

    #[test]
    fn unknown_tag_is_labeled() {
        assert_eq!(
            render(&Expression::Unknown { raw_kind: 9999 }),
            "unk_tree_code(9999)"
        );
    }

    #[test]
    fn ssa_without_phi_def_is_plain_label() {
        let mut function = Function::new("t");
        let def = function.add_stmt(Statement::Label);
        let expr = Expression::ssa("x", 5, def);
        assert_eq!(ExprFormatter::new(&function).format(&expr), "x__v5");

        let nameless = Expression::SsaName {
            name: None,
            version: 2,
            def,
        };
        assert_eq!(
            ExprFormatter::new(&function).format(&nameless),
            "unk_ssa_name__v2"
        );
    }

    #[test]
    fn ssa_with_dangling_def_is_plain_label() {
        let function = Function::new("t");
        let expr = Expression::ssa("x", 5, StmtId(99));
        assert_eq!(ExprFormatter::new(&function).format(&expr), "x__v5");
    }

    #[test]
    fn phi_def_expands_arguments() {
        let mut function = Function::new("t");
        let d1 = function.add_stmt(Statement::Label);
        let d2 = function.add_stmt(Statement::Label);
        let phi = function.add_stmt(Statement::Phi {
            args: vec![Expression::ssa("x", 1, d1), Expression::ssa("x", 2, d2)],
        });

        let expr = Expression::ssa("x", 3, phi);
        assert_eq!(
            ExprFormatter::new(&function).format(&expr),
            "(x__v3 = PHI(x__v1, x__v2))"
        );
    }

    #[test]
    fn self_referential_phi_terminates() {
        let mut function = Function::new("t");
        let phi = function.add_stmt(Statement::Phi { args: Vec::new() });
        function.stmts[phi.index()] = Statement::Phi {
            args: vec![Expression::ssa("i", 1, phi)],
        };

        let expr = Expression::ssa("i", 1, phi);
        assert_eq!(
            ExprFormatter::new(&function).format(&expr),
            "(i__v1 = PHI(i__v1))"
        );
    }

    #[test]
    fn distinct_names_sharing_a_version_both_expand() {
        let mut function = Function::new("t");
        let d = function.add_stmt(Statement::Label);
        let inner = function.add_stmt(Statement::Phi {
            args: vec![Expression::ssa("a", 7, d)],
        });
        let outer = function.add_stmt(Statement::Phi {
            args: vec![Expression::ssa("y", 1, inner)],
        });

        // y__v1 shares its version with the value being expanded, but its own merge
        // is acyclic and must still come out in full.
        let expr = Expression::ssa("x", 1, outer);
        assert_eq!(
            ExprFormatter::new(&function).format(&expr),
            "(x__v1 = PHI((y__v1 = PHI(a__v7))))"
        );
    }

    #[test]
    fn mutually_recursive_phis_terminate() {
        let mut function = Function::new("t");
        let phi_a = function.add_stmt(Statement::Phi { args: Vec::new() });
        let phi_b = function.add_stmt(Statement::Phi { args: Vec::new() });
        function.stmts[phi_a.index()] = Statement::Phi {
            args: vec![Expression::ssa("x", 2, phi_b)],
        };
        function.stmts[phi_b.index()] = Statement::Phi {
            args: vec![Expression::ssa("x", 1, phi_a)],
        };

        let expr = Expression::ssa("x", 1, phi_a);
        assert_eq!(
            ExprFormatter::new(&function).format(&expr),
            "(x__v1 = PHI((x__v2 = PHI(x__v1))))"
        );
    }
}
