//! Semantic-error pass: a single pre-order walk over statements and
//! expressions.
//!
//! The walk carries a flat, unscoped binding table (name → most recently
//! assigned expression, last write wins across the whole module). Lexical
//! scope is intentionally ignored; the table only feeds the
//! equality-on-constructed-object heuristic.

use super::naming;
use super::CodeAnalyzer;
use compact_str::CompactString;
use ruff_python_ast::{self as ast, Expr, Stmt};
use rustc_hash::FxHashMap;

const MAX_RECURSION_DEPTH: usize = 400;

pub(super) fn check_semantic_errors(analyzer: &CodeAnalyzer, module: &ast::ModModule) -> Vec<String> {
    let mut visitor = SemanticVisitor {
        analyzer,
        bindings: FxHashMap::default(),
        errors: Vec::new(),
        depth: 0,
    };
    for stmt in &module.body {
        visitor.visit_stmt(stmt);
    }
    visitor.errors
}

struct SemanticVisitor<'a> {
    analyzer: &'a CodeAnalyzer,
    bindings: FxHashMap<CompactString, &'a Expr>,
    errors: Vec<String>,
    depth: usize,
}

impl<'a> SemanticVisitor<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;

        match stmt {
            Stmt::FunctionDef(node) => self.handle_function_def(stmt, node),
            Stmt::ClassDef(node) => self.handle_class_def(node),
            Stmt::Assign(node) => self.handle_assign(stmt, node),
            Stmt::AugAssign(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Stmt::AnnAssign(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.annotation);
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Return(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Stmt::Expr(node) => self.visit_expr(&node.value),
            Stmt::If(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                for clause in &node.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.visit_expr(test);
                    }
                    self.visit_body(&clause.body);
                }
            }
            Stmt::While(node) => {
                self.visit_expr(&node.test);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::For(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.iter);
                self.visit_body(&node.body);
                self.visit_body(&node.orelse);
            }
            Stmt::With(node) => {
                for item in &node.items {
                    self.visit_expr(&item.context_expr);
                    if let Some(vars) = &item.optional_vars {
                        self.visit_expr(vars);
                    }
                }
                self.visit_body(&node.body);
            }
            Stmt::Try(node) => {
                self.visit_body(&node.body);
                for ast::ExceptHandler::ExceptHandler(handler) in &node.handlers {
                    if let Some(type_) = &handler.type_ {
                        self.visit_expr(type_);
                    }
                    self.visit_body(&handler.body);
                }
                self.visit_body(&node.orelse);
                self.visit_body(&node.finalbody);
            }
            Stmt::Match(node) => {
                self.visit_expr(&node.subject);
                for case in &node.cases {
                    if let Some(guard) = &case.guard {
                        self.visit_expr(guard);
                    }
                    self.visit_body(&case.body);
                }
            }
            Stmt::Raise(node) => {
                if let Some(exc) = &node.exc {
                    self.visit_expr(exc);
                }
                if let Some(cause) = &node.cause {
                    self.visit_expr(cause);
                }
            }
            Stmt::Assert(node) => {
                self.visit_expr(&node.test);
                if let Some(msg) = &node.msg {
                    self.visit_expr(msg);
                }
            }
            Stmt::Delete(node) => {
                for target in &node.targets {
                    self.visit_expr(target);
                }
            }
            _ => {}
        }

        self.depth -= 1;
    }

    fn visit_body(&mut self, body: &'a [Stmt]) {
        for stmt in body {
            self.visit_stmt(stmt);
        }
    }

    /// Parameter naming is checked for plain `def`s only, and only for
    /// positional-or-keyword parameters. The rest of the subtree is still
    /// traversed.
    fn handle_function_def(&mut self, stmt: &'a Stmt, node: &'a ast::StmtFunctionDef) {
        if !node.is_async {
            for arg in &node.parameters.args {
                naming::check_variable_name(
                    self.analyzer,
                    arg.parameter.name.as_str(),
                    stmt,
                    &mut self.errors,
                );
            }
        }

        for decorator in &node.decorator_list {
            self.visit_expr(&decorator.expression);
        }
        for arg in node
            .parameters
            .posonlyargs
            .iter()
            .chain(&node.parameters.args)
            .chain(&node.parameters.kwonlyargs)
        {
            if let Some(annotation) = &arg.parameter.annotation {
                self.visit_expr(annotation);
            }
            if let Some(default) = &arg.default {
                self.visit_expr(default);
            }
        }
        if let Some(returns) = &node.returns {
            self.visit_expr(returns);
        }
        self.visit_body(&node.body);
    }

    fn handle_class_def(&mut self, node: &'a ast::StmtClassDef) {
        let name = node.name.as_str();
        if !name.chars().next().is_some_and(char::is_uppercase) {
            self.errors.push(format!(
                "Class name '{name}' should start with an uppercase letter"
            ));
        }

        for decorator in &node.decorator_list {
            self.visit_expr(&decorator.expression);
        }
        for base in node.bases() {
            self.visit_expr(base);
        }
        if let Some(arguments) = &node.arguments {
            for keyword in &arguments.keywords {
                self.visit_expr(&keyword.value);
            }
        }
        self.visit_body(&node.body);
    }

    /// Only plain name targets bind and get checked; tuple/attribute/subscript
    /// targets are traversed for nested comparisons but carry no rules.
    fn handle_assign(&mut self, stmt: &'a Stmt, node: &'a ast::StmtAssign) {
        for target in &node.targets {
            if let Expr::Name(name_node) = target {
                let name = name_node.id.as_str();
                self.bindings
                    .insert(CompactString::from(name), &*node.value);
                if self.analyzer.is_reserved(name) {
                    self.errors
                        .push(format!("Variable name '{name}' shadows a built-in"));
                }
                naming::check_variable_name(self.analyzer, name, stmt, &mut self.errors);
            }
        }

        for target in &node.targets {
            if !matches!(target, Expr::Name(_)) {
                self.visit_expr(target);
            }
        }
        self.visit_expr(&node.value);
    }

    fn check_compare(&mut self, node: &ast::ExprCompare) {
        for op in &node.ops {
            if matches!(op, ast::CmpOp::Eq) {
                let compares_constructed = if let Expr::Name(name) = &*node.left {
                    matches!(
                        self.bindings.get(name.id.as_str()),
                        Some(Expr::Call(_))
                    )
                } else {
                    false
                };
                if compares_constructed {
                    self.errors.push(
                        "Comparing objects with '==' may not behave as expected if equality is not explicitly defined."
                            .to_owned(),
                    );
                } else {
                    self.errors.push(
                        "Usage of '==' operator detected; verify that this is the intended comparison."
                            .to_owned(),
                    );
                }
                // One diagnostic per comparison node, first `==` wins.
                break;
            }
        }

        if node.ops.len() > 1 {
            self.errors.push(
                "Multiple comparisons in a single statement may lead to unexpected behavior"
                    .to_owned(),
            );
        }
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        if self.depth >= MAX_RECURSION_DEPTH {
            return;
        }
        self.depth += 1;

        if let Expr::Compare(node) = expr {
            self.check_compare(node);
        }

        match expr {
            Expr::BoolOp(node) => {
                for value in &node.values {
                    self.visit_expr(value);
                }
            }
            Expr::Named(node) => {
                self.visit_expr(&node.target);
                self.visit_expr(&node.value);
            }
            Expr::BinOp(node) => {
                self.visit_expr(&node.left);
                self.visit_expr(&node.right);
            }
            Expr::UnaryOp(node) => self.visit_expr(&node.operand),
            Expr::Lambda(node) => {
                if let Some(parameters) = &node.parameters {
                    for arg in parameters
                        .posonlyargs
                        .iter()
                        .chain(&parameters.args)
                        .chain(&parameters.kwonlyargs)
                    {
                        if let Some(default) = &arg.default {
                            self.visit_expr(default);
                        }
                    }
                }
                self.visit_expr(&node.body);
            }
            Expr::If(node) => {
                self.visit_expr(&node.test);
                self.visit_expr(&node.body);
                self.visit_expr(&node.orelse);
            }
            Expr::Dict(node) => {
                for item in &node.items {
                    if let Some(key) = &item.key {
                        self.visit_expr(key);
                    }
                    self.visit_expr(&item.value);
                }
            }
            Expr::Set(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::ListComp(node) => {
                self.visit_expr(&node.elt);
                self.visit_generators(&node.generators);
            }
            Expr::SetComp(node) => {
                self.visit_expr(&node.elt);
                self.visit_generators(&node.generators);
            }
            Expr::DictComp(node) => {
                if let Some(key) = &node.key {
                    self.visit_expr(key);
                }
                self.visit_expr(&node.value);
                self.visit_generators(&node.generators);
            }
            Expr::Generator(node) => {
                self.visit_expr(&node.elt);
                self.visit_generators(&node.generators);
            }
            Expr::Await(node) => self.visit_expr(&node.value),
            Expr::Yield(node) => {
                if let Some(value) = &node.value {
                    self.visit_expr(value);
                }
            }
            Expr::YieldFrom(node) => self.visit_expr(&node.value),
            Expr::Compare(node) => {
                self.visit_expr(&node.left);
                for comparator in &node.comparators {
                    self.visit_expr(comparator);
                }
            }
            Expr::Call(node) => {
                self.visit_expr(&node.func);
                for arg in &node.arguments.args {
                    self.visit_expr(arg);
                }
                for keyword in &node.arguments.keywords {
                    self.visit_expr(&keyword.value);
                }
            }
            Expr::FString(node) => {
                for part in &node.value {
                    match part {
                        ast::FStringPart::Literal(_) => {}
                        ast::FStringPart::FString(f) => {
                            for element in &f.elements {
                                if let ast::InterpolatedStringElement::Interpolation(interp) =
                                    element
                                {
                                    self.visit_expr(&interp.expression);
                                }
                            }
                        }
                    }
                }
            }
            Expr::Starred(node) => self.visit_expr(&node.value),
            Expr::Attribute(node) => self.visit_expr(&node.value),
            Expr::Subscript(node) => {
                self.visit_expr(&node.value);
                self.visit_expr(&node.slice);
            }
            Expr::List(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Tuple(node) => {
                for elt in &node.elts {
                    self.visit_expr(elt);
                }
            }
            Expr::Slice(node) => {
                if let Some(lower) = &node.lower {
                    self.visit_expr(lower);
                }
                if let Some(upper) = &node.upper {
                    self.visit_expr(upper);
                }
                if let Some(step) = &node.step {
                    self.visit_expr(step);
                }
            }
            _ => {}
        }

        self.depth -= 1;
    }

    fn visit_generators(&mut self, generators: &'a [ast::Comprehension]) {
        for generator in generators {
            self.visit_expr(&generator.iter);
            self.visit_expr(&generator.target);
            for if_expr in &generator.ifs {
                self.visit_expr(if_expr);
            }
        }
    }
}
