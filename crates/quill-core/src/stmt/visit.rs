#![allow(unused_variables)]

use super::{
    Expr, ExprAlias, ExprBinaryOp, ExprColumn, ExprParam, ExprSubquery, Filter, Select, Update,
    Value,
};

/// Walks a statement tree left to right, depth first.
///
/// Every method defaults to the matching free function, which visits the
/// node's children. Override a method to intercept a node; call the free
/// function to keep descending. The `'stmt` lifetime lets visitors hold on
/// to the nodes they see.
///
/// Column references do not descend into the derived table they point at,
/// and scalar subqueries are entered through
/// [`visit_expr_subquery`](Visit::visit_expr_subquery).
pub trait Visit<'stmt> {
    fn visit_expr(&mut self, i: &'stmt Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_alias(&mut self, i: &'stmt ExprAlias) {
        visit_expr_alias(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &'stmt ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_column(&mut self, i: &'stmt ExprColumn) {
        visit_expr_column(self, i);
    }

    fn visit_expr_param(&mut self, i: &'stmt ExprParam) {
        visit_expr_param(self, i);
    }

    fn visit_expr_subquery(&mut self, i: &'stmt ExprSubquery) {
        visit_expr_subquery(self, i);
    }

    fn visit_filter(&mut self, i: &'stmt Filter) {
        visit_filter(self, i);
    }

    fn visit_select(&mut self, i: &'stmt Select) {
        visit_select(self, i);
    }

    fn visit_stmt_update(&mut self, i: &'stmt Update) {
        visit_stmt_update(self, i);
    }

    fn visit_value(&mut self, i: &'stmt Value) {
        visit_value(self, i);
    }
}

pub fn visit_expr<'stmt, V>(v: &mut V, node: &'stmt Expr)
where
    V: Visit<'stmt> + ?Sized,
{
    match node {
        Expr::Alias(expr) => v.visit_expr_alias(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Param(expr) => v.visit_expr_param(expr),
        Expr::Subquery(expr) => v.visit_expr_subquery(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_alias<'stmt, V>(v: &mut V, node: &'stmt ExprAlias)
where
    V: Visit<'stmt> + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_binary_op<'stmt, V>(v: &mut V, node: &'stmt ExprBinaryOp)
where
    V: Visit<'stmt> + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_column<'stmt, V>(v: &mut V, node: &'stmt ExprColumn)
where
    V: Visit<'stmt> + ?Sized,
{
}

pub fn visit_expr_param<'stmt, V>(v: &mut V, node: &'stmt ExprParam)
where
    V: Visit<'stmt> + ?Sized,
{
    v.visit_value(&node.value);
}

pub fn visit_expr_subquery<'stmt, V>(v: &mut V, node: &'stmt ExprSubquery)
where
    V: Visit<'stmt> + ?Sized,
{
    v.visit_select(&node.subquery.0.select);
}

pub fn visit_filter<'stmt, V>(v: &mut V, node: &'stmt Filter)
where
    V: Visit<'stmt> + ?Sized,
{
    for expr in node {
        v.visit_expr(expr);
    }
}

pub fn visit_select<'stmt, V>(v: &mut V, node: &'stmt Select)
where
    V: Visit<'stmt> + ?Sized,
{
    for expr in &node.columns {
        v.visit_expr(expr);
    }
    v.visit_filter(&node.filter);
}

/// Visits the WHERE clause first, then each value in mapping order.
pub fn visit_stmt_update<'stmt, V>(v: &mut V, node: &'stmt Update)
where
    V: Visit<'stmt> + ?Sized,
{
    v.visit_filter(&node.filter);
    for (_, expr) in &node.values {
        v.visit_expr(expr);
    }
}

pub fn visit_value<'stmt, V>(v: &mut V, node: &'stmt Value)
where
    V: Visit<'stmt> + ?Sized,
{
}
