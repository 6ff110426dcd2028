//! Core evaluation logic.

use smallvec::SmallVec;

use crate::{
    String,
    evaluator::{EvalError, EvalErrorKind, lookup},
    parser::{ExprTree, NodeId, NodeKind},
    syntax::Span,
};

/// Evaluate the outermost group of `tree`.
pub fn evaluate(tree: &ExprTree<'_>) -> Result<i64, EvalError> {
    let value = Evaluator { tree }.eval_group(tree.root())?;
    tracing::debug!(value, "evaluated expression");
    Ok(value)
}

/// Evaluate the group whose head is `head`.
pub fn evaluate_group<'a>(tree: &ExprTree<'a>, head: NodeId<'a>) -> Result<i64, EvalError> {
    Evaluator { tree }.eval_group(head)
}

/// Evaluator for parsed expression trees.
struct Evaluator<'t, 'a> {
    tree: &'t ExprTree<'a>,
}

impl<'t, 'a> Evaluator<'t, 'a> {
    fn eval_group(&self, head: NodeId<'a>) -> Result<i64, EvalError> {
        let head_node = self.tree.node(head);
        let NodeKind::Name(name) = head_node.kind() else {
            return Err(EvalError::new(
                EvalErrorKind::NameExpected,
                head_node.span().clone(),
            ));
        };

        let Some(function) = lookup(name) else {
            return Err(EvalError::new(
                EvalErrorKind::UndefinedFunction {
                    name: String::from(name),
                },
                head_node.span().clone(),
            ));
        };

        let operands = self.tree.siblings(head).skip(1);
        let found = operands.clone().count();
        let group_span = match operands.clone().last() {
            Some((_, last)) => Span::combine(head_node.span(), last.span()),
            None => head_node.span().clone(),
        };
        if !function.accepts(found) {
            return Err(EvalError::new(
                EvalErrorKind::WrongArgumentCount {
                    name: function.name,
                    min: function.min_args,
                    max: function.max_args,
                    found,
                },
                group_span,
            ));
        }

        let mut values = SmallVec::<[i64; 8]>::with_capacity(found);
        for (_, node) in operands {
            let value = match node.kind() {
                NodeKind::Integer(value) => value,
                NodeKind::SubExpression(child) => self.eval_group(child)?,
                NodeKind::Name(_) => {
                    return Err(EvalError::new(
                        EvalErrorKind::OperandTypeExpected,
                        node.span().clone(),
                    ));
                }
            };
            values.push(value);
        }

        tracing::trace!(function = function.name, operands = found, "applying function");
        (function.apply)(&values).map_err(|kind| EvalError::new(kind, group_span))
    }
}
