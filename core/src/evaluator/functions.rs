//! The built-in function table.
//!
//! All arithmetic is wrapping, so overflow never panics. Division and
//! remainder check for a zero divisor first.

use crate::evaluator::EvalErrorKind;

/// A named function with its accepted operand counts.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    pub name: &'static str,
    pub min_args: usize,
    /// `None` means any number of operands from `min_args` up.
    pub max_args: Option<usize>,
    /// Folds the operands, already checked against the arity, into a result.
    pub apply: fn(&[i64]) -> Result<i64, EvalErrorKind>,
}

impl Function {
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && self.max_args.is_none_or(|max| count <= max)
    }
}

pub static FUNCTIONS: [Function; 5] = [
    Function {
        name: "+",
        min_args: 2,
        max_args: None,
        apply: sum,
    },
    Function {
        name: "-",
        min_args: 2,
        max_args: Some(2),
        apply: difference,
    },
    Function {
        name: "*",
        min_args: 2,
        max_args: None,
        apply: product,
    },
    Function {
        name: "/",
        min_args: 2,
        max_args: Some(2),
        apply: quotient,
    },
    Function {
        name: "%",
        min_args: 2,
        max_args: Some(2),
        apply: remainder,
    },
];

/// Finds a function by exact name.
pub fn lookup(name: &str) -> Option<&'static Function> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

fn sum(operands: &[i64]) -> Result<i64, EvalErrorKind> {
    Ok(operands.iter().fold(0, |acc, &x| acc.wrapping_add(x)))
}

fn product(operands: &[i64]) -> Result<i64, EvalErrorKind> {
    Ok(operands.iter().fold(1, |acc, &x| acc.wrapping_mul(x)))
}

fn difference(operands: &[i64]) -> Result<i64, EvalErrorKind> {
    let &[left, right] = operands else {
        unreachable!("arity is checked before dispatch")
    };
    Ok(left.wrapping_sub(right))
}

fn quotient(operands: &[i64]) -> Result<i64, EvalErrorKind> {
    let &[left, right] = operands else {
        unreachable!("arity is checked before dispatch")
    };
    if right == 0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    // wrapping_div turns i64::MIN / -1 into i64::MIN instead of panicking
    Ok(left.wrapping_div(right))
}

fn remainder(operands: &[i64]) -> Result<i64, EvalErrorKind> {
    let &[left, right] = operands else {
        unreachable!("arity is checked before dispatch")
    };
    if right == 0 {
        return Err(EvalErrorKind::DivisionByZero);
    }
    Ok(left.wrapping_rem(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(name: &str, operands: &[i64]) -> Result<i64, EvalErrorKind> {
        let function = lookup(name).unwrap();
        assert!(function.accepts(operands.len()));
        (function.apply)(operands)
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("+").map(|f| f.name), Some("+"));
        assert_eq!(lookup("%").map(|f| f.name), Some("%"));
        assert!(lookup("^").is_none());
        assert!(lookup("++").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_arity() {
        let plus = lookup("+").unwrap();
        assert!(!plus.accepts(0));
        assert!(!plus.accepts(1));
        assert!(plus.accepts(2));
        assert!(plus.accepts(100));

        let minus = lookup("-").unwrap();
        assert!(!minus.accepts(1));
        assert!(minus.accepts(2));
        assert!(!minus.accepts(3));
    }

    #[test]
    fn test_sum_and_product() {
        assert_eq!(apply("+", &[1, 2, 3]), Ok(6));
        assert_eq!(apply("+", &[-5, 3]), Ok(-2));
        assert_eq!(apply("*", &[2, 3, 7]), Ok(42));
        assert_eq!(apply("*", &[-2, 5]), Ok(-10));
    }

    #[test]
    fn test_difference() {
        assert_eq!(apply("-", &[5, 4]), Ok(1));
        assert_eq!(apply("-", &[3, 10]), Ok(-7));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply("/", &[7, 2]), Ok(3));
        assert_eq!(apply("/", &[-7, 2]), Ok(-3));
        assert_eq!(apply("%", &[7, 3]), Ok(1));
        assert_eq!(apply("%", &[-7, 3]), Ok(-1));
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(apply("/", &[5, 0]), Err(EvalErrorKind::DivisionByZero));
        assert_eq!(apply("%", &[5, 0]), Err(EvalErrorKind::DivisionByZero));
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(apply("+", &[i64::MAX, 1]), Ok(i64::MIN));
        assert_eq!(apply("-", &[i64::MIN, 1]), Ok(i64::MAX));
        assert_eq!(apply("*", &[i64::MAX, 2]), Ok(-2));
        assert_eq!(apply("/", &[i64::MIN, -1]), Ok(i64::MIN));
        assert_eq!(apply("%", &[i64::MIN, -1]), Ok(0));
    }
}
