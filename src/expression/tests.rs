use crate::expression::{Candidate, ExpressionError, Operator, Value, evaluate, render, to_value};

use Operator::{Add, Div, Mul, Sub};

#[test]
fn test_single_number_evaluates_to_itself() {
    assert_eq!(evaluate(&[42], &[]), Ok(to_value(42)));
    assert_eq!(evaluate(&[-7], &[]), Ok(to_value(-7)));
    assert_eq!(evaluate(&[0], &[]), Ok(to_value(0)));
}

#[test]
fn test_empty_candidate_evaluates_to_zero() {
    assert_eq!(evaluate(&[], &[]), Ok(to_value(0)));
}

#[test]
fn test_left_to_right_ignores_precedence() {
    // 1 + 3 - 7 = -3
    assert_eq!(evaluate(&[1, 3, 7], &[Add, Sub]), Ok(to_value(-3)));
    // (2 + 3) * 4, not 2 + 12
    assert_eq!(evaluate(&[2, 3, 4], &[Add, Mul]), Ok(to_value(20)));
    // (16 - 7 + 3) - 1
    assert_eq!(evaluate(&[16, 7, 3, 1], &[Sub, Add, Sub]), Ok(to_value(11)));
}

#[test]
fn test_true_division() {
    assert_eq!(evaluate(&[7, 2], &[Div]), Ok(Value::new(7, 2)));
    // (24 / 16) * 4 = 6
    assert_eq!(evaluate(&[24, 16, 4], &[Div, Mul]), Ok(to_value(6)));
}

#[test]
fn test_division_stays_exact() {
    // 7 / 3 has no finite binary expansion
    assert_eq!(evaluate(&[7, 3, 27], &[Div, Mul]), Ok(to_value(63)));
    assert_eq!(evaluate(&[1, 3, 3], &[Div, Mul]), Ok(to_value(1)));
}

#[test]
fn test_large_integers_are_not_rounded() {
    let big = 9_007_199_254_740_992;
    assert_ne!(evaluate(&[big, 1], &[Add]), Ok(to_value(big)));
    assert_eq!(evaluate(&[big, 1], &[Add]), Ok(to_value(big + 1)));
}

#[test]
fn test_overflow_is_an_error() {
    assert_eq!(
        evaluate(&[i64::MAX, i64::MAX, i64::MAX], &[Mul, Mul]),
        Err(ExpressionError::Overflow)
    );
}

#[test]
fn test_division_by_zero_is_an_error() {
    assert_eq!(
        evaluate(&[5, 0], &[Div]),
        Err(ExpressionError::DivisionByZero)
    );
    // accumulator reaches zero first; dividing zero is allowed
    assert_eq!(evaluate(&[3, 3, 4], &[Sub, Div]), Ok(to_value(0)));
}

#[test]
fn test_operand_mismatch_too_few_operators() {
    let result = evaluate(&[1, 3, 7], &[Add]);
    assert_eq!(
        result,
        Err(ExpressionError::OperandMismatch {
            numbers: 3,
            operators: 1
        })
    );

    let result = evaluate(&[1, 3, 7], &[]);
    assert!(matches!(
        result,
        Err(ExpressionError::OperandMismatch { operators: 0, .. })
    ));
}

#[test]
fn test_operand_mismatch_too_many_operators() {
    assert!(matches!(
        evaluate(&[1, 3], &[Add, Add]),
        Err(ExpressionError::OperandMismatch { .. })
    ));
    assert!(matches!(
        evaluate(&[7], &[Mul]),
        Err(ExpressionError::OperandMismatch { .. })
    ));
    assert!(matches!(
        evaluate(&[], &[Sub]),
        Err(ExpressionError::OperandMismatch {
            numbers: 0,
            operators: 1
        })
    ));
}

#[test]
fn test_mismatch_checked_before_division() {
    // would divide by zero, but the shape is wrong first
    assert!(matches!(
        evaluate(&[1, 0], &[Div, Div]),
        Err(ExpressionError::OperandMismatch { .. })
    ));
}

#[test]
fn test_candidate_new_validates_shape() {
    assert!(Candidate::new(vec![7, 3, 1], vec![Add, Add]).is_ok());
    assert!(Candidate::new(vec![7, 3, 1], vec![Add]).is_err());
    assert!(Candidate::new(vec![7], vec![]).is_ok());
    assert!(Candidate::new(vec![], vec![]).is_ok());
}

#[test]
fn test_candidate_evaluate() {
    let candidate = Candidate::new(vec![24, 7, 16, 3, 1], vec![Add, Sub, Sub, Sub]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.evaluate(), Ok(to_value(11)));
        assert_eq!(candidate.len(), 5);
        assert_eq!(candidate.numbers(), &[24, 7, 16, 3, 1]);
        assert_eq!(candidate.operators(), &[Add, Sub, Sub, Sub]);
    }
}

#[test]
fn test_render_three_numbers() {
    let candidate = Candidate::new(vec![7, 3, 1], vec![Add, Add]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.render(11), "((7 + 3) + 1) = 11");
        assert_eq!(render(&candidate, 11), "((7 + 3) + 1) = 11");
    }
}

#[test]
fn test_render_two_numbers() {
    let candidate = Candidate::new(vec![22, 2], vec![Div]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.render(11), "(22 / 2) = 11");
    }
}

#[test]
fn test_render_four_and_five_numbers() {
    let candidate = Candidate::new(vec![16, 7, 3, 1], vec![Sub, Add, Sub]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.render(11), "((16 - 7) + 3) - 1 = 11");
    }

    let candidate = Candidate::new(vec![24, 7, 16, 3, 1], vec![Add, Sub, Sub, Sub]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.render(11), "(((24 + 7) - 16) - 3) - 1 = 11");
    }
}

#[test]
fn test_render_single_number_is_unbracketed() {
    let candidate = Candidate::new(vec![11], vec![]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.render(11), "11 = 11");
    }
}

#[test]
fn test_render_negative_numbers_and_all_symbols() {
    let candidate = Candidate::new(vec![-4, 2, 3, 5], vec![Mul, Div, Sub]);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        assert_eq!(candidate.to_string(), "((-4 * 2) / 3) - 5");
    }
}

#[test]
fn test_operator_symbols() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");
    assert_eq!(Operator::Div.to_string(), "/");
}
