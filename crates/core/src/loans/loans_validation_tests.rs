use super::*;
use rust_decimal_macros::dec;

fn loan(id: &str, principal: rust_decimal::Decimal, balance: rust_decimal::Decimal) -> LoanRecord {
    LoanRecord::new(id, format!("Loan {}", id), principal, balance, dec!(1000))
}

#[test]
fn test_valid_loan_has_no_errors() {
    let record = loan("1", dec!(1000000), dec!(800000));
    assert!(validate_loan(&record).is_empty());
}

#[test]
fn test_boundary_balances_are_valid() {
    assert!(validate_loan(&loan("paid", dec!(500), dec!(0))).is_empty());
    assert!(validate_loan(&loan("fresh", dec!(500), dec!(500))).is_empty());
}

#[test]
fn test_zero_principal_is_invalid_principal() {
    let errors = validate_loan(&loan("z", dec!(0), dec!(0)));
    assert_eq!(
        errors,
        vec![LoanError::InvalidPrincipal {
            loan_id: "z".to_string(),
            principal: dec!(0),
        }]
    );
}

#[test]
fn test_negative_principal_with_positive_balance_reports_principal_only() {
    let errors = validate_loan(&loan("n", dec!(-10), dec!(5)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].as_str(), "INVALID_PRINCIPAL");
}

#[test]
fn test_balance_above_principal_is_invalid_balance() {
    let errors = validate_loan(&loan("over", dec!(100), dec!(150)));
    assert_eq!(
        errors,
        vec![LoanError::InvalidBalance {
            loan_id: "over".to_string(),
            balance: dec!(150),
            principal: dec!(100),
        }]
    );
}

#[test]
fn test_negative_balance_is_invalid_balance() {
    let errors = validate_loan(&loan("neg", dec!(100), dec!(-1)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].loan_id(), Some("neg"));
    assert_eq!(errors[0].as_str(), "INVALID_BALANCE");
}

#[test]
fn test_blank_name_and_negative_payment_are_reported() {
    let record = LoanRecord::new("x", "   ", dec!(100), dec!(50), dec!(-5));
    let codes: Vec<&str> = validate_loan(&record).iter().map(|e| e.as_str()).collect();
    assert_eq!(codes, vec!["EMPTY_NAME", "INVALID_MONTHLY_PAYMENT"]);
}

#[test]
fn test_duplicate_ids_reported_after_first_occurrence() {
    let loans = vec![
        loan("a", dec!(100), dec!(10)),
        loan("b", dec!(100), dec!(10)),
        loan("a", dec!(200), dec!(20)),
        loan("a", dec!(300), dec!(30)),
    ];

    let issues = validate_loans(&loans);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].position, 2);
    assert_eq!(issues[1].position, 3);
    for issue in &issues {
        assert_eq!(issue.loan_id, "a");
        assert_eq!(
            issue.error,
            LoanError::DuplicateId {
                loan_id: "a".to_string(),
                first_position: 0,
            }
        );
    }
}

#[test]
fn test_issues_are_reported_per_offending_record() {
    let loans = vec![
        loan("ok", dec!(100), dec!(10)),
        loan("bad-principal", dec!(0), dec!(0)),
        loan("bad-balance", dec!(100), dec!(101)),
    ];

    let issues = validate_loans(&loans);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].loan_id, "bad-principal");
    assert_eq!(issues[0].position, 1);
    assert_eq!(issues[1].loan_id, "bad-balance");
    assert_eq!(issues[1].position, 2);
}

#[test]
fn test_empty_sequence_has_no_issues() {
    assert!(validate_loans(&[]).is_empty());
}

#[test]
fn test_loan_record_deserializes_from_camel_case_json() {
    let json = r#"{"id":"1","name":"Car Loan","principal":1000000,"balance":800000,"monthlyPayment":30000}"#;
    let record: LoanRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.monthly_payment, dec!(30000));
    assert_eq!(record.amount_paid(), Some(dec!(200000)));
}
