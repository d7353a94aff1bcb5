use oop_tour::{BankAccount, TourError};

#[test]
fn test_deposit_increases_balance() {
    let mut account = BankAccount::new("1234567890", 1000.0).unwrap();
    account.deposit(500.0).unwrap();
    assert_eq!(account.balance(), 1500.0);
}

#[test]
fn test_overdraw_leaves_balance_unchanged() {
    let mut account = BankAccount::new("1234567890", 1500.0).unwrap();
    let result = account.withdraw(2000.0);
    assert!(matches!(result, Err(TourError::InsufficientBalance { .. })));
    assert_eq!(account.balance(), 1500.0);
}

#[test]
fn test_withdraw_within_balance() {
    let mut account = BankAccount::new("1234567890", 1500.0).unwrap();
    assert_eq!(account.withdraw(500.0).unwrap(), 1000.0);
    assert_eq!(account.balance(), 1000.0);
}

#[test]
fn test_balance_reads_are_idempotent() {
    let account = BankAccount::new("1234567890", 1000.0).unwrap();
    let readings: Vec<f64> = (0..5).map(|_| account.balance()).collect();
    assert!(readings.iter().all(|&b| b == 1000.0));
}

#[test]
fn test_negative_deposit_is_rejected() {
    let mut account = BankAccount::new("1234567890", 1000.0).unwrap();
    let err = account.deposit(-100.0).unwrap_err();
    assert_eq!(err.user_friendly_message(), "Cannot deposit an amount of -100");
    assert_eq!(account.balance(), 1000.0);
}
