use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};

/// A bank account whose balance can only change through [`deposit`](Self::deposit)
/// and [`withdraw`](Self::withdraw). The fields are private to this module.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    account_number: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, opening_balance: f64) -> Result<Self> {
        check_amount("open", opening_balance)?;
        Ok(Self {
            account_number: account_number.into(),
            balance: opening_balance,
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        check_amount("deposit", amount)?;
        let new_balance = self.balance + amount;
        if !new_balance.is_finite() {
            return Err(TourError::InvalidAmount {
                operation: "deposit".to_string(),
                amount,
                reason: "balance would overflow".to_string(),
            });
        }
        self.balance = new_balance;
        tracing::debug!(account = %self.account_number, amount, balance = self.balance, "deposit");
        Ok(self.balance)
    }

    /// Leaves the balance untouched and returns `InsufficientBalance` when
    /// `amount` exceeds it.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        check_amount("withdraw", amount)?;
        if amount > self.balance {
            return Err(TourError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        tracing::debug!(account = %self.account_number, amount, balance = self.balance, "withdraw");
        Ok(self.balance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}

impl Transaction {
    pub fn amount(&self) -> f64 {
        match *self {
            Transaction::Deposit { amount } | Transaction::Withdraw { amount } => amount,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Transaction::Deposit { .. } => "deposit",
            Transaction::Withdraw { .. } => "withdraw",
        }
    }

    pub fn apply(&self, account: &mut BankAccount) -> Result<f64> {
        match *self {
            Transaction::Deposit { amount } => account.deposit(amount),
            Transaction::Withdraw { amount } => account.withdraw(amount),
        }
    }
}

fn check_amount(operation: &str, amount: f64) -> Result<()> {
    let reason = if !amount.is_finite() {
        "amount must be finite"
    } else if amount < 0.0 {
        "amount cannot be negative"
    } else {
        return Ok(());
    };
    Err(TourError::InvalidAmount {
        operation: operation.to_string(),
        amount,
        reason: reason.to_string(),
    })
}
