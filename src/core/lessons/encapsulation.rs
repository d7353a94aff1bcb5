use crate::config::toml_config::AccountConfig;
use crate::domain::account::BankAccount;
use crate::domain::ports::{Console, Lesson, LessonKind};
use crate::utils::error::{Result, TourError};
use crate::utils::format::format_measure;

pub struct EncapsulationLesson {
    account: AccountConfig,
}

impl EncapsulationLesson {
    pub fn new(account: AccountConfig) -> Self {
        Self { account }
    }
}

impl Lesson for EncapsulationLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Encapsulation
    }

    fn title(&self) -> &str {
        "Encapsulation: state changes only through methods"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        let mut account = BankAccount::new(&self.account.number, self.account.opening_balance)?;
        console.write_line(&format!(
            "Account {} opened with balance {}",
            account.account_number(),
            format_measure(account.balance())
        ))?;

        for transaction in &self.account.transactions {
            let amount = format_measure(transaction.amount());
            match transaction.apply(&mut account) {
                Ok(balance) => console.write_line(&format!(
                    "{} {}: balance {}",
                    transaction.verb(),
                    amount,
                    format_measure(balance)
                ))?,
                Err(e @ TourError::InsufficientBalance { .. }) => {
                    tracing::warn!("{}", e);
                    console.write_line(&format!(
                        "{} {}: {}",
                        transaction.verb(),
                        amount,
                        e.user_friendly_message()
                    ))?;
                }
                Err(e) => return Err(e),
            }
        }

        console.write_line(&format!(
            "Final balance: {}",
            format_measure(account.balance())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferConsole;
    use crate::domain::account::Transaction;

    #[test]
    fn test_overdraw_prints_notice_and_continues() {
        let lesson = EncapsulationLesson::new(AccountConfig::default());
        let mut console = BufferConsole::new();
        lesson.run(&mut console).unwrap();

        assert_eq!(
            console.lines(),
            [
                "Account 1234567890 opened with balance 1000",
                "deposit 500: balance 1500",
                "withdraw 2000: Insufficient balance.",
                "withdraw 500: balance 1000",
                "Final balance: 1000",
            ]
        );
    }

    #[test]
    fn test_invalid_amount_aborts_the_lesson() {
        let lesson = EncapsulationLesson::new(AccountConfig {
            number: "1".to_string(),
            opening_balance: 10.0,
            transactions: vec![Transaction::Deposit { amount: -1.0 }],
        });
        let mut console = BufferConsole::new();
        assert!(matches!(
            lesson.run(&mut console),
            Err(TourError::InvalidAmount { .. })
        ));
    }
}
