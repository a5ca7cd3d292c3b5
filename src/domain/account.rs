use crate::utils::error::{ModelError, Result};
use serde::Serialize;

/// Bank account whose pin and movements can only change through its methods.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub owner: String,
    pub currency: String,
    pub locale: String,
    #[serde(skip)]
    pin: u32,
    movements: Vec<f64>,
}

impl Account {
    pub fn new(owner: impl Into<String>, currency: impl Into<String>, pin: u32) -> Self {
        let owner = owner.into();
        tracing::debug!("Thanks for opening an account, {}", owner);
        Self {
            owner,
            currency: currency.into(),
            locale: "en-US".to_string(),
            pin,
            movements: Vec::new(),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn movements(&self) -> &[f64] {
        &self.movements
    }

    pub fn balance(&self) -> f64 {
        self.movements.iter().sum()
    }

    pub fn check_pin(&self, pin: u32) -> bool {
        self.pin == pin
    }

    pub fn deposit(&mut self, amount: f64) -> &mut Self {
        self.movements.push(amount);
        self
    }

    pub fn withdraw(&mut self, amount: f64) -> &mut Self {
        self.deposit(-amount)
    }

    pub fn request_loan(&mut self, amount: f64) -> Result<&mut Self> {
        if !Self::approve_loan(amount) {
            return Err(ModelError::LoanRejected { amount });
        }
        tracing::debug!("Loan of {} approved for {}", amount, self.owner);
        Ok(self.deposit(amount))
    }

    fn approve_loan(amount: f64) -> bool {
        amount > 0.0
    }

    pub fn helper() -> &'static str {
        "Call deposit, withdraw or request_loan to move money"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movements_and_balance() {
        let mut acc = Account::new("Jonas", "EUR", 1111);
        acc.deposit(250.0).withdraw(140.0);
        assert_eq!(acc.movements(), &[250.0, -140.0]);
        assert_eq!(acc.balance(), 110.0);
    }

    #[test]
    fn test_loan_approval() {
        let mut acc = Account::new("Jonas", "EUR", 1111);
        acc.request_loan(1000.0).unwrap();
        assert_eq!(acc.balance(), 1000.0);

        let err = acc.request_loan(0.0).unwrap_err();
        assert!(matches!(err, ModelError::LoanRejected { .. }));
        assert_eq!(acc.movements().len(), 1);
    }

    #[test]
    fn test_chaining() {
        let mut acc = Account::new("Jonas", "EUR", 1111).with_locale("de-DE");
        acc.deposit(300.0)
            .deposit(500.0)
            .withdraw(35.0)
            .request_loan(25000.0)
            .unwrap()
            .withdraw(4000.0);
        assert_eq!(acc.movements(), &[300.0, 500.0, -35.0, 25000.0, -4000.0]);
        assert_eq!(acc.locale, "de-DE");
    }

    #[test]
    fn test_pin_is_not_serialized() {
        let acc = Account::new("Jonas", "EUR", 1111);
        assert!(acc.check_pin(1111));
        assert!(!acc.check_pin(2222));

        let json = serde_json::to_value(&acc).unwrap();
        assert!(json.get("pin").is_none());
        assert_eq!(json["owner"], "Jonas");
    }
}
