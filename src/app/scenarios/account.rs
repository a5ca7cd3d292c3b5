use crate::domain::account::Account;
use crate::domain::ports::{Narrator, Scenario};
use crate::utils::error::Result;

pub struct AccountScenario;

impl Scenario for AccountScenario {
    fn name(&self) -> &'static str {
        "account"
    }

    fn run(&self, narrator: &mut dyn Narrator) -> Result<()> {
        let section = self.name();
        let mut acc = Account::new("Jonas", "EUR", 1111).with_locale("de-DE");
        narrator.narrate(
            section,
            format!("{} opened an account in {} ({})", acc.owner, acc.currency, acc.locale),
        )?;
        for pin in [2222, 1111] {
            let verdict = if acc.check_pin(pin) { "accepted" } else { "rejected" };
            narrator.narrate(section, format!("PIN {} {}", pin, verdict))?;
        }

        acc.deposit(250.0).withdraw(140.0);
        acc.request_loan(1000.0)?;
        narrator.narrate(section, format!("{} movements: {:?}", acc.owner, acc.movements()))?;

        if let Err(e) = acc.request_loan(-50.0) {
            tracing::warn!("{}", e);
            narrator.narrate(section, format!("Loan not approved: {}", e))?;
        }

        acc.deposit(300.0)
            .deposit(500.0)
            .withdraw(35.0)
            .request_loan(25000.0)?
            .withdraw(4000.0);
        narrator.narrate(section, format!("{} movements: {:?}", acc.owner, acc.movements()))?;
        narrator.narrate(section, format!("Balance: {} {}", acc.balance(), acc.currency))?;
        narrator.narrate(section, Account::helper().to_string())?;

        Ok(())
    }
}
