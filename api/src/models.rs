//! Wire types for the dashboard backend.
//!
//! Every amount here is in [`crate::currency::Currency::BASE`], exactly as
//! the backend sent it.

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;
use crate::display_amount::DisplayAmount;
use crate::error::ApiError;

/// Response of `GET /stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_balance: f64,
    pub highest_category: String,
    pub transaction_count: u64,
}

/// One row of `GET /recent_expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: String,
    #[serde(default)]
    pub note: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`, or `N/A` for rows written before dates existed.
    pub date: String,
    pub amount: f64,
}

/// One `[label, amount]` pair of `GET /spending_trend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint(pub String, pub f64);

impl TrendPoint {
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn amount(&self) -> f64 {
        self.1
    }
}

/// One `[category, amount]` pair of `GET /expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal(pub String, pub f64);

impl CategoryTotal {
    pub fn category(&self) -> &str {
        &self.0
    }

    pub fn amount(&self) -> f64 {
        self.1
    }
}

/// Body of `POST /add_expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub note: String,
}

/// The add-expense form exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub note: String,
}

impl ExpenseForm {
    /// Checks the required fields and builds the request body.
    ///
    /// The amount is read in the base currency, which is how the backend
    /// stores it.
    pub fn validate(&self) -> Result<NewExpense, ApiError> {
        let amount = self.amount.trim();
        let category = self.category.trim();
        if amount.is_empty() || category.is_empty() {
            return Err(ApiError::UserInput("Enter Amount and Category".into()));
        }
        let parsed = DisplayAmount::new_from_str(amount, Currency::BASE)
            .map_err(|e| ApiError::UserInput(format!("Amount: {e}")))?;
        if parsed.as_minor_units() <= 0 {
            return Err(ApiError::UserInput("Amount must be greater than zero".into()));
        }
        Ok(NewExpense {
            amount: parsed.as_f64(),
            category: category.to_string(),
            note: self.note.trim().to_string(),
        })
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response of `POST /init_chat` and `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_shapes() {
        let stats: Stats = serde_json::from_str(
            r#"{"total_balance": 2500.5, "transaction_count": 7, "highest_category": "Food"}"#,
        )
        .unwrap();
        assert_eq!(stats.transaction_count, 7);
        assert_eq!(stats.highest_category, "Food");

        let recent: Vec<Transaction> = serde_json::from_str(
            r#"[
                {"category": "Rent", "amount": 900, "note": null, "date": "2026-03-01 10:00:00"},
                {"category": "Food", "amount": 12.5, "date": "N/A"}
            ]"#,
        )
        .unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].note, None);
        assert_eq!(recent[1].date, "N/A");

        let trend: Vec<TrendPoint> =
            serde_json::from_str(r#"[["2026-03-01", 1000], ["2026-03-02", 1500.25]]"#).unwrap();
        assert_eq!(trend[1].label(), "2026-03-02");
        assert_eq!(trend[1].amount(), 1500.25);

        let breakdown: Vec<CategoryTotal> =
            serde_json::from_str(r#"[["Food", 300], ["Travel", 120]]"#).unwrap();
        assert_eq!(breakdown[0].category(), "Food");
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(serde_json::from_str::<Vec<TrendPoint>>(r#"[{"label": "x"}]"#).is_err());
        assert!(serde_json::from_str::<Stats>(r#"{"error": "boom"}"#).is_err());
    }

    #[test]
    fn form_requires_amount_and_category() {
        let missing_amount = ExpenseForm {
            category: "Food".into(),
            ..Default::default()
        };
        assert!(missing_amount.validate().unwrap_err().is_user_input());

        let missing_category = ExpenseForm {
            amount: "10".into(),
            category: "   ".into(),
            ..Default::default()
        };
        assert!(missing_category.validate().unwrap_err().is_user_input());

        let garbage = ExpenseForm {
            amount: "ten".into(),
            category: "Food".into(),
            ..Default::default()
        };
        assert!(garbage.validate().unwrap_err().is_user_input());
    }

    #[test]
    fn form_builds_request_body() {
        let form = ExpenseForm {
            amount: " 249.50 ".into(),
            category: " Food ".into(),
            note: "lunch".into(),
        };
        assert_eq!(
            form.validate().unwrap(),
            NewExpense {
                amount: 249.5,
                category: "Food".into(),
                note: "lunch".into(),
            }
        );
    }
}
