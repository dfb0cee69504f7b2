//! Finance domain models: categories, expenses, savings goals, income.
//!
//! # Responsibility
//! - Define budgeting records and the income allocation settings.
//!
//! # Invariants
//! - `FinanceCategory::spent` only changes through expense add/delete and is
//!   clamped at zero.
//! - `SavingsGoal::current_amount` starts at zero, is floored at zero, and
//!   may exceed `target_amount`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceCategory {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub budget: f64,
    pub spent: f64,
    pub color: String,
    /// Fixed recurring cost such as rent or subscriptions.
    pub is_fixed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub emoji: String,
    pub budget: f64,
    pub color: String,
    pub is_fixed: bool,
}

impl FinanceCategory {
    pub fn from_draft(draft: CategoryDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            emoji: draft.emoji,
            budget: draft.budget,
            spent: 0.0,
            color: draft.color,
            is_fixed: draft.is_fixed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category_id: Uuid,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category_id: Uuid,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalDraft {
    pub name: String,
    pub emoji: String,
    pub target_amount: f64,
    pub deadline: Option<String>,
    pub color: String,
}

impl SavingsGoal {
    pub fn from_draft(draft: SavingsGoalDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            emoji: draft.emoji,
            target_amount: draft.target_amount,
            current_amount: 0.0,
            deadline: draft.deadline,
            color: draft.color,
        }
    }

    /// Adds a positive or negative delta, floored at zero.
    pub fn adjust(&mut self, delta: f64) {
        self.current_amount = (self.current_amount + delta).max(0.0);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub amount: f64,
    /// Recurring monthly income as opposed to a one-off payment.
    pub is_monthly: bool,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSourceDraft {
    pub name: String,
    pub emoji: String,
    pub amount: f64,
    pub is_monthly: bool,
    pub date: String,
}

impl IncomeSource {
    pub fn from_draft(draft: IncomeSourceDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            emoji: draft.emoji,
            amount: draft.amount,
            is_monthly: draft.is_monthly,
            date: draft.date,
        }
    }
}

/// Monthly income and its percentage split across allocation buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSettings {
    pub monthly_income: f64,
    pub investment_percent: f64,
    pub savings_percent: f64,
    pub expenses_percent: f64,
    pub emergency_percent: f64,
}

impl Default for FinanceSettings {
    fn default() -> Self {
        Self {
            monthly_income: 100_000.0,
            investment_percent: 20.0,
            savings_percent: 20.0,
            expenses_percent: 50.0,
            emergency_percent: 10.0,
        }
    }
}

/// Updatable finance settings fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSettingsPatch {
    pub monthly_income: Option<f64>,
    pub investment_percent: Option<f64>,
    pub savings_percent: Option<f64>,
    pub expenses_percent: Option<f64>,
    pub emergency_percent: Option<f64>,
}

impl FinanceSettings {
    pub fn apply_patch(&mut self, patch: FinanceSettingsPatch) {
        if let Some(value) = patch.monthly_income {
            self.monthly_income = value;
        }
        if let Some(value) = patch.investment_percent {
            self.investment_percent = value;
        }
        if let Some(value) = patch.savings_percent {
            self.savings_percent = value;
        }
        if let Some(value) = patch.expenses_percent {
            self.expenses_percent = value;
        }
        if let Some(value) = patch.emergency_percent {
            self.emergency_percent = value;
        }
    }
}

/// The category set a fresh profile starts with.
pub fn default_categories() -> Vec<FinanceCategory> {
    let seed = [
        ("Еда", "🍕", 15_000.0, "#f97316"),
        ("Транспорт", "🚗", 5_000.0, "#3b82f6"),
        ("Развлечения", "🎮", 5_000.0, "#8b5cf6"),
        ("Здоровье", "💊", 3_000.0, "#10b981"),
        ("Подписки", "📱", 2_000.0, "#ec4899"),
        ("Другое", "📦", 5_000.0, "#6b7280"),
    ];

    seed.into_iter()
        .map(|(name, emoji, budget, color)| FinanceCategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            budget,
            spent: 0.0,
            color: color.to_string(),
            is_fixed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{default_categories, FinanceSettings, FinanceSettingsPatch, SavingsGoal, SavingsGoalDraft};

    #[test]
    fn savings_goal_floors_at_zero_and_can_exceed_target() {
        let mut goal = SavingsGoal::from_draft(SavingsGoalDraft {
            name: "Ноутбук".to_string(),
            emoji: "💻".to_string(),
            target_amount: 1_000.0,
            deadline: None,
            color: "#10b981".to_string(),
        });

        goal.adjust(-500.0);
        assert_eq!(goal.current_amount, 0.0);

        goal.adjust(1_500.0);
        assert!(goal.current_amount > goal.target_amount);
    }

    #[test]
    fn default_categories_start_unspent() {
        let categories = default_categories();
        assert_eq!(categories.len(), 6);
        assert!(categories.iter().all(|c| c.spent == 0.0));
    }

    #[test]
    fn settings_patch_is_partial() {
        let mut settings = FinanceSettings::default();
        settings.apply_patch(FinanceSettingsPatch {
            monthly_income: Some(120_000.0),
            ..FinanceSettingsPatch::default()
        });
        assert_eq!(settings.monthly_income, 120_000.0);
        assert_eq!(settings.savings_percent, 20.0);
    }
}
