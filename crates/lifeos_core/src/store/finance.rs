//! Finance mutations: settings, categories, expenses, savings, income.
//!
//! # Responsibility
//! - Keep `FinanceCategory::spent` consistent with the expense log by
//!   construction: every expense add/delete adjusts its category in the
//!   same state transition.

use super::Store;
use crate::model::finance::{
    CategoryDraft, Expense, ExpenseDraft, FinanceCategory, FinanceSettingsPatch, IncomeSource,
    IncomeSourceDraft, SavingsGoal, SavingsGoalDraft,
};
use log::info;
use uuid::Uuid;

impl Store {
    pub fn update_finance_settings(&mut self, patch: FinanceSettingsPatch) {
        self.state_mut().finance_settings.apply_patch(patch);
    }

    pub fn add_category(&mut self, draft: CategoryDraft) -> Uuid {
        let category = FinanceCategory::from_draft(draft);
        let id = category.id;
        self.state_mut().categories.push(category);
        id
    }

    /// Removes a category. Expenses that referenced it keep their dangling
    /// id; lookups simply find nothing afterwards.
    pub fn delete_category(&mut self, id: Uuid) {
        self.state_mut().categories.retain(|c| c.id != id);
    }

    /// Records an expense and bumps the referenced category's spent total.
    ///
    /// The category must exist at creation time; when it does not, only the
    /// expense is recorded.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Uuid {
        let expense = Expense {
            id: Uuid::new_v4(),
            amount: draft.amount,
            category_id: draft.category_id,
            description: draft.description,
            date: draft.date,
        };
        let id = expense.id;

        let state = self.state_mut();
        if let Some(category) = state
            .categories
            .iter_mut()
            .find(|c| c.id == expense.category_id)
        {
            category.spent += expense.amount;
        }
        info!(
            "event=expense_add module=store status=ok id={} amount={} category={}",
            id, expense.amount, expense.category_id
        );
        state.expenses.push(expense);
        id
    }

    /// Deletes an expense, refunding its category's spent total (clamped at
    /// zero) atomically with the removal. Unknown ids are a no-op.
    pub fn delete_expense(&mut self, id: Uuid) {
        let state = self.state_mut();
        let Some(position) = state.expenses.iter().position(|e| e.id == id) else {
            return;
        };

        let expense = state.expenses.remove(position);
        if let Some(category) = state
            .categories
            .iter_mut()
            .find(|c| c.id == expense.category_id)
        {
            category.spent = (category.spent - expense.amount).max(0.0);
        }
        info!(
            "event=expense_delete module=store status=ok id={} amount={}",
            id, expense.amount
        );
    }

    pub fn add_savings_goal(&mut self, draft: SavingsGoalDraft) -> Uuid {
        let goal = SavingsGoal::from_draft(draft);
        let id = goal.id;
        self.state_mut().savings_goals.push(goal);
        id
    }

    /// Moves a goal's saved amount by an arbitrary delta, floored at zero.
    pub fn update_savings_goal(&mut self, id: Uuid, delta: f64) {
        if let Some(goal) = self.state_mut().savings_goals.iter_mut().find(|g| g.id == id) {
            goal.adjust(delta);
        }
    }

    pub fn delete_savings_goal(&mut self, id: Uuid) {
        self.state_mut().savings_goals.retain(|g| g.id != id);
    }

    pub fn add_income_source(&mut self, draft: IncomeSourceDraft) -> Uuid {
        let source = IncomeSource::from_draft(draft);
        let id = source.id;
        self.state_mut().income_sources.push(source);
        id
    }

    pub fn update_income_source_amount(&mut self, id: Uuid, amount: f64) {
        if let Some(source) = self.state_mut().income_sources.iter_mut().find(|s| s.id == id) {
            source.amount = amount;
        }
    }

    pub fn delete_income_source(&mut self, id: Uuid) {
        self.state_mut().income_sources.retain(|s| s.id != id);
    }
}
