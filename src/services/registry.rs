//! Month registry
//!
//! Owns the insertion-ordered set of selected months. Removing a month
//! cascades to that month's stored ledger data.

use crate::error::{BudgetError, BudgetResult};
use crate::models::MonthId;
use crate::prompt::Prompt;
use crate::storage::{keys, read_json, write_json, KeyValueStore};

use super::ledger::Ledger;

/// The set of months the user has picked
pub struct MonthRegistry<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    months: Vec<MonthId>,
}

impl<'a, S: KeyValueStore + ?Sized> MonthRegistry<'a, S> {
    /// Load the registry, starting empty when nothing usable is stored
    pub fn load(store: &'a S) -> BudgetResult<Self> {
        let raw: Vec<String> = read_json(store, keys::SELECTED_MONTHS)?.unwrap_or_default();

        let mut months: Vec<MonthId> = Vec::with_capacity(raw.len());
        for token in raw {
            match MonthId::parse(&token) {
                Ok(id) if months.contains(&id) => {
                    tracing::warn!(month = %id, "dropping duplicate stored month");
                }
                Ok(id) => months.push(id),
                Err(e) => {
                    tracing::warn!(token = %token, error = %e, "dropping unreadable stored month");
                }
            }
        }

        Ok(Self { store, months })
    }

    /// Selected months in the order they were added
    pub fn list_months(&self) -> &[MonthId] {
        &self.months
    }

    pub fn contains(&self, id: &MonthId) -> bool {
        self.months.contains(id)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Append a month
    ///
    /// A month that is already present is announced through `prompt` and
    /// rejected with [`BudgetError::DuplicateMonth`]; the set is unchanged.
    pub fn add_month(&mut self, id: MonthId, prompt: &dyn Prompt) -> BudgetResult<()> {
        if self.contains(&id) {
            prompt.notify(&format!("{} is already selected.", id));
            return Err(BudgetError::DuplicateMonth(id.to_string()));
        }

        let mut months = self.months.clone();
        months.push(id);
        self.save(&months)?;
        self.months = months;

        tracing::debug!(month = %id, "month added");
        Ok(())
    }

    /// Remove a month and its ledger data after confirmation
    ///
    /// Returns `false` when the user declines.
    pub fn delete_month(&mut self, id: &MonthId, prompt: &dyn Prompt) -> BudgetResult<bool> {
        if !self.contains(id) {
            return Err(BudgetError::month_not_found(id.to_string()));
        }

        if !prompt.confirm(&format!("Are you sure you want to delete {}?", id)) {
            return Ok(false);
        }

        // A failed purge must leave the month registered
        Ledger::purge(self.store, id)?;

        let months: Vec<MonthId> = self.months.iter().filter(|m| *m != id).copied().collect();
        self.save(&months)?;
        self.months = months;

        tracing::debug!(month = %id, "month deleted");
        Ok(true)
    }

    /// Open the ledger of a registered month
    pub fn open_ledger(&self, id: &MonthId) -> BudgetResult<Ledger<'a, S>> {
        if !self.contains(id) {
            return Err(BudgetError::month_not_found(id.to_string()));
        }
        Ledger::open(self.store, *id)
    }

    fn save(&self, months: &[MonthId]) -> BudgetResult<()> {
        write_json(self.store, keys::SELECTED_MONTHS, months)
    }
}
