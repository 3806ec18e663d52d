//! Month ledger
//!
//! A ledger holds one month's expense records and wallet balance and keeps a
//! running total of what has been spent. Every mutation is written through
//! to the store before the in-memory state changes, so a failed write leaves
//! the ledger exactly as it was and `total_spent` always equals the sum of
//! the records.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseDraft, ExpenseRecord, Money, MonthId, SortMethod};
use crate::prompt::Prompt;
use crate::storage::{keys, read_json, write_json, KeyValueStore};

/// The record currently open for editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Position of the record in stored order
    pub index: usize,
    /// Pending-edit buffer
    pub draft: ExpenseDraft,
}

/// Expense records and wallet for one month
pub struct Ledger<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    month: MonthId,
    records: Vec<ExpenseRecord>,
    wallet_balance: Money,
    total_spent: Money,
    editing: Option<EditSession>,
}

impl<'a, S: KeyValueStore + ?Sized> Ledger<'a, S> {
    /// Load a month's ledger; missing or unreadable data gives an empty one
    pub fn open(store: &'a S, month: MonthId) -> BudgetResult<Self> {
        let entries: Vec<serde_json::Value> =
            read_json(store, &keys::expenses(&month))?.unwrap_or_default();

        let mut records: Vec<ExpenseRecord> = Vec::with_capacity(entries.len());
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<ExpenseRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(month = %month, position, error = %e, "dropping unreadable stored expense");
                }
            }
        }

        let wallet_balance = match store.get(&keys::wallet(&month))? {
            Some(raw) => match Money::parse(&raw) {
                Ok(amount) if !amount.is_negative() && !amount.exceeds_max() => amount,
                _ => {
                    tracing::warn!(month = %month, value = %raw, "ignoring unreadable wallet balance");
                    Money::zero()
                }
            },
            None => Money::zero(),
        };

        let total_spent = records
            .iter()
            .try_fold(Money::zero(), |total, r| total.checked_add(r.amount()))
            .ok_or_else(total_overflow)?;

        Ok(Self {
            store,
            month,
            records,
            wallet_balance,
            total_spent,
            editing: None,
        })
    }

    /// Remove all stored data for `month`
    pub(crate) fn purge(store: &S, month: &MonthId) -> BudgetResult<()> {
        store.delete(&keys::expenses(month))?;
        store.delete(&keys::wallet(month))?;
        Ok(())
    }

    pub fn month(&self) -> MonthId {
        self.month
    }

    /// Records in stored (insertion) order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn wallet_balance(&self) -> Money {
        self.wallet_balance
    }

    pub fn total_spent(&self) -> Money {
        self.total_spent
    }

    /// Wallet balance minus total spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.wallet_balance - self.total_spent
    }

    /// The open edit session, if any
    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Validate and append a record
    ///
    /// Returns the stored index of the new record.
    pub fn add_record(&mut self, description: &str, amount: &str, day: &str) -> BudgetResult<usize> {
        let record = ExpenseRecord::from_input(description, amount, day)?;
        let amount = record.amount();
        let total_spent = self
            .total_spent
            .checked_add(amount)
            .ok_or_else(total_overflow)?;

        let mut records = self.records.clone();
        records.push(record);
        self.save_records(&records)?;

        self.records = records;
        self.total_spent = total_spent;

        let index = self.records.len() - 1;
        tracing::debug!(month = %self.month, index, amount = %amount, "expense added");
        Ok(index)
    }

    /// Open `index` for editing and return its pending-edit buffer
    pub fn begin_edit(&mut self, index: usize) -> BudgetResult<&ExpenseDraft> {
        self.ensure_not_editing_other(index)?;
        let record = self
            .records
            .get(index)
            .ok_or_else(|| BudgetError::expense_not_found(index))?;

        let session = self.editing.insert(EditSession {
            index,
            draft: ExpenseDraft::from(record),
        });
        Ok(&session.draft)
    }

    /// Replace the record at `index` in place and close the edit session
    pub fn commit_edit(
        &mut self,
        index: usize,
        description: &str,
        amount: &str,
        day: &str,
    ) -> BudgetResult<()> {
        self.ensure_not_editing_other(index)?;
        let old_amount = self
            .records
            .get(index)
            .map(ExpenseRecord::amount)
            .ok_or_else(|| BudgetError::expense_not_found(index))?;

        let record = ExpenseRecord::from_input(description, amount, day)?;
        let new_amount = record.amount();
        let total_spent = self
            .total_spent
            .checked_sub(old_amount)
            .and_then(|t| t.checked_add(new_amount))
            .ok_or_else(total_overflow)?;

        let mut records = self.records.clone();
        records[index] = record;
        self.save_records(&records)?;

        self.records = records;
        self.total_spent = total_spent;
        self.editing = None;

        tracing::debug!(month = %self.month, index, old = %old_amount, new = %new_amount, "expense edited");
        Ok(())
    }

    /// Drop the open edit session without changing any record
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove the record at `index` after confirmation
    ///
    /// Returns the removed record, or `None` when the user declines.
    pub fn delete_record(
        &mut self,
        index: usize,
        prompt: &dyn Prompt,
    ) -> BudgetResult<Option<ExpenseRecord>> {
        let record = self
            .records
            .get(index)
            .ok_or_else(|| BudgetError::expense_not_found(index))?;

        if !prompt.confirm(&format!(
            "Delete expense #{} \"{}\" ({})?",
            index + 1,
            record.description(),
            record.amount()
        )) {
            return Ok(None);
        }

        let mut records = self.records.clone();
        let removed = records.remove(index);
        self.save_records(&records)?;

        self.records = records;
        self.total_spent -= removed.amount();

        self.editing = match self.editing.take() {
            Some(session) if session.index == index => None,
            Some(mut session) if session.index > index => {
                session.index -= 1;
                Some(session)
            }
            other => other,
        };

        tracing::debug!(month = %self.month, index, amount = %removed.amount(), "expense deleted");
        Ok(Some(removed))
    }

    /// Replace the wallet balance
    pub fn set_wallet_balance(&mut self, amount: &str) -> BudgetResult<()> {
        if amount.trim().is_empty() {
            return Err(BudgetError::InvalidInput("Wallet amount is required".into()));
        }
        let balance =
            Money::parse(amount).map_err(|e| BudgetError::InvalidInput(e.to_string()))?;
        if balance.is_negative() {
            return Err(BudgetError::InvalidInput(format!(
                "Wallet balance cannot be negative, got {}",
                balance
            )));
        }
        if balance.exceeds_max() {
            return Err(BudgetError::InvalidInput(format!(
                "Wallet balance cannot exceed {}, got {}",
                Money::MAX,
                balance
            )));
        }

        self.store
            .set(&keys::wallet(&self.month), &balance.to_decimal_string())?;
        self.wallet_balance = balance;

        tracing::debug!(month = %self.month, balance = %balance, "wallet balance set");
        Ok(())
    }

    /// Records in presentation order, paired with their stored index
    ///
    /// Both orderings are stable: records that compare equal keep their
    /// insertion order. Stored order is never changed.
    pub fn sorted_view(&self, method: SortMethod) -> Vec<(usize, &ExpenseRecord)> {
        let mut view: Vec<(usize, &ExpenseRecord)> = self.records.iter().enumerate().collect();
        view.sort_by(|(_, a), (_, b)| method.compare(a, b));
        view
    }

    fn ensure_not_editing_other(&self, index: usize) -> BudgetResult<()> {
        match &self.editing {
            Some(session) if session.index != index => Err(BudgetError::EditInProgress {
                editing: session.index,
            }),
            _ => Ok(()),
        }
    }

    fn save_records(&self, records: &[ExpenseRecord]) -> BudgetResult<()> {
        write_json(self.store, &keys::expenses(&self.month), records)
    }
}

fn total_overflow() -> BudgetError {
    BudgetError::InvalidInput("Total spent is too large to track".into())
}

/// Render an amount with South Asian digit grouping, e.g. `1,23,456.50`
pub fn format_currency(amount: Money) -> String {
    amount.format_grouped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetResult;
    use crate::prompt::testing::ScriptedPrompt;
    use crate::prompt::AssumeYes;
    use crate::storage::MemoryStore;

    fn march() -> MonthId {
        MonthId::parse("2024-03").unwrap()
    }

    fn assert_total_consistent<S: KeyValueStore + ?Sized>(ledger: &Ledger<'_, S>) {
        let sum: Money = ledger.records().iter().map(ExpenseRecord::amount).sum();
        assert_eq!(ledger.total_spent(), sum);
    }

    /// Store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: std::cell::Cell<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> BudgetResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> BudgetResult<()> {
            if self.fail_writes.get() {
                return Err(BudgetError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn delete(&self, key: &str) -> BudgetResult<()> {
            self.inner.delete(key)
        }
    }

    #[test]
    fn test_monthly_scenario() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();

        ledger.add_record("Coffee", "150", "5").unwrap();
        assert_eq!(ledger.total_spent(), Money::from_units(150));

        ledger.add_record("Rent", "10000", "1").unwrap();
        assert_eq!(ledger.total_spent(), Money::from_units(10150));

        ledger.set_wallet_balance("20000").unwrap();
        assert_eq!(ledger.remaining(), Money::from_units(9850));

        ledger.delete_record(0, &AssumeYes).unwrap();
        assert_eq!(ledger.total_spent(), Money::from_units(10000));
        assert_eq!(ledger.remaining(), Money::from_units(10000));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::parse("123456.5").unwrap()), "1,23,456.50");
    }

    #[test]
    fn test_invalid_input_leaves_ledger_untouched() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();

        for (description, amount, day) in [
            ("", "10", "1"),
            ("Tea", "", "1"),
            ("Tea", "abc", "1"),
            ("Tea", "0", "1"),
            ("Tea", "-5", "1"),
            ("Tea", "10", ""),
            ("Tea", "10", "0"),
            ("Tea", "10", "32"),
        ] {
            let err = ledger.add_record(description, amount, day).unwrap_err();
            assert!(err.is_invalid_input(), "{:?} accepted", (description, amount, day));
        }

        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.total_spent(), Money::from_units(150));
        let reloaded = Ledger::open(&store, march()).unwrap();
        assert_eq!(reloaded.records().len(), 1);
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();

        ledger.add_record("Coffee", "150.25", "5").unwrap();
        assert_total_consistent(&ledger);
        ledger.add_record("Rent", "10000", "1").unwrap();
        assert_total_consistent(&ledger);
        ledger.add_record("Groceries", "2340.10", "12").unwrap();
        assert_total_consistent(&ledger);

        ledger.commit_edit(1, "Rent", "9500", "1").unwrap();
        assert_total_consistent(&ledger);
        assert_eq!(ledger.total_spent(), Money::from_cents(15025 + 950000 + 234010));

        ledger.delete_record(2, &AssumeYes).unwrap();
        assert_total_consistent(&ledger);
        ledger.delete_record(0, &AssumeYes).unwrap();
        assert_total_consistent(&ledger);
        ledger.delete_record(0, &AssumeYes).unwrap();
        assert_total_consistent(&ledger);
        assert!(ledger.total_spent().is_zero());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();
        ledger.add_record("Rent", "10000", "1").unwrap();
        ledger.add_record("Bus", "40", "9").unwrap();

        let draft = ledger.begin_edit(1).unwrap().clone();
        assert_eq!(draft, ExpenseDraft::new("Rent", "10000.00", "1"));
        // Record stays counted while the edit is open
        assert_eq!(ledger.total_spent(), Money::from_units(10190));

        ledger
            .commit_edit(1, &draft.description, "12000", &draft.day)
            .unwrap();

        assert!(ledger.editing().is_none());
        assert_eq!(ledger.records()[1].description(), "Rent");
        assert_eq!(ledger.records()[1].amount(), Money::from_units(12000));
        assert_eq!(ledger.records()[2].description(), "Bus");
        assert_eq!(ledger.total_spent(), Money::from_units(12190));
    }

    #[test]
    fn test_only_one_edit_at_a_time() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();
        ledger.add_record("Rent", "10000", "1").unwrap();

        ledger.begin_edit(0).unwrap();
        assert!(matches!(
            ledger.begin_edit(1),
            Err(BudgetError::EditInProgress { editing: 0 })
        ));
        assert!(matches!(
            ledger.commit_edit(1, "Rent", "1", "1"),
            Err(BudgetError::EditInProgress { editing: 0 })
        ));

        // Reopening the same record is fine
        ledger.begin_edit(0).unwrap();

        ledger.cancel_edit();
        ledger.begin_edit(1).unwrap();
        assert_eq!(ledger.editing().map(|s| s.index), Some(1));
    }

    #[test]
    fn test_failed_commit_keeps_session_open() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();

        ledger.begin_edit(0).unwrap();
        assert!(ledger.commit_edit(0, "Coffee", "free", "5").is_err());
        assert_eq!(ledger.editing().map(|s| s.index), Some(0));
        assert_eq!(ledger.total_spent(), Money::from_units(150));
    }

    #[test]
    fn test_out_of_range_index() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();

        assert!(ledger.begin_edit(1).unwrap_err().is_not_found());
        assert!(ledger.commit_edit(3, "X", "1", "1").unwrap_err().is_not_found());
        assert!(ledger.delete_record(1, &AssumeYes).unwrap_err().is_not_found());
    }

    #[test]
    fn test_declined_delete_keeps_record() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();

        let prompt = ScriptedPrompt::answering(false);
        assert_eq!(ledger.delete_record(0, &prompt).unwrap(), None);
        assert_eq!(prompt.asked.borrow().len(), 1);
        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.total_spent(), Money::from_units(150));
    }

    #[test]
    fn test_delete_adjusts_edit_session() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("A", "1", "1").unwrap();
        ledger.add_record("B", "2", "2").unwrap();
        ledger.add_record("C", "3", "3").unwrap();

        ledger.begin_edit(2).unwrap();
        ledger.delete_record(0, &AssumeYes).unwrap();
        assert_eq!(ledger.editing().map(|s| s.index), Some(1));

        ledger.delete_record(1, &AssumeYes).unwrap();
        assert!(ledger.editing().is_none());
    }

    #[test]
    fn test_wallet_validation() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();

        assert!(ledger.set_wallet_balance("lots").unwrap_err().is_invalid_input());
        assert!(ledger.set_wallet_balance("").unwrap_err().is_invalid_input());
        assert!(ledger.set_wallet_balance("-1").unwrap_err().is_invalid_input());
        assert!(ledger.wallet_balance().is_zero());

        ledger.set_wallet_balance("0").unwrap();
        ledger.set_wallet_balance("1,500.75").unwrap();
        assert_eq!(ledger.wallet_balance(), Money::from_cents(150075));
        assert_eq!(
            store.get(&keys::wallet(&march())).unwrap().as_deref(),
            Some("1500.75")
        );
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.set_wallet_balance("100").unwrap();
        ledger.add_record("Dinner", "250", "3").unwrap();
        assert_eq!(ledger.remaining(), Money::from_units(-150));
    }

    #[test]
    fn test_sorted_by_date_is_stable() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Lunch", "200", "5").unwrap();
        ledger.add_record("Rent", "10000", "1").unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();
        ledger.add_record("Bus", "40", "1").unwrap();

        let order: Vec<(usize, &str)> = ledger
            .sorted_view(SortMethod::ByDate)
            .into_iter()
            .map(|(i, r)| (i, r.description()))
            .collect();
        assert_eq!(
            order,
            vec![(1, "Rent"), (3, "Bus"), (0, "Lunch"), (2, "Coffee")]
        );

        // Stored order untouched
        assert_eq!(ledger.records()[0].description(), "Lunch");
    }

    #[test]
    fn test_sorted_by_amount_descending_is_stable() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Tea", "40", "2").unwrap();
        ledger.add_record("Rent", "10000", "1").unwrap();
        ledger.add_record("Bus", "40", "3").unwrap();

        let order: Vec<&str> = ledger
            .sorted_view(SortMethod::ByAmountDescending)
            .into_iter()
            .map(|(_, r)| r.description())
            .collect();
        assert_eq!(order, vec!["Rent", "Tea", "Bus"]);
    }

    #[test]
    fn test_round_trip_through_store() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150.50", "5").unwrap();
        ledger.add_record("Rent", "10000", "1").unwrap();
        ledger.set_wallet_balance("20000").unwrap();

        let reloaded = Ledger::open(&store, march()).unwrap();
        assert_eq!(reloaded.records(), ledger.records());
        assert_eq!(reloaded.wallet_balance(), ledger.wallet_balance());
        assert_eq!(reloaded.total_spent(), ledger.total_spent());
    }

    #[test]
    fn test_reads_legacy_records() {
        let store = MemoryStore::new();
        store
            .set(
                &keys::expenses(&march()),
                r#"[{"expense":"Milk","amount":60,"date":"3"},{"expense":"Fuel","amount":"1500.5","date":"14"}]"#,
            )
            .unwrap();

        let ledger = Ledger::open(&store, march()).unwrap();
        assert_eq!(ledger.records().len(), 2);
        assert_eq!(ledger.total_spent(), Money::from_cents(156050));
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();

        let err = ledger.add_record("A", "90000000000000000", "1").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(ledger.set_wallet_balance("90000000000000000").unwrap_err().is_invalid_input());

        ledger.add_record("A", "10000000000000", "1").unwrap();
        ledger.add_record("B", "10000000000000", "2").unwrap();
        assert_eq!(ledger.total_spent(), Money::MAX + Money::MAX);
        assert_total_consistent(&ledger);
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let store = MemoryStore::new();
        let entry = r#"{"expense":"Big","amount":10000000000000,"date":"1"}"#;
        // 10^15 hundredths each; 9300 of them pass i64::MAX
        let blob = format!("[{}]", vec![entry; 9300].join(","));
        store.set(&keys::expenses(&march()), &blob).unwrap();
        assert!(matches!(Ledger::open(&store, march()), Err(e) if e.is_invalid_input()));

        let blob = format!("[{}]", vec![entry; 9223].join(","));
        store.set(&keys::expenses(&march()), &blob).unwrap();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        assert!(ledger.add_record("One more", "10000000000000", "1").unwrap_err().is_invalid_input());
        assert_eq!(ledger.records().len(), 9223);
        assert_total_consistent(&ledger);
    }

    #[test]
    fn test_round_trip_at_amount_limit() {
        let store = MemoryStore::new();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Big", "9999999999999.99", "1").unwrap();
        ledger.add_record("Bigger", "10000000000000", "2").unwrap();
        ledger.set_wallet_balance("10000000000000").unwrap();

        let reloaded = Ledger::open(&store, march()).unwrap();
        assert_eq!(reloaded.records(), ledger.records());
        assert_eq!(reloaded.records()[0].amount(), Money::from_cents(999_999_999_999_999));
        assert_eq!(reloaded.wallet_balance(), Money::MAX);
    }

    #[test]
    fn test_invalid_stored_records_skipped_individually() {
        let store = MemoryStore::new();
        store
            .set(
                &keys::expenses(&march()),
                r#"[{"expense":"Milk","amount":60,"date":"3"},{"expense":"Refund","amount":0,"date":"4"},{"expense":"Fuel","amount":1500,"date":"14"},"junk"]"#,
            )
            .unwrap();

        let mut ledger = Ledger::open(&store, march()).unwrap();
        let names: Vec<&str> = ledger.records().iter().map(|r| r.description()).collect();
        assert_eq!(names, vec!["Milk", "Fuel"]);
        assert_eq!(ledger.total_spent(), Money::from_units(1560));

        ledger.add_record("Tea", "20", "5").unwrap();
        let reloaded = Ledger::open(&store, march()).unwrap();
        let names: Vec<&str> = reloaded.records().iter().map(|r| r.description()).collect();
        assert_eq!(names, vec!["Milk", "Fuel", "Tea"]);
    }

    #[test]
    fn test_malformed_data_is_empty() {
        let store = MemoryStore::new();
        store.set(&keys::expenses(&march()), "[{\"expense\":").unwrap();
        store.set(&keys::wallet(&march()), "plenty").unwrap();

        let ledger = Ledger::open(&store, march()).unwrap();
        assert!(ledger.records().is_empty());
        assert!(ledger.wallet_balance().is_zero());
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let store = FlakyStore::default();
        let mut ledger = Ledger::open(&store, march()).unwrap();
        ledger.add_record("Coffee", "150", "5").unwrap();
        ledger.set_wallet_balance("500").unwrap();

        store.fail_writes.set(true);
        assert!(ledger.add_record("Rent", "10000", "1").is_err());
        assert!(ledger.commit_edit(0, "Coffee", "175", "5").is_err());
        assert!(ledger.delete_record(0, &AssumeYes).is_err());
        assert!(ledger.set_wallet_balance("900").is_err());

        assert_eq!(ledger.records().len(), 1);
        assert_eq!(ledger.total_spent(), Money::from_units(150));
        assert_eq!(ledger.wallet_balance(), Money::from_units(500));
    }

    #[test]
    fn test_months_are_isolated() {
        let store = MemoryStore::new();
        let april = MonthId::parse("2024-04").unwrap();

        Ledger::open(&store, march())
            .unwrap()
            .add_record("Coffee", "150", "5")
            .unwrap();

        let other = Ledger::open(&store, april).unwrap();
        assert!(other.records().is_empty());
    }
}
