//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Month,
    Expense,
    Wallet,
    Theme,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Month => write!(f, "Month"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Wallet => write!(f, "Wallet"),
            EntityType::Theme => write!(f, "Theme"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Month the change belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,

    /// Stored index of the affected expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// JSON representation of the entity before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON representation of the entity after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            month: None,
            index: None,
            before: None,
            after: None,
        }
    }

    /// Entry for a newly created entity
    pub fn create<T: Serialize>(entity_type: EntityType, after: &T) -> Self {
        Self {
            after: serde_json::to_value(after).ok(),
            ..Self::new(Operation::Create, entity_type)
        }
    }

    /// Entry for a changed entity
    pub fn update<T: Serialize, U: Serialize>(entity_type: EntityType, before: &T, after: &U) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            ..Self::new(Operation::Update, entity_type)
        }
    }

    /// Entry for a removed entity
    pub fn delete<T: Serialize>(entity_type: EntityType, before: &T) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            ..Self::new(Operation::Delete, entity_type)
        }
    }

    pub fn in_month(mut self, month: impl ToString) -> Self {
        self.month = Some(month.to_string());
        self
    }

    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.entity_type
        );
        if let Some(month) = &self.month {
            line.push_str(&format!(" {}", month));
        }
        if let Some(index) = self.index {
            line.push_str(&format!(" #{}", index + 1));
        }
        match (&self.before, &self.after) {
            (Some(before), Some(after)) => line.push_str(&format!(": {} -> {}", before, after)),
            (None, Some(after)) => line.push_str(&format!(": {}", after)),
            (Some(before), None) => line.push_str(&format!(": {}", before)),
            (None, None) => {}
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(EntityType::Month, &"2024-03");
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.after, Some(json!("2024-03")));
        assert!(entry.before.is_none());
    }

    #[test]
    fn test_update_entry_with_context() {
        let entry = AuditEntry::update(EntityType::Expense, &json!({"amount": 150}), &json!({"amount": 175}))
            .in_month("2024-03")
            .at_index(0);

        assert_eq!(entry.month.as_deref(), Some("2024-03"));
        assert_eq!(entry.index, Some(0));
        assert!(entry.summary().contains("UPDATE Expense 2024-03 #1"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::delete(EntityType::Month, &"2024-03");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"delete\""));
        assert!(json.contains("\"entity_type\":\"month\""));
        assert!(!json.contains("\"after\""));
        assert!(!json.contains("\"index\""));
    }
}
