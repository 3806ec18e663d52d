//! Theme preference persistence

use crate::error::BudgetResult;
use crate::models::Theme;
use crate::storage::{keys, KeyValueStore};

/// Stored theme, defaulting to light when absent or unrecognised
pub fn current_theme<S: KeyValueStore + ?Sized>(store: &S) -> BudgetResult<Theme> {
    let theme = match store.get(keys::THEME)? {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "ignoring unknown theme");
            Theme::default()
        }),
        None => Theme::default(),
    };
    Ok(theme)
}

pub fn set_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> BudgetResult<()> {
    store.set(keys::THEME, theme.as_str())
}

/// Flip between light and dark, returning the new theme
pub fn toggle_theme<S: KeyValueStore + ?Sized>(store: &S) -> BudgetResult<Theme> {
    let theme = current_theme(store)?.toggled();
    set_theme(store, theme)?;
    Ok(theme)
}
