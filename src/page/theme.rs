use crate::domain::ports::SettingsStore;
use crate::page::Page;
use crate::utils::error::Result;

pub const THEME_KEY: &str = "theme";
const LIGHT: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Stored form: `"light"` or the empty string.
    pub fn stored_value(self) -> &'static str {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => "",
        }
    }

    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(LIGHT) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// `data-theme` on `<html>` plus `aria-pressed` on the toggle button.
    pub fn apply(self, page: &mut Page, toggle_id: &str) -> Result<()> {
        match self {
            ThemeMode::Light => page.set_root_attr("data-theme", Some(LIGHT))?,
            ThemeMode::Dark => page.set_root_attr("data-theme", None)?,
        };
        let pressed = if self == ThemeMode::Light { "true" } else { "false" };
        if !page.set_attr(toggle_id, "aria-pressed", Some(pressed))? {
            tracing::debug!("No theme toggle '{}' in page", toggle_id);
        }
        Ok(())
    }
}

/// Owns the theme setting. Reads the store once when created; `toggle` is
/// the only code path that writes it.
pub struct ThemeToggle<S: SettingsStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: SettingsStore> ThemeToggle<S> {
    pub fn load(store: S) -> Result<Self> {
        let saved = store.get(THEME_KEY)?;
        let mode = ThemeMode::from_stored(saved.as_deref());
        tracing::debug!("Initial theme: {}", mode.name());
        Ok(Self { store, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.store.set(THEME_KEY, next.stored_value())?;
        self.mode = next;
        tracing::info!("Theme switched to {}", next.name());
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::settings::MemoryStore;

    #[test]
    fn test_defaults_to_dark_without_saved_value() {
        let toggle = ThemeToggle::load(MemoryStore::default()).unwrap();
        assert_eq!(toggle.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_writes_store_every_time() {
        let mut toggle = ThemeToggle::load(MemoryStore::default()).unwrap();

        assert_eq!(toggle.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(toggle.toggle().unwrap(), ThemeMode::Dark);

        let store = toggle.into_store();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_reads_saved_light_mode() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let toggle = ThemeToggle::load(store).unwrap();
        assert_eq!(toggle.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_apply_sets_root_and_toggle() {
        let mut page = Page::new(
            r#"<html lang="en"><body><button id="themeToggle">T</button></body></html>"#,
        );

        ThemeMode::Light.apply(&mut page, "themeToggle").unwrap();
        assert_eq!(page.root_attr("data-theme").unwrap().as_deref(), Some("light"));
        assert_eq!(
            page.attr("themeToggle", "aria-pressed").unwrap().as_deref(),
            Some("true")
        );

        ThemeMode::Dark.apply(&mut page, "themeToggle").unwrap();
        assert_eq!(page.root_attr("data-theme").unwrap(), None);
        assert_eq!(
            page.attr("themeToggle", "aria-pressed").unwrap().as_deref(),
            Some("false")
        );
    }
}
