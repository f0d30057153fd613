use crate::domain::ports::Clipboard;
use crate::render::SectionKey;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const COPIED_LABEL: &str = "Copied!";
pub const FAILED_LABEL: &str = "Copy failed";
pub const REVERT_AFTER: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Runtime state of one "copy email" button.
///
/// A click writes the address to the clipboard, flips the label to
/// [`COPIED_LABEL`] (or [`FAILED_LABEL`]) and schedules its own revert to
/// the original label. Overlapping clicks each get an independent timer.
#[derive(Debug, Clone)]
pub struct CopyEmailControl {
    section: SectionKey,
    email: String,
    original: String,
    label: Arc<Mutex<String>>,
}

impl CopyEmailControl {
    pub fn new(section: SectionKey, email: impl Into<String>, label: impl Into<String>) -> Self {
        let original = label.into();
        Self {
            section,
            email: email.into(),
            label: Arc::new(Mutex::new(original.clone())),
            original,
        }
    }

    pub fn section(&self) -> SectionKey {
        self.section
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn original_label(&self) -> &str {
        &self.original
    }

    pub fn label(&self) -> String {
        self.label
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_label(label: &Mutex<String>, text: &str) {
        let mut guard = label.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = text.to_string();
    }

    pub async fn click<C: Clipboard + ?Sized>(&self, clipboard: &C) -> CopyOutcome {
        let outcome = match clipboard.write_text(&self.email).await {
            Ok(()) => {
                tracing::debug!("Copied email from {} section", self.section.name());
                Self::set_label(&self.label, COPIED_LABEL);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                Self::set_label(&self.label, FAILED_LABEL);
                CopyOutcome::Failed
            }
        };

        let label = Arc::clone(&self.label);
        let original = self.original.clone();
        tokio::spawn(async move {
            tokio::time::sleep(REVERT_AFTER).await;
            Self::set_label(&label, &original);
        });

        outcome
    }
}
