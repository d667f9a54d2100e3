//! Installed and loaded fonts of the in-memory host.

use crate::host::HostError;
use crate::model::FontRef;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Fonts the host can provide, the subset loaded so far, and a log of every
/// load request issued.
#[derive(Debug, Default)]
pub struct FontLibrary {
    available: HashSet<String>,
    loaded: Mutex<HashSet<String>>,
    requests: Mutex<Vec<FontRef>>,
}

impl FontLibrary {
    pub fn new(available: impl IntoIterator<Item = FontRef>) -> Self {
        Self {
            available: available.into_iter().map(|f| f.key()).collect(),
            ..Self::default()
        }
    }

    /// Inter in every named weight plus a few common families.
    pub fn standard() -> Self {
        const INTER_STYLES: [&str; 9] = [
            "Thin",
            "Extra Light",
            "Light",
            "Regular",
            "Medium",
            "Semi Bold",
            "Bold",
            "Extra Bold",
            "Black",
        ];
        let inter = INTER_STYLES.iter().map(|s| FontRef::new("Inter", *s));
        let others = [
            FontRef::new("Roboto", "Regular"),
            FontRef::new("Roboto", "Bold"),
            FontRef::new("Roboto", "Italic"),
            FontRef::new("Roboto Mono", "Regular"),
        ];
        Self::new(inter.chain(others))
    }

    pub fn is_available(&self, font: &FontRef) -> bool {
        self.available.contains(&font.key())
    }

    pub fn is_loaded(&self, font: &FontRef) -> bool {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&font.key())
    }

    /// Every load request received, in order, including repeats.
    pub fn load_requests(&self) -> Vec<FontRef> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn load(&self, font: &FontRef) -> Result<(), HostError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(font.clone());

        if !self.is_available(font) {
            log::debug!("font load failed: {font}");
            return Err(HostError::FontUnavailable(font.clone()));
        }
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(font.key());
        log::trace!("font loaded: {font}");
        Ok(())
    }
}
