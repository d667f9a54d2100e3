//! Font loading barrier.
//!
//! Every font a text update is about to write with passes through a
//! `FontGate`. Requests are deduplicated by `family::style`, then loaded
//! concurrently; the gate opens once all of them are ready. The first
//! failure closes the gate for good.

use crate::error::FontLoadFailure;
use fb_core::{FontLoader, FontRef};
use futures::future::try_join_all;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct FontGate {
    fonts: Vec<FontRef>,
    seen: HashSet<String>,
}

impl FontGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `font`. Returns `false` if it was already queued.
    pub fn request(&mut self, font: &FontRef) -> bool {
        if !self.seen.insert(font.key()) {
            return false;
        }
        self.fonts.push(font.clone());
        true
    }

    pub fn request_all<'a>(&mut self, fonts: impl IntoIterator<Item = &'a FontRef>) {
        for font in fonts {
            self.request(font);
        }
    }

    /// Distinct fonts queued so far, in request order.
    pub fn fonts(&self) -> &[FontRef] {
        &self.fonts
    }

    /// Load every queued font concurrently.
    pub async fn open<L: FontLoader + ?Sized>(&self, loader: &L) -> Result<(), FontLoadFailure> {
        log::trace!("font gate: loading {} font(s)", self.fonts.len());
        try_join_all(self.fonts.iter().map(|font| async move {
            loader
                .load_font(font)
                .await
                .map_err(|source| FontLoadFailure {
                    font: font.clone(),
                    source,
                })
        }))
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::{FontLibrary, HostError};

    struct Library(FontLibrary);

    impl FontLoader for Library {
        async fn load_font(&self, font: &FontRef) -> Result<(), HostError> {
            self.0.load(font).await
        }
    }

    #[test]
    fn requests_are_deduplicated_by_key() {
        let mut gate = FontGate::new();
        let x = FontRef::new("Inter", "Bold");
        let y = FontRef::new("Roboto", "Regular");
        assert!(gate.request(&x));
        assert!(!gate.request(&x));
        gate.request_all([&x, &y, &x]);
        assert_eq!(gate.fonts(), &[x, y]);
    }

    #[tokio::test]
    async fn issues_one_load_per_distinct_font() {
        let library = Library(FontLibrary::standard());
        let x = FontRef::new("Inter", "Bold");
        let y = FontRef::new("Roboto", "Regular");

        let mut gate = FontGate::new();
        gate.request_all([&x, &x, &x, &y]);
        gate.open(&library).await.unwrap();

        let requests = library.0.load_requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.contains(&x));
        assert!(requests.contains(&y));
        assert!(library.0.is_loaded(&x) && library.0.is_loaded(&y));
    }

    #[tokio::test]
    async fn unavailable_font_fails_the_gate() {
        let library = Library(FontLibrary::standard());
        let missing = FontRef::new("Papyrus", "Regular");

        let mut gate = FontGate::new();
        gate.request(&FontRef::default());
        gate.request(&missing);
        let err = gate.open(&library).await.unwrap_err();
        assert_eq!(err.font, missing);
        assert_eq!(err.source, HostError::FontUnavailable(missing));
    }

    #[tokio::test]
    async fn empty_gate_opens_immediately() {
        let library = Library(FontLibrary::standard());
        FontGate::new().open(&library).await.unwrap();
        assert!(library.0.load_requests().is_empty());
    }
}
