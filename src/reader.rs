//! Reader view controller.
//!
//! `ReaderView` ties the pieces together for one live document: it picks the
//! main content, hides everything else, mounts the isolated view and marks
//! `<html>`, and undoes all of it on deactivation.
//!
//! # Example
//!
//! ```rust
//! use accessible_reader::{dom, ReaderView};
//!
//! let paragraph = format!("<p>{}</p>", "Plenty of readable words here. ".repeat(8));
//! let html = format!(
//!     "<body><nav>Menu</nav><article>{paragraph}{paragraph}</article></body>"
//! );
//! let doc = dom::parse(&html);
//!
//! let mut reader = ReaderView::new(&doc);
//! reader.activate().unwrap();
//! assert!(doc.select("#makeitaccessible-reader-overlay").exists());
//!
//! reader.deactivate();
//! assert!(!doc.select("#makeitaccessible-reader-overlay").exists());
//! ```

use dom_query::{Document, Selection};

use crate::candidate::{find_main_content, MainContent};
use crate::dom;
use crate::error::{Error, Result};
use crate::ledger::{hide_distractions, restore_distractions, HiddenLedger};
use crate::options::Options;
use crate::sanitize::SanitizeReport;
use crate::view::{build_isolated_view, IsolatedView};

type DismissHook<'a> = Box<dyn FnMut() + 'a>;

/// Reader view state for one document.
pub struct ReaderView<'a> {
    document: &'a Document,
    options: Options,
    ledger: HiddenLedger<'a>,
    main_content: Option<MainContent<'a>>,
    overlay: Option<Selection<'a>>,
    report: Option<SanitizeReport>,
    on_dismiss: Option<DismissHook<'a>>,
}

impl<'a> ReaderView<'a> {
    /// Idle reader view with default options.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self::with_options(document, Options::default())
    }

    #[must_use]
    pub fn with_options(document: &'a Document, options: Options) -> Self {
        Self {
            document,
            options,
            ledger: HiddenLedger::new(),
            main_content: None,
            overlay: None,
            report: None,
            on_dismiss: None,
        }
    }

    /// Register the hook run when the user dismisses the view.
    ///
    /// Replaces any previously registered hook.
    pub fn on_dismiss<F>(&mut self, hook: F)
    where
        F: FnMut() + 'a,
    {
        self.on_dismiss = Some(Box::new(hook));
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.main_content.is_some()
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The element chosen on activation, while active.
    #[must_use]
    pub fn main_content(&self) -> Option<&MainContent<'a>> {
        self.main_content.as_ref()
    }

    /// The mounted overlay, while active.
    #[must_use]
    pub fn overlay(&self) -> Option<&Selection<'a>> {
        self.overlay.as_ref()
    }

    /// What sanitization removed from the mounted copy, while active.
    #[must_use]
    pub fn sanitize_report(&self) -> Option<SanitizeReport> {
        self.report
    }

    #[must_use]
    pub fn ledger(&self) -> &HiddenLedger<'a> {
        &self.ledger
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.ledger.len()
    }

    /// Turn the reader view on.
    ///
    /// Does nothing if already active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMainContent`] when no element qualifies as main
    /// content. The document is left untouched in that case.
    pub fn activate(&mut self) -> Result<()> {
        if self.is_active() {
            return Ok(());
        }

        let Some(found) = find_main_content(self.document, &self.options) else {
            tracing::warn!("reader view: could not find main content, not activating");
            return Err(Error::NoMainContent);
        };

        self.ledger = hide_distractions(self.document, &found.element, &self.options);

        let view = build_isolated_view(&found.element, &self.options);
        self.overlay = self.mount(&view);
        self.report = Some(view.report());

        dom::add_class(&self.document.select("html"), &self.options.active_class);
        self.main_content = Some(found);
        Ok(())
    }

    /// Turn the reader view off and put the page back.
    ///
    /// Does nothing if not active.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }

        restore_distractions(&mut self.ledger);
        if let Some(overlay) = self.overlay.take() {
            dom::remove(&overlay);
        }
        dom::remove_class(&self.document.select("html"), &self.options.active_class);
        self.report = None;
        self.main_content = None;
    }

    /// Activate when `enabled`, deactivate otherwise.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::activate`] errors.
    pub fn toggle(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            self.activate()
        } else {
            self.deactivate();
            Ok(())
        }
    }

    /// A click on the close control: deactivate, then notify the dismiss hook.
    ///
    /// The hook only runs if the view was active.
    pub fn dismiss(&mut self) {
        if !self.is_active() {
            return;
        }
        self.deactivate();
        if let Some(hook) = self.on_dismiss.as_mut() {
            hook();
        }
    }

    fn mount(&self, view: &IsolatedView) -> Option<Selection<'a>> {
        let body = self.document.select("body");
        dom::append_html(&body, &view.html());
        dom::children(&body)
            .nodes()
            .last()
            .map(|node| Selection::from(*node))
    }
}
