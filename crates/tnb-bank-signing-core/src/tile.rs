//! The bank signing details tile
//!
//! `BankSigningTile` owns the per-instance state (editor visibility and the
//! memoized button label) and turns the registry snapshot plus the caller's
//! items into a [`TileView`] every frame. Toolkits draw the view and feed user
//! input back as [`TileEvent`]s.

use std::collections::HashSet;

use thiserror::Error;

use crate::class_names::{self, ClassNames};
use crate::copy;
use crate::display::LabelCache;
use crate::domain::{BankAddress, Item};
use crate::ports::{BankRegistryPort, ClipboardPort, NotifierPort, PortError};
use crate::state_machine::{EditorAction, EditorState, EditorToggle};

pub const COPY_LABEL: &str = "Copy";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("no managed bank registered for {0}")]
    MissingBankRecord(BankAddress),
    #[error("clipboard write failed: {0}")]
    Clipboard(#[from] PortError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRow {
    pub key: String,
    pub title: String,
    pub value: String,
    pub top_classes: Vec<String>,
    pub title_classes: Vec<String>,
    pub copy_container_classes: Vec<String>,
    pub copy_icon_classes: Vec<String>,
    pub copy_text_classes: Vec<String>,
    pub value_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub root_classes: Vec<String>,
    pub rows: Vec<TileRow>,
    pub button_label: &'static str,
    pub editor_visible: bool,
}

/// User input reported by whatever draws the tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileEvent {
    CopyRequested { value: String },
    ActionButtonPressed,
    EditorClosed,
}

#[derive(Debug, Default)]
pub struct BankSigningTile {
    editor: EditorToggle,
    labels: LabelCache,
}

impl BankSigningTile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        address: &BankAddress,
        registry: &impl BankRegistryPort,
        class_name: Option<&str>,
        items: &[Item],
    ) -> Result<TileView, TileError> {
        let record = registry
            .get(address)
            .ok_or_else(|| TileError::MissingBankRecord(address.clone()))?;
        let button_label = self.labels.label_for(record);

        let names = ClassNames::new(class_names::TILE_BASE, class_name);
        let mut seen = HashSet::with_capacity(items.len());
        let rows = items
            .iter()
            .map(|item| {
                if !seen.insert(item.key.as_str()) {
                    tracing::debug!(key = %item.key, "duplicate tile row key");
                }
                TileRow {
                    key: item.key.clone(),
                    title: item.title.clone(),
                    value: item.value.clone(),
                    top_classes: names.element(class_names::TOP),
                    title_classes: names.element(class_names::TITLE),
                    copy_container_classes: names.element(class_names::COPY_CONTAINER),
                    copy_icon_classes: names.base_only(class_names::COPY_ICON),
                    copy_text_classes: names.base_only(class_names::COPY_TEXT),
                    value_classes: names.base_only(class_names::VALUE),
                }
            })
            .collect();

        Ok(TileView {
            root_classes: names.root(),
            rows,
            button_label,
            editor_visible: self.editor.is_open(),
        })
    }

    pub fn editor_state(&self) -> EditorState {
        self.editor.state()
    }

    pub fn editor_visible(&self) -> bool {
        self.editor.is_open()
    }

    pub fn activate_action_button(&mut self) -> EditorState {
        self.apply_editor(EditorAction::OpenEditor)
    }

    /// Close callback handed to the editor overlay.
    pub fn close_editor(&mut self) -> EditorState {
        self.apply_editor(EditorAction::Close)
    }

    pub fn copy(
        &self,
        items: &[Item],
        value: &str,
        clipboard: &mut impl ClipboardPort,
        notifier: &mut impl NotifierPort,
    ) -> Result<String, TileError> {
        Ok(copy::copy_value(items, value, clipboard, notifier)?)
    }

    /// Dispatches one event from the drawing layer.
    pub fn handle(
        &mut self,
        event: TileEvent,
        items: &[Item],
        clipboard: &mut impl ClipboardPort,
        notifier: &mut impl NotifierPort,
    ) -> Result<(), TileError> {
        match event {
            TileEvent::CopyRequested { value } => {
                self.copy(items, &value, clipboard, notifier)?;
            }
            TileEvent::ActionButtonPressed => {
                self.activate_action_button();
            }
            TileEvent::EditorClosed => {
                self.close_editor();
            }
        }
        Ok(())
    }

    /// How many times the button label was derived rather than served from cache.
    pub fn label_computations(&self) -> u64 {
        self.labels.computations()
    }

    fn apply_editor(&mut self, action: EditorAction) -> EditorState {
        match self.editor.apply(action) {
            Ok(transition) => {
                tracing::debug!(
                    from = ?transition.from,
                    to = ?transition.to,
                    reason = transition.reason,
                    "editor toggled"
                );
            }
            Err(err) => tracing::debug!(%err, "ignored editor input"),
        }
        self.editor.state()
    }
}
