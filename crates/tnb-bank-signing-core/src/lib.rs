pub mod class_names;
pub mod copy;
pub mod display;
pub mod domain;
pub mod ports;
pub mod state_machine;
pub mod tile;

pub use class_names::ClassNames;
pub use copy::{copy_notice_message, copy_value, title_for_value};
pub use display::{signing_keys_button_label, LabelCache, ADD_SIGNING_KEYS, EDIT_SIGNING_KEYS};
pub use domain::{BankAddress, BankRecord, Item, Protocol, Severity};
pub use ports::{BankRegistryPort, ClipboardPort, NotifierPort, PortError};
pub use state_machine::{
    editor_transition, EditorAction, EditorState, EditorToggle, StateTransition, TransitionError,
};
pub use tile::{BankSigningTile, TileError, TileEvent, TileRow, TileView, COPY_LABEL};
