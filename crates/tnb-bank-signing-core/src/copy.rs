//! Copy-to-clipboard sequencing for tile rows

use crate::domain::{Item, Severity};
use crate::ports::{ClipboardPort, NotifierPort, PortError};

/// Title of the first item holding `value`.
///
/// Rows are matched by value, not by key: when two items share a value the
/// earlier one is named.
pub fn title_for_value<'a>(items: &'a [Item], value: &str) -> Option<&'a str> {
    items
        .iter()
        .find(|item| item.value == value)
        .map(|item| item.title.as_str())
}

pub fn copy_notice_message(items: &[Item], value: &str) -> String {
    let title = title_for_value(items, value).unwrap_or("Value");
    format!("{} copied to the clipboard", title)
}

/// Writes `value` to the clipboard, then emits one success notification.
///
/// Returns the notification message. Nothing is emitted when the clipboard
/// write fails.
pub fn copy_value(
    items: &[Item],
    value: &str,
    clipboard: &mut impl ClipboardPort,
    notifier: &mut impl NotifierPort,
) -> Result<String, PortError> {
    clipboard.write_text(value)?;
    let message = copy_notice_message(items, value);
    notifier.notify(&message, Severity::Success);
    tracing::debug!(%message, "copied tile value");
    Ok(message)
}
