//! Inbound events from the host toolkit.
//!
//! The host feeds these into [`AutocompleteField::handle_event`] (or calls
//! the corresponding operations directly). There is no global notification
//! subscription: keyboard-height updates and layout passes are injected
//! explicitly, scoped by the attach/detach lifecycle events.
//!
//! [`AutocompleteField::handle_event`]: crate::AutocompleteField::handle_event

use crate::panel::LayoutContext;

/// An event the host toolkit delivers to the field controller.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// An editing session began (the field gained input focus).
    EditingBegan,
    /// The edited text changed to the given value.
    TextEdited(String),
    /// The editing session ended (the field lost input focus).
    EditingEnded,
    /// The editing session ended via the submit/return action.
    EditingEndedOnSubmit,
    /// A result row was picked (tap/click/Enter on a row).
    RowPicked(usize),
    /// The on-screen keyboard height changed.
    KeyboardHeightChanged(f32),
    /// The host performed a layout pass with the field's current frame.
    LayoutPass(LayoutContext),
    /// The field was attached to a host view hierarchy.
    AttachedToHost,
    /// The field was detached from its host view hierarchy.
    DetachedFromHost,
}
