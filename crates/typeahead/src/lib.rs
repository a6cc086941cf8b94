//! An autocomplete text-field control.
//!
//! Typeahead filters a caller-supplied dataset by display-text prefix as
//! the user types and shows the matches in a floating panel placed above
//! or below the input, away from the on-screen keyboard. Picking a row
//! updates the selection set (single replace or multi toggle) and renders
//! it back into the text as a `", "`-separated list.
//!
//! The crate is host-agnostic: the embedding toolkit delivers
//! [`FieldEvent`]s (edits, layout passes, keyboard-height changes) and
//! renders from the controller's row-provider accessors and signals. See
//! [`AutocompleteField`] for the full picture.
//!
//! # Quick start
//!
//! ```
//! use typeahead::{AutocompleteField, SelectionMode, TextItem};
//!
//! let mut field = AutocompleteField::new()
//!     .with_mode(SelectionMode::Multi)
//!     .with_items(vec![
//!         TextItem::new("1", "Apple"),
//!         TextItem::new("2", "Apricot"),
//!         TextItem::new("3", "Banana"),
//!     ]);
//!
//! field.begin_editing();
//! field.text_edited("Ap");
//! field.pick_result(0);
//! assert_eq!(field.text(), "Apple, ");
//! ```

pub mod animation;
mod error;
mod event;
mod field;
mod filter;
mod item;
mod panel;

pub use animation::{Easing, GeometryTransition};
pub use error::{FieldError, FieldResult};
pub use event::FieldEvent;
pub use field::{AutocompleteField, FieldPhase};
pub use filter::{CaseSensitivity, SEPARATOR, SelectionMode, filter_items, query_fragment};
pub use item::{Listable, TextItem};
pub use panel::{
    LayoutContext, PanelConfig, PanelDirection, PanelGeometry, compute_geometry,
};

pub use typeahead_core::{Point, Rect, Size};
