//! The autocomplete field controller.
//!
//! [`AutocompleteField`] owns the control's lifecycle state: the current
//! text, the selection set, the result list, and the floating panel's
//! visibility and placement. The host toolkit feeds it edit events and
//! layout passes; the controller answers through signals and the
//! row-provider accessors.
//!
//! # Example
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
//! field.text_changed.connect(|text| {
//!     println!("field text: {text}");
//! });
//!
//! field.begin_editing();
//! field.text_edited("Ap");
//! assert_eq!(field.row_count(), 2);
//!
//! field.pick_result(0);
//! assert_eq!(field.text(), "Apple, ");
//! ```

use typeahead_core::{Rect, Signal};

use crate::error::{FieldError, FieldResult};
use crate::event::FieldEvent;
use crate::filter::{CaseSensitivity, SEPARATOR, SelectionMode, filter_items};
use crate::item::{Listable, same_item};
use crate::panel::{
    LayoutContext, PanelConfig, PanelDirection, PanelGeometry, PanelState, compute_geometry,
};

/// The controller's state-machine state.
///
/// The control is reused across many edit sessions; there is no terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPhase {
    /// No editing session in progress.
    #[default]
    Idle,
    /// Editing, panel not yet placed.
    Editing,
    /// Editing with the panel open above the field.
    PanelOpenAbove,
    /// Editing with the panel open below the field.
    PanelOpenBelow,
}

/// A text-input controller with a floating list of prefix matches.
///
/// As the user types, the field filters the caller-supplied dataset by
/// display-text prefix and shows the matches in a floating panel placed
/// above or below the input, away from the on-screen keyboard. Picking a
/// row updates the selection set and renders it back into the text.
///
/// The field is generic over the item type; see [`Listable`].
///
/// # Signals
///
/// - `text_changed`: the control rewrote the field's displayed text
/// - `selections_changed`: the selection set changed (carries new count)
/// - `panel_visibility_changed`: the panel was shown or hidden
/// - `panel_geometry_changed`: the panel was (re)placed
/// - `focus_release_requested`: a single-select pick ended the session;
///   the host should release input focus
///
/// Note that the inbound [`text_edited`](Self::text_edited) does *not*
/// re-emit `text_changed`: the host already knows about edits it delivered
/// itself. The signal fires only when the control rewrites the text
/// (picks, session begin/end).
pub struct AutocompleteField<T: Listable + PartialEq + Clone> {
    /// The field's current text content.
    text: String,
    /// Single- or multi-select, fixed at configuration time.
    mode: SelectionMode,
    /// Case folding applied when matching.
    case_sensitivity: CaseSensitivity,
    /// The full candidate dataset.
    items: Vec<T>,
    /// Current filtered result list; recomputed on every edit.
    results: Vec<T>,
    /// Ordered set of chosen items.
    selections: Vec<T>,
    /// Highlighted row for keyboard navigation, if any.
    highlighted: Option<usize>,
    /// State-machine state.
    phase: FieldPhase,
    /// Whether the results panel is currently shown.
    panel_visible: bool,
    /// Most recent keyboard height; consumed lazily on the next layout.
    keyboard_height: f32,
    /// Whether the field is attached to a host hierarchy.
    attached: bool,
    /// Most recent layout pass, if any.
    last_layout: Option<LayoutContext>,
    /// The panel resource; created lazily on layout while attached.
    panel: Option<PanelState>,
    /// Placement and sizing constants.
    config: PanelConfig,

    // Signals

    /// Signal emitted when the control rewrites the displayed text.
    pub text_changed: Signal<String>,
    /// Signal emitted when the selection set changes (carries new count).
    pub selections_changed: Signal<usize>,
    /// Signal emitted when the panel is shown or hidden.
    pub panel_visibility_changed: Signal<bool>,
    /// Signal emitted when the panel is (re)placed.
    pub panel_geometry_changed: Signal<PanelGeometry>,
    /// Signal emitted when the host should release input focus.
    pub focus_release_requested: Signal<()>,
}

impl<T: Listable + PartialEq + Clone> AutocompleteField<T> {
    /// Create an empty single-select field.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            mode: SelectionMode::Single,
            case_sensitivity: CaseSensitivity::CaseInsensitive,
            items: Vec::new(),
            results: Vec::new(),
            selections: Vec::new(),
            highlighted: None,
            phase: FieldPhase::Idle,
            panel_visible: false,
            keyboard_height: 0.0,
            attached: false,
            last_layout: None,
            panel: None,
            config: PanelConfig::default(),
            text_changed: Signal::new(),
            selections_changed: Signal::new(),
            panel_visibility_changed: Signal::new(),
            panel_geometry_changed: Signal::new(),
            focus_release_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the selection mode using builder pattern.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the dataset using builder pattern.
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.set_items(items);
        self
    }

    /// Set the case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the panel configuration using builder pattern.
    pub fn with_config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Get the case sensitivity applied when matching.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Get the panel configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Get the dataset.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the dataset.
    ///
    /// The result list is refiltered against the new dataset immediately;
    /// replacing items mid-edit therefore takes effect on the rows shown
    /// right away.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.results = filter_items(&self.items, &self.text, self.mode, self.case_sensitivity);
        self.highlighted = None;
    }

    // =========================================================================
    // Observable Output
    // =========================================================================

    /// The field's current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordered sequence of chosen items.
    ///
    /// Treat this as read-only; the control owns the selection set and
    /// rewrites it on picks.
    pub fn selections(&self) -> &[T] {
        &self.selections
    }

    /// Clear the selection set.
    ///
    /// Caller-level reset; the text content is left untouched.
    pub fn clear_selections(&mut self) {
        if self.selections.is_empty() {
            return;
        }
        self.selections.clear();
        self.selections_changed.emit(0);
    }

    /// The controller's state-machine state.
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    /// Whether the results panel is currently shown.
    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// The panel's placement from the most recent layout, if any.
    pub fn panel_geometry(&self) -> Option<PanelGeometry> {
        self.panel.as_ref().and_then(|p| p.geometry())
    }

    /// The panel's frame at this instant, mid-animation.
    pub fn panel_animated_rect(&self) -> Option<Rect> {
        self.panel.as_ref().and_then(|p| p.animated_rect())
    }

    /// The most recent keyboard height fed to the controller.
    pub fn keyboard_height(&self) -> f32 {
        self.keyboard_height
    }

    // =========================================================================
    // Row Provider (queried by the rendering layer)
    // =========================================================================

    /// Number of rows in the current result list.
    pub fn row_count(&self) -> usize {
        self.results.len()
    }

    /// Display string for a result row, or `None` if out of range.
    pub fn row_text(&self, index: usize) -> Option<String> {
        self.results.get(index).map(Listable::display_text)
    }

    /// Whether a result row is part of the current selection set
    /// (rendered with a "currently selected" mark).
    pub fn row_is_selected(&self, index: usize) -> bool {
        self.results
            .get(index)
            .is_some_and(|item| self.selections.iter().any(|s| same_item(s, item)))
    }

    /// The highlighted row for keyboard navigation, if any.
    pub fn highlighted_row(&self) -> Option<usize> {
        self.highlighted
    }

    // =========================================================================
    // Edit Session
    // =========================================================================

    /// An editing session began.
    ///
    /// In multi-select mode with a non-empty selection, a trailing
    /// separator is appended to prime entry of the next fragment. No-op on
    /// the text otherwise.
    pub fn begin_editing(&mut self) {
        self.phase = FieldPhase::Editing;
        if self.mode == SelectionMode::Multi && !self.selections.is_empty() {
            self.text.push_str(SEPARATOR);
            self.text_changed.emit(self.text.clone());
        }
        tracing::debug!(target: "typeahead::field", mode = ?self.mode, "editing began");
    }

    /// The edited text changed.
    ///
    /// Refilters the dataset, shows the panel, and recomputes its
    /// placement if a layout pass has been seen.
    pub fn text_edited(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        if self.phase == FieldPhase::Idle {
            self.phase = FieldPhase::Editing;
        }
        self.refilter();
        self.set_panel_visible(true);
        self.place_panel();
    }

    /// The editing session ended.
    ///
    /// Hides the panel. In multi-select mode the text is normalized to the
    /// canonical join of the selection set, dropping any partially-typed
    /// fragment that was never picked.
    pub fn end_editing(&mut self) {
        self.set_panel_visible(false);
        if self.mode == SelectionMode::Multi {
            let joined = self.joined_selections();
            if self.text != joined {
                self.text = joined;
                self.text_changed.emit(self.text.clone());
            }
        }
        self.phase = FieldPhase::Idle;
        tracing::debug!(target: "typeahead::field", "editing ended");
    }

    /// The editing session ended via the submit/return action.
    ///
    /// Reserved hook for caller-defined submit behavior; deliberately
    /// alters no state.
    pub fn end_editing_on_submit(&mut self) {}

    // =========================================================================
    // Picks
    // =========================================================================

    /// A result row was picked.
    ///
    /// Single-select: the pick replaces the selection set (an idempotent
    /// overwrite, without change signals, when the item was already
    /// selected), rewrites the text to
    /// the item's display string, hides the panel, and requests focus
    /// release. Multi-select: the pick toggles the item's membership by
    /// identity and rewrites the text to the joined selection, with a
    /// trailing separator after an addition; the panel stays visible and
    /// focus is retained.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the current result list. That means
    /// the displayed rows and the result list have desynchronized, which
    /// is a host contract violation; use [`try_pick`](Self::try_pick) to
    /// surface it as an error instead.
    pub fn pick_result(&mut self, index: usize) {
        assert!(
            index < self.results.len(),
            "picked row {index} out of range (result list has {} rows)",
            self.results.len()
        );
        self.pick_unchecked(index);
    }

    /// Checked variant of [`pick_result`](Self::pick_result).
    pub fn try_pick(&mut self, index: usize) -> FieldResult<()> {
        if index >= self.results.len() {
            return Err(FieldError::RowOutOfRange {
                index,
                len: self.results.len(),
            });
        }
        self.pick_unchecked(index);
        Ok(())
    }

    fn pick_unchecked(&mut self, index: usize) {
        let item = self.results[index].clone();
        tracing::debug!(
            target: "typeahead::field",
            index,
            id = item.identifier(),
            mode = ?self.mode,
            "row picked"
        );

        match self.mode {
            SelectionMode::Single => {
                let unchanged =
                    self.selections.len() == 1 && same_item(&self.selections[0], &item);
                self.rewrite_text(item.display_text());
                self.selections = vec![item];
                if !unchanged {
                    self.selections_changed.emit(1);
                }
                self.set_panel_visible(false);
                self.phase = FieldPhase::Idle;
                self.focus_release_requested.emit(());
            }
            SelectionMode::Multi => {
                let position = self.selections.iter().position(|s| same_item(s, &item));
                let new_text = match position {
                    Some(position) => {
                        self.selections.remove(position);
                        self.joined_selections()
                    }
                    None => {
                        self.selections.push(item);
                        let mut text = self.joined_selections();
                        text.push_str(SEPARATOR);
                        text
                    }
                };
                self.rewrite_text(new_text);
                self.selections_changed.emit(self.selections.len());
            }
        }
    }

    // =========================================================================
    // Highlight Navigation
    // =========================================================================

    /// Move the highlight down one row, wrapping to the top.
    pub fn highlight_next(&mut self) {
        if !self.panel_visible || self.results.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(row) if row + 1 < self.results.len() => row + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the highlight up one row, wrapping to the bottom.
    pub fn highlight_previous(&mut self) {
        if !self.panel_visible || self.results.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => self.results.len() - 1,
            Some(row) => row - 1,
        });
    }

    /// Pick the highlighted row, if any.
    ///
    /// Returns `true` if a pick happened.
    pub fn pick_highlighted(&mut self) -> bool {
        match self.highlighted {
            Some(row) if row < self.results.len() => {
                self.pick_unchecked(row);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Keyboard & Layout
    // =========================================================================

    /// The on-screen keyboard height changed.
    ///
    /// Only stores the new height; placement is recomputed lazily on the
    /// next layout pass so successive keyboard notifications coalesce into
    /// one animated move.
    pub fn set_keyboard_height(&mut self, height: f32) {
        self.keyboard_height = height;
        tracing::trace!(
            target: "typeahead::field",
            height,
            "keyboard height stored; placement deferred to next layout pass"
        );
    }

    /// A layout pass supplied the field's current frame.
    ///
    /// Lazily creates the panel on the first pass after attach, then
    /// recomputes its placement. While detached this is a safe no-op.
    pub fn layout(&mut self, ctx: LayoutContext) {
        self.last_layout = Some(ctx);
        if !self.attached {
            return;
        }
        if self.panel.is_none() {
            self.panel = Some(PanelState::new(&self.config));
        }
        self.place_panel();
    }

    /// The field was attached to a host hierarchy.
    ///
    /// The panel is not created here; it appears lazily on the next layout
    /// pass.
    pub fn attached_to_host(&mut self) {
        self.attached = true;
    }

    /// The field was detached from its host hierarchy.
    ///
    /// Tears down the panel resource and ends any editing session. The
    /// selection set and text survive re-attachment.
    pub fn detached_from_host(&mut self) {
        self.attached = false;
        self.panel = None;
        self.set_panel_visible(false);
        self.phase = FieldPhase::Idle;
    }

    /// Dispatch an inbound host event to the corresponding operation.
    pub fn handle_event(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::EditingBegan => self.begin_editing(),
            FieldEvent::TextEdited(text) => self.text_edited(text),
            FieldEvent::EditingEnded => self.end_editing(),
            FieldEvent::EditingEndedOnSubmit => self.end_editing_on_submit(),
            FieldEvent::RowPicked(index) => self.pick_result(index),
            FieldEvent::KeyboardHeightChanged(height) => self.set_keyboard_height(height),
            FieldEvent::LayoutPass(ctx) => self.layout(ctx),
            FieldEvent::AttachedToHost => self.attached_to_host(),
            FieldEvent::DetachedFromHost => self.detached_from_host(),
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Refilter the dataset against the current text.
    fn refilter(&mut self) {
        self.results = filter_items(&self.items, &self.text, self.mode, self.case_sensitivity);
        self.highlighted = None;
    }

    /// Recompute and apply the panel placement.
    ///
    /// No-op until the panel exists, a layout pass has been seen, and the
    /// panel is visible.
    fn place_panel(&mut self) {
        if !self.panel_visible {
            return;
        }
        let Some(ctx) = self.last_layout else {
            return;
        };
        let Some(panel) = self.panel.as_mut() else {
            return;
        };

        let content_height = self.config.content_height(self.results.len());
        let geometry = compute_geometry(&ctx, self.keyboard_height, content_height, &self.config);
        panel.apply_geometry(geometry);
        self.phase = match geometry.direction {
            PanelDirection::Above => FieldPhase::PanelOpenAbove,
            PanelDirection::Below => FieldPhase::PanelOpenBelow,
        };
        self.panel_geometry_changed.emit(geometry);
    }

    /// Set panel visibility, emitting the signal on change.
    fn set_panel_visible(&mut self, visible: bool) {
        if self.panel_visible == visible {
            return;
        }
        self.panel_visible = visible;
        self.panel_visibility_changed.emit(visible);
    }

    /// Rewrite the displayed text, emitting `text_changed` on change.
    fn rewrite_text(&mut self, text: String) {
        if self.text != text {
            self.text = text;
            self.text_changed.emit(self.text.clone());
        }
    }

    /// The canonical `", "`-join of the selection set's display strings.
    fn joined_selections(&self) -> String {
        self.selections
            .iter()
            .map(Listable::display_text)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl<T: Listable + PartialEq + Clone> Default for AutocompleteField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listable + PartialEq + Clone> std::fmt::Debug for AutocompleteField<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteField")
            .field("text", &self.text)
            .field("mode", &self.mode)
            .field("phase", &self.phase)
            .field("items", &self.items.len())
            .field("results", &self.results.len())
            .field("selections", &self.selections.len())
            .field("panel_visible", &self.panel_visible)
            .finish()
    }
}
