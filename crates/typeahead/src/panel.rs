//! Floating results panel: placement rule and per-panel state.
//!
//! The panel opens above or below the field depending on where the field
//! sits in the visible area (the window minus the on-screen keyboard).
//! Geometry is transient: it is recomputed on every layout pass and never
//! persisted.

use std::time::Duration;

use typeahead_core::Rect;

use crate::animation::{Easing, GeometryTransition};

/// Which side of the field the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelDirection {
    /// Panel sits above the field, bottom edge touching the field's top.
    Above,
    /// Panel hangs below the field.
    Below,
}

/// Where and how large the panel currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Panel frame in window coordinates.
    pub rect: Rect,
    /// Side of the field the panel opens on.
    pub direction: PanelDirection,
}

/// The field's frame and window metrics for one layout pass.
///
/// Supplied by the host on every layout; the controller never queries the
/// toolkit itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// The field's frame in window coordinates.
    pub field_frame: Rect,
    /// Total height of the host window.
    pub window_height: f32,
}

impl LayoutContext {
    /// Create a layout context from the field frame and window height.
    pub fn new(field_frame: Rect, window_height: f32) -> Self {
        Self {
            field_frame,
            window_height,
        }
    }
}

/// Tunable placement and sizing constants for the panel.
///
/// The defaults mirror the classic values for a phone-sized window: a
/// 64-unit margin reserved above an upward panel and a 50-unit drop for a
/// downward one.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Margin reserved at the top of the window when opening upward.
    pub top_margin: f32,
    /// Offset between the field's origin and a downward panel's top edge.
    pub below_offset: f32,
    /// Total horizontal inset of the panel relative to the field width.
    pub horizontal_inset: f32,
    /// Height of a single result row.
    pub row_height: f32,
    /// Maximum number of rows the panel sizes itself for.
    pub max_visible_rows: usize,
    /// Duration of the animated panel move.
    pub transition_duration: Duration,
    /// Easing applied to the animated panel move.
    pub transition_easing: Easing,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            top_margin: 64.0,
            below_offset: 50.0,
            horizontal_inset: 4.0,
            row_height: 24.0,
            max_visible_rows: 7,
            transition_duration: Duration::from_millis(200),
            transition_easing: Easing::EaseOut,
        }
    }
}

impl PanelConfig {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top margin using builder pattern.
    pub fn with_top_margin(mut self, margin: f32) -> Self {
        self.top_margin = margin;
        self
    }

    /// Set the downward offset using builder pattern.
    pub fn with_below_offset(mut self, offset: f32) -> Self {
        self.below_offset = offset;
        self
    }

    /// Set the horizontal inset using builder pattern.
    pub fn with_horizontal_inset(mut self, inset: f32) -> Self {
        self.horizontal_inset = inset;
        self
    }

    /// Set the row height using builder pattern.
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(1.0);
        self
    }

    /// Set the maximum visible row count using builder pattern.
    pub fn with_max_visible_rows(mut self, rows: usize) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    /// Set the transition duration using builder pattern.
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Set the transition easing using builder pattern.
    pub fn with_transition_easing(mut self, easing: Easing) -> Self {
        self.transition_easing = easing;
        self
    }

    /// The content height the panel asks for when showing `rows` results.
    pub fn content_height(&self, rows: usize) -> f32 {
        rows.min(self.max_visible_rows) as f32 * self.row_height
    }
}

/// Compute the panel's placement for one layout pass.
///
/// The rule: with `available = window_height - keyboard_height`, a field
/// sitting in the lower half of the visible area opens the panel upward,
/// capped by the content height and the top margin; otherwise the panel
/// opens downward and claims the rest of the visible area. The panel is
/// horizontally aligned with the field, inset by
/// [`PanelConfig::horizontal_inset`] in total.
pub fn compute_geometry(
    ctx: &LayoutContext,
    keyboard_height: f32,
    content_height: f32,
    config: &PanelConfig,
) -> PanelGeometry {
    let field = ctx.field_frame;
    let available_height = ctx.window_height - keyboard_height;

    let (y, height, direction) = if field.origin.y > available_height / 2.0 {
        let height = content_height.min(field.origin.y - config.top_margin).max(0.0);
        (field.origin.y - height, height, PanelDirection::Above)
    } else {
        let height = (available_height - field.origin.y).max(0.0);
        (field.origin.y + config.below_offset, height, PanelDirection::Below)
    };

    let geometry = PanelGeometry {
        rect: Rect::new(
            field.origin.x + config.horizontal_inset / 2.0,
            y,
            (field.width() - config.horizontal_inset).max(0.0),
            height,
        ),
        direction,
    };

    tracing::trace!(
        target: "typeahead::panel",
        ?direction,
        y,
        height,
        available_height,
        "computed panel geometry"
    );

    geometry
}

/// The live panel resource.
///
/// Created lazily on the first layout pass while the field is attached to
/// a host hierarchy, torn down on detach. Visibility is controller state
/// and lives on the field; this type tracks placement and the animated
/// move toward it.
#[derive(Debug)]
pub struct PanelState {
    /// Placement from the most recent layout pass.
    geometry: Option<PanelGeometry>,
    /// Animated move toward the latest geometry.
    transition: GeometryTransition,
}

impl PanelState {
    /// Create a panel with no placement yet.
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            geometry: None,
            transition: GeometryTransition::new(
                config.transition_duration,
                config.transition_easing,
            ),
        }
    }

    /// Placement from the most recent layout pass, if any.
    pub fn geometry(&self) -> Option<PanelGeometry> {
        self.geometry
    }

    /// Apply a freshly computed placement, retargeting the animated move.
    pub fn apply_geometry(&mut self, geometry: PanelGeometry) {
        self.geometry = Some(geometry);
        self.transition.retarget(geometry.rect);
    }

    /// The panel frame at this instant, mid-animation.
    ///
    /// Returns `None` until a placement has been applied.
    pub fn animated_rect(&self) -> Option<Rect> {
        self.geometry.map(|_| self.transition.current())
    }

    /// Whether a panel move is still animating.
    pub fn is_moving(&self) -> bool {
        self.transition.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PanelConfig {
        PanelConfig::default()
    }

    #[test]
    fn test_lower_half_opens_above() {
        // Window 800, keyboard 300 -> available 500; field at y=400 is in
        // the lower half.
        let ctx = LayoutContext::new(Rect::new(20.0, 400.0, 300.0, 40.0), 800.0);
        let geometry = compute_geometry(&ctx, 300.0, 120.0, &config());

        assert_eq!(geometry.direction, PanelDirection::Above);
        assert_eq!(geometry.rect.height(), 120.0);
        // Bottom edge touches the field's top edge.
        assert_eq!(geometry.rect.bottom(), 400.0);
    }

    #[test]
    fn test_above_height_capped_by_top_margin() {
        let ctx = LayoutContext::new(Rect::new(0.0, 300.0, 300.0, 40.0), 800.0);
        // Lots of content; cap is origin.y - top_margin = 236.
        let geometry = compute_geometry(&ctx, 400.0, 10_000.0, &config());

        assert_eq!(geometry.direction, PanelDirection::Above);
        assert_eq!(geometry.rect.height(), 236.0);
        assert_eq!(geometry.rect.bottom(), 300.0);
    }

    #[test]
    fn test_upper_half_opens_below() {
        let ctx = LayoutContext::new(Rect::new(20.0, 100.0, 300.0, 40.0), 800.0);
        let geometry = compute_geometry(&ctx, 300.0, 120.0, &config());

        assert_eq!(geometry.direction, PanelDirection::Below);
        // Claims the rest of the visible area below the field.
        assert_eq!(geometry.rect.height(), 400.0);
        assert_eq!(geometry.rect.top(), 150.0); // origin.y + below_offset
    }

    #[test]
    fn test_width_inset_and_alignment() {
        let ctx = LayoutContext::new(Rect::new(20.0, 100.0, 300.0, 40.0), 800.0);
        let geometry = compute_geometry(&ctx, 0.0, 120.0, &config());

        assert_eq!(geometry.rect.width(), 296.0);
        assert_eq!(geometry.rect.left(), 22.0);
    }

    #[test]
    fn test_midpoint_boundary_opens_below() {
        // origin.y exactly at available/2 is not "greater than": downward.
        let ctx = LayoutContext::new(Rect::new(0.0, 250.0, 300.0, 40.0), 800.0);
        let geometry = compute_geometry(&ctx, 300.0, 120.0, &config());
        assert_eq!(geometry.direction, PanelDirection::Below);
    }

    #[test]
    fn test_above_height_never_negative() {
        // Field barely in the lower half of a tiny visible area, origin.y
        // under the top margin.
        let ctx = LayoutContext::new(Rect::new(0.0, 60.0, 300.0, 40.0), 400.0);
        let geometry = compute_geometry(&ctx, 300.0, 120.0, &config());

        assert_eq!(geometry.direction, PanelDirection::Above);
        assert_eq!(geometry.rect.height(), 0.0);
    }

    #[test]
    fn test_content_height_caps_at_max_rows() {
        let config = PanelConfig::default()
            .with_row_height(20.0)
            .with_max_visible_rows(5);

        assert_eq!(config.content_height(3), 60.0);
        assert_eq!(config.content_height(5), 100.0);
        assert_eq!(config.content_height(50), 100.0);
        assert_eq!(config.content_height(0), 0.0);
    }

    #[test]
    fn test_panel_state_applies_geometry() {
        let mut panel = PanelState::new(&config());
        assert_eq!(panel.geometry(), None);
        assert_eq!(panel.animated_rect(), None);

        let geometry = PanelGeometry {
            rect: Rect::new(2.0, 150.0, 296.0, 400.0),
            direction: PanelDirection::Below,
        };
        panel.apply_geometry(geometry);

        assert_eq!(panel.geometry(), Some(geometry));
        // First placement snaps rather than animating from zero.
        assert_eq!(panel.animated_rect(), Some(geometry.rect));
        assert!(!panel.is_moving());
    }
}
