//! Touch-target sizing for keypad controls.
//!
//! A key may be drawn smaller than is comfortable to tap. [`HitArea`]
//! decouples the drawn bounds from the region that accepts touches by
//! growing the bounds symmetrically up to a minimum size, without changing
//! layout.

/// A point in the control's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[must_use]
    pub const fn splat(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// An axis-aligned rectangle given by its origin (top-left) and size.
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle centered on `center`.
    #[must_use]
    pub fn from_center_size(center: Point, size: Size) -> Self {
        let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
        Self { origin, size }
    }

    /// Left edge.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Returns the rectangle grown by `dx` on the left and right and by `dy`
    /// on the top and bottom.
    #[must_use]
    pub fn expand2(&self, dx: f32, dy: f32) -> Self {
        Self {
            origin: Point::new(self.origin.x - dx, self.origin.y - dy),
            size: Size::new(self.size.width + 2.0 * dx, self.size.height + 2.0 * dy),
        }
    }

    /// Returns `true` if `point` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.min_x() <= point.x
            && point.x < self.max_x()
            && self.min_y() <= point.y
            && point.y < self.max_y()
    }
}

bitflags::bitflags! {
    /// Interaction flags of a control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlFlags: u8 {
        /// The control is not displayed.
        const HIDDEN = 0b0000_0001;
        /// The control ignores user interaction.
        const INTERACTION_DISABLED = 0b0000_0010;
    }
}

/// Visibility and interactivity of a control at hit-test time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// Interaction flags.
    pub flags: ControlFlags,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f32,
}

impl ControlState {
    /// A visible, enabled, opaque control.
    pub const INTERACTIVE: Self = Self {
        flags: ControlFlags::empty(),
        opacity: 1.0,
    };

    /// Returns `true` if the control may receive touches at all.
    ///
    /// Hidden, disabled and fully transparent controls never do.
    #[must_use]
    pub fn accepts_hits(&self) -> bool {
        !self.flags.contains(ControlFlags::HIDDEN)
            && !self.flags.contains(ControlFlags::INTERACTION_DISABLED)
            && self.opacity != 0.0
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

/// Minimum touch-target policy.
///
/// # Examples
///
/// ```
/// use rubber_core::{ControlState, HitArea, Point, Rect, Size};
///
/// let hit_area = HitArea::default();
/// let bounds = Rect::from_origin_size(Point::new(0.0, 0.0), Size::splat(20.0));
///
/// // 5 units left of the drawn key, still inside the 40x40 target.
/// assert!(hit_area.hit_test(bounds, &ControlState::INTERACTIVE, Point::new(-5.0, 10.0)));
/// assert!(!hit_area.hit_test(bounds, &ControlState::INTERACTIVE, Point::new(-15.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    min_size: Size,
}

impl HitArea {
    /// Default minimum touch target.
    pub const DEFAULT_MIN_SIZE: Size = Size::splat(40.0);

    /// Creates a policy with the given minimum target size.
    #[must_use]
    pub const fn new(min_size: Size) -> Self {
        Self { min_size }
    }

    /// Returns the minimum target size.
    #[must_use]
    pub const fn min_size(&self) -> Size {
        self.min_size
    }

    /// Returns the region of `bounds` that accepts touches.
    ///
    /// Each axis shorter than the minimum is grown by half the shortfall on
    /// both sides. Axes already at or above the minimum are unchanged.
    #[must_use]
    pub fn expanded_bounds(&self, bounds: Rect) -> Rect {
        let dx = f32::max(self.min_size.width - bounds.size.width, 0.0) / 2.0;
        let dy = f32::max(self.min_size.height - bounds.size.height, 0.0) / 2.0;
        bounds.expand2(dx, dy)
    }

    /// Returns `true` if a touch at `point` hits the control.
    #[must_use]
    pub fn hit_test(&self, bounds: Rect, state: &ControlState, point: Point) -> bool {
        state.accepts_hits() && self.expanded_bounds(bounds).contains(point)
    }
}

impl Default for HitArea {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn small_key() -> Rect {
        Rect::from_origin_size(Point::new(0.0, 0.0), Size::splat(20.0))
    }

    #[test]
    fn small_control_grows_to_minimum_around_same_center() {
        let expanded = HitArea::default().expanded_bounds(small_key());
        assert_eq!(expanded.size, Size::splat(40.0));
        assert_eq!(expanded.center(), small_key().center());
        assert_eq!(expanded.origin, Point::new(-10.0, -10.0));
    }

    #[test]
    fn hit_inside_expanded_region() {
        let hit_area = HitArea::default();
        let state = ControlState::INTERACTIVE;
        let center = small_key().center();

        // Outside the drawn key on every side, inside the 40x40 target.
        for point in [
            Point::new(-5.0, 10.0),
            Point::new(25.0, 10.0),
            Point::new(10.0, -5.0),
            Point::new(10.0, 25.0),
        ] {
            assert!(hit_area.hit_test(small_key(), &state, point), "{point:?}");
        }

        // 15 units from the center lies within the target; 25 does not.
        assert!(hit_area.hit_test(small_key(), &state, Point::new(center.x - 15.0, center.y)));
        assert!(!hit_area.hit_test(small_key(), &state, Point::new(center.x - 25.0, center.y)));
        assert!(!hit_area.hit_test(small_key(), &state, Point::new(center.x, center.y + 25.0)));
    }

    #[test]
    fn miss_beyond_expanded_region() {
        let hit_area = HitArea::default();
        let state = ControlState::INTERACTIVE;
        for point in [
            Point::new(-15.0, 10.0),
            Point::new(35.0, 10.0),
            Point::new(10.0, -15.0),
            Point::new(10.0, 45.0),
        ] {
            assert!(!hit_area.hit_test(small_key(), &state, point), "{point:?}");
        }
    }

    #[test]
    fn expanded_edges_are_half_open() {
        let hit_area = HitArea::default();
        let state = ControlState::INTERACTIVE;
        assert!(hit_area.hit_test(small_key(), &state, Point::new(-10.0, -10.0)));
        assert!(!hit_area.hit_test(small_key(), &state, Point::new(30.0, 10.0)));
        assert!(!hit_area.hit_test(small_key(), &state, Point::new(10.0, 30.0)));
    }

    #[test]
    fn axes_expand_independently() {
        let bounds = Rect::from_origin_size(Point::new(100.0, 100.0), Size::new(60.0, 10.0));
        let expanded = HitArea::default().expanded_bounds(bounds);
        assert_eq!(expanded.origin, Point::new(100.0, 85.0));
        assert_eq!(expanded.size, Size::new(60.0, 40.0));
    }

    #[test]
    fn hidden_control_never_hits() {
        let hit_area = HitArea::default();
        let state = ControlState {
            flags: ControlFlags::HIDDEN,
            opacity: 1.0,
        };
        assert!(!hit_area.hit_test(small_key(), &state, small_key().center()));

        let large = Rect::from_origin_size(Point::new(0.0, 0.0), Size::splat(200.0));
        assert!(!hit_area.hit_test(large, &state, large.center()));
    }

    #[test]
    fn disabled_control_never_hits() {
        let state = ControlState {
            flags: ControlFlags::INTERACTION_DISABLED,
            opacity: 1.0,
        };
        assert!(!HitArea::default().hit_test(small_key(), &state, small_key().center()));
    }

    #[test]
    fn only_fully_transparent_control_is_ignored() {
        let hit_area = HitArea::default();
        let transparent = ControlState {
            flags: ControlFlags::empty(),
            opacity: 0.0,
        };
        let faint = ControlState {
            flags: ControlFlags::empty(),
            opacity: 0.01,
        };
        assert!(!hit_area.hit_test(small_key(), &transparent, small_key().center()));
        assert!(hit_area.hit_test(small_key(), &faint, small_key().center()));
    }

    proptest! {
        #[test]
        fn large_controls_are_not_expanded(
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            w in 40.0f32..200.0,
            h in 40.0f32..200.0,
        ) {
            let bounds = Rect::from_origin_size(Point::new(x, y), Size::new(w, h));
            prop_assert_eq!(HitArea::default().expanded_bounds(bounds), bounds);
        }

        #[test]
        fn expanded_region_covers_bounds_and_minimum(
            w in 0.0f32..80.0,
            h in 0.0f32..80.0,
        ) {
            let bounds = Rect::from_origin_size(Point::new(0.0, 0.0), Size::new(w, h));
            let expanded = HitArea::default().expanded_bounds(bounds);
            prop_assert!(expanded.size.width >= w.max(40.0) - 1e-3);
            prop_assert!(expanded.size.height >= h.max(40.0) - 1e-3);
            prop_assert!(expanded.contains(bounds.center()));
        }
    }
}
