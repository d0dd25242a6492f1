use eframe::egui::Vec2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) key_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    // Keys are drawn smaller than their cells; the hit area makes up the difference.
    pub(crate) const KEY_FACTOR: f32 = 0.8;
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.15);

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        Self {
            key_size: cell_size * Self::KEY_FACTOR,
            spacing: Vec2::splat(cell_size) * Self::SPACING_FACTOR,
        }
    }

    #[must_use]
    pub(crate) fn cell_size(&self) -> f32 {
        self.key_size / Self::KEY_FACTOR
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest cell size at which a component of these units fits in `avail`.
    #[must_use]
    pub(crate) fn fit_cell_size(&self, avail: Vec2, spacing_factor: Vec2) -> f32 {
        let x = avail.x / (self.width + (self.width - 1.0) * spacing_factor.x);
        let y = avail.y / (self.height + (self.height - 1.0) * spacing_factor.y);
        f32::min(x, y).max(0.0)
    }
}
