// Glyphs available in egui's bundled emoji font.
pub(crate) const CHECK: &str = "✔";
pub(crate) const GEAR: &str = "⚙";
pub(crate) const SPEAKER: &str = "🔊";
