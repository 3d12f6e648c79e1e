use gpui::*;

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Hsla,
    pub accent: Hsla,
    pub selection_fill: Hsla,
    pub selection_border: Hsla,
    /// Edge and corner affordances of the selection box while resizable.
    pub detection_edge: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let accent = gpui::blue();
        Self {
            background: gpui::black(),
            accent,
            selection_fill: accent.opacity(0.1),
            selection_border: accent.opacity(0.5),
            detection_edge: gpui::white().alpha(0.15),
        }
    }
}
