use crate::data_types::Series;
use crate::scales::ChartScale;
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;

use super::ChartView;

/// Builds the element tree for one frame. Mouse listeners are attached by
/// the main view.
pub fn render_chart(view: &ChartView, cx: &mut Context<ChartView>) -> Div {
    let start_time = std::time::Instant::now();
    let theme = view.theme.clone();

    let series: Vec<Series> = view.series().to_vec();
    let x_range = view.x_range();
    let y_range = view.y_range();
    let bounds_rc = view.bounds_handle();
    let paint_times = view.shared_state().paint_times.clone();

    // The canvas does double duty: it captures the container bounds for
    // the input handler and paints every series inside them.
    let plot_canvas = canvas(
        move |_, _, _| {},
        move |bounds, (), window, _cx| {
            *bounds_rc.borrow_mut() = bounds;

            let x_scale = ChartScale::new_linear(
                (x_range.min, x_range.max),
                (0.0, bounds.size.width.as_f32()),
            );
            let y_scale = ChartScale::new_linear(
                (y_range.min, y_range.max),
                (bounds.size.height.as_f32(), 0.0),
            );
            let transform = PlotTransform::new(x_scale, y_scale, bounds);

            window.with_content_mask(Some(ContentMask { bounds }), |window| {
                for s in &series {
                    let paint_start = std::time::Instant::now();
                    s.plot.borrow().render(window, &transform, &s.id);
                    paint_times
                        .write()
                        .insert(s.id.clone(), paint_start.elapsed().as_nanos() as u64);
                }
            });
        },
    )
    .size_full()
    .absolute();

    let selection_overlay = render_selection(view, &theme, cx);

    let mut debug_overlay = None;
    if view.shared_state().debug_mode {
        let elapsed = start_time.elapsed();
        debug_overlay = Some(
            div()
                .absolute()
                .top(px(8.0))
                .left(px(8.0))
                .bg(gpui::black().opacity(0.7))
                .border_1()
                .border_color(gpui::white().opacity(0.2))
                .rounded_md()
                .p_2()
                .text_size(px(12.0))
                .text_color(gpui::green())
                .flex()
                .flex_col()
                .gap_1()
                .child(format!("Render Time: {:.2?}", elapsed))
                .child(format!(
                    "Total Paint: {:.2?}",
                    std::time::Duration::from_nanos(view.shared_state().total_paint_nanos())
                ))
                .child(format!("Series: {}", view.series().len())),
        );
    }

    // Events are attached by the main view via the input handler.
    div()
        .size_full()
        .relative()
        .bg(theme.background)
        .cursor(CursorStyle::Crosshair)
        .child(plot_canvas)
        .children(selection_overlay)
        .children(debug_overlay)
}

/// The selection rectangle plus its resize affordances, positioned in
/// component-local coordinates. `None` while the box is hidden.
fn render_selection(view: &ChartView, theme: &ChartTheme, cx: &App) -> Option<Div> {
    let layer = view.drag_box.read(cx);
    if !layer.box_visible() {
        return None;
    }

    let markers = layer.markers();
    let radius = layer.detection_radius();
    let corners = layer.has_corners() && markers.x_resizable && markers.y_resizable;

    // Paint wants a positive extent even when the drag inverted the box.
    let b = layer.bounds().normalized();
    let width = b.width();
    let height = b.height();
    let band = radius * 2.0;

    let mut overlay = div()
        .absolute()
        .top(b.top_left.y)
        .left(b.top_left.x)
        .w(width)
        .h(height)
        .bg(theme.selection_fill)
        .border_1()
        .border_color(theme.selection_border);

    if markers.movable {
        overlay = overlay.cursor(CursorStyle::OpenHand);
    }

    // Edge bands span the detection area, radius on each side of the edge,
    // so the cursor flips exactly where a grab would start a resize.
    if markers.y_resizable {
        overlay = overlay
            .child(
                edge_band(px(0.0) - radius, px(0.0) - radius, width + band, band, theme)
                    .cursor(CursorStyle::ResizeUpDown),
            )
            .child(
                edge_band(px(0.0) - radius, height - radius, width + band, band, theme)
                    .cursor(CursorStyle::ResizeUpDown),
            );
    }
    if markers.x_resizable {
        overlay = overlay
            .child(
                edge_band(px(0.0) - radius, px(0.0) - radius, band, height + band, theme)
                    .cursor(CursorStyle::ResizeLeftRight),
            )
            .child(
                edge_band(width - radius, px(0.0) - radius, band, height + band, theme)
                    .cursor(CursorStyle::ResizeLeftRight),
            );
    }

    if corners {
        let corner_specs = [
            (px(0.0), px(0.0), CursorStyle::ResizeUpLeftDownRight),
            (width, px(0.0), CursorStyle::ResizeUpRightDownLeft),
            (px(0.0), height, CursorStyle::ResizeUpRightDownLeft),
            (width, height, CursorStyle::ResizeUpLeftDownRight),
        ];
        for (corner_x, corner_y, cursor) in corner_specs {
            overlay = overlay.child(
                div()
                    .absolute()
                    .left(corner_x - radius)
                    .top(corner_y - radius)
                    .w(band)
                    .h(band)
                    .rounded_full()
                    .bg(theme.detection_edge)
                    .cursor(cursor),
            );
        }
    }

    Some(overlay)
}

fn edge_band(left: Pixels, top: Pixels, w: Pixels, h: Pixels, theme: &ChartTheme) -> Div {
    div()
        .absolute()
        .left(left)
        .top(top)
        .w(w)
        .h(h)
        .bg(theme.detection_edge)
}
