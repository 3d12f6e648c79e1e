use gpui::prelude::*;
use gpui::*;
use gpui_plot::{ChartView, LinePlot, PlotPoint, Series};
use rand::Rng;
use std::rc::Rc;

struct DemoApp {
    chart: Entity<ChartView>,
}

impl DemoApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let chart = cx.new(|cx| {
            let mut view = ChartView::new(cx);

            // Noisy sine wave with a gap in the middle.
            let mut rng = rand::rng();
            let mut data = Vec::new();
            for i in 0..200 {
                let x = i as f64;
                if (90..100).contains(&i) {
                    data.push(PlotPoint::new(x, f64::NAN));
                    continue;
                }
                let y = (x * 0.05).sin() * 40.0 + 50.0 + rng.random_range(-3.0..3.0);
                data.push(PlotPoint::new(x, y));
            }
            view.add_series(Series::new("signal", LinePlot::new(data)));
            view.auto_fit_axes();

            // Full interaction set: draw, resize from edges and corners,
            // move by grabbing the interior.
            view.set_resizable(true, cx);
            view.set_movable(true, cx);
            view.set_detection_radius(px(6.0), cx)
                .expect("valid detection radius");

            view.drag_box.update(cx, |layer, _| {
                layer.on_drag_end(Rc::new(|bounds| {
                    let b = bounds.normalized();
                    println!(
                        "selection: {:?},{:?} to {:?},{:?}",
                        b.top_left.x, b.top_left.y, b.bottom_right.x, b.bottom_right.y
                    );
                }));
            });

            view
        });

        Self { chart }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::white())
            .child(self.chart.clone())
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
