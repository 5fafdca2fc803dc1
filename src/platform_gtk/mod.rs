//! GTK4 host: a `DrawingArea` that paints the chart and forwards pointer
//! motion and leave events to the engine.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::render::CairoRenderer;

pub type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

pub struct GtkChartAdapter {
    engine: SharedEngine,
    drawing_area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(engine: ChartEngine<CairoRenderer>) -> Self {
        let viewport = engine.state().config().viewport;
        let engine = Rc::new(RefCell::new(engine));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_, context, _width, _height| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.render_on_cairo_context(context) {
                        warn!(error = %err, "failed to draw rent chart");
                    }
                }
            }
        });
        attach_pointer_handlers(&drawing_area, Rc::clone(&engine));

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

fn attach_pointer_handlers(drawing_area: &gtk::DrawingArea, engine: SharedEngine) {
    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                if let Err(err) = chart.pointer_move_viewport(x, y) {
                    warn!(error = %err, x, y, "pointer move not resolved");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let engine = Rc::clone(&engine);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                chart.pointer_leave();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(motion);
}
