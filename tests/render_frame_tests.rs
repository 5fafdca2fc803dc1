use chrono::NaiveDate;
use approx::assert_relative_eq;
use rent_chart::api::{ChartEngine, ChartEngineConfig, RenderStyle};
use rent_chart::core::{DataPoint, RentSeries, Viewport};
use rent_chart::render::{
    CirclePrimitive, Color, LinePrimitive, NullRenderer, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn engine() -> ChartEngine<NullRenderer> {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 120_000.0),
        DataPoint::new(date(2023, 3, 1), 150_000.0),
        DataPoint::new(date(2023, 6, 1), 200_000.0),
    ]);
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), series)
        .expect("engine init")
}

#[test]
fn idle_frame_has_series_and_axes_but_no_marker() {
    let mut engine = engine();
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    let frame = renderer.last_frame.as_ref().expect("frame");
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 3);
    assert!(frame.circles.is_empty());
    assert!(frame.rects.is_empty());
    assert!(frame.lines.len() >= 2);
    assert!(frame.texts.iter().any(|text| text.text == "Jan 2023"));
    assert!(
        frame
            .texts
            .iter()
            .any(|text| text.text == "Cost of Yearly Rent in the UAE since January 2023")
    );
}

#[test]
fn hovering_adds_marker_and_tooltip_until_leave() {
    let mut engine = engine();
    engine.pointer_move(0.0).expect("move");
    engine.render().expect("render hover");

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert_eq!(frame.circles.len(), 1);
    assert_eq!(frame.rects.len(), 1);
    assert!(frame.texts.iter().any(|text| text.text == "Date: 1/1/2023"));
    assert!(frame.texts.iter().any(|text| text.text == "rent: 120000 AED"));

    let plot = engine.state().plot_area();
    let circle = frame.circles[0];
    assert_eq!(circle.cx, plot.left);
    assert_eq!(circle.radius, 2.0);

    let hover_texts = engine.renderer().last_text_count();
    engine.pointer_leave();
    engine.render().expect("render idle");
    assert_eq!(engine.renderer().last_circle_count(), 0);
    assert_eq!(engine.renderer().last_text_count(), hover_texts - 2);
    assert_eq!(engine.renderer().frames_rendered, 2);
}

#[test]
fn tooltip_box_is_sized_from_style_ratios() {
    let style = RenderStyle {
        tooltip_glyph_width_ratio: 1.0,
        tooltip_line_height_ratio: 2.0,
        ..RenderStyle::default()
    };
    let series = RentSeries::new(vec![DataPoint::new(date(2023, 1, 1), 120_000.0)]);
    let config = ChartEngineConfig::default().with_style(style);
    let mut engine = ChartEngine::new(NullRenderer::default(), config, series).expect("engine");
    engine.pointer_move(0.0).expect("move");
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let rect = frame.rects[0];
    // "rent: 120000 AED" is the widest line at 16 glyphs.
    assert_relative_eq!(rect.width, 16.0 * 12.0 + 2.0 * 6.0, epsilon = 1e-9);
    assert_relative_eq!(rect.height, 2.0 * 24.0 + 2.0 * 6.0, epsilon = 1e-9);

    let invalid = RenderStyle {
        tooltip_glyph_width_ratio: 0.0,
        ..RenderStyle::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn series_polyline_is_in_viewport_space() {
    let mut engine = engine();
    engine.render().expect("render");

    let plot = engine.state().plot_area();
    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let (first_x, first_y) = frame.polylines[0].points[0];
    assert_eq!(first_x, plot.left);
    assert!(first_y > plot.top && first_y < plot.top + plot.height);
}

#[test]
fn rent_axis_title_is_rotated() {
    let mut engine = engine();
    engine.render().expect("render");

    let frame = engine.renderer().last_frame.as_ref().expect("frame");
    let title = frame
        .texts
        .iter()
        .find(|text| text.text == "Rent in AED (0.27USD)")
        .expect("rent title");
    assert!(title.rotation_rad < 0.0);
}

#[test]
fn null_renderer_rejects_invalid_primitives() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_circle(CirclePrimitive {
        cx: f64::NAN,
        cy: 0.0,
        radius: 2.0,
        fill_color: Color::rgb(1.0, 0.0, 0.0),
        stroke_width: 1.0,
        stroke_color: Color::rgb(0.0, 0.0, 0.0),
    });
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_polyline(PolylinePrimitive::new(
            vec![(0.0, 0.0), (10.0, 10.0)],
            0.0,
            Color::rgb(0.0, 0.5, 0.0),
        ));
    assert!(renderer.render(&frame).is_err());

    let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(LinePrimitive::new(
        0.0,
        0.0,
        f64::INFINITY,
        10.0,
        1.0,
        Color::rgb(0.0, 0.0, 0.0),
    ));
    assert!(renderer.render(&frame).is_err());

    let frame = RenderFrame::new(Viewport::new(100, 100)).with_rect(RectPrimitive::new(
        5.0,
        5.0,
        0.0,
        10.0,
        Color::rgb(1.0, 1.0, 1.0),
    ));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_line(LinePrimitive::new(0.0, 90.0, 100.0, 90.0, 1.0, Color::rgb(0.0, 0.0, 0.0)))
        .with_rect(
            RectPrimitive::new(5.0, 5.0, 40.0, 20.0, Color::rgb(1.0, 1.0, 1.0))
                .with_border(1.0, Color::rgb(0.6, 0.6, 0.6))
                .with_corner_radius(3.0),
        )
        .with_text(TextPrimitive::new(
        "ok",
        10.0,
        10.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.last_text_count(), 1);
}
