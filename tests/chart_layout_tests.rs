use slotchart::api::{ChartConfig, ChartLayoutCoordinator, Padding};
use slotchart::core::{AxisLayoutEngine, AxisTuning, Rect, Slot, SlotId, Viewport};
use slotchart::error::ChartError;
use slotchart::render::{AxisStyle, Color, NullRenderer};

fn x_axis() -> AxisLayoutEngine {
    AxisLayoutEngine::horizontal(AxisTuning::default()).expect("x axis")
}

fn y_axis() -> AxisLayoutEngine {
    AxisLayoutEngine::vertical(AxisTuning::default()).expect("y axis")
}

fn coordinator(config: ChartConfig, with_x: bool, with_y: bool) -> ChartLayoutCoordinator {
    let mut coordinator = ChartLayoutCoordinator::new(config).expect("coordinator");
    coordinator
        .configure(with_x.then(x_axis), with_y.then(y_axis))
        .expect("configure");
    coordinator
}

#[test]
fn both_axes_reserve_bottom_and_left_bands() {
    let mut chart = coordinator(ChartConfig::default(), true, true);
    assert!(chart.on_size_changed(400, 300).expect("layout"));

    let geometry = chart.geometry().expect("geometry");
    assert_eq!(geometry.viewport, Viewport::new(400, 300));
    assert_eq!(geometry.plot, Rect::new(30, 0, 370, 270));
    assert_eq!(geometry.x_axis, Some(Rect::new(30, 270, 370, 30)));
    assert_eq!(geometry.y_axis, Some(Rect::new(0, 0, 30, 270)));

    let x = chart.x_axis().expect("x axis");
    let y = chart.y_axis().expect("y axis");
    assert_eq!((x.width(), x.height()), (370, 30));
    assert_eq!((y.width(), y.height()), (30, 270));
}

#[test]
fn padding_is_removed_before_bands_are_reserved() {
    let config = ChartConfig {
        padding: Padding::uniform(10),
        ..ChartConfig::default()
    };
    let mut chart = coordinator(config, true, true);
    chart.on_size_changed(400, 300).expect("layout");

    let geometry = chart.geometry().expect("geometry");
    assert_eq!(geometry.plot, Rect::new(40, 10, 350, 250));
    assert_eq!(geometry.x_axis, Some(Rect::new(40, 260, 350, 30)));
    assert_eq!(geometry.y_axis, Some(Rect::new(10, 10, 30, 250)));
}

#[test]
fn missing_axes_reserve_no_band() {
    let mut x_only = coordinator(ChartConfig::default(), true, false);
    x_only.on_size_changed(400, 300).expect("layout");
    let geometry = x_only.geometry().expect("geometry");
    assert_eq!(geometry.plot, Rect::new(0, 0, 400, 270));
    assert_eq!(geometry.x_axis, Some(Rect::new(0, 270, 400, 30)));
    assert_eq!(geometry.y_axis, None);

    let mut bare = coordinator(ChartConfig::default(), false, false);
    bare.on_size_changed(400, 300).expect("layout");
    assert_eq!(
        bare.geometry().expect("geometry").plot,
        Rect::new(0, 0, 400, 300)
    );
}

#[test]
fn repeated_or_zero_sizes_do_not_relayout() {
    let mut chart = coordinator(ChartConfig::default(), true, true);
    assert!(!chart.on_size_changed(0, 300).expect("zero width"));
    assert!(chart.geometry().is_none());

    assert!(chart.on_size_changed(400, 300).expect("first"));
    assert!(!chart.on_size_changed(400, 300).expect("same"));
    assert!(!chart.on_size_changed(400, 0).expect("transient zero"));
    assert_eq!(chart.size(), Viewport::new(400, 300));
    assert!(chart.on_size_changed(500, 300).expect("resize"));
    assert_eq!(chart.x_axis().expect("x").width(), 470);
}

#[test]
fn configure_after_measurement_sizes_new_axes() {
    let mut chart = coordinator(ChartConfig::default(), false, false);
    chart.on_size_changed(400, 300).expect("layout");
    chart.configure(Some(x_axis()), None).expect("configure");

    let x = chart.x_axis().expect("x axis");
    assert_eq!((x.width(), x.height()), (400, 30));
}

#[test]
fn slots_are_forwarded_to_present_axes_only() {
    let mut chart = coordinator(ChartConfig::default(), true, false);
    let slots = vec![Slot::labeled("Mon"), Slot::labeled("Tue")];
    chart.set_x_slots(&slots).expect("x slots");
    chart.set_y_slots(&slots).expect("absent y axis is ignored");

    assert_eq!(chart.x_axis().expect("x").slots().len(), 2);
    assert!(chart.y_axis().is_none());
}

#[test]
fn render_frame_requires_a_measured_chart() {
    let chart = coordinator(ChartConfig::default(), true, true);
    assert!(matches!(
        chart.build_render_frame(&AxisStyle::default()),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn render_frame_translates_axes_into_their_bands() {
    let mut chart = coordinator(ChartConfig::default(), true, true);
    chart.on_size_changed(400, 300).expect("layout");
    chart
        .set_x_slots(&[Slot::labeled("Mon"), Slot::labeled("Tue"), Slot::labeled("Wed")])
        .expect("x slots");

    let frame = chart.build_render_frame(&AxisStyle::default()).expect("frame");
    assert_eq!(frame.background, Color::TRANSPARENT);
    assert!(frame.rects.is_empty(), "no outlines outside debug mode");
    assert_eq!(frame.lines.len(), 2, "one rule per axis");

    let xs: Vec<f64> = frame.texts.iter().map(|text| text.x).collect();
    assert_eq!(xs, vec![165.0, 215.0, 265.0]);
    assert!(frame.texts.iter().all(|text| text.y == 285.0));

    let mut renderer = NullRenderer::default();
    chart.set_debug(true);
    chart
        .render(&mut renderer, &AxisStyle::default())
        .expect("render");
    assert_eq!(renderer.last_text_count, 3);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_rect_count, 3);
    assert_eq!(renderer.last_background, Some(Color::TRANSPARENT));
}

fn crowded_slots() -> Vec<Slot> {
    (0..100).map(|i| Slot::new(SlotId::new(i))).collect()
}

#[test]
fn failed_resize_commits_nothing_and_can_be_retried() {
    let mut chart = coordinator(ChartConfig::default(), true, true);
    chart.set_x_slots(&crowded_slots()).expect("unmeasured");

    let result = chart.on_size_changed(400, 300);
    assert!(matches!(result, Err(ChartError::Configuration(_))));
    assert_eq!(chart.size(), Viewport::default());
    assert!(chart.geometry().is_none());
    let x = chart.x_axis().expect("x axis");
    let y = chart.y_axis().expect("y axis");
    assert_eq!((x.width(), x.height()), (0, 0));
    assert_eq!((y.width(), y.height()), (0, 0));

    chart.set_x_slots(&[Slot::labeled("Mon")]).expect("x slots");
    assert!(chart.on_size_changed(400, 300).expect("retry"));
    assert_eq!(
        chart.geometry().expect("geometry").plot,
        Rect::new(30, 0, 370, 270)
    );
    let y = chart.y_axis().expect("y axis");
    assert_eq!((y.width(), y.height()), (30, 270));
    chart.build_render_frame(&AxisStyle::default()).expect("frame");
}

#[test]
fn failed_resize_keeps_the_previous_layout() {
    let mut chart = coordinator(ChartConfig::default(), true, true);
    chart.on_size_changed(400, 300).expect("layout");
    chart
        .set_x_slots(&[Slot::labeled("Mon"), Slot::labeled("Tue")])
        .expect("x slots");
    let before = chart.clone();

    let result = chart.on_size_changed(34, 300);
    assert!(matches!(result, Err(ChartError::Configuration(_))));
    assert_eq!(chart, before);
}

#[test]
fn configure_rejects_axes_that_do_not_fit() {
    let mut chart = coordinator(ChartConfig::default(), false, false);
    chart.on_size_changed(400, 300).expect("layout");

    let mut crowded = x_axis();
    crowded.set_slots(&crowded_slots()).expect("unmeasured");
    let result = chart.configure(Some(crowded), Some(y_axis()));
    assert!(matches!(result, Err(ChartError::Configuration(_))));
    assert!(chart.x_axis().is_none());
    assert!(chart.y_axis().is_none());
    assert_eq!(
        chart.geometry().expect("geometry").plot,
        Rect::new(0, 0, 400, 300)
    );
}
