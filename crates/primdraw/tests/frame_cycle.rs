use primdraw::coords::Vec2;
use primdraw::debug::DebugProperty;
use primdraw::paint::{Color, Rgb};
use primdraw::render::{RecordingTarget, RenderTarget, SvgTarget};
use primdraw::scene::{CircleShape, DrawCmd, RectShape};
use primdraw::{ShapePainter, ShapePainterTemplate};

/// Counts render calls without keeping the shapes.
#[derive(Default)]
struct Counter {
    rects: usize,
    circles: usize,
}

impl RenderTarget for Counter {
    fn draw_rect(&mut self, _: &RectShape) {
        self.rects += 1;
    }

    fn draw_circle(&mut self, _: &CircleShape) {
        self.circles += 1;
    }
}

fn painter_from_json(json: &str) -> ShapePainter {
    let template = ShapePainterTemplate::from_json_str(json).unwrap();
    ShapePainter::from_template("painter", &template)
}

#[test]
fn template_drives_issued_style() {
    let mut painter = painter_from_json(
        r#"{"fillColor": {"r": 1, "g": 2, "b": 3}, "fillOpacity": 90,
            "outlineSize": 4, "outlineColor": {"r": 9, "g": 9, "b": 9}, "outlineOpacity": 10}"#,
    );
    painter.set_position(5.0, 5.0);
    painter.draw_circle(0.0, 0.0, 2.0);

    let mut target = RecordingTarget::new();
    painter.draw(&mut target);

    let Some(circle) = target.drawn()[0].as_circle().copied() else {
        panic!("expected a circle, got {:?}", target.drawn()[0]);
    };
    assert_eq!(circle.center(), Vec2::new(5.0, 5.0));
    assert_eq!(circle.fill, Color::new(1, 2, 3, 90.0));
    assert_eq!(circle.outline.thickness, 4.0);
    assert_eq!(circle.outline.color, Color::new(9, 9, 9, 10.0));
}

#[test]
fn absolute_template_ignores_object_position() {
    let mut painter = painter_from_json(r#"{"absoluteCoordinates": true}"#);
    painter.set_position(1000.0, 1000.0);
    painter.draw_rectangle(1.0, 2.0, 3.0, 4.0);

    let rect = painter.pending()[0].as_rect().copied().unwrap();
    assert_eq!(rect.position, Vec2::new(1.0, 2.0));
    assert_eq!(rect.size, Vec2::new(2.0, 2.0));
}

#[test]
fn several_frames_each_start_empty() {
    let mut painter = ShapePainter::new("painter");
    let mut counter = Counter::default();

    for frame in 0..4 {
        for i in 0..frame {
            painter.draw_line(0.0, 0.0, i as f32, 1.0, 1.0);
        }
        painter.draw_circle(0.0, 0.0, 1.0);
        assert_eq!(painter.pending().len(), frame + 1);
        assert!(painter.draw(&mut counter));
        assert!(painter.pending().is_empty());
    }

    assert_eq!(counter.rects, 6);
    assert_eq!(counter.circles, 4);
}

#[test]
fn hidden_frame_renders_nothing_and_recovers() {
    let mut painter = ShapePainter::new("painter");
    let mut counter = Counter::default();

    painter.hide(true);
    painter.draw_rectangle(0.0, 0.0, 1.0, 1.0);
    painter.draw_circle(0.0, 0.0, 1.0);
    assert!(painter.draw(&mut counter));
    assert_eq!((counter.rects, counter.circles), (0, 0));
    assert!(painter.pending().is_empty());

    painter.hide(false);
    painter.draw_circle(0.0, 0.0, 1.0);
    painter.draw(&mut counter);
    assert_eq!((counter.rects, counter.circles), (0, 1));
}

#[test]
fn debugger_edits_apply_to_next_commands() {
    let mut painter = ShapePainter::new("painter");
    painter.draw_circle(0.0, 0.0, 1.0);
    painter.change_property(DebugProperty::FillColor, "0;128;0").unwrap();
    painter.draw_circle(0.0, 0.0, 1.0);

    let fills: Vec<Rgb> = painter
        .pending()
        .iter()
        .filter_map(DrawCmd::as_circle)
        .map(|c| c.fill.rgb())
        .collect();
    assert_eq!(fills, [Rgb::WHITE, Rgb::new(0, 128, 0)]);
}

#[test]
fn svg_frame_has_one_element_per_command() {
    let mut painter = ShapePainter::new("painter");
    painter.set_position(50.0, 50.0);
    painter.draw_rectangle(-10.0, -10.0, 10.0, 10.0);
    painter.draw_line(-20.0, 0.0, 20.0, 0.0, 2.0);
    painter.draw_circle(0.0, 0.0, 5.0);

    let mut target = SvgTarget::new(100.0, 100.0);
    painter.draw(&mut target);

    assert_eq!(target.element_count(), 3);
    let svg = target.finish().to_string();
    assert_eq!(svg.matches("<rect").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn painter_template_round_trip() {
    let mut painter = ShapePainter::new("painter");
    painter.set_fill_color_str("12;34;56");
    painter.set_outline_color_str("7;8;9");
    painter.set_fill_opacity(17.0);
    painter.set_outline_opacity(300.0);
    painter.set_outline_size(0);
    painter.set_coordinates_absolute(true);

    let json = painter.to_template().to_json_string().unwrap();
    let restored = painter_from_json(&json);
    assert_eq!(restored.style(), painter.style());
}
