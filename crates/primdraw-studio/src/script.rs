//! Scripted frame logic for the studio: a small orrery.
//!
//! Everything is drawn relative to the painter's position unless the template
//! asks for absolute coordinates.

use std::f32::consts::TAU;

use primdraw::ShapePainter;

const FRAMES_PER_TURN: f32 = 120.0;
const ORBIT_RADIUS: f32 = 140.0;
const MOON_ORBIT: f32 = 36.0;

/// Issues one frame of draw commands.
pub fn draw_frame(painter: &mut ShapePainter, frame: u32) {
    let turn = frame as f32 / FRAMES_PER_TURN * TAU;

    // Frame border, drawn with the template's own style.
    painter.draw_rectangle(-ORBIT_RADIUS - 20.0, -ORBIT_RADIUS - 20.0, ORBIT_RADIUS + 20.0, ORBIT_RADIUS + 20.0);

    // Sun.
    painter.set_fill_color_str("255;210;80");
    painter.set_fill_opacity(255.0);
    painter.draw_circle(0.0, 0.0, 28.0);

    // Planet with a spoke back to the sun.
    let (px, py) = (turn.cos() * ORBIT_RADIUS, turn.sin() * ORBIT_RADIUS);
    painter.set_fill_color(90, 160, 255);
    painter.set_outline_opacity(96.0);
    painter.draw_line(0.0, 0.0, px, py, 2.0);
    painter.draw_circle(px, py, 12.0);

    // Moon orbits three times per planet year.
    let moon = turn * 3.0;
    painter.set_fill_color(200, 200, 210);
    painter.set_fill_opacity(180.0);
    painter.draw_circle(px + moon.cos() * MOON_ORBIT, py + moon.sin() * MOON_ORBIT, 5.0);

    // Progress bar under the system; a zero-length line on the first frame.
    let progress = (frame as f32 % FRAMES_PER_TURN) / FRAMES_PER_TURN;
    let bar_y = ORBIT_RADIUS + 12.0;
    painter.set_fill_color_str("60;220;120");
    painter.draw_line(-ORBIT_RADIUS, bar_y, -ORBIT_RADIUS + progress * ORBIT_RADIUS * 2.0, bar_y, 4.0);
}
