//! Software rendering demo: draws the primitive families onto two
//! surfaces and writes them out as PNG files.
//!
//! Run: cargo run --example canvas

#![allow(clippy::unwrap_used)]

use pincel::prelude::*;

fn main() -> Result<()> {
    // A tiny canvas exercising raw pixel rendering.
    let mut canvas = Surface::new(10, 10, PixelFormat::Argb8888)?;
    canvas.set_draw_color(Rgba::WHITE);
    canvas.clear();

    canvas.set_draw_color(Rgba::LIME);
    canvas.draw_line(Position::new(9, 0), Position::new(0, 6));

    PngEncoder::write_to_file(&canvas, "canvas.png")?;

    // Pixel boundaries: a grid plus every primitive family.
    let mut network = Surface::new(600, 600, PixelFormat::Argb8888)?;
    network.set_draw_color(Rgba::WHITE);
    network.clear();

    network.set_draw_color(Rgba::BLUE);
    for i in (0..600).step_by(60) {
        network.draw_line(Position::new(0, i), Position::new(599, i));
        network.draw_line(Position::new(i, 0), Position::new(i, 599));
    }

    network.set_draw_color(Rgba::RED);
    network.draw_line(Position::new(599, 0), Position::new(0, 419));

    network.set_draw_color(Rgba::BLACK);
    network.draw_ellipse(Position::new(200, 100), 100, 50);
    network.draw_point(Position::new(200, 100)); // ellipse center
    network.draw_line(Position::new(200, 50), Position::new(200, 150)); // vertical axis
    network.draw_line(Position::new(100, 100), Position::new(300, 100)); // horizontal axis

    network.set_draw_color(Rgba::MAGENTA);
    network.draw_circle(Position::new(400, 400), 150);

    let bound = Rect::new(300, 300, 100, 200);
    network.set_draw_color(Rgba::OLIVE);
    network.draw_ellipse_rect(bound);
    network.draw_rect(bound);

    network.set_draw_color(Rgba::PURPLE);
    network.fill_circle(Position::new(200, 150), 75);

    let bound = Rect::new(400, 200, 100, 200);
    network.set_draw_color(Rgba::YELLOW);
    network.fill_ellipse_rect(bound);

    PngEncoder::write_to_file(&network, "network.png")?;

    println!("wrote canvas.png and network.png");
    Ok(())
}
