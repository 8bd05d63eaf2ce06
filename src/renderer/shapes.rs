//! Shape generation for 2D primitives
//!
//! Shapes are built in playfield pixels (origin top-left, y down) and mapped
//! to normalized device coordinates at the very end.

use glam::{IVec2, Vec2};

use super::font::{self, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::frame::{DrawCommand, Frame, TextAnchor};
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Two triangles covering an axis-aligned box
pub fn quad(min: Vec2, max: Vec2, color: Color, out: &mut Vec<Vertex>) {
    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));

    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
}

/// Generate vertices for a filled rectangle
pub fn rect(rect: &Rect, color: Color, out: &mut Vec<Vertex>) {
    if rect.is_empty() {
        return;
    }
    quad(rect.pos.as_vec2(), (rect.pos + rect.size).as_vec2(), color, out);
}

/// Top-left corner of a text block
pub fn text_origin(text: &str, anchor: TextAnchor, cell: i32) -> IVec2 {
    match anchor {
        TextAnchor::TopLeft(pos) => pos,
        TextAnchor::Center(center) => {
            let (w, h) = font::measure(text, cell);
            center - IVec2::new(w / 2, h / 2)
        }
    }
}

/// Generate vertices for a line of bitmap text, one quad per lit cell
pub fn text(text: &str, anchor: TextAnchor, size: u32, color: Color, out: &mut Vec<Vertex>) {
    let cell = font::cell_size(size);
    let origin = text_origin(text, anchor, cell);

    for (i, ch) in text.chars().enumerate() {
        let glyph = font::glyph_for(ch);
        let glyph_x = origin.x + i as i32 * GLYPH_ADVANCE * cell;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !glyph.lit(col, row) {
                    continue;
                }
                let min = IVec2::new(glyph_x + col * cell, origin.y + row * cell);
                quad(min.as_vec2(), (min + IVec2::splat(cell)).as_vec2(), color, out);
            }
        }
    }
}

/// Generate vertices for every command in a frame, in draw order
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in &frame.commands {
        match command {
            DrawCommand::FillRect { rect: r, color } => rect(r, *color, &mut vertices),
            DrawCommand::Text {
                text: t,
                anchor,
                size,
                color,
            } => text(t, *anchor, *size, *color, &mut vertices),
        }
    }
    vertices
}

/// Convert playfield pixels to normalized device coordinates
///
/// The whole playfield maps onto the whole surface; NDC y points up.
pub fn pixel_to_ndc(pos: Vec2, playfield: Vec2) -> Vec2 {
    Vec2::new(
        pos.x / playfield.x * 2.0 - 1.0,
        1.0 - pos.y / playfield.y * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_rect_is_two_triangles() {
        let mut out = Vec::new();
        rect(&Rect::new(10, 20, 30, 40), colors::PLAYER, &mut out);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
        assert!(out.iter().all(|v| v.color == colors::PLAYER));
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        let mut out = Vec::new();
        rect(&Rect::new(10, 20, 0, 40), colors::PLAYER, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_one_quad_per_lit_cell() {
        let mut out = Vec::new();
        // '1' has 8 lit cells
        text("1", TextAnchor::TopLeft(IVec2::ZERO), 8, colors::TEXT, &mut out);
        assert_eq!(out.len(), 8 * 6);
    }

    #[test]
    fn test_centered_text_origin() {
        // "AB" at cell 4 is 28x20
        let origin = text_origin("AB", TextAnchor::Center(IVec2::new(300, 400)), 4);
        assert_eq!(origin, IVec2::new(286, 390));

        let origin = text_origin("AB", TextAnchor::TopLeft(IVec2::new(20, 20)), 4);
        assert_eq!(origin, IVec2::new(20, 20));
    }

    #[test]
    fn test_text_stays_inside_its_box() {
        let mut out = Vec::new();
        text("Score: 10", TextAnchor::TopLeft(IVec2::new(20, 20)), 36, colors::TEXT, &mut out);
        let (w, h) = font::measure("Score: 10", 4);
        for v in &out {
            assert!(v.position[0] >= 20.0 && v.position[0] <= (20 + w) as f32);
            assert!(v.position[1] >= 20.0 && v.position[1] <= (20 + h) as f32);
        }
    }

    #[test]
    fn test_pixel_to_ndc_corners() {
        let field = Vec2::new(600.0, 800.0);
        assert_eq!(pixel_to_ndc(Vec2::ZERO, field), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(field, field), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(300.0, 400.0), field), Vec2::ZERO);
    }

    #[test]
    fn test_frame_vertices_in_draw_order() {
        let mut frame = Frame::new(colors::BACKGROUND);
        frame.fill_rect(Rect::square(0, 0, 10), colors::PLAYER);
        frame.fill_rect(Rect::square(20, 0, 10), colors::OBSTACLE);
        let out = frame_vertices(&frame);
        assert_eq!(out.len(), 12);
        assert_eq!(out[0].color, colors::PLAYER);
        assert_eq!(out[6].color, colors::OBSTACLE);
    }
}
