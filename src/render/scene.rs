use crate::core::{PixelPoint, Series, Viewport, map_to_pixels, render_segments};
use crate::error::PlotResult;
use crate::render::{LinePrimitive, PlotStyle, RenderFrame, TextHAlign, TextPrimitive};

/// Builds the full draw pass for `series`: background grid, axes with the
/// unit tick and labels, then the clipped function polyline on top.
///
/// Series shorter than two samples produce an empty frame. `zoom` must be at
/// least [`MIN_ZOOM`](crate::core::MIN_ZOOM) so the grid stays bounded by the
/// viewport size.
pub fn build_plot_frame(
    series: &Series,
    viewport: Viewport,
    zoom: f64,
    style: PlotStyle,
) -> PlotResult<RenderFrame> {
    style.validate()?;
    let mut frame = RenderFrame::new(viewport, style.background_color);
    let mapping = map_to_pixels(series, viewport, zoom)?;
    if mapping.points.is_empty() {
        return Ok(frame);
    }

    push_grid(&mut frame, mapping.origin, zoom, style);
    push_axes(&mut frame, mapping.origin, zoom, style);

    for segment in render_segments(&mapping.points, viewport) {
        frame.lines.push(LinePrimitive::new(
            segment.x1.trunc(),
            segment.y1.trunc(),
            segment.x2.trunc(),
            segment.y2.trunc(),
            style.stroke_width,
            style.line_color,
        ));
    }

    Ok(frame)
}

/// Vertical lines every `zoom` pixels across the width, aligned with the
/// origin; horizontal lines every `zoom` pixels above and below the origin
/// while the offset stays under half the height.
fn push_grid(frame: &mut RenderFrame, origin: PixelPoint, zoom: f64, style: PlotStyle) {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);

    let mut x = origin.x.rem_euclid(zoom);
    while x < width {
        frame.lines.push(LinePrimitive::new(
            x,
            0.0,
            x,
            height,
            style.stroke_width,
            style.grid_color,
        ));
        x += zoom;
    }

    let half_height = f64::from(frame.viewport.height / 2);
    let mut offset = zoom;
    while offset < half_height {
        for y in [origin.y + offset, origin.y - offset] {
            frame.lines.push(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.stroke_width,
                style.grid_color,
            ));
        }
        offset += zoom;
    }
}

fn push_axes(frame: &mut RenderFrame, origin: PixelPoint, zoom: f64, style: PlotStyle) {
    let width = f64::from(frame.viewport.width);
    let height = f64::from(frame.viewport.height);
    let tick = (zoom / 5.0).floor();

    frame.lines.extend([
        LinePrimitive::new(
            origin.x,
            0.0,
            origin.x,
            height,
            style.stroke_width,
            style.axis_color,
        ),
        LinePrimitive::new(
            0.0,
            origin.y,
            width,
            origin.y,
            style.stroke_width,
            style.axis_color,
        ),
        LinePrimitive::new(
            origin.x + zoom,
            origin.y - tick,
            origin.x + zoom,
            origin.y + tick,
            style.stroke_width,
            style.axis_color,
        ),
    ]);

    let labels = [
        ("0", origin.x - 10.0, origin.y + (zoom / 6.0).floor()),
        ("1", origin.x + zoom - 4.0, origin.y + tick),
        ("x", width - 12.0, origin.y + tick),
        ("y", origin.x - 10.0, 1.0),
    ];
    for (text, x, y) in labels {
        frame.texts.push(TextPrimitive::new(
            text,
            x,
            y,
            style.font_size_px,
            style.label_color,
            TextHAlign::Left,
        ));
    }
}
