/// Generates a white RGB canvas, tightly packed.
pub fn white_canvas(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "canvas dimensions must be positive");
    vec![255u8; width * height * 3]
}

/// Fills the half-open rectangle `[x0, x1) x [y0, y1)` with a solid color.
pub fn paint_rect(
    data: &mut [u8],
    canvas_width: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
    rgb: [u8; 3],
) {
    for y in y0..y1 {
        for x in x0..x1 {
            let i = (y * canvas_width + x) * 3;
            data[i..i + 3].copy_from_slice(&rgb);
        }
    }
}

/// A 3x1 grid of colored cells with 10px white margins and gutters.
///
/// Cells are 100px wide and `cell_height` tall; returns the canvas plus its
/// dimensions and the painted cell bounds in left-to-right order.
#[allow(clippy::type_complexity)]
pub fn three_cell_strip(cell_height: usize) -> (Vec<u8>, usize, usize, Vec<(usize, usize, usize, usize)>) {
    let width = 10 + 3 * 100 + 2 * 10 + 10;
    let height = 10 + cell_height + 10;
    let mut data = white_canvas(width, height);
    let colors = [[200, 30, 30], [30, 200, 30], [30, 30, 200]];
    let mut bounds = Vec::new();
    for (i, color) in colors.iter().enumerate() {
        let x0 = 10 + i * 110;
        let rect = (x0, 10, x0 + 100, 10 + cell_height);
        paint_rect(&mut data, width, (rect.0, rect.1), (rect.2, rect.3), *color);
        bounds.push(rect);
    }
    (data, width, height, bounds)
}
