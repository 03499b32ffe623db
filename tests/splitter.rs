mod common;

use common::synthetic_image::{paint_rect, three_cell_strip, white_canvas};
use grid_splitter::image::RgbImageU8;
use grid_splitter::splitter::Rect;
use grid_splitter::{GridSplitter, SplitParams};

fn view(width: usize, height: usize, data: &[u8]) -> RgbImageU8<'_> {
    RgbImageU8 {
        w: width,
        h: height,
        stride: width,
        data,
    }
}

#[test]
fn all_white_canvas_yields_no_cells() {
    let data = white_canvas(300, 300);
    let splitter = GridSplitter::new(SplitParams::default());
    let plan = splitter.plan(view(300, 300, &data));
    assert!(
        plan.cells.is_empty(),
        "expected no cells on a blank canvas, got {:?}",
        plan.cells
    );
    assert_eq!(plan.report.cells_accepted(), 0);
    assert!(plan.report.cells_empty > 0, "blank intervals should be counted");
}

#[test]
fn centered_square_is_tightened_to_its_content() {
    let mut data = white_canvas(220, 220);
    paint_rect(&mut data, 220, (60, 60), (160, 160), [0, 0, 0]);
    let splitter = GridSplitter::new(SplitParams::default());
    let plan = splitter.plan(view(220, 220, &data));
    assert_eq!(
        plan.cells,
        vec![Rect::new(60, 60, 160, 160)],
        "expected one cell tightly matching the square"
    );
}

#[test]
fn divider_lists_satisfy_their_invariant() {
    let mut data = white_canvas(220, 220);
    paint_rect(&mut data, 220, (60, 60), (160, 160), [0, 0, 0]);
    let splitter = GridSplitter::new(SplitParams::default());
    let report = splitter.plan(view(220, 220, &data)).report;

    for (dividers, extent) in [(&report.row_dividers, 220), (&report.col_dividers, 220)] {
        assert_eq!(*dividers.first().unwrap(), 0);
        assert_eq!(*dividers.last().unwrap(), extent);
        assert!(
            dividers.windows(2).all(|w| w[0] < w[1]),
            "divider list must be strictly increasing: {:?}",
            dividers
        );
    }
}

#[test]
fn three_cell_strip_splits_left_to_right() {
    let (data, width, height, painted) = three_cell_strip(50);
    let params = SplitParams {
        min_height: 30,
        ..Default::default()
    };
    let plan = GridSplitter::new(params).plan(view(width, height, &data));
    assert_eq!(plan.cells.len(), 3, "expected 3 cells, got {:?}", plan.cells);
    for (cell, (x0, y0, x1, y1)) in plan.cells.iter().zip(&painted) {
        assert_eq!((cell.x0, cell.y0, cell.x1, cell.y1), (*x0, *y0, *x1, *y1));
    }
}

#[test]
fn accepted_cells_stay_inside_the_image() {
    let (data, width, height, _) = three_cell_strip(60);
    let plan = GridSplitter::new(SplitParams::default()).plan(view(width, height, &data));
    assert!(!plan.cells.is_empty());
    for cell in &plan.cells {
        assert!(cell.x0 < cell.x1 && cell.x1 <= width, "bad x bounds: {cell:?}");
        assert!(cell.y0 < cell.y1 && cell.y1 <= height, "bad y bounds: {cell:?}");
    }
}

#[test]
fn cell_at_exactly_min_width_is_skipped() {
    // tightened width is exactly 50; the minimum is strict
    let mut data = white_canvas(200, 200);
    paint_rect(&mut data, 200, (20, 20), (70, 140), [0, 0, 0]);
    let splitter = GridSplitter::new(SplitParams::default());
    let plan = splitter.plan(view(200, 200, &data));
    assert!(plan.cells.is_empty(), "50px-wide cell must be skipped");
    assert_eq!(plan.report.cells_too_small, 1);
}

#[test]
fn cell_one_pixel_over_min_width_is_kept() {
    let mut data = white_canvas(200, 200);
    paint_rect(&mut data, 200, (20, 20), (71, 140), [0, 0, 0]);
    let splitter = GridSplitter::new(SplitParams::default());
    let plan = splitter.plan(view(200, 200, &data));
    assert_eq!(plan.cells, vec![Rect::new(20, 20, 71, 140)]);
}

#[test]
fn no_accepted_cell_is_uniformly_near_white() {
    let (data, width, height, _) = three_cell_strip(60);
    let img = view(width, height, &data);
    let plan = GridSplitter::new(SplitParams::default()).plan(img);
    assert!(!plan.cells.is_empty());
    for cell in &plan.cells {
        let has_content = (cell.y0..cell.y1).any(|y| {
            (cell.x0..cell.x1).any(|x| img.get(x, y).iter().any(|&c| c <= 240))
        });
        assert!(has_content, "cell {cell:?} has no non-white pixel");
    }
}

#[test]
fn near_white_threshold_is_configurable() {
    // Gutters at 235 are not near-white for the default threshold but are
    // for a lowered one.
    let mut data = white_canvas(220, 220);
    for b in data.iter_mut() {
        *b = 235;
    }
    paint_rect(&mut data, 220, (60, 60), (160, 160), [0, 0, 0]);

    let strict = GridSplitter::new(SplitParams::default()).plan(view(220, 220, &data));
    // 235-gutters read as content, so the whole canvas is one cell
    assert_eq!(strict.cells, vec![Rect::new(0, 0, 220, 220)]);

    let relaxed = GridSplitter::new(SplitParams {
        near_white_min: 230,
        ..Default::default()
    })
    .plan(view(220, 220, &data));
    assert_eq!(relaxed.cells, vec![Rect::new(60, 60, 160, 160)]);
}

#[test]
fn two_by_two_grid_exports_in_row_major_order() {
    // 2x2 grid of 60x60 cells, 10px margins and gutters
    let width = 10 + 60 + 10 + 60 + 10;
    let height = width;
    let mut data = white_canvas(width, height);
    let positions = [(10, 10), (80, 10), (10, 80), (80, 80)];
    for (x0, y0) in positions {
        paint_rect(&mut data, width, (x0, y0), (x0 + 60, y0 + 60), [50, 50, 50]);
    }
    let plan = GridSplitter::new(SplitParams::default()).plan(view(width, height, &data));
    assert_eq!(plan.cells.len(), 4);
    let got: Vec<(usize, usize)> = plan.cells.iter().map(|c| (c.x0, c.y0)).collect();
    assert_eq!(got, positions.to_vec(), "cells must follow row-major scan order");
}
