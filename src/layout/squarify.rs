use super::slice_dice::{dice_range, slice_range};
use crate::tree::Node;

/// Greedy row packing after Bruls, Huizing and van Wijk (1999): children
/// join the current row while the row's worst aspect ratio holds or
/// improves; once it degrades the row closes, is placed along the shorter
/// side of the remaining rectangle, and the next row starts in what is
/// left.
///
/// `ratio` is the target aspect ratio, clamped to at least 1.
pub(super) fn squarify(parent: &mut Node, ratio: f32) {
    let n = parent.children.len();
    if n == 0 {
        return;
    }
    let ratio = f64::from(ratio.max(1.0));
    // Row accumulation runs in f64: the worst-ratio comparisons square the
    // running sums and f32 would flip row boundaries on close calls.
    let mut x0 = f64::from(parent.x0);
    let mut y0 = f64::from(parent.y0);
    let x1 = f64::from(parent.x1);
    let y1 = f64::from(parent.y1);
    let mut value = f64::from(parent.value);

    let mut i0 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Seed the row with the next node, pulling any leading zero-value
        // nodes along with it.
        let mut i1 = i0;
        let mut sum_value;
        loop {
            sum_value = f64::from(parent.children[i1].value);
            i1 += 1;
            if sum_value != 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = sum_value;
        let mut max_value = sum_value;
        let alpha = (dy / dx).max(dx / dy) / (value * ratio);
        let mut min_ratio = worst_ratio(sum_value, min_value, max_value, alpha);

        // Ties (new_ratio == min_ratio) keep growing the row; only a strict
        // degradation closes it, excluding the offending child.
        while i1 < n {
            let node_value = f64::from(parent.children[i1].value);
            sum_value += node_value;
            min_value = min_value.min(node_value);
            max_value = max_value.max(node_value);
            let new_ratio = worst_ratio(sum_value, min_value, max_value, alpha);
            if new_ratio > min_ratio {
                sum_value -= node_value;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        // Lay the row along the shorter remaining dimension and shrink the
        // rectangle by its extent.
        let row = &mut parent.children[i0..i1];
        if dx < dy {
            let row_y1 = if value != 0.0 { y0 + dy * sum_value / value } else { y1 };
            dice_range(row, sum_value as f32, x0 as f32, y0 as f32, x1 as f32, row_y1 as f32);
            y0 = row_y1;
        } else {
            let row_x1 = if value != 0.0 { x0 + dx * sum_value / value } else { x1 };
            slice_range(row, sum_value as f32, x0 as f32, y0 as f32, row_x1 as f32, y1 as f32);
            x0 = row_x1;
        }
        value -= sum_value;
        i0 = i1;
    }
}

fn worst_ratio(sum: f64, min: f64, max: f64, alpha: f64) -> f64 {
    let beta = sum * sum * alpha;
    (max / beta).max(beta / min)
}
