use crate::tree::Node;

/// Recursive median-of-cumulative-value bisection. Each step splits the
/// current child range as close as possible to half its total value, cuts
/// the rectangle along its longer axis at the value-weighted position, and
/// recurses until every range holds a single node.
pub(super) fn binary(parent: &mut Node) {
    let n = parent.children.len();
    if n == 0 {
        return;
    }
    // Prefix sums in f64; the binary search compares accumulated weights
    // and f32 cancellation would shift split indices on large trees.
    let mut sums = vec![0f64; n + 1];
    for (i, child) in parent.children.iter().enumerate() {
        sums[i + 1] = sums[i] + f64::from(child.value);
    }
    let (x0, y0, x1, y1) = (parent.x0, parent.y0, parent.x1, parent.y1);
    let value = f64::from(parent.value);
    partition(&mut parent.children, &sums, 0, n, value, x0, y0, x1, y1);
}

#[allow(clippy::too_many_arguments)]
fn partition(
    nodes: &mut [Node],
    sums: &[f64],
    i: usize,
    j: usize,
    value: f64,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) {
    // A zero-value range collapses onto the origin corner instead of
    // handing the rectangle to an arbitrary child. NaN totals fall through
    // and propagate, per the input contract.
    if value == 0.0 {
        for node in &mut nodes[i..j] {
            node.set_bounds(x0, y0, x0, y0);
        }
        return;
    }

    if i + 1 >= j {
        let node = &mut nodes[i];
        node.set_bounds(x0, y0, x1, y1);
        return;
    }

    let value_offset = sums[i];
    let value_target = value / 2.0 + value_offset;

    // First k in (i, j) with sums[k] >= target.
    let mut k = i + 1;
    let mut hi = j - 1;
    while k < hi {
        let mid = (k + hi) >> 1;
        if sums[mid] < value_target {
            k = mid + 1;
        } else {
            hi = mid;
        }
    }
    // Step back when the previous cumulative value is at least as close to
    // the half-point; exact ties go to the earlier index.
    if k > i + 1 && value_target - sums[k - 1] <= sums[k] - value_target {
        k -= 1;
    }

    let value_left = sums[k] - value_offset;
    let value_right = value - value_left;

    if x1 - x0 > y1 - y0 {
        let xk = ((f64::from(x0) * value_right + f64::from(x1) * value_left) / value) as f32;
        partition(nodes, sums, i, k, value_left, x0, y0, xk, y1);
        partition(nodes, sums, k, j, value_right, xk, y0, x1, y1);
    } else {
        let yk = ((f64::from(y0) * value_right + f64::from(y1) * value_left) / value) as f32;
        partition(nodes, sums, i, k, value_left, x0, y0, x1, yk);
        partition(nodes, sums, k, j, value_right, x0, yk, x1, y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(values: &[f32], w: f32, h: f32) -> Node {
        let children = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Node::leaf(format!("n{i}"), v))
            .collect();
        let mut node = Node::branch("parent", children);
        node.sum_values();
        node.set_bounds(0.0, 0.0, w, h);
        node
    }

    #[test]
    fn equal_weights_split_down_the_middle() {
        let mut p = parent(&[1.0, 1.0, 1.0, 1.0], 100.0, 100.0);
        binary(&mut p);
        // Split index 2: the first two children share the left (or top)
        // half, the last two the other half, equal areas throughout.
        let halves: f32 = p.children[..2].iter().map(Node::area).sum();
        assert!((halves - 5000.0).abs() < 1e-2);
        for child in &p.children {
            assert!((child.area() - 2500.0).abs() < 1e-2);
        }
    }

    #[test]
    fn splits_along_the_longer_axis_first() {
        let mut p = parent(&[1.0, 1.0], 200.0, 50.0);
        binary(&mut p);
        assert!((p.children[0].x1 - 100.0).abs() < 1e-4);
        assert_eq!(p.children[0].y1, 50.0);
        assert!((p.children[1].x0 - 100.0).abs() < 1e-4);
    }

    #[test]
    fn skewed_weights_cut_proportionally() {
        let mut p = parent(&[3.0, 1.0], 100.0, 10.0);
        binary(&mut p);
        assert!((p.children[0].x1 - 75.0).abs() < 1e-4);
        assert!((p.children[1].x0 - 75.0).abs() < 1e-4);
        assert_eq!(p.children[1].x1, 100.0);
    }

    #[test]
    fn single_child_takes_the_whole_rect() {
        let mut p = parent(&[7.0], 30.0, 40.0);
        binary(&mut p);
        let c = &p.children[0];
        assert_eq!((c.x0, c.y0, c.x1, c.y1), (0.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn zero_total_collapses_to_the_origin_corner() {
        // Even over a real rectangle, a zero-value parent must not hand the
        // area to any child.
        let mut p = parent(&[0.0, 0.0, 0.0], 100.0, 100.0);
        binary(&mut p);
        for child in &p.children {
            assert_eq!((child.x0, child.y0, child.x1, child.y1), (0.0, 0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn interleaved_zero_values_stay_degenerate() {
        let mut p = parent(&[0.0, 2.0, 0.0, 2.0], 100.0, 100.0);
        binary(&mut p);
        assert_eq!(p.children[0].area(), 0.0);
        assert_eq!(p.children[2].area(), 0.0);
        let occupied: f32 = p.children.iter().map(Node::area).sum();
        assert!((occupied - 10000.0).abs() < 1e-2);
    }
}
