use crate::tree::Node;

/// Horizontal strips: every child spans the parent's full width, heights
/// proportional to value, stacked top to bottom in child order.
pub(super) fn slice(parent: &mut Node) {
    let (x0, y0, x1, y1) = (parent.x0, parent.y0, parent.x1, parent.y1);
    let value = parent.value;
    slice_range(&mut parent.children, value, x0, y0, x1, y1);
}

/// Vertical strips along the x axis, the transpose of `slice`.
pub(super) fn dice(parent: &mut Node) {
    let (x0, y0, x1, y1) = (parent.x0, parent.y0, parent.x1, parent.y1);
    let value = parent.value;
    dice_range(&mut parent.children, value, x0, y0, x1, y1);
}

/// Alternates by depth parity: odd levels slice, even levels dice.
pub(super) fn slice_dice(parent: &mut Node, level: usize) {
    if level & 1 == 1 {
        slice(parent);
    } else {
        dice(parent);
    }
}

/// Slices `nodes` into the given rectangle as if they were the children of
/// a parent with total weight `value`. Squarify reuses this for row
/// placement, which is why it operates on a plain slice.
pub(super) fn slice_range(nodes: &mut [Node], value: f32, x0: f32, y0: f32, x1: f32, y1: f32) {
    // Zero total collapses everything onto the top edge instead of dividing
    // by zero. NaN values still propagate, per the input contract.
    let k = if value == 0.0 { 0.0 } else { (y1 - y0) / value };
    let mut y = y0;
    for node in nodes {
        node.x0 = x0;
        node.x1 = x1;
        node.y0 = y;
        y += node.value * k;
        node.y1 = y;
    }
}

pub(super) fn dice_range(nodes: &mut [Node], value: f32, x0: f32, y0: f32, x1: f32, y1: f32) {
    let k = if value == 0.0 { 0.0 } else { (x1 - x0) / value };
    let mut x = x0;
    for node in nodes {
        node.y0 = y0;
        node.y1 = y1;
        node.x0 = x;
        x += node.value * k;
        node.x1 = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(values: &[f32], x0: f32, y0: f32, x1: f32, y1: f32) -> Node {
        let children = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Node::leaf(format!("n{i}"), v))
            .collect();
        let mut node = Node::branch("parent", children);
        node.sum_values();
        node.set_bounds(x0, y0, x1, y1);
        node
    }

    #[test]
    fn slice_allocates_heights_proportionally() {
        let mut p = parent(&[10.0, 20.0, 30.0], 0.0, 0.0, 100.0, 50.0);
        slice(&mut p);
        let c = &p.children;
        for child in c {
            assert_eq!(child.x0, 0.0);
            assert_eq!(child.x1, 100.0);
        }
        assert!((c[0].y1 - 50.0 * (10.0 / 60.0)).abs() < 1e-4);
        assert!((c[1].y0 - c[0].y1).abs() < 1e-6);
        assert!((c[1].y1 - 25.0).abs() < 1e-4);
        assert!((c[2].y1 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn dice_is_the_transpose_of_slice() {
        let mut sliced = parent(&[1.0, 3.0], 0.0, 0.0, 40.0, 80.0);
        let mut diced = parent(&[1.0, 3.0], 0.0, 0.0, 80.0, 40.0);
        slice(&mut sliced);
        dice(&mut diced);
        for (s, d) in sliced.children.iter().zip(&diced.children) {
            assert!((s.y0 - d.x0).abs() < 1e-6);
            assert!((s.y1 - d.x1).abs() < 1e-6);
            assert!((s.x0 - d.y0).abs() < 1e-6);
            assert!((s.x1 - d.y1).abs() < 1e-6);
        }
    }

    #[test]
    fn slice_dice_alternates_on_parity() {
        let mut odd = parent(&[1.0, 1.0], 0.0, 0.0, 10.0, 10.0);
        slice_dice(&mut odd, 1);
        assert_eq!(odd.children[0].x1, 10.0); // full width => sliced

        let mut even = parent(&[1.0, 1.0], 0.0, 0.0, 10.0, 10.0);
        slice_dice(&mut even, 2);
        assert_eq!(even.children[0].y1, 10.0); // full height => diced
    }

    #[test]
    fn zero_total_collapses_without_nan() {
        let mut p = parent(&[0.0, 0.0, 0.0], 0.0, 0.0, 100.0, 50.0);
        slice(&mut p);
        for child in &p.children {
            assert_eq!(child.y0, 0.0);
            assert_eq!(child.y1, 0.0);
            assert!(child.area() == 0.0);
            assert!(child.y1.is_finite());
        }
    }
}
