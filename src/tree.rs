/// One item in the weighted hierarchy being laid out.
///
/// `x0,y0,x1,y1` are the assigned rectangle bounds (left, top, right,
/// bottom) in the same units as the root bound. They are undefined until a
/// layout pass writes them; the engine only ever reads `value` and
/// `children` and writes the bounds.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
    pub value: f32,
    pub children: Vec<Node>,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Node {
    pub fn leaf(id: impl Into<String>, value: f32) -> Self {
        Self {
            id: id.into(),
            value,
            children: Vec::new(),
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
        }
    }

    /// Internal node; `value` stays 0 until `sum_values` derives it.
    pub fn branch(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            value: 0.0,
            children,
            x0: 0.0,
            y0: 0.0,
            x1: 0.0,
            y1: 0.0,
        }
    }

    pub fn set_bounds(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Derives internal node values bottom-up. A node with children keeps an
    /// explicitly set (nonzero) value; otherwise its value becomes the sum
    /// of its children's resolved values.
    pub fn sum_values(&mut self) {
        for child in &mut self.children {
            child.sum_values();
        }
        if !self.children.is_empty() && self.value == 0.0 {
            self.value = self.children.iter().map(|child| child.value).sum();
        }
    }

    /// Coerces negative or non-finite weights to 0 across the whole tree.
    /// Upstream cleanup for data the layout algorithms would otherwise turn
    /// into NaN geometry.
    pub fn sanitize_values(&mut self) {
        if !self.value.is_finite() || self.value < 0.0 {
            self.value = 0.0;
        }
        for child in &mut self.children {
            child.sanitize_values();
        }
    }

    /// Sorts every sibling list by value, largest first. Squarify and
    /// binaryTree row composition depends on child order, so this runs
    /// before layout, never during it.
    pub fn sort_descending(&mut self) {
        self.sort_by(|a, b| b.value.total_cmp(&a.value));
    }

    pub fn sort_ascending(&mut self) {
        self.sort_by(|a, b| a.value.total_cmp(&b.value));
    }

    fn sort_by(&mut self, compare: impl Fn(&Node, &Node) -> std::cmp::Ordering + Copy) {
        self.children.sort_by(compare);
        for child in &mut self.children {
            child.sort_by(compare);
        }
    }

    /// Depth-first walk over the subtree, parents before children, with the
    /// level of each node (this node = 0).
    pub fn visit(&self, visitor: &mut impl FnMut(&Node, usize)) {
        self.visit_at(visitor, 0);
    }

    fn visit_at(&self, visitor: &mut impl FnMut(&Node, usize), level: usize) {
        visitor(self, level);
        for child in &self.children {
            child.visit_at(visitor, level + 1);
        }
    }
}
