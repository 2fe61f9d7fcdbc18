use serde::Serialize;

use crate::foundation::core::{Color, Point};
use crate::foundation::error::{VmError, VmResult};
use crate::foundation::geom::{circle_contains, rect_contains, triangle_contains};

/// Initial child capacity of a fresh group. Growth doubles from here.
pub const INITIAL_CAPACITY: usize = 16;

/// Inclusive axis-aligned box in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extent {
    /// Smallest x covered.
    pub min_x: i64,
    /// Smallest y covered.
    pub min_y: i64,
    /// Largest x covered.
    pub max_x: i64,
    /// Largest y covered.
    pub max_y: i64,
}

/// A filled primitive with a pixel membership test.
pub trait Shape {
    /// Fill color.
    fn color(&self) -> Color;

    /// Conservative box around every pixel [`Shape::contains`] accepts, or `None` when empty.
    fn extent(&self) -> Option<Extent>;

    /// Pixel membership predicate.
    fn contains(&self, p: Point) -> bool;
}

/// Filled circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Circle {
    /// Component name.
    pub name: String,
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels, never negative.
    pub radius: i32,
    /// Fill color.
    pub color: Color,
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    /// Component name.
    pub name: String,
    /// Top-left pixel.
    pub top_left: Point,
    /// Width in pixels, never negative.
    pub width: i32,
    /// Height in pixels, never negative.
    pub height: i32,
    /// Fill color.
    pub color: Color,
}

/// Filled triangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triangle {
    /// Component name.
    pub name: String,
    /// Vertices in script order.
    pub points: [Point; 3],
    /// Fill color.
    pub color: Color,
}

/// Named composite owning an ordered list of children. Insertion order is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Component name.
    pub name: String,
    children: Vec<Component>,
}

/// A scene graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    /// Circle primitive.
    Circle(Circle),
    /// Rectangle primitive.
    Rectangle(Rectangle),
    /// Triangle primitive.
    Triangle(Triangle),
    /// Composite.
    Group(Group),
}

fn owned_name(name: &str) -> VmResult<String> {
    let mut s = String::new();
    s.try_reserve_exact(name.len())
        .map_err(|e| VmError::allocation(format!("component name '{name}': {e}")))?;
    s.push_str(name);
    Ok(s)
}

impl Component {
    /// Build a circle. A negative radius is stored as its magnitude, saturating at `i32::MAX`.
    pub fn circle(name: &str, center: Point, radius: i32, color: Color) -> VmResult<Self> {
        Ok(Self::Circle(Circle {
            name: owned_name(name)?,
            center,
            radius: i32::try_from(radius.unsigned_abs()).unwrap_or(i32::MAX),
            color,
        }))
    }

    /// Build a rectangle. Negative sizes are treated as `0` (an empty shape).
    pub fn rectangle(
        name: &str,
        top_left: Point,
        width: i32,
        height: i32,
        color: Color,
    ) -> VmResult<Self> {
        Ok(Self::Rectangle(Rectangle {
            name: owned_name(name)?,
            top_left,
            width: width.max(0),
            height: height.max(0),
            color,
        }))
    }

    /// Build a triangle.
    pub fn triangle(name: &str, a: Point, b: Point, c: Point, color: Color) -> VmResult<Self> {
        Ok(Self::Triangle(Triangle {
            name: owned_name(name)?,
            points: [a, b, c],
            color,
        }))
    }

    /// Build an empty group.
    pub fn group(name: &str) -> VmResult<Self> {
        Ok(Self::Group(Group::new(name)?))
    }

    /// Component name. Names are not required to be unique.
    pub fn name(&self) -> &str {
        match self {
            Self::Circle(c) => &c.name,
            Self::Rectangle(r) => &r.name,
            Self::Triangle(t) => &t.name,
            Self::Group(g) => &g.name,
        }
    }

    /// Short lowercase kind label.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Rectangle(_) => "rectangle",
            Self::Triangle(_) => "triangle",
            Self::Group(_) => "group",
        }
    }

    /// Borrow as a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    pub(crate) fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    /// This component plus everything below it.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Group(g) => 1 + g.children.iter().map(Component::node_count).sum::<usize>(),
            _ => 1,
        }
    }

    /// Depth-first, pre-order search by name.
    pub fn find(&self, name: &str) -> Option<&Component> {
        if self.name() == name {
            return Some(self);
        }
        self.as_group()?.children.iter().find_map(|c| c.find(name))
    }
}

impl Group {
    /// Create an empty group with [`INITIAL_CAPACITY`] reserved.
    pub fn new(name: &str) -> VmResult<Self> {
        let mut children = Vec::new();
        children
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|e| VmError::allocation(format!("children of group '{name}': {e}")))?;
        Ok(Self {
            name: owned_name(name)?,
            children,
        })
    }

    /// Append a child, taking ownership. Backing storage doubles when full.
    ///
    /// On failure the child is dropped and the group is unchanged.
    pub fn add_child(&mut self, child: Component) -> VmResult<()> {
        if self.children.len() == self.children.capacity() {
            let grow = self.children.capacity().max(INITIAL_CAPACITY);
            self.children.try_reserve_exact(grow).map_err(|e| {
                VmError::allocation(format!("grow group '{}' children: {e}", self.name))
            })?;
        }
        self.children.push(child);
        Ok(())
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    pub(crate) fn child_mut(&mut self, idx: usize) -> Option<&mut Component> {
        self.children.get_mut(idx)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Return `true` when the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Current backing capacity.
    pub fn capacity(&self) -> usize {
        self.children.capacity()
    }
}

impl Shape for Circle {
    fn color(&self) -> Color {
        self.color
    }

    fn extent(&self) -> Option<Extent> {
        let (cx, cy, r) = (
            i64::from(self.center.x),
            i64::from(self.center.y),
            i64::from(self.radius),
        );
        Some(Extent {
            min_x: cx - r,
            min_y: cy - r,
            max_x: cx + r,
            max_y: cy + r,
        })
    }

    fn contains(&self, p: Point) -> bool {
        circle_contains(self.center, self.radius, p)
    }
}

impl Shape for Rectangle {
    fn color(&self) -> Color {
        self.color
    }

    fn extent(&self) -> Option<Extent> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        let (x, y) = (i64::from(self.top_left.x), i64::from(self.top_left.y));
        Some(Extent {
            min_x: x,
            min_y: y,
            max_x: x + i64::from(self.width) - 1,
            max_y: y + i64::from(self.height) - 1,
        })
    }

    fn contains(&self, p: Point) -> bool {
        rect_contains(self.top_left, self.width, self.height, p)
    }
}

impl Shape for Triangle {
    fn color(&self) -> Color {
        self.color
    }

    fn extent(&self) -> Option<Extent> {
        let xs = self.points.map(|p| i64::from(p.x));
        let ys = self.points.map(|p| i64::from(p.y));
        Some(Extent {
            min_x: xs.into_iter().min()?,
            min_y: ys.into_iter().min()?,
            max_x: xs.into_iter().max()?,
            max_y: ys.into_iter().max()?,
        })
    }

    fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.points;
        triangle_contains(a, b, c, p)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/component.rs"]
mod tests;
