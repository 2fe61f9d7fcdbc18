//! Primitive rasterization.
//!
//! Each primitive tests only the pixels inside its extent clipped to the canvas. The painted set
//! is exactly the set a full-image scan would produce, since pixels outside the extent never
//! satisfy the membership predicate. Painting overwrites; there is no blending.

use crate::foundation::geom::PixelWindow;
use crate::render::image::ImageBuffer;
use crate::scene::component::{Component, Shape};
use crate::scene::graph::SceneGraph;

/// Paint every pixel of `img` that `shape` contains. Returns the number of pixels written.
pub fn fill_shape<S: Shape + ?Sized>(img: &mut ImageBuffer, shape: &S) -> usize {
    let Some(e) = shape.extent() else {
        return 0;
    };
    let Some(window) = PixelWindow::clip(img.canvas(), e.min_x, e.min_y, e.max_x, e.max_y) else {
        return 0;
    };

    let color = shape.color();
    let mut painted = 0usize;
    for p in window.points() {
        if shape.contains(p) {
            img.set(p.x as u32, p.y as u32, color);
            painted += 1;
        }
    }
    painted
}

impl Component {
    /// Rasterize this component into `img`.
    ///
    /// Groups render their children in insertion order. Returns the number of pixel writes.
    pub fn render(&self, img: &mut ImageBuffer) -> usize {
        match self {
            Self::Circle(c) => fill_shape(img, c),
            Self::Rectangle(r) => fill_shape(img, r),
            Self::Triangle(t) => fill_shape(img, t),
            Self::Group(g) => g.children().iter().map(|c| c.render(img)).sum(),
        }
    }
}

/// Full repaint pass over the root components in document order.
#[tracing::instrument(skip_all, fields(roots = scene.roots().len()))]
pub fn render_scene(scene: &SceneGraph, img: &mut ImageBuffer) -> usize {
    let painted: usize = scene.roots().iter().map(|c| c.render(img)).sum();
    tracing::debug!(painted, "render pass done");
    painted
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
