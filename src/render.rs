use {
  crate::{
    config::Style,
    geometry::{PixelSpace, Point}
  },
  euclid::Point2D
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
  Selection,
  Vertex,
  Point
}

/// A filled circle, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
  pub center: Point2D<f32, PixelSpace>,
  pub radius: f32,
  pub style: MarkerStyle
}

impl MarkerStyle {
  pub fn radius(self, style: &Style) -> f32 {
    match self {
      MarkerStyle::Selection => style.selection_radius,
      MarkerStyle::Vertex => style.vertex_radius,
      MarkerStyle::Point => style.point_radius
    }
  }

  pub fn color(self, style: &Style) -> [u8; 4] {
    match self {
      MarkerStyle::Selection => style.selection_color,
      MarkerStyle::Vertex => style.vertex_color,
      MarkerStyle::Point => style.point_color
    }
  }
}

/// Selection first, then vertices, then generated points, so later (smaller) markers stay on top.
pub fn render(
  vertices: &[Point],
  selection: Option<Point>,
  points: &[Point],
  style: &Style
) -> Vec<Marker> {
  let marker = |p: &Point, kind: MarkerStyle| Marker {
    center: p.to_f32(),
    radius: kind.radius(style),
    style: kind
  };
  selection.iter().map(|p| marker(p, MarkerStyle::Selection))
    .chain(vertices.iter().map(|p| marker(p, MarkerStyle::Vertex)))
    .chain(points.iter().map(|p| marker(p, MarkerStyle::Point)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn one_marker_per_item() {
    let style = Style::default();
    let vertices = [Point::new(0, 0), Point::new(100, 0)];
    let points = [Point::new(50, 0), Point::new(25, 0), Point::new(62, 0)];

    let markers = render(&vertices, Some(Point::new(10, 10)), &points, &style);
    assert_eq!(markers.len(), 6);
    assert_eq!(markers[0].style, MarkerStyle::Selection);
    assert_eq!(markers[0].center, Point2D::new(10.0, 10.0));
    assert!(markers[1..3].iter().all(|m| m.style == MarkerStyle::Vertex && m.radius == 5.0));
    assert!(markers[3..].iter().all(|m| m.style == MarkerStyle::Point && m.radius == 2.0));

    let markers = render(&vertices, None, &[], &style);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.style == MarkerStyle::Vertex));
  }
}
