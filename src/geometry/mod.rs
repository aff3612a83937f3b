//! Coordinate spaces, point arithmetic and the shapes used for markers.
//!
//! The origin of coordinate system is in top-left corner. User input lives in [`PixelSpace`] on an
//! integer lattice; shapes used for drawing are represented in [`WorldSpace`], where the shorter side
//! of the canvas spans `[0, 1]`.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D},
  num_traits::NumCast,
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WorldSpace;

/// A point of the plane the user clicks on.
pub type Point = Point2D<i32, PixelSpace>;

/// Midpoint rule of the chaos game, kept literally: the absolute value is taken of the *sum*
/// before halving, with integer division.
///
/// For non-negative operands this is the ordinary truncated midpoint, and the result never exceeds
/// the larger operand on either axis.
pub fn abs_midpoint(a: Point, b: Point) -> Point {
  let half = |a: i32, b: i32| ((a as i64 + b as i64).abs() / 2).min(i32::MAX as i64) as i32;
  Point::new(half(a.x, b.x), half(a.y, b.y))
}

/// Smallest box containing every point, `None` for an empty set.
#[cfg(test)]
pub(crate) fn bounds<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Box2D<i32, PixelSpace>> {
  let mut points = points.into_iter();
  let first = *points.next()?;
  Some(points.fold(Box2D::new(first, first), |acc, p| Box2D::new(acc.min.min(*p), acc.max.max(*p))))
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate<T>(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, WorldSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  #[cfg(feature = "drawing")]
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

/// Pixel coordinates to world coordinates, where `unit` pixels make one world unit.
pub fn to_world_space<T: NumCast + Copy>(
  point: Point2D<T, PixelSpace>,
  unit: f32
) -> Point2D<f32, WorldSpace> {
  (point.to_f32().to_vector() / unit)
    .cast_unit()
    .to_point()
}

/// Side of the square that maps onto `[0, 1]²` in world space.
pub fn world_unit(resolution: Size2D<u32, PixelSpace>) -> f32 {
  resolution.width.min(resolution.height).max(1) as f32
}

#[cfg(test)] mod tests;
