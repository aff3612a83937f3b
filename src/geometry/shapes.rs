use {
  super::{BoundingBox, WorldSpace},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D}
};

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}
