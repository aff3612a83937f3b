use {
  crate::{
    config::Style,
    geometry::{self, BoundingBox, Circle, Shape, PixelSpace, WorldSpace, Translation, Scale},
    render::Marker,
    sdf::SDF
  },
  anyhow::{Context, Result},
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  log::info,
  std::path::Path
};

mod impl_draw_rgbaimage;

pub trait Draw<Backend>: Shape {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, WorldSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, WorldSpace> for Texture<S, T> where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> { self.shape.bounding_box() } }

// world is anchored at the top-left corner, one unit spanning the shorter side
fn rescale_bounding_box(
  bounding_box: Box2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> (
  Option<Box2D<u32, PixelSpace>>, // bounding_box,
  f32 // world unit
) {
  let unit = geometry::world_unit(resolution);
  let bounding_box = bounding_box
    .scale(unit, unit).cast_unit()
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32());
  (bounding_box, unit)
}

type MarkerShape = Scale<Translation<Circle, f32>, f32>;

impl Marker {
  /// The marker as a world space circle on a canvas of `resolution`.
  pub fn shape(&self, resolution: Size2D<u32, PixelSpace>) -> MarkerShape {
    let unit = geometry::world_unit(resolution);
    Circle
      .translate(geometry::to_world_space(self.center, unit).to_vector())
      .scale(V2::splat(self.radius / unit))
  }
}

/// Clear to the background color and paint every marker, in order.
pub fn draw_frame(
  markers: &[Marker],
  style: &Style,
  resolution: Size2D<u32, PixelSpace>
) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(resolution.width, resolution.height, Rgba(style.background));
  markers.iter()
    .for_each(|marker| marker
      .shape(resolution)
      .texture(Rgba(marker.style.color(style)))
      .draw(&mut image));
  image
}

pub fn save_frame(
  path: impl AsRef<Path>,
  markers: &[Marker],
  style: &Style,
  resolution: Size2D<u32, PixelSpace>
) -> Result<()> {
  let path = path.as_ref();
  draw_frame(markers, style, resolution)
    .save(path)
    .with_context(|| format!("saving frame to {}", path.display()))?;
  info!("{} markers drawn to {}", markers.len(), path.display());
  Ok(())
}
