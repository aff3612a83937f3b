#![allow(non_snake_case)]
use {
  euclid::{Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Shape, Texture, rescale_bounding_box},
    geometry::{BoundingBox, PixelSpace, WorldSpace},
    sdf::SDF
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape + Clone
{
  fn draw(&self, image: &mut RgbaImage) {
    self.shape.clone()
      .texture(|_| self.texture)
      .draw(image);
  }
}

/// F: Fn(pixel: Point2D) -> Rgba<u8>
/// where pixel is in normalized texture coordinates.
impl <Cutie, F> Draw<RgbaImage> for Texture<Cutie, F>
  where Cutie: Shape,
        F: Fn(Point2D<f32, WorldSpace>) -> Rgba<u8>
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let (bounding_box, unit) = rescale_bounding_box(self.bounding_box(), resolution);
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // marker is off canvas
    };
    let Δp = 1.0 / unit;
    let tex_scale = bounding_box.size().width.min(bounding_box.size().height).max(1) as f32;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let pixel_world = (pixel.to_f32().to_vector() / unit)
          .cast_unit().to_point();
        let sdf = self.sdf(pixel_world);

        let tex_px = ((pixel - bounding_box.min.to_vector())
          .to_f32() / tex_scale).cast_unit();
        let tex_px = (self.texture)(tex_px);

        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, tex_px);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
