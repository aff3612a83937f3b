use {
  super::*,
  euclid::Point2D
};

#[test] fn midpoint_of_non_negative_points() {
  assert_eq!(abs_midpoint(Point::new(10, 10), Point::new(100, 0)), Point::new(55, 5));
  assert_eq!(abs_midpoint(Point::new(0, 0), Point::new(50, 86)), Point::new(25, 43));
  // integer division truncates
  assert_eq!(abs_midpoint(Point::new(1, 3), Point::new(0, 0)), Point::new(0, 1));
}

#[test] fn midpoint_takes_absolute_value_of_the_sum() {
  assert_eq!(abs_midpoint(Point::new(-30, 4), Point::new(10, -10)), Point::new(10, 3));
  assert_eq!(abs_midpoint(Point::new(i32::MAX, i32::MIN), Point::new(i32::MAX, i32::MIN)),
    Point::new(i32::MAX, i32::MAX));
}

#[test] fn bounds_of_point_set() {
  assert!(bounds(&[]).is_none());
  let pts = [Point::new(0, 5), Point::new(100, 0), Point::new(50, 86)];
  let b = bounds(&pts).unwrap();
  assert_eq!(b.min, Point::new(0, 0));
  assert_eq!(b.max, Point::new(100, 86));
}

#[test] fn world_space_uses_shorter_side() {
  let unit = world_unit(Size2D::new(800, 400));
  assert_eq!(unit, 400.0);
  let p = to_world_space(Point2D::<i32, PixelSpace>::new(200, 100), unit);
  assert_eq!(p, Point2D::new(0.5, 0.25));
  assert_eq!(world_unit(Size2D::new(0, 0)), 1.0);
}
