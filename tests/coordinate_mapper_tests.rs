use cartesian_plane::core::{
    BoundingRect, CoordinateMapper, GraphPoint, PixelPoint, VERTICAL_AXIS_SIGN, to_graph, to_pixel,
};

#[test]
fn origin_maps_to_rect_center() {
    let rect = BoundingRect::new(0.0, 0.0, 400.0, 300.0).expect("rect");
    let mapper = CoordinateMapper::centered_in(rect, 65.0).expect("mapper");
    assert_eq!(mapper.to_pixel(GraphPoint::new(0.0, 0.0)), PixelPoint::new(200.0, 150.0));
}

#[test]
fn graph_up_is_pixel_up() {
    let origin = PixelPoint::new(100.0, 100.0);
    let pixel = to_pixel(GraphPoint::new(1.0, 1.0), origin, 10.0);
    assert_eq!(pixel, PixelPoint::new(110.0, 90.0));
    assert_eq!(VERTICAL_AXIS_SIGN, -1.0);
}

#[test]
fn pixel_to_graph_inverts_the_mapping() {
    let origin = PixelPoint::new(50.0, 80.0);
    let graph = to_graph(PixelPoint::new(20.0, 120.0), origin, 10.0);
    assert_eq!(graph, GraphPoint::new(-3.0, -4.0));
}

#[test]
fn mapper_rejects_bad_parameters() {
    let origin = PixelPoint::new(0.0, 0.0);
    assert!(CoordinateMapper::new(origin, 0.0).is_err());
    assert!(CoordinateMapper::new(origin, f64::INFINITY).is_err());
    assert!(CoordinateMapper::new(PixelPoint::new(f64::NAN, 0.0), 1.0).is_err());
}
