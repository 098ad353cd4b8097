use cartesian_plane::core::{
    BoundingRect, Equation, GraphPoint, LineGenerator, Orientation, PixelPoint, plot, to_graph,
    to_pixel,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pixel_round_trip_recovers_graph_point(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        origin_x in -500.0f64..2_000.0,
        origin_y in -500.0f64..2_000.0,
        grid_unit in 0.5f64..500.0
    ) {
        let origin = PixelPoint::new(origin_x, origin_y);
        let point = GraphPoint::new(x, y);
        let recovered = to_graph(to_pixel(point, origin, grid_unit), origin, grid_unit);

        let tolerance = 1e-9 * (1.0 + x.abs().max(y.abs()) + origin_x.abs().max(origin_y.abs()) / grid_unit);
        prop_assert!((recovered.x - x).abs() <= tolerance);
        prop_assert!((recovered.y - y).abs() <= tolerance);
    }

    #[test]
    fn grid_lines_are_symmetric_and_match_expected_density(
        width in 10.0f64..2_000.0,
        height in 10.0f64..2_000.0,
        grid_unit in 5.0f64..200.0,
        lines_per_unit in 0.25f64..8.0
    ) {
        let rect = BoundingRect::new(0.0, 0.0, width, height).expect("rect");
        let generator = LineGenerator::new(rect, grid_unit, lines_per_unit).expect("generator");
        let center = rect.center();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let positions: Vec<f64> = generator
                .lines(orientation)
                .map(|segment| segment.fixed_coordinate())
                .collect();
            let (center_coordinate, span) = match orientation {
                Orientation::Horizontal => (center.y, height),
                Orientation::Vertical => (center.x, width),
            };

            let units = span / grid_unit;
            let expected = (units * lines_per_unit).floor() + 1.0;
            prop_assert!((positions.len() as f64 - expected).abs() <= 1.0);

            prop_assert_eq!(positions[0], center_coordinate);
            for pair in positions[1..].chunks(2) {
                prop_assert_eq!(pair.len(), 2);
                let below = center_coordinate - pair[0];
                let above = pair[1] - center_coordinate;
                prop_assert!((below - above).abs() <= 1e-9 * span);
            }
            for position in &positions {
                let offset = (position - center_coordinate).abs();
                prop_assert!(offset <= span / 2.0 + 1e-6);
            }
        }
    }

    #[test]
    fn linear_plots_emit_one_point_per_step(
        slope in -10i32..10,
        steps in 1u32..200
    ) {
        let mut equation = Equation::new();
        equation.set_y_expression(&format!("{slope} * x")).expect("y");
        equation.set_range_start("0").expect("start");
        equation.set_range_end(&steps.to_string()).expect("end");
        equation.set_range_step("1").expect("step");

        let points: Vec<GraphPoint> = plot(&equation).expect("plot").map(|c| c.point()).collect();
        prop_assert_eq!(points.len(), steps as usize + 1);
        for (index, point) in points.iter().enumerate() {
            prop_assert_eq!(point.x, index as f64);
            prop_assert_eq!(point.y, f64::from(slope) * index as f64);
        }
    }
}
