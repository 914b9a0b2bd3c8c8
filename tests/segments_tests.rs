use fnplot::core::{
    LineSegment, MIN_PLOT_SIZE, MIN_ZOOM, PixelPoint, Sample, Series, Viewport, plot_size,
    render_segments,
};

fn point(x: f64, y: f64) -> PixelPoint {
    PixelPoint::new(x, y)
}

#[test]
fn empty_point_list_yields_no_segments() {
    assert!(render_segments(&[], Viewport::square(100)).is_empty());
}

#[test]
fn last_point_closes_a_zero_length_segment() {
    let points = [point(10.0, 10.0), point(20.0, 20.0), point(30.0, 30.0)];
    let segments = render_segments(&points, Viewport::square(100));

    assert_eq!(
        segments,
        vec![
            LineSegment::new(points[0], points[1]),
            LineSegment::new(points[1], points[2]),
            LineSegment::new(points[2], points[2]),
        ]
    );
}

#[test]
fn segment_with_one_endpoint_inside_is_kept() {
    let points = [point(50.0, 50.0), point(150.0, 50.0)];
    let segments = render_segments(&points, Viewport::square(100));
    assert_eq!(segments, vec![LineSegment::new(points[0], points[1])]);
}

#[test]
fn crossing_segment_without_inside_endpoint_is_dropped() {
    let points = [point(-10.0, 50.0), point(110.0, 50.0)];
    assert!(render_segments(&points, Viewport::square(100)).is_empty());
}

#[test]
fn segments_with_non_finite_endpoints_are_dropped() {
    let points = [
        point(10.0, 50.0),
        point(20.0, f64::NEG_INFINITY),
        point(30.0, 50.0),
        point(40.0, 60.0),
    ];
    let segments = render_segments(&points, Viewport::square(100));
    assert_eq!(
        segments,
        vec![
            LineSegment::new(points[2], points[3]),
            LineSegment::new(points[3], points[3]),
        ]
    );
}

#[test]
fn viewport_edges_do_not_count_as_inside() {
    let points = [point(0.0, 50.0), point(0.0, 60.0), point(100.0, 100.0)];
    assert!(render_segments(&points, Viewport::square(100)).is_empty());
}

#[test]
fn plot_size_enforces_minimum_span() {
    let narrow = Series::from_samples(vec![Sample::new(0.0, 0.0), Sample::new(2.0, 4.0)]);
    assert_eq!(
        plot_size(&narrow, 20.0, MIN_PLOT_SIZE).expect("size"),
        Viewport::square(200)
    );

    let wide = Series::from_samples(vec![Sample::new(-12.7, 0.0), Sample::new(12.7, 0.0)]);
    assert_eq!(
        plot_size(&wide, 20.0, MIN_PLOT_SIZE).expect("size"),
        Viewport::square(500)
    );

    assert_eq!(
        plot_size(&Series::default(), 10.0, MIN_PLOT_SIZE).expect("size"),
        Viewport::square(100)
    );
}

#[test]
fn plot_size_rejects_invalid_zoom() {
    assert!(plot_size(&Series::default(), -1.0, MIN_PLOT_SIZE).is_err());
    assert!(plot_size(&Series::default(), f64::NAN, MIN_PLOT_SIZE).is_err());
    assert!(plot_size(&Series::default(), MIN_ZOOM / 2.0, MIN_PLOT_SIZE).is_err());
    assert_eq!(
        plot_size(&Series::default(), MIN_ZOOM, MIN_PLOT_SIZE).expect("size"),
        Viewport::square(10)
    );
}
