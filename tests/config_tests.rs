use fnplot::PlotError;
use fnplot::api::{DEFAULT_ZOOM, PlotViewConfig};
use fnplot::core::MIN_PLOT_SIZE;
use fnplot::render::{Color, PlotStyle};

#[test]
fn default_config_matches_viewer_defaults() {
    let config = PlotViewConfig::default();
    assert_eq!(config.zoom, DEFAULT_ZOOM);
    assert_eq!(config.min_plot_size, MIN_PLOT_SIZE);
    assert_eq!(config.line_color, "#fe0101");
    config.validate().expect("valid");

    let style = config.style().expect("style");
    assert_eq!(style, PlotStyle::default());
}

#[test]
fn config_json_round_trip_and_defaults() {
    let config = PlotViewConfig::default()
        .with_zoom(10.0)
        .with_line_color("#336699")
        .with_stroke_width(2.0);
    let json = config.to_json_pretty().expect("json");
    assert_eq!(PlotViewConfig::from_json_str(&json).expect("parse"), config);

    let sparse = PlotViewConfig::from_json_str("{\"zoom\": 15.0}").expect("parse");
    assert_eq!(sparse.zoom, 15.0);
    assert_eq!(sparse.min_plot_size, MIN_PLOT_SIZE);
    assert_eq!(
        sparse.style().expect("style").line_color,
        Color::from_rgb8(0xfe, 0x01, 0x01)
    );
}

#[test]
fn invalid_config_is_rejected() {
    let err = PlotViewConfig::default()
        .with_zoom(0.0)
        .validate()
        .expect_err("zoom");
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    let err = PlotViewConfig::default()
        .with_line_color("red")
        .validate()
        .expect_err("color");
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    let err = PlotViewConfig::default()
        .with_min_plot_size(0)
        .validate()
        .expect_err("size");
    assert!(matches!(err, PlotError::InvalidArgument(_)));

    assert!(PlotViewConfig::from_json_str("{\"zoom\": -1.0}").is_err());
    assert!(PlotViewConfig::from_json_str("{\"zoom\": 1e-12}").is_err());
    assert!(matches!(
        PlotViewConfig::from_json_str("not json"),
        Err(PlotError::Persistence(_))
    ));
}
