//! Tests for loading grid configuration and applying it to a grid.

use std::sync::Arc;

use gridlayout::prelude::*;

const SETTINGS: &str = r##"
column_count = 3
horizontal_spacing = 4
vertical_spacing = 6
horizontal_spacing_color = "#FF0000FF"
vertical_spacing_color = "#0000FFFF"
vertical_edge_spacing = true

[padding]
left = 2
right = 2
"##;

#[test]
fn test_config_from_str_configures_grid() {
    let config = GridConfig::from_toml_str(SETTINGS).unwrap();
    let grid = GridView::with_config(&config).unwrap();

    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.horizontal_spacing(), 4);
    assert_eq!(grid.vertical_spacing(), 6);
    assert_eq!(grid.horizontal_spacing_color(), Color::RED);
    assert_eq!(grid.vertical_spacing_color(), Color::BLUE);
    assert!(grid.is_vertical_edge_spacing_enabled());
    assert!(!grid.is_horizontal_edge_spacing_enabled());
    assert_eq!(grid.padding(), Padding::new(2, 0, 2, 0));
    assert_eq!(grid.config(), config);
}

#[test]
fn test_config_file_round_trip() {
    let config = GridConfig::new()
        .with_columns(5)
        .with_column_width(48)
        .with_spacing(1, 2)
        .with_edge_spacing(true, false)
        .with_background(Color::BLACK);

    let path = std::env::temp_dir().join(format!("gridlayout-config-{}.toml", std::process::id()));
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    let loaded = GridConfig::from_toml_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.unwrap(), config);
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("gridlayout-config-does-not-exist.toml");
    assert!(matches!(
        GridConfig::from_toml_file(path),
        Err(GridError::Io(_))
    ));
}

#[test]
fn test_unknown_key_is_parse_error() {
    assert!(matches!(
        GridConfig::from_toml_str("columns = 3"),
        Err(GridError::ConfigParse(_))
    ));
}

#[test]
fn test_bad_color_is_parse_error() {
    assert!(matches!(
        GridConfig::from_toml_str(r#"horizontal_spacing_color = "red""#),
        Err(GridError::ConfigParse(_))
    ));
}

#[test]
fn test_apply_config_to_live_grid() {
    let grid = GridView::new();
    let adapter = Arc::new(ListAdapter::with_text_views(vec!["a", "b", "c", "d"]));
    grid.set_adapter(adapter).unwrap();

    grid.apply_config(&GridConfig::from_toml_str(SETTINGS).unwrap()).unwrap();
    // 304 - 4 padding - 2 * 4 spacing = 292, three columns of 97.
    let size = grid.perform_layout(MeasureSpec::exactly(304), MeasureSpec::unspecified(0));
    assert_eq!(size.width, 300);

    let frames = grid.child_frames();
    assert_eq!(frames[1], Rect::new(2 + 97 + 4, 6, 97, 16));
    assert_eq!(frames[3], Rect::new(2, 6 + 16 + 6, 97, 16));
    // 6 + 16 + 6 + 16 + 6
    assert_eq!(size.height, 50);
}

#[test]
fn test_invalid_config_rejected_by_grid() {
    let grid = GridView::new();
    let config = GridConfig::new().with_padding(Padding::uniform(-3));
    assert!(matches!(
        grid.apply_config(&config),
        Err(GridError::InvalidConfiguration {
            parameter: "padding",
            ..
        })
    ));
    assert_eq!(grid.padding(), Padding::default());
}
