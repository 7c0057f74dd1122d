use beamcut_core::data::tools::*;
use beamcut_core::{LengthPrecision, Units};

#[test]
fn test_tool_id_display() {
    let id = ToolId("endmill_6".to_string());
    assert_eq!(id.to_string(), "endmill_6");
}

#[test]
fn test_tool_controller_roundtrip() {
    let tool = Tool::new(ToolId("em6".to_string()), 3, "6mm Endmill", 6.0);
    let tc = ToolController::new("TC: 6mm Endmill", tool)
        .with_feeds(800.0, 120.0)
        .with_rapids(3000.0, 1000.0)
        .with_spindle_speed(18000);

    let json = serde_json::to_string(&tc).unwrap();
    let restored: ToolController = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, tc);
    assert_eq!(restored.tool.radius(), 3.0);
}

#[test]
fn test_precision_follows_units() {
    let metric = LengthPrecision::for_units(Units::MM);
    let imperial = LengthPrecision::for_units(Units::INCH);
    assert!(imperial.epsilon() < metric.epsilon());
}
