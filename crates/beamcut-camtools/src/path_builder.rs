//! Generic contour path building.
//!
//! Turns wires into commands: each wire is cut once per Z level, feeding
//! along its edges. Closed wires step down in place between levels; open
//! wires retract and start over. Every wire ends with a retract to
//! clearance height.

use crate::command::{Command, CommandList, MotionKind};
use crate::host::{Heights, PathBuilder};
use beamcut_core::ToolController;
use beamcut_geometry::{Edge, Point, Wire};
use tracing::trace;

/// The default [`PathBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContourPathBuilder;

impl PathBuilder for ContourPathBuilder {
    fn build_path(
        &self,
        wires: &[Wire],
        z_levels: &[f64],
        relative_z: bool,
        heights: &Heights,
        controller: &ToolController,
    ) -> CommandList {
        let mut commands = CommandList::new();

        for wire in wires.iter().filter(|w| !w.is_empty()) {
            let closed = wire.is_closed();
            let mut last: Option<Point> = None;

            for &level in z_levels {
                let depth_at = |p: &Point| if relative_z { p.z + level } else { level };

                match last {
                    Some(p) if closed => {
                        commands.push(
                            Command::new(MotionKind::Linear)
                                .with_xy(p.x, p.y)
                                .with_z(depth_at(&p))
                                .with_feed(controller.vert_feed),
                        );
                    }
                    _ => {
                        if let Some(start) = wire.start() {
                            approach(&mut commands, &start, depth_at(&start), heights, controller);
                        }
                    }
                }

                for edge in wire.edges() {
                    commands.push(edge_command(edge, depth_at(&edge.end()), controller));
                }
                last = wire.end();
            }

            commands.push(
                Command::new(MotionKind::Rapid)
                    .with_z(heights.clearance_height)
                    .with_feed(controller.vert_rapid),
            );
        }

        trace!(commands = commands.len(), "built contour path");
        commands
    }
}

/// Retract, travel over the start point, drop to safe height and feed in.
fn approach(
    commands: &mut CommandList,
    start: &Point,
    depth: f64,
    heights: &Heights,
    controller: &ToolController,
) {
    commands.push(
        Command::new(MotionKind::Rapid)
            .with_z(heights.clearance_height)
            .with_feed(controller.vert_rapid),
    );
    commands.push(
        Command::new(MotionKind::Rapid)
            .with_xy(start.x, start.y)
            .with_feed(controller.horiz_rapid),
    );
    commands.push(
        Command::new(MotionKind::Rapid)
            .with_z(heights.safe_height)
            .with_feed(controller.vert_rapid),
    );
    commands.push(
        Command::new(MotionKind::Linear)
            .with_z(depth)
            .with_feed(controller.vert_feed),
    );
}

fn edge_command(edge: &Edge, depth: f64, controller: &ToolController) -> Command {
    match *edge {
        Edge::Line { end, .. } => Command::new(MotionKind::Linear)
            .with_xy(end.x, end.y)
            .with_z(depth)
            .with_feed(controller.horiz_feed),
        Edge::Arc {
            start,
            end,
            center,
            clockwise,
        } => {
            let kind = if clockwise {
                MotionKind::ArcCW
            } else {
                MotionKind::ArcCCW
            };
            Command::new(kind)
                .with_xy(end.x, end.y)
                .with_z(depth)
                .with_center_offset(center.x - start.x, center.y - start.y)
                .with_feed(controller.horiz_feed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamcut_core::{Tool, ToolId};

    fn controller() -> ToolController {
        ToolController::new("TC", Tool::new(ToolId("t".to_string()), 1, "Mill", 2.0))
            .with_feeds(600.0, 100.0)
            .with_rapids(0.0, 0.0)
    }

    fn square() -> Wire {
        Wire::from_points(
            &[
                Point::xy(0.0, 0.0),
                Point::xy(10.0, 0.0),
                Point::xy(10.0, 10.0),
                Point::xy(0.0, 10.0),
            ],
            true,
        )
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let cmds = ContourPathBuilder.build_path(&[], &[0.0], true, &Heights::default(), &controller());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_single_level_closed_wire() {
        let heights = Heights::default();
        let cmds = ContourPathBuilder.build_path(&[square()], &[0.0], true, &heights, &controller());
        let gcode = cmds.to_gcode();
        let lines: Vec<&str> = gcode.lines().collect();
        assert_eq!(
            lines,
            vec![
                "G0 Z10.000",
                "G0 X0.000 Y0.000",
                "G0 Z5.000",
                "G1 Z0.000 F100.0",
                "G1 X10.000 Y0.000 Z0.000 F600.0",
                "G1 X10.000 Y10.000 Z0.000 F600.0",
                "G1 X0.000 Y10.000 Z0.000 F600.0",
                "G1 X0.000 Y0.000 Z0.000 F600.0",
                "G0 Z10.000",
            ]
        );
        assert!(cmds
            .last()
            .is_some_and(|c| c.is_clearance_move(heights.clearance_height)));
    }

    #[test]
    fn test_closed_wire_steps_down_in_place() {
        let cmds = ContourPathBuilder.build_path(
            &[square()],
            &[-1.0, -2.0],
            false,
            &Heights::default(),
            &controller(),
        );
        let rapids_to_clearance = cmds.iter().filter(|c| c.is_clearance_move(10.0)).count();
        // One approach, one final retract
        assert_eq!(rapids_to_clearance, 2);
        assert!(cmds
            .to_gcode()
            .contains("G1 X0.000 Y0.000 Z-2.000 F100.0"));
    }

    #[test]
    fn test_open_wire_retracts_between_levels() {
        let open = Wire::from_points(&[Point::xy(0.0, 0.0), Point::xy(10.0, 0.0)], false);
        let cmds = ContourPathBuilder.build_path(
            &[open],
            &[-1.0, -2.0],
            false,
            &Heights::default(),
            &controller(),
        );
        let rapids_to_clearance = cmds.iter().filter(|c| c.is_clearance_move(10.0)).count();
        assert_eq!(rapids_to_clearance, 3);
    }

    #[test]
    fn test_relative_levels_follow_wire_elevation() {
        let raised = Wire::from_points(
            &[Point::new(0.0, 0.0, 4.0), Point::new(5.0, 0.0, 4.0)],
            false,
        );
        let cmds =
            ContourPathBuilder.build_path(&[raised], &[0.0], true, &Heights::default(), &controller());
        assert!(cmds.to_gcode().contains("G1 X5.000 Y0.000 Z4.000 F600.0"));
    }

    #[test]
    fn test_arc_command() {
        let circle = Wire::new(vec![Edge::circle(Point::xy(0.0, 0.0), 5.0, true)]).unwrap();
        let cmds =
            ContourPathBuilder.build_path(&[circle], &[0.0], true, &Heights::default(), &controller());
        assert!(cmds
            .to_gcode()
            .contains("G2 X5.000 Y0.000 Z0.000 I-5.000 J0.000 F600.0"));
    }
}
