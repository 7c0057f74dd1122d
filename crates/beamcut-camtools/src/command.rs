//! Toolpath motion commands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of motion a command can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionKind {
    /// G0
    Rapid,
    /// G1
    Linear,
    /// G2
    ArcCW,
    /// G3
    ArcCCW,
}

impl MotionKind {
    /// The G-code word for this motion.
    pub fn code(&self) -> &'static str {
        match self {
            MotionKind::Rapid => "G0",
            MotionKind::Linear => "G1",
            MotionKind::ArcCW => "G2",
            MotionKind::ArcCCW => "G3",
        }
    }
}

/// A single motion command. Axes that are `None` keep their modal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub kind: MotionKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    /// Arc center X, relative to the start point
    pub i: Option<f64>,
    /// Arc center Y, relative to the start point
    pub j: Option<f64>,
    pub feed: Option<f64>,
}

impl Command {
    /// Creates a command with no axis words.
    pub fn new(kind: MotionKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
            z: None,
            i: None,
            j: None,
            feed: None,
        }
    }

    pub fn with_xy(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_center_offset(mut self, i: f64, j: f64) -> Self {
        self.i = Some(i);
        self.j = Some(j);
        self
    }

    /// Sets the feed word; a zero rate leaves it unset.
    pub fn with_feed(mut self, feed: f64) -> Self {
        if feed > 0.0 {
            self.feed = Some(feed);
        }
        self
    }

    /// Whether this is a pure vertical rapid to `clearance_height`.
    pub fn is_clearance_move(&self, clearance_height: f64) -> bool {
        self.kind == MotionKind::Rapid
            && self.x.is_none()
            && self.y.is_none()
            && self
                .z
                .is_some_and(|z| (z - clearance_height).abs() <= 1e-9)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.code())?;
        for (word, value) in [
            ('X', self.x),
            ('Y', self.y),
            ('Z', self.z),
            ('I', self.i),
            ('J', self.j),
        ] {
            if let Some(v) = value {
                write!(f, " {}{:.3}", word, v)?;
            }
        }
        if let Some(feed) = self.feed {
            write!(f, " F{:.1}", feed)?;
        }
        Ok(())
    }
}

/// An ordered list of motion commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop()
    }

    pub fn last(&self) -> Option<&Command> {
        self.commands.last()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Renders every command as one G-code line.
    pub fn to_gcode(&self) -> String {
        let mut gcode = String::new();
        for command in &self.commands {
            gcode.push_str(&command.to_string());
            gcode.push('\n');
        }
        gcode
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl From<Vec<Command>> for CommandList {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}
