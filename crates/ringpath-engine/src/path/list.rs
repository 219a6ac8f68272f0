use crate::coords::Vec2;

use super::{ArcCmd, PathCommand, PathSink};

/// Recorded path command stream.
///
/// Commands are kept in emission order. Recording never reorders or merges
/// commands, so `commands()` is exactly what a producer wrote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathCommands {
    cmds: Vec<PathCommand>,
}

impl PathCommands {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.cmds
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PathCommand> {
        self.cmds.iter()
    }

    /// Feeds every recorded command, in order, to another sink.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for &cmd in &self.cmds {
            sink.push(cmd);
        }
    }

    /// Iterates over the recorded arcs only.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcCmd> {
        self.cmds.iter().filter_map(|c| match c {
            PathCommand::Arc(a) => Some(a),
            _ => None,
        })
    }
}

impl PathSink for PathCommands {
    #[inline]
    fn move_to(&mut self, p: Vec2) {
        self.cmds.push(PathCommand::MoveTo(p));
    }

    #[inline]
    fn line_to(&mut self, p: Vec2) {
        self.cmds.push(PathCommand::LineTo(p));
    }

    #[inline]
    fn arc(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) {
        self.cmds
            .push(PathCommand::Arc(ArcCmd::new(center, radius, start_angle, end_angle, anticlockwise)));
    }

    #[inline]
    fn close_path(&mut self) {
        self.cmds.push(PathCommand::ClosePath);
    }

    #[inline]
    fn push(&mut self, cmd: PathCommand) {
        self.cmds.push(cmd);
    }
}

impl Extend<PathCommand> for PathCommands {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.cmds.extend(iter);
    }
}

impl FromIterator<PathCommand> for PathCommands {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self { cmds: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PathCommands {
    type Item = &'a PathCommand;
    type IntoIter = core::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathCommands {
        let mut p = PathCommands::new();
        p.move_to(Vec2::new(1.0, 0.0));
        p.arc(Vec2::zero(), 1.0, 0.0, 1.0, false);
        p.line_to(Vec2::zero());
        p.close_path();
        p
    }

    #[test]
    fn records_in_order() {
        let p = sample();
        assert_eq!(p.len(), 4);
        assert!(matches!(p.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(p.commands()[1], PathCommand::Arc(_)));
        assert!(matches!(p.commands()[2], PathCommand::LineTo(_)));
        assert_eq!(p.commands()[3], PathCommand::ClosePath);
        assert_eq!(p.arcs().count(), 1);
    }

    #[test]
    fn replay_reproduces_stream() {
        let p = sample();
        let mut copy = PathCommands::new();
        p.replay(&mut copy);
        assert_eq!(copy, p);

        let collected: PathCommands = p.iter().copied().collect();
        assert_eq!(collected.into_commands(), p.clone().into_commands());
    }

    #[test]
    fn replay_into_trait_object() {
        let p = sample();
        let mut copy = PathCommands::new();
        {
            let sink: &mut dyn PathSink = &mut copy;
            p.replay(sink);
        }
        assert_eq!(copy, p);
    }

    #[test]
    fn clear_empties() {
        let mut p = sample();
        p.clear();
        assert!(p.is_empty());
        p.extend([PathCommand::ClosePath]);
        assert_eq!(p.len(), 1);
    }
}
