use crate::coords::Vec2;

use super::{ArcCmd, PathCommand};

/// Receiver of an ordered path command stream.
///
/// Producers only append; they never query the sink. A sink is not required
/// to be `Sync`: callers sharing one across threads must serialize access.
pub trait PathSink {
    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Circular arc with canvas semantics: joined to the current point by a
    /// straight segment if there is one, otherwise it opens a new subpath.
    fn arc(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool);

    fn close_path(&mut self);

    /// Dispatches a recorded command to the matching method.
    fn push(&mut self, cmd: PathCommand) {
        match cmd {
            PathCommand::MoveTo(p) => self.move_to(p),
            PathCommand::LineTo(p) => self.line_to(p),
            PathCommand::Arc(ArcCmd { center, radius, start_angle, end_angle, anticlockwise }) => {
                self.arc(center, radius, start_angle, end_angle, anticlockwise)
            }
            PathCommand::ClosePath => self.close_path(),
        }
    }
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    #[inline]
    fn move_to(&mut self, p: Vec2) {
        (**self).move_to(p)
    }

    #[inline]
    fn line_to(&mut self, p: Vec2) {
        (**self).line_to(p)
    }

    #[inline]
    fn arc(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) {
        (**self).arc(center, radius, start_angle, end_angle, anticlockwise)
    }

    #[inline]
    fn close_path(&mut self) {
        (**self).close_path()
    }
}
