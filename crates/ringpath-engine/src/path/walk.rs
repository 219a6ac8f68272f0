//! Resolves canvas path semantics into explicit drawing events.
//!
//! A raw command stream leaves some things implicit: arcs join the current
//! point with a straight segment, a line with no current point starts a
//! subpath, and drawing after `ClosePath` resumes at the subpath start.

use crate::coords::Vec2;

use super::{ArcCmd, PathCommand};

/// Joins shorter than this are dropped.
const JOIN_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum Event {
    /// Starts a new subpath at the point.
    Begin(Vec2),
    Line(Vec2),
    /// Non-degenerate arc, already joined to the current point.
    Arc(ArcCmd),
    Close,
}

pub(super) fn walk(cmds: &[PathCommand], mut f: impl FnMut(Event)) {
    let mut current: Option<Vec2> = None;
    let mut subpath_start = Vec2::zero();
    let mut reopen = false;

    for cmd in cmds {
        match *cmd {
            PathCommand::MoveTo(p) => {
                f(Event::Begin(p));
                current = Some(p);
                subpath_start = p;
                reopen = false;
            }
            PathCommand::LineTo(p) => {
                if reopen {
                    f(Event::Begin(subpath_start));
                    reopen = false;
                }
                match current {
                    Some(_) => f(Event::Line(p)),
                    None => {
                        f(Event::Begin(p));
                        subpath_start = p;
                    }
                }
                current = Some(p);
            }
            PathCommand::Arc(arc) => {
                if reopen {
                    f(Event::Begin(subpath_start));
                    reopen = false;
                }
                let start = arc.start_point();
                match current {
                    Some(c) if (start - c).length() > JOIN_TOLERANCE => f(Event::Line(start)),
                    Some(_) => {}
                    None => {
                        f(Event::Begin(start));
                        subpath_start = start;
                    }
                }
                if arc.sweep() != 0.0 {
                    f(Event::Arc(arc));
                }
                current = Some(arc.end_point());
            }
            PathCommand::ClosePath => {
                if current.is_some() && !reopen {
                    f(Event::Close);
                    current = Some(subpath_start);
                    reopen = true;
                }
            }
        }
    }
}
