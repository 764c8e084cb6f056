// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::fmt;

use crate::calendar::month::CalendarMonth;
use crate::calendar::week::CalendarWeek;

/// A pageable calendar window, a week or a month.
pub trait Window: Sized {
    type Id: PartialEq + Clone + fmt::Debug;

    fn id(&self) -> Self::Id;

    /// The adjacent window before this one, if it can be computed.
    fn previous(&self) -> Option<Self>;

    /// The adjacent window after this one, if it can be computed.
    fn next(&self) -> Option<Self>;
}

impl Window for CalendarWeek {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn previous(&self) -> Option<Self> {
        Some(CalendarWeek::previous(self))
    }

    fn next(&self) -> Option<Self> {
        Some(CalendarWeek::next(self))
    }
}

impl Window for CalendarMonth {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn previous(&self) -> Option<Self> {
        CalendarMonth::previous(self)
    }

    fn next(&self) -> Option<Self> {
        CalendarMonth::next(self)
    }
}

/// Which end of a strip became visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Ordered, loaded windows of an infinite scroller.
///
/// The strip itself never shrinks; callers bound it with [`WindowStrip::trim`].
#[derive(Debug, Clone)]
pub struct WindowStrip<W: Window> {
    windows: VecDeque<W>,
}

impl<W: Window> WindowStrip<W> {
    pub fn new(center: W) -> Self {
        Self {
            windows: VecDeque::from([center]),
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &W> {
        self.windows.iter()
    }

    pub fn first(&self) -> Option<&W> {
        self.windows.front()
    }

    pub fn last(&self) -> Option<&W> {
        self.windows.back()
    }

    /// Handles the window `boundary` becoming visible at `edge` by loading one more window
    /// beyond it.
    ///
    /// Nothing happens, and `false` is returned, when `boundary` is no longer the window at
    /// that edge, so replaying the same event never loads twice. A neighbour that cannot be
    /// computed, or that is already loaded, is skipped the same way.
    pub fn extend(&mut self, edge: Edge, boundary: &W::Id) -> bool {
        let current = match edge {
            Edge::Leading => self.windows.front(),
            Edge::Trailing => self.windows.back(),
        };
        let Some(current) = current else {
            return false;
        };
        if current.id() != *boundary {
            tracing::debug!(?edge, ?boundary, "boundary already extended");
            return false;
        }

        let neighbour = match edge {
            Edge::Leading => current.previous(),
            Edge::Trailing => current.next(),
        };
        let Some(neighbour) = neighbour else {
            tracing::warn!(?edge, ?boundary, "cannot extend past boundary");
            return false;
        };

        let id = neighbour.id();
        if self.windows.iter().any(|w| w.id() == id) {
            tracing::warn!(?edge, ?id, "neighbour already loaded");
            return false;
        }

        match edge {
            Edge::Leading => self.windows.push_front(neighbour),
            Edge::Trailing => self.windows.push_back(neighbour),
        }
        true
    }

    /// Drops windows from `edge` until at most `max` remain, keeping at least one.
    pub fn trim(&mut self, max: usize, edge: Edge) {
        let max = max.max(1);
        while self.windows.len() > max {
            match edge {
                Edge::Leading => self.windows.pop_front(),
                Edge::Trailing => self.windows.pop_back(),
            };
        }
    }
}
