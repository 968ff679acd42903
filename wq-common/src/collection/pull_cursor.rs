use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorState {
    #[default]
    Active,
    Terminated,
}

/// Which end of the backing buffer a cursor removes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullEnd {
    Oldest,
    Newest,
}

/// One-shot consumption state shared by both collections.
///
/// While active, every pull removes one item from the configured end. The first
/// pull that finds the buffer empty terminates the cursor, and a terminated
/// cursor yields `None` forever, no matter what is inserted afterwards.
#[derive(Clone, Debug)]
pub struct PullCursor {
    end: PullEnd,
    exhausted: bool,
}

impl PullCursor {
    pub fn new(end: PullEnd) -> Self {
        Self {
            end,
            exhausted: false,
        }
    }

    pub fn pull<T>(&mut self, items: &mut VecDeque<T>) -> Option<T> {
        if self.exhausted {
            return None;
        }

        let item = match self.end {
            PullEnd::Oldest => items.pop_front(),
            PullEnd::Newest => items.pop_back(),
        };

        if item.is_none() {
            log_debug!("pull cursor observed an empty collection, terminated");
            self.exhausted = true;
        }
        item
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn state(&self) -> CursorState {
        if self.exhausted {
            CursorState::Terminated
        } else {
            CursorState::Active
        }
    }
}
