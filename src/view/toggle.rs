// ============================================================================
// Block toggle — expand/collapse transitions for one block
// ============================================================================
//
// The page script runs the same machine in the browser; this type decides the
// initial markup and pins the transition rules down in tests.

/// Delay before an opening block drops its `hide` class.
pub const REVEAL_DELAY_MS: u64 = 50;

/// Delay before a closing block is taken out of the layout.
pub const HIDE_DELAY_MS: u64 = 750;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Expanded,
    Collapsing,
    Collapsed,
    Expanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// What the data container looks like in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub display: Display,
    /// Whether the `hide` class (zero height, transparent) is applied
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    settles_to: BlockState,
}

/// Two-way toggle with a single pending timer.
///
/// Toggling always cancels the pending timer before scheduling a new one, so
/// rapid toggles cannot interleave.
#[derive(Debug, Clone)]
pub struct BlockToggle {
    state: BlockState,
    pending: Option<Pending>,
    now_ms: u64,
}

impl BlockToggle {
    pub fn new(expanded: bool) -> Self {
        Self {
            state: if expanded {
                BlockState::Expanded
            } else {
                BlockState::Collapsed
            },
            pending: None,
            now_ms: 0,
        }
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    pub fn visibility(&self) -> Visibility {
        match self.state {
            BlockState::Expanded => Visibility {
                display: Display::Block,
                hidden: false,
            },
            BlockState::Collapsing | BlockState::Expanding => Visibility {
                display: Display::Block,
                hidden: true,
            },
            BlockState::Collapsed => Visibility {
                display: Display::None,
                hidden: true,
            },
        }
    }

    /// Flip direction. Opening shows the block immediately and reveals it
    /// after [`REVEAL_DELAY_MS`]; closing hides it and removes it from the
    /// layout after [`HIDE_DELAY_MS`].
    pub fn toggle(&mut self) {
        self.pending = None;
        match self.state {
            BlockState::Collapsed | BlockState::Collapsing => {
                self.state = BlockState::Expanding;
                self.schedule(REVEAL_DELAY_MS, BlockState::Expanded);
            }
            BlockState::Expanded | BlockState::Expanding => {
                self.state = BlockState::Collapsing;
                self.schedule(HIDE_DELAY_MS, BlockState::Collapsed);
            }
        }
    }

    /// Let `ms` milliseconds pass, firing the pending timer if it falls due.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        match self.pending {
            Some(pending) if pending.due_ms <= self.now_ms => {
                self.state = pending.settles_to;
                self.pending = None;
            }
            _ => {}
        }
    }

    /// Run the pending timer to completion.
    pub fn settle(&mut self) {
        if let Some(pending) = self.pending {
            let remaining = pending.due_ms.saturating_sub(self.now_ms);
            self.advance(remaining);
        }
    }

    fn schedule(&mut self, delay_ms: u64, settles_to: BlockState) {
        self.pending = Some(Pending {
            due_ms: self.now_ms + delay_ms,
            settles_to,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_waits_for_hide_delay() {
        let mut t = BlockToggle::new(true);
        t.toggle();
        assert_eq!(t.state(), BlockState::Collapsing);
        assert_eq!(t.visibility().display, Display::Block);
        assert!(t.visibility().hidden);

        t.advance(HIDE_DELAY_MS - 1);
        assert_eq!(t.state(), BlockState::Collapsing);
        t.advance(1);
        assert_eq!(t.state(), BlockState::Collapsed);
        assert_eq!(t.visibility().display, Display::None);
    }

    #[test]
    fn expand_shows_immediately() {
        let mut t = BlockToggle::new(false);
        t.toggle();
        assert_eq!(t.visibility().display, Display::Block);
        t.advance(REVEAL_DELAY_MS);
        assert_eq!(t.state(), BlockState::Expanded);
        assert!(!t.visibility().hidden);
    }

    #[test]
    fn toggle_mid_collapse_cancels_hide() {
        let mut t = BlockToggle::new(true);
        t.toggle();
        t.advance(100);
        t.toggle();
        assert_eq!(t.state(), BlockState::Expanding);

        // The cancelled hide timer must not fire later.
        t.advance(HIDE_DELAY_MS);
        assert_eq!(t.state(), BlockState::Expanded);
        assert!(t.is_settled());
    }
}
