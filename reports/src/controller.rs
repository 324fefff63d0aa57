//! UI state owned by a single viewer instance.
//!
//! The browser controller drives these from timers and event listeners;
//! they hold no DOM handles so the rules can be checked natively.

/// What a countdown tick asks the page to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Show this many remaining seconds.
    Label(u32),
    /// Budget exhausted: stop the timer and reload. Emitted once.
    Reload,
    /// Countdown is not running; do nothing.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Ready,
    Running,
    Stopped,
    Fired,
}

/// Single-shot reload countdown.
///
/// `start()` only works once; after the reload fires or `stop()` is called,
/// every further tick is [`Tick::Idle`].
#[derive(Clone, Debug)]
pub struct Countdown {
    remaining: u32,
    phase: Phase,
}

impl Countdown {
    /// New countdown with a budget in seconds.
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            phase: Phase::Ready,
        }
    }

    /// Begin counting. Returns the first label, or `None` if the countdown
    /// was already started.
    pub fn start(&mut self) -> Option<u32> {
        if self.phase != Phase::Ready {
            return None;
        }
        self.phase = Phase::Running;
        Some(self.remaining)
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = Phase::Fired;
            Tick::Reload
        } else {
            Tick::Label(self.remaining)
        }
    }

    /// Halt without reloading.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running || self.phase == Phase::Ready {
            self.phase = Phase::Stopped;
        }
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether ticks still have an effect.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Visible text of the auto-refresh control for `seconds` remaining.
pub fn countdown_label(seconds: u32) -> String {
    format!("Обновление через {} сек.", seconds)
}

/// Open/closed state of the collapsible panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelToggle {
    open: bool,
}

impl PanelToggle {
    /// Start from a known state, e.g. the class the page was served with.
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Overwrite the state with what the page actually shows.
    pub fn sync(&mut self, open: bool) {
        self.open = open;
    }

    /// Flip and return whether the visibility class should now be present.
    pub fn click(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Current state.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Submit control locked until the verification widget reports success.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    enabled: bool,
}

impl SubmitGate {
    /// Unconditionally enable. Returns `true` if this call changed the state.
    pub fn unlock(&mut self) -> bool {
        let changed = !self.enabled;
        self.enabled = true;
        changed
    }

    /// Whether the submit control is usable.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Ticket handed to an issued search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Orders overlapping searches: only the most recently issued search may
/// update the result area, whatever order the responses arrive in.
#[derive(Clone, Debug, Default)]
pub struct SearchSequence {
    latest: u64,
}

impl SearchSequence {
    /// Register a new search; earlier tickets become stale.
    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    /// Whether a response for `ticket` may still be rendered.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}
