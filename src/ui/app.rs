//! Screen state: the routine plus everything only the screen cares about

use crate::domain::{JournalDraft, JournalField, Routine};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

use super::input::Action;

/// Element that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry(usize),
    AffirmationButton,
    Journal(JournalField),
}

impl Focus {
    /// Tab order: checklist rows, the button, then the journal fields
    fn order(entries: usize) -> Vec<Focus> {
        (0..entries)
            .map(Focus::Entry)
            .chain(std::iter::once(Focus::AffirmationButton))
            .chain(JournalField::ALL.into_iter().map(Focus::Journal))
            .collect()
    }

    fn step(self, entries: usize, forward: bool) -> Focus {
        let order = Focus::order(entries);
        let len = order.len();
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        order[next]
    }

    pub fn is_text_field(&self) -> bool {
        matches!(self, Focus::Journal(_))
    }
}

pub struct App {
    routine: Routine<StdRng>,
    journal: JournalDraft,
    focus: Focus,
    title: String,
    today: NaiveDate,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
    /// Scroll offset in content lines, kept between frames
    pub(super) scroll: u16,
    /// Where the content was last drawn; used for mouse hit testing
    pub(super) viewport: Rect,
    /// Focus target of each content line from the last draw
    pub(super) line_targets: Vec<Option<Focus>>,
}

impl App {
    pub fn new(mut routine: Routine<StdRng>, title: impl Into<String>, today: NaiveDate) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        routine.subscribe(move |event| {
            debug!(?event, "Routine changed");
            flag.set(true);
        });

        let focus = if routine.entries().is_empty() {
            Focus::AffirmationButton
        } else {
            Focus::Entry(0)
        };

        App {
            routine,
            journal: JournalDraft::new(),
            focus,
            title: title.into(),
            today,
            dirty,
            should_quit: false,
            scroll: 0,
            viewport: Rect::default(),
            line_targets: Vec::new(),
        }
    }

    pub fn routine(&self) -> &Routine<StdRng> {
        &self.routine
    }

    pub fn journal(&self) -> &JournalDraft {
        &self.journal
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether a redraw is pending and clears the flag
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Redraw => self.mark_dirty(),
            Action::FocusNext => self.set_focus(self.focus.step(self.entry_count(), true)),
            Action::FocusPrev => self.set_focus(self.focus.step(self.entry_count(), false)),
            Action::Activate => self.activate(),
            Action::ToggleEntry(index) => self.toggle(index),
            Action::Reshuffle => {
                self.routine.reshuffle_affirmation();
            }
            Action::Insert(c) => {
                if let Focus::Journal(field) = self.focus {
                    self.journal.push(field, c);
                    self.mark_dirty();
                }
            }
            Action::Backspace => {
                if let Focus::Journal(field) = self.focus {
                    if self.journal.pop(field).is_some() {
                        self.mark_dirty();
                    }
                }
            }
            Action::ClearField => {
                if let Focus::Journal(field) = self.focus {
                    self.journal.clear(field);
                    self.mark_dirty();
                }
            }
            Action::Click { column, row } => self.click(column, row),
        }
    }

    /// Replace a journal field outright
    pub fn set_journal(&mut self, field: JournalField, value: impl Into<String>) {
        self.journal.set(field, value);
        self.mark_dirty();
    }

    fn entry_count(&self) -> usize {
        self.routine.entries().len()
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Entry(index) => self.toggle(index),
            Focus::AffirmationButton => {
                self.routine.reshuffle_affirmation();
            }
            Focus::Journal(_) => self.set_focus(self.focus.step(self.entry_count(), true)),
        }
    }

    fn toggle(&mut self, index: usize) {
        if let Err(e) = self.routine.toggle(index) {
            debug!("Ignoring toggle: {}", e);
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let area = self.viewport;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return;
        }

        let line = usize::from(self.scroll) + usize::from(row - area.y);
        let Some(target) = self.line_targets.get(line).copied().flatten() else {
            return;
        };

        self.set_focus(target);
        match target {
            Focus::Entry(index) => self.toggle(index),
            Focus::AffirmationButton => {
                self.routine.reshuffle_affirmation();
            }
            Focus::Journal(_) => {}
        }
    }
}
