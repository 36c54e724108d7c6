use super::{DateTimeFields, Field};

/// Whether the clock is showing live time or the setting menu is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Normal,
    Editing {
        cursor: Field,
        pending: DateTimeFields,
    },
}

/// Time-setting state machine.
///
/// ```text
/// Normal      --setting-->  Editing(Year)   snapshot taken by the caller
/// Editing(_)  --cancel--->  Normal          pending fields dropped
/// Editing(c)  --up------->  Editing(c)      field c stepped with wraparound
/// Editing(c)  --ok------->  Editing(c+1)
/// Editing(Second) --ok-->   Normal          pending fields returned for commit
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeSetting {
    mode: Mode,
}

impl TimeSetting {
    pub const fn new() -> Self {
        Self { mode: Mode::Normal }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Selected field while editing.
    pub fn editing_cursor(&self) -> Option<Field> {
        match self.mode {
            Mode::Editing { cursor, .. } => Some(cursor),
            Mode::Normal => None,
        }
    }

    /// Cursor position 1..=6. Sits at 1 whenever the menu is closed.
    pub fn cursor(&self) -> u8 {
        self.editing_cursor().unwrap_or(Field::Year).index()
    }

    pub fn pending(&self) -> Option<&DateTimeFields> {
        match &self.mode {
            Mode::Editing { pending, .. } => Some(pending),
            Mode::Normal => None,
        }
    }

    /// Opens the menu on the first field with `snapshot` as the pending
    /// value. Returns `false` and changes nothing if already editing.
    pub fn enter(&mut self, snapshot: DateTimeFields) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = Mode::Editing {
            cursor: Field::Year,
            pending: snapshot,
        };
        true
    }

    /// Closes the menu, discarding pending fields.
    pub fn cancel(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.mode = Mode::Normal;
        was_editing
    }

    /// Steps the selected field.
    pub fn up(&mut self) {
        if let Mode::Editing { cursor, pending } = &mut self.mode {
            pending.increment(*cursor);
        }
    }

    /// Advances the cursor. On the last field closes the menu and returns
    /// the fields to write to the RTC.
    pub fn ok(&mut self) -> Option<DateTimeFields> {
        let Mode::Editing { cursor, pending } = &mut self.mode else {
            return None;
        };
        match cursor.next() {
            Some(next) => {
                *cursor = next;
                None
            }
            None => {
                let commit = *pending;
                self.mode = Mode::Normal;
                Some(commit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: DateTimeFields = DateTimeFields::new(2025, 7, 20, 18, 0, 0);

    #[test]
    fn starts_normal_with_cursor_at_one() {
        let setting = TimeSetting::new();
        assert_eq!(setting.mode(), &Mode::Normal);
        assert_eq!(setting.cursor(), 1);
        assert!(setting.pending().is_none());
    }

    #[test]
    fn enter_is_ignored_while_editing() {
        let mut setting = TimeSetting::new();
        assert!(setting.enter(SNAPSHOT));
        setting.ok();
        assert!(!setting.enter(DateTimeFields::new(2000, 1, 1, 0, 0, 0)));
        assert_eq!(setting.cursor(), 2);
        assert_eq!(setting.pending(), Some(&SNAPSHOT));
    }

    #[test]
    fn cursor_stays_in_bounds_and_resets() {
        let mut setting = TimeSetting::new();
        setting.enter(SNAPSHOT);
        for expected in 1..=6 {
            assert_eq!(setting.cursor(), expected);
            setting.up();
            let committed = setting.ok();
            assert_eq!(committed.is_some(), expected == 6);
        }
        assert!(!setting.is_editing());
        assert_eq!(setting.cursor(), 1);

        setting.enter(SNAPSHOT);
        assert_eq!(setting.cursor(), 1);
        setting.ok();
        setting.ok();
        assert!(setting.cancel());
        assert_eq!(setting.cursor(), 1);
    }

    #[test]
    fn up_steps_only_selected_field() {
        let mut setting = TimeSetting::new();
        setting.enter(SNAPSHOT);
        setting.ok();
        setting.up();
        setting.up();
        setting.ok();
        setting.ok();
        setting.up();
        assert_eq!(
            setting.pending(),
            Some(&DateTimeFields::new(2025, 9, 20, 19, 0, 0))
        );
    }

    #[test]
    fn six_oks_commit_the_snapshot() {
        let mut setting = TimeSetting::new();
        setting.enter(SNAPSHOT);
        let commits: heapless::Vec<_, 6> = (0..6).filter_map(|_| setting.ok()).collect();
        assert_eq!(commits.as_slice(), &[SNAPSHOT]);
    }

    #[test]
    fn events_in_normal_mode_do_nothing() {
        let mut setting = TimeSetting::new();
        setting.up();
        assert_eq!(setting.ok(), None);
        assert!(!setting.cancel());
        assert_eq!(setting.mode(), &Mode::Normal);
    }
}
