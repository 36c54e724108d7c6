use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// One of the six settable fields, in the order the cursor visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Year = 1,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
        Field::Second,
    ];

    /// 1-based position of the field on the cursor track.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The field after this one, or `None` at the last field.
    pub const fn next(self) -> Option<Field> {
        match self {
            Field::Year => Some(Field::Month),
            Field::Month => Some(Field::Day),
            Field::Day => Some(Field::Hour),
            Field::Hour => Some(Field::Minute),
            Field::Minute => Some(Field::Second),
            Field::Second => None,
        }
    }

    /// Number of characters the field occupies on the display.
    pub const fn width(self) -> usize {
        match self {
            Field::Year => 4,
            _ => 2,
        }
    }
}

/// Broken-down date and time as the RTC reports it and the setting menu
/// edits it.
///
/// The day is only constrained to 1..=31, so the value may name a date that
/// does not exist (e.g. February 30).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTimeFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeFields {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current numeric value of `field`.
    pub fn get(&self, field: Field) -> u16 {
        match field {
            Field::Year => self.year,
            Field::Month => self.month.into(),
            Field::Day => self.day.into(),
            Field::Hour => self.hour.into(),
            Field::Minute => self.minute.into(),
            Field::Second => self.second.into(),
        }
    }

    /// Steps `field` up by one, wrapping within its range.
    ///
    /// Year wraps at `u16::MAX`; day cycles 1..=31 whatever the month.
    pub fn increment(&mut self, field: Field) {
        match field {
            Field::Year => self.year = self.year.wrapping_add(1),
            Field::Month => self.month = self.month % 12 + 1,
            Field::Day => self.day = self.day % 31 + 1,
            Field::Hour => self.hour = (self.hour + 1) % 24,
            Field::Minute => self.minute = (self.minute + 1) % 60,
            Field::Second => self.second = (self.second + 1) % 60,
        }
    }

    /// Calendar date/time these fields describe, if it exists.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())?.and_hms_opt(
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
        )
    }

    /// Same fields with the day pulled back to the last day of the month when
    /// it runs past it. Returns `None` if year or month cannot form a date.
    pub fn clamp_day(&self) -> Option<DateTimeFields> {
        let first = NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), 1)?;
        let last_day = (28..=31)
            .rev()
            .find(|&d| first.with_day(d).is_some())
            .unwrap_or(28);
        let mut fields = *self;
        fields.day = fields.day.min(last_day as u8);
        Some(fields)
    }
}

impl From<NaiveDateTime> for DateTimeFields {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year() as u16,
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}
