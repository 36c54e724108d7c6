use core::fmt::{self, Write};

use heapless::String;

use super::{DateTimeFields, Field};
use crate::config::LCD_COLUMNS;

/// One LCD row of text.
pub type Line = String<{ LCD_COLUMNS as usize }>;

/// The two rows pushed to the display each iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub date: Line,
    pub time: Line,
}

/// Formats `fields` as `Day:YYYY/MM/DD` and `Time:HH:MM:SS`, blanking the
/// `hidden` field with spaces of the same width.
pub fn render(fields: &DateTimeFields, hidden: Option<Field>) -> Result<Frame, fmt::Error> {
    let mut date = Line::new();
    date.push_str("Day:").map_err(|_| fmt::Error)?;
    write_field(&mut date, fields, Field::Year, hidden)?;
    date.push('/').map_err(|_| fmt::Error)?;
    write_field(&mut date, fields, Field::Month, hidden)?;
    date.push('/').map_err(|_| fmt::Error)?;
    write_field(&mut date, fields, Field::Day, hidden)?;

    let mut time = Line::new();
    time.push_str("Time:").map_err(|_| fmt::Error)?;
    write_field(&mut time, fields, Field::Hour, hidden)?;
    time.push(':').map_err(|_| fmt::Error)?;
    write_field(&mut time, fields, Field::Minute, hidden)?;
    time.push(':').map_err(|_| fmt::Error)?;
    write_field(&mut time, fields, Field::Second, hidden)?;

    Ok(Frame { date, time })
}

/// Zero-padded value of one field, or blanks of the same width.
pub fn write_field<W: Write>(
    out: &mut W,
    fields: &DateTimeFields,
    field: Field,
    hidden: Option<Field>,
) -> fmt::Result {
    let width = field.width();
    if hidden == Some(field) {
        write!(out, "{:width$}", "")
    } else {
        write!(out, "{:0width$}", fields.get(field))
    }
}
