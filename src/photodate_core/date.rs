use crate::photodate_core::error::DateFormatError;
use std::fmt;

/// Delimiters tried, in order, when splitting the date portion of a tag.
const DATE_DELIMITERS: [char; 3] = ['-', ':', '/'];

/// Year, month and day exactly as written in the metadata.
///
/// Tokens are never re-padded or converted to numbers: `"3"` and `"03"` are
/// different days as far as folder placement is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTriple {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateTriple {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }
}

impl fmt::Display for DateTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// Parse a capture date such as `2012:03:03 11:11:00` into its date tokens.
///
/// The date and time portions must be separated by a space. The date portion
/// is split on the first of `-`, `:` and `/` that produces exactly three
/// pieces, so `2012-03-03`, `2012:03:03` and `2012/03/03` are equivalent.
pub fn normalize_date(raw: &str) -> Result<DateTriple, DateFormatError> {
    let raw = raw.trim();
    let Some((date, _time)) = raw.split_once(' ') else {
        return Err(DateFormatError::MissingTime(raw.to_string()));
    };

    let tokens = DATE_DELIMITERS
        .iter()
        .map(|delimiter| date.split(*delimiter).collect::<Vec<_>>())
        .find(|tokens| tokens.len() == 3)
        .ok_or_else(|| DateFormatError::NoDelimiter(raw.to_string()))?;

    if tokens
        .iter()
        .any(|t| t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(DateFormatError::NonNumeric(raw.to_string()));
    }

    Ok(DateTriple::new(tokens[0], tokens[1], tokens[2]))
}
