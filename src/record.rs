use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rename_error::RenameError;

// name.ext, City, yyyy-mm-dd hh:mm:ss
static RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<photo_name>[A-Za-z]+)\.(?P<extension>jpg|png|jpeg), (?P<city_name>[A-Za-z]+), (?P<date>\d{4}-\d{2}-\d{2}) (?P<time>\d{2}:\d{2}:\d{2})$",
    )
    .expect("record pattern compiles")
});

/// One photo line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub original_index: usize,
    pub photo_name: String,
    pub extension: String,
    pub city_name: String,
    pub date: String,
    pub time: String,
}

impl Record {
    /// Name of the photo as it appears in the listing.
    pub fn original_file_name(&self) -> String {
        format!("{}.{}", self.photo_name, self.extension)
    }

    /// Both parts are fixed width and zero padded, so string order is capture order.
    pub fn taken_at(&self) -> (&str, &str) {
        (self.date.as_str(), self.time.as_str())
    }

    pub fn parse(original_index: usize, line: &str) -> Option<Record> {
        RECORD_RE.captures(line).map(|caps| Record {
            original_index,
            photo_name: caps["photo_name"].to_string(),
            extension: caps["extension"].to_string(),
            city_name: caps["city_name"].to_string(),
            date: caps["date"].to_string(),
            time: caps["time"].to_string(),
        })
    }
}

/// Split a listing into records, failing on the first line that is not a photo record.
/// Trailing blank lines are ignored.
pub fn parse_records(input: &str) -> Result<Vec<Record>, RenameError> {
    let mut lines: Vec<&str> =
        input.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let records = lines
        .iter()
        .enumerate()
        .map(|(i, line)| Record::parse(i, line).ok_or_else(|| RenameError::malformed(i + 1, line)))
        .collect::<Result<Vec<Record>, _>>()?;
    debug!("parsed {} records", records.len());
    Ok(records)
}
