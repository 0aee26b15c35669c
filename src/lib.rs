use log::debug;

pub mod city;
pub mod cli;
pub mod listing;
pub mod name;
pub mod record;
pub mod rename_error;

use name::Renamed;
use rename_error::RenameError;

/// Parse a listing and pair every photo with its city-based name, in listing order.
pub fn plan_renames(input: &str) -> Result<Vec<Renamed>, RenameError> {
    let records = record::parse_records(input)?;
    let len = records.len();
    let groups = city::group_by_city(records);
    let renamed = name::synthesize_names(groups, len);
    debug!("renamed {} photos", renamed.len());
    Ok(renamed)
}

/// Rename every photo of a listing to `<City><rank>.<ext>`.
///
/// Ranks count from 1 in capture order within each city and are zero padded
/// to the digit count of the city's photo total. Output lines follow the
/// input order. Any malformed line fails the whole listing.
pub fn rename_photos(input: &str) -> Result<String, RenameError> {
    Ok(plan_renames(input)?.into_iter().map(|r| r.new_name).collect::<Vec<_>>().join("\n"))
}
