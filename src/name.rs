use std::collections::HashMap;

use log::debug;

use crate::city::CityGroup;

/// A photo's listing name next to the name it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub original_index: usize,
    pub original_name: String,
    pub new_name: String,
}

/// Decimal digits in `n`; zero has one digit.
pub fn digit_count(n: usize) -> usize {
    let mut n = n / 10;
    let mut digits = 1;
    while n > 0 {
        n /= 10;
        digits += 1;
    }
    digits
}

pub fn pad_rank(rank: usize, width: usize) -> String {
    format!("{:0width$}", rank, width = width)
}

pub fn build_file_name(city_name: &str, rank: usize, width: usize, extension: &str) -> String {
    format!("{}{}.{}", city_name, pad_rank(rank, width), extension)
}

/// Name every record of every group and place the result at the record's listing position.
/// `len` is the number of records across all groups.
pub fn synthesize_names(groups: HashMap<String, CityGroup>, len: usize) -> Vec<Renamed> {
    let mut slots: Vec<Option<Renamed>> = vec![None; len];
    for (city_name, group) in groups {
        let width = digit_count(group.len());
        debug!("{}: {} photos, width {}", city_name, group.len(), width);
        for (rank, record) in group.ranked() {
            let new_name = build_file_name(&record.city_name, rank, width, &record.extension);
            slots[record.original_index] = Some(Renamed {
                original_index: record.original_index,
                original_name: record.original_file_name(),
                new_name,
            });
        }
    }
    slots.into_iter().flatten().collect()
}
