use std::collections::HashMap;

use log::debug;

use crate::record::Record;

/// Records sharing one city name.
#[derive(Debug, Default, Clone)]
pub struct CityGroup {
    pub records: Vec<Record>,
}

impl CityGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in capture order, paired with their 1-based rank.
    /// The sort is stable: records with identical timestamps keep their listing order.
    pub fn ranked(mut self) -> Vec<(usize, Record)> {
        self.records.sort_by(|a, b| a.taken_at().cmp(&b.taken_at()));
        self.records.into_iter().enumerate().map(|(i, record)| (i + 1, record)).collect()
    }
}

pub fn group_by_city(records: Vec<Record>) -> HashMap<String, CityGroup> {
    let mut groups: HashMap<String, CityGroup> = HashMap::new();
    for record in records {
        groups.entry(record.city_name.clone()).or_default().records.push(record);
    }
    debug!("grouped records into {} cities", groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_records;

    #[test]
    fn test_group_by_city_partitions_on_exact_name() {
        let records = parse_records(
            "a.jpg, Rome, 2015-01-01 10:00:00\n\
             b.jpg, Paris, 2015-01-01 10:00:00\n\
             c.jpg, Rome, 2015-01-02 10:00:00\n\
             d.jpg, ROME, 2015-01-02 10:00:00",
        )
        .unwrap();
        let groups = group_by_city(records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups["Rome"].len(), 2);
        assert_eq!(groups["Paris"].len(), 1);
        assert_eq!(groups["ROME"].len(), 1);
    }

    #[test]
    fn test_ranked_orders_by_date_then_time() {
        let records = parse_records(
            "a.jpg, Rome, 2016-01-01 09:00:00\n\
             b.jpg, Rome, 2015-12-31 23:59:59\n\
             c.jpg, Rome, 2016-01-01 08:00:00",
        )
        .unwrap();
        let ranked = group_by_city(records).remove("Rome").unwrap().ranked();
        let order: Vec<(usize, &str)> =
            ranked.iter().map(|(rank, r)| (*rank, r.photo_name.as_str())).collect();
        assert_eq!(order, vec![(1, "b"), (2, "c"), (3, "a")]);
    }

    #[test]
    fn test_ranked_keeps_listing_order_on_identical_timestamps() {
        let records = parse_records(
            "first.jpg, Rome, 2016-01-01 09:00:00\n\
             second.jpg, Rome, 2016-01-01 09:00:00",
        )
        .unwrap();
        let ranked = group_by_city(records).remove("Rome").unwrap().ranked();
        assert_eq!(ranked[0].1.photo_name, "first");
        assert_eq!(ranked[1].1.photo_name, "second");
    }
}
