use crate::domain::model::{CarMake, CountryTally};
use std::collections::HashMap;

/// Groups makes by origin country and counts common vs uncommon makes per
/// country in a single pass over the input.
///
/// Duplicate records (same id) are counted independently; deduplication is
/// not this function's job. The empty string is a valid country bucket.
/// Total for any finite input, including the empty slice.
pub fn collate(makes: &[CarMake]) -> HashMap<String, CountryTally> {
    let mut counts: HashMap<String, CountryTally> = HashMap::new();
    for make in makes {
        let tally = counts
            .entry(make.origin_country.clone())
            .or_insert_with(|| CountryTally::new(make.origin_country.clone()));
        if make.is_common {
            tally.common_makes += 1;
        } else {
            tally.uncommon_makes += 1;
        }
    }
    counts
}

/// Checks a previously computed aggregate against a fresh collation of the
/// same input. This is a self-check against implementation drift, not a
/// correctness oracle for the input data.
///
/// Comparison is keyed by country name, so map iteration order cannot
/// produce a false mismatch. Equality of two tallies requires country name
/// and both counts to match.
pub fn verify(makes: &[CarMake], expected: &HashMap<String, CountryTally>) -> bool {
    let actual = collate(makes);
    if actual.len() != expected.len() {
        return false;
    }
    expected
        .iter()
        .all(|(country, tally)| actual.get(country) == Some(tally))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: &str, country: &str, common: bool) -> CarMake {
        CarMake {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            is_common: common,
            origin_country: country.to_string(),
        }
    }

    #[test]
    fn collates_counts_per_country() {
        let makes = vec![
            make("bmw", "Germany", true),
            make("wiesmann", "Germany", false),
            make("toyota", "Japan", true),
        ];
        let counts = collate(&makes);

        assert_eq!(counts.len(), 2);
        let germany = &counts["Germany"];
        assert_eq!(germany.country, "Germany");
        assert_eq!(germany.common_makes, 1);
        assert_eq!(germany.uncommon_makes, 1);
        let japan = &counts["Japan"];
        assert_eq!(japan.common_makes, 1);
        assert_eq!(japan.uncommon_makes, 0);
    }

    #[test]
    fn counts_sum_to_records_observed_per_country() {
        let makes = vec![
            make("a", "UK", true),
            make("b", "UK", false),
            make("c", "UK", false),
            make("d", "Italy", true),
        ];
        let counts = collate(&makes);
        assert_eq!(counts["UK"].total(), 3);
        assert_eq!(counts["Italy"].total(), 1);
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        assert!(collate(&[]).is_empty());
    }

    #[test]
    fn empty_country_string_is_a_distinct_bucket() {
        let makes = vec![make("mystery", "", false), make("fiat", "Italy", true)];
        let counts = collate(&makes);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[""].uncommon_makes, 1);
        assert_eq!(counts[""].country, "");
    }

    #[test]
    fn duplicate_ids_are_counted_independently() {
        let makes = vec![make("bmw", "Germany", true), make("bmw", "Germany", true)];
        let counts = collate(&makes);
        assert_eq!(counts["Germany"].common_makes, 2);
    }

    #[test]
    fn collate_is_idempotent() {
        let makes = vec![
            make("honda", "Japan", true),
            make("koenigsegg", "Sweden", false),
        ];
        assert_eq!(collate(&makes), collate(&makes));
    }

    #[test]
    fn verify_accepts_a_fresh_collation() {
        let makes = vec![
            make("ford", "USA", true),
            make("tesla", "USA", true),
            make("morgan", "UK", false),
        ];
        let counts = collate(&makes);
        assert!(verify(&makes, &counts));
    }

    #[test]
    fn verify_accepts_empty_input_and_empty_expected() {
        assert!(verify(&[], &HashMap::new()));
    }

    #[test]
    fn verify_rejects_when_a_flag_flip_changes_counts() {
        let original = vec![make("ford", "USA", true), make("morgan", "UK", false)];
        let mut mutated = original.clone();
        mutated[0].is_common = false;
        assert!(!verify(&original, &collate(&mutated)));
    }

    #[test]
    fn verify_rejects_cardinality_mismatch() {
        let makes = vec![make("ford", "USA", true)];
        let mut expected = collate(&makes);
        expected.insert("Japan".to_string(), CountryTally::new("Japan".to_string()));
        assert!(!verify(&makes, &expected));
    }

    #[test]
    fn verify_rejects_tampered_counts() {
        let makes = vec![make("ford", "USA", true)];
        let mut expected = collate(&makes);
        expected.get_mut("USA").unwrap().common_makes = 99;
        assert!(!verify(&makes, &expected));
    }
}
