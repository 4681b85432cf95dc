use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

use survey_transform::normalize_missing;

fn sentinels() -> Vec<String> {
    vec![String::new(), "N/A".to_string(), "NA".to_string()]
}

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("N/A".to_string())),
        Just(Some("NA".to_string())),
        Just(Some(String::new())),
        Just(Some(" NA ".to_string())),
        "[a-zA-Z]{1,8}".prop_map(Some),
    ]
}

proptest! {
    // Applying the normalizer twice yields the same table as applying it
    // once, for any mix of sentinel and ordinary cells.
    #[test]
    fn normalization_is_idempotent(cells in proptest::collection::vec(cell(), 1..40)) {
        let mut df = DataFrame::new(vec![Column::new("answer".into(), cells)]).unwrap();
        normalize_missing(&mut df, &sentinels()).unwrap();
        let once = df.clone();

        let replaced = normalize_missing(&mut df, &sentinels()).unwrap();
        prop_assert_eq!(replaced, 0);
        prop_assert!(df.equals_missing(&once));
    }
}
