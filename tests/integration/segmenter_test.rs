//! Segmentation properties over realistic blobs

use rulemt::config::SegmenterConfig;
use rulemt::Segmenter;

use crate::helpers::load_fixture;

const SENTINEL: &str = "QuarkWprConfig(";

fn split(input: &str) -> Vec<&str> {
    Segmenter::from_config(input, &SegmenterConfig::default())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn concatenation_splits_like_the_parts() {
    let a = "QuarkWprConfig(ruleName=\"a\",),\nQuarkWprConfig(ruleName=\"b\",),\n";
    let b = "QuarkWprConfig(ruleName=\"c\",),\n";
    let joined = format!("{}{}", a, b);

    let mut expected = split(a);
    expected.extend(split(b));

    assert_eq!(split(&joined), expected);
}

#[test]
fn skip_tokens_are_found_anywhere_in_a_record() {
    let records = [
        "QuarkWprConfig(QuarkWprConfigStatus.EXPERIMENTAL ruleName=\"a\",)",
        "QuarkWprConfig(ruleName=\"b\", tags=[fuss_limited_discoverable])",
        "QuarkWprConfig(ruleName=\"c\",)\n# QuarkWprConfigStatus.EXPERIMENTAL\n",
        "QuarkWprConfig(ruleName=\"d\",)",
    ];
    let input = records.concat();

    assert_eq!(split(&input), vec![records[3]]);
}

#[test]
fn fixture_records_start_at_sentinel() {
    let input = load_fixture("integrity_configlist.cinc");
    let records = split(&input);

    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.starts_with(SENTINEL)));
    assert!(records.iter().all(|r| r.matches(SENTINEL).count() == 1));
}
