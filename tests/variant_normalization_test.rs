use evidence_validator::{FunctionalVariants, GeneVariantPair, VariantLevel};

#[test]
fn test_fixture_normalizes_to_two_pairs() {
    let variants: FunctionalVariants =
        serde_json::from_str(include_str!("resources/functional_variants.json")).unwrap();

    assert_eq!(
        variants.pairs(),
        &[
            GeneVariantPair::new("BRCA1", "p.Arg1699Gln"),
            GeneVariantPair::new("BRCA2", "c.123A>T"),
        ]
    );

    let levels: Vec<_> = variants.pairs().iter().filter_map(GeneVariantPair::level).collect();
    assert_eq!(levels, vec![VariantLevel::Protein, VariantLevel::CodingDna]);
}

#[test]
fn test_normalization_is_idempotent() {
    let once: FunctionalVariants =
        serde_json::from_str(include_str!("resources/functional_variants.json")).unwrap();
    let twice = FunctionalVariants::normalize(once.clone().into_pairs());
    assert_eq!(once, twice);
}

#[test]
fn test_empty_list_is_accepted() {
    let variants: FunctionalVariants = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(variants.is_empty());

    let (variants, summary) = FunctionalVariants::normalize_with_summary(Vec::new());
    assert!(variants.is_empty());
    assert_eq!(summary.total(), 0);
}
