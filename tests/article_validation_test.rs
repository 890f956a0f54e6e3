use anyhow::Result;
use evidence_validator::app::ValidateArticlesUseCase;
use evidence_validator::constants;
use evidence_validator::infra::NdjsonFileOutputAdapter;
use evidence_validator::{
    ArticleValidator, ConsistencyRule, RejectionKind, ResearchArticle, ResearchData,
    ValidationError,
};
use tempfile::tempdir;

fn mixed_batch() -> ResearchData {
    ResearchData::from_json_str(include_str!("resources/research_data_mixed.json")).unwrap()
}

#[test]
fn test_valid_payload_is_normalized() {
    let batch = ResearchData::from_json_str(include_str!("resources/research_data_valid.json")).unwrap();
    assert_eq!(batch.len(), 1);

    let article = ArticleValidator::default()
        .validate(batch.data.into_iter().next().unwrap())
        .unwrap();

    assert_eq!(article.doi(), Some("https://doi.org/10.1038/s41586-018-0461-z"));
    assert_eq!(article.assay_type(), Some("OBI:0000854"));
    assert_eq!(article.fields().replicates.copied(), Some(2));
    assert_eq!(article.fields().gene.pages, Some(vec![1]));
}

#[test]
fn test_each_article_of_a_batch_is_judged_alone() {
    let validator = ArticleValidator::default();
    let results: Vec<Result<ResearchArticle, ValidationError>> = mixed_batch()
        .data
        .into_iter()
        .map(|fields| validator.validate(fields))
        .collect();

    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(ValidationError::CrossFieldConsistency {
            rule: ConsistencyRule::ReproducibilityRequiresReplicates,
            ..
        })
    ));
    assert!(matches!(results[2], Err(ValidationError::EmptyValue { ref field }) if field == "gene"));
    assert!(matches!(results[3], Err(ValidationError::InvalidDoiFormat { .. })));
    assert!(results[4].is_ok(), "all-null article passes vacuously");
}

#[test]
fn test_ill_typed_article_fails_the_whole_batch() {
    let mut payload: serde_json::Value =
        serde_json::from_str(include_str!("resources/research_data_mixed.json")).unwrap();
    payload["data"][4]["totalVariants"]["value"] = serde_json::json!("many");

    let err = ResearchData::from_json_str(&payload.to_string()).unwrap_err();
    assert!(err.to_string().contains("invalid type"), "{err}");
}

#[test]
fn test_misspelled_batch_key_is_not_read_as_an_article() {
    let mut payload: serde_json::Value =
        serde_json::from_str(include_str!("resources/research_data_valid.json")).unwrap();
    let articles = payload.as_object_mut().unwrap().remove("data").unwrap();
    payload["date"] = articles;

    assert!(ResearchData::from_json_str(&payload.to_string()).is_err());
}

#[test]
fn test_strict_policy_rejects_loose_assay_type() {
    let batch = ResearchData::from_json_str(include_str!("resources/research_data_valid.json")).unwrap();
    let err = ArticleValidator::strict()
        .validate(batch.data.into_iter().next().unwrap())
        .unwrap_err();

    assert_eq!(err.kind(), RejectionKind::InvalidOntologyId);
    assert_eq!(err.field(), Some(constants::ASSAY_TYPE));
}

#[test]
fn test_validated_article_round_trips_through_json() {
    let batch = ResearchData::from_json_str(include_str!("resources/research_data_valid.json")).unwrap();
    let article = ArticleValidator::default()
        .validate(batch.data.into_iter().next().unwrap())
        .unwrap();

    let json = serde_json::to_string(&article).unwrap();
    let reread: ResearchArticle = serde_json::from_str(&json).unwrap();
    assert_eq!(reread, article);
}

#[tokio::test]
async fn test_use_case_writes_ndjson_outputs() -> Result<()> {
    let temp_dir = tempdir()?;
    let validated_path = temp_dir.path().join(constants::VALIDATED_OUTPUT_FILE);
    let rejected_path = temp_dir.path().join(constants::REJECTED_OUTPUT_FILE);

    let use_case = ValidateArticlesUseCase::with_default_validator(
        Box::new(NdjsonFileOutputAdapter::new(validated_path.to_str().unwrap())?),
        Box::new(NdjsonFileOutputAdapter::new(rejected_path.to_str().unwrap())?),
    );

    let report = use_case.validate_batch("findlay2018.pdf", mixed_batch()).await?;
    assert_eq!(report.total, 5);
    assert_eq!(report.accepted, 2);
    assert_eq!(report.rejected, 3);

    let kinds: Vec<_> = report.rejections.iter().map(|r| r.rejection.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RejectionKind::CrossFieldConsistency,
            RejectionKind::EmptyValue,
            RejectionKind::InvalidDoiFormat
        ]
    );

    let validated = std::fs::read_to_string(&validated_path)?;
    assert_eq!(validated.lines().count(), 2);
    let first: serde_json::Value = serde_json::from_str(validated.lines().next().unwrap())?;
    assert_eq!(first["source"], "findlay2018.pdf");
    assert_eq!(first["article"]["type"]["value"], "OBI:0000854");

    let rejected = std::fs::read_to_string(&rejected_path)?;
    assert_eq!(rejected.lines().count(), 3);

    Ok(())
}
