/// Payload field names, as emitted by the extraction step.
/// These are the wire keys of a research article and the keys of the rule tables.

// Identifier fields
pub const ARTICLE: &str = "articulo";
pub const DOI: &str = "doi";
pub const DISEASE: &str = "disease";
pub const GENE: &str = "gene";
pub const VARIANT_NAME: &str = "variant_name";
pub const ASSAY_TYPE: &str = "type";
pub const MODEL_SYSTEM: &str = "modelSystem";
pub const EXPERIMENTAL_METHOD: &str = "experimentalMethod";
pub const OUTCOME_EVALUATED: &str = "outcomeEvaluated";

// Count fields
pub const POSITIVE_CONTROLS: &str = "positiveControls";
pub const NEGATIVE_CONTROLS: &str = "negativeControls";
pub const PATHOGENIC_VARIANTS: &str = "pathogenicVariants";
pub const PATHOGENIC_ABNORMAL_VARIANTS: &str = "pathogenicAbnormalVariants";
pub const TOTAL_VARIANTS: &str = "totalVariants";
pub const REPLICATES: &str = "replicates";

// Free-text fields
pub const STATISTICAL_ANALYSIS: &str = "statisticalAnalysis";
pub const VALIDATION_PROCESS: &str = "validationProcess";
pub const ROBUSTNESS_DATA: &str = "robustnessData";
pub const FUNCTIONAL_IMPACT: &str = "functionalImpact";

// Boolean fields
pub const REPRODUCIBLE: &str = "reproducible";

/// Every text-valued field of an article, in payload order
pub const TEXT_FIELDS: [&str; 13] = [
    ARTICLE,
    DOI,
    DISEASE,
    GENE,
    VARIANT_NAME,
    ASSAY_TYPE,
    MODEL_SYSTEM,
    EXPERIMENTAL_METHOD,
    OUTCOME_EVALUATED,
    STATISTICAL_ANALYSIS,
    VALIDATION_PROCESS,
    ROBUSTNESS_DATA,
    FUNCTIONAL_IMPACT,
];

/// Every count-valued field of an article, in payload order
pub const COUNT_FIELDS: [&str; 6] = [
    POSITIVE_CONTROLS,
    NEGATIVE_CONTROLS,
    PATHOGENIC_VARIANTS,
    PATHOGENIC_ABNORMAL_VARIANTS,
    TOTAL_VARIANTS,
    REPLICATES,
];

/// Resolver prepended to bare DOIs
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Nomenclature prefixes a variant description may start with (protein, RNA, coding DNA)
pub const ALLOWED_VARIANT_PREFIXES: [&str; 3] = ["p.", "r.", "c."];

/// Version tag stamped on every emitted record
pub const RULE_VERSION: &str = "v1.0.0";

// Defaults for the application shell
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "EVIDENCE_VALIDATOR_CONFIG";
pub const ONTOLOGY_POLICY_ENV: &str = "EVIDENCE_VALIDATOR_ONTOLOGY_POLICY";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILE: &str = "evidence_validator.log";
pub const DEFAULT_LOG_DIRECTIVE: &str = "evidence_validator=info";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const VALIDATED_OUTPUT_FILE: &str = "validated.ndjson";
pub const REJECTED_OUTPUT_FILE: &str = "rejected.ndjson";
