use serde_json::{Map, Value};

use crate::error::ReportError;
use crate::report::summary::{ResultRow, SuiteSummary, Summary};

// ============================================================================
// Report model — validated, read-only view over a report document
// ============================================================================

/// A flat key-value section (metadata, target, an asset, an environment).
pub type FlatMap = Map<String, Value>;

/// Named entries in document order.
pub type Named<T> = Vec<(String, T)>;

/// Report name used before one is known (e.g. the empty side of a merge).
pub const UNDEFINED_REPORT_NAME: &str = "Not-defined";

pub const STATUS_PASS: &str = "PASS";
pub const STATUS_FAIL: &str = "FAIL";

/// Serialization format of a report document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` is YAML, anything else JSON.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }
}

/// The `test-config` section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestConfig {
    /// Named test assets (`test-config.test-assets`)
    pub test_assets: Named<FlatMap>,

    /// Any other `test-config` keys, kept for round-tripping but never rendered
    pub extra: FlatMap,
}

/// A named group of test results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestSuite {
    pub metadata: FlatMap,
    pub test_results: Named<TestResult>,
}

impl TestSuite {
    pub fn summary(&self) -> Summary {
        Summary::from_statuses(self.test_results.iter().map(|(_, r)| r.status.as_str()))
    }
}

/// One test result inside a suite.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Free-form status; `PASS` and `FAIL` are the counted values
    pub status: String,
    pub metadata: FlatMap,
}

impl TestResult {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            metadata: FlatMap::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// A parsed and validated report document.
///
/// The document is a mapping with a single key, the report name, whose value
/// holds `metadata`, `target`, `test-config.test-assets`, `test-environments`
/// and `test-suites`. Every section keeps document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    name: String,
    metadata: FlatMap,
    target: FlatMap,
    test_config: TestConfig,
    test_environments: Named<FlatMap>,
    test_suites: Named<TestSuite>,
}

impl Default for ReportModel {
    fn default() -> Self {
        Self::new(UNDEFINED_REPORT_NAME)
    }
}

impl ReportModel {
    /// An empty report with every section present.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            metadata: FlatMap::new(),
            target: FlatMap::new(),
            test_config: TestConfig::default(),
            test_environments: Vec::new(),
            test_suites: Vec::new(),
        }
    }

    /// Parse a document in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, ReportError> {
        match format {
            DocumentFormat::Json => Self::from_json(text),
            DocumentFormat::Yaml => Self::from_yaml(text),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ReportError> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed document.
    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        let root = match value {
            Value::Object(map) => map,
            _ => return Err(ReportError::NotSingleRoot { found: 0 }),
        };
        if root.len() != 1 {
            return Err(ReportError::NotSingleRoot { found: root.len() });
        }
        let Some((name, body)) = root.into_iter().next() else {
            return Err(ReportError::NotSingleRoot { found: 0 });
        };
        let body = as_object(&body, &name)?;

        let metadata = object_field(body, "metadata", &name)?.clone();
        let target = object_field(body, "target", &name)?.clone();

        let config_path = join(&name, "test-config");
        let config = object_field(body, "test-config", &name)?;
        let test_assets = named_sections(
            object_field(config, "test-assets", &config_path)?,
            &join(&config_path, "test-assets"),
        )?;
        let extra = config
            .iter()
            .filter(|(k, _)| k.as_str() != "test-assets")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let test_environments = named_sections(
            object_field(body, "test-environments", &name)?,
            &join(&name, "test-environments"),
        )?;

        let suites_path = join(&name, "test-suites");
        let mut test_suites = Vec::new();
        for (suite_name, suite) in object_field(body, "test-suites", &name)? {
            let suite_path = join(&suites_path, suite_name);
            test_suites.push((suite_name.clone(), parse_suite(suite, &suite_path)?));
        }

        Ok(Self {
            name,
            metadata,
            target,
            test_config: TestConfig { test_assets, extra },
            test_environments,
            test_suites,
        })
    }

    // ------------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &FlatMap {
        &self.metadata
    }

    pub fn target(&self) -> &FlatMap {
        &self.target
    }

    pub fn test_config(&self) -> &TestConfig {
        &self.test_config
    }

    pub fn test_assets(&self) -> &[(String, FlatMap)] {
        &self.test_config.test_assets
    }

    pub fn test_environments(&self) -> &[(String, FlatMap)] {
        &self.test_environments
    }

    pub fn test_suites(&self) -> &[(String, TestSuite)] {
        &self.test_suites
    }

    pub fn suite(&self, name: &str) -> Option<&TestSuite> {
        self.test_suites
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Flatten every suite into table rows and tally its statuses.
    ///
    /// Each row is `name`, `status`, then the result's metadata fields in
    /// order. Suites come back in document order.
    pub fn compute_suite_summaries(&self) -> Vec<SuiteSummary<'_>> {
        self.test_suites
            .iter()
            .map(|(name, suite)| {
                let rows: Vec<ResultRow> = suite
                    .test_results
                    .iter()
                    .map(|(result_name, result)| ResultRow::from_result(result_name, result))
                    .collect();
                SuiteSummary {
                    name,
                    rows,
                    summary: suite.summary(),
                    metadata: &suite.metadata,
                }
            })
            .collect()
    }

    /// Pass/fail/total across every suite.
    pub fn overall_summary(&self) -> Summary {
        let mut total = Summary::default();
        for (_, suite) in &self.test_suites {
            total += suite.summary();
        }
        total
    }

    // ------------------------------------------------------------------------
    // Building and merging
    // ------------------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Add or replace a suite, keeping its position when it already exists.
    pub fn upsert_suite(&mut self, name: &str, suite: TestSuite) {
        upsert(&mut self.test_suites, name, suite);
    }

    /// Merge `other` into this report.
    ///
    /// An undefined report name is taken from `other`. Metadata, target,
    /// test assets, environments and suites are updated key by key: `other`
    /// wins on common keys, existing keys keep their position and new keys
    /// are appended. Returns a warning when the report names disagree.
    pub fn merge_into(&mut self, other: ReportModel) -> Option<String> {
        if self.name.is_empty() || self.name == UNDEFINED_REPORT_NAME {
            self.name = other.name.clone();
        }
        let warning = (self.name != other.name).then(|| {
            format!(
                "Report name '{}' does not match original report name '{}'",
                other.name, self.name
            )
        });

        self.metadata.extend(other.metadata);
        self.target.extend(other.target);
        self.test_config.extra.extend(other.test_config.extra);
        for (name, asset) in other.test_config.test_assets {
            upsert(&mut self.test_config.test_assets, &name, asset);
        }
        for (name, env) in other.test_environments {
            upsert(&mut self.test_environments, &name, env);
        }
        for (name, suite) in other.test_suites {
            upsert(&mut self.test_suites, &name, suite);
        }

        warning
    }

    // ------------------------------------------------------------------------
    // Dumping
    // ------------------------------------------------------------------------

    /// The report in its document shape: `{ name: { metadata, ... } }`.
    pub fn to_value(&self) -> Value {
        let mut config = FlatMap::new();
        config.insert("test-assets".into(), named_to_value(&self.test_config.test_assets, |a| Value::Object(a.clone())));
        config.extend(self.test_config.extra.clone());

        let mut body = FlatMap::new();
        body.insert("metadata".into(), Value::Object(self.metadata.clone()));
        body.insert(
            "test-environments".into(),
            named_to_value(&self.test_environments, |e| Value::Object(e.clone())),
        );
        body.insert("test-config".into(), Value::Object(config));
        body.insert("target".into(), Value::Object(self.target.clone()));
        body.insert("test-suites".into(), named_to_value(&self.test_suites, suite_to_value));

        let mut root = FlatMap::new();
        root.insert(self.name.clone(), Value::Object(body));
        Value::Object(root)
    }

    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ReportError> {
        Ok(serde_yaml::to_string(&self.to_value())?)
    }

    pub fn to_format_string(&self, format: DocumentFormat) -> Result<String, ReportError> {
        match format {
            DocumentFormat::Json => self.to_json_string(),
            DocumentFormat::Yaml => self.to_yaml_string(),
        }
    }
}

/// Display form of a field value: strings verbatim, everything else as JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

fn join(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a FlatMap, ReportError> {
    value.as_object().ok_or_else(|| ReportError::WrongType {
        path: path.to_string(),
        expected: "a mapping",
    })
}

fn object_field<'a>(obj: &'a FlatMap, key: &str, parent: &str) -> Result<&'a FlatMap, ReportError> {
    let path = join(parent, key);
    let value = obj
        .get(key)
        .ok_or_else(|| ReportError::MissingField { path: path.clone() })?;
    as_object(value, &path)
}

fn named_sections(obj: &FlatMap, path: &str) -> Result<Named<FlatMap>, ReportError> {
    obj.iter()
        .map(|(name, section)| {
            let section = as_object(section, &join(path, name))?;
            Ok::<_, ReportError>((name.clone(), section.clone()))
        })
        .collect()
}

fn parse_suite(value: &Value, path: &str) -> Result<TestSuite, ReportError> {
    let suite = as_object(value, path)?;
    let metadata = object_field(suite, "metadata", path)?.clone();

    let results_path = join(path, "test-results");
    let mut test_results = Vec::new();
    for (result_name, result) in object_field(suite, "test-results", path)? {
        let result_path = join(&results_path, result_name);
        let result = as_object(result, &result_path)?;
        let status = result
            .get("status")
            .ok_or_else(|| ReportError::MissingField {
                path: join(&result_path, "status"),
            })?;
        if status.is_object() || status.is_array() {
            return Err(ReportError::WrongType {
                path: join(&result_path, "status"),
                expected: "a scalar",
            });
        }
        let metadata = object_field(result, "metadata", &result_path)?.clone();
        test_results.push((
            result_name.clone(),
            TestResult {
                status: value_text(status),
                metadata,
            },
        ));
    }

    Ok(TestSuite {
        metadata,
        test_results,
    })
}

fn upsert<T>(entries: &mut Named<T>, name: &str, value: T) {
    match entries.iter_mut().find(|(n, _)| n == name) {
        Some(slot) => slot.1 = value,
        None => entries.push((name.to_string(), value)),
    }
}

fn named_to_value<T>(entries: &Named<T>, f: impl Fn(&T) -> Value) -> Value {
    Value::Object(entries.iter().map(|(n, v)| (n.clone(), f(v))).collect())
}

fn suite_to_value(suite: &TestSuite) -> Value {
    let results = named_to_value(&suite.test_results, |r| {
        let mut obj = FlatMap::new();
        obj.insert("status".into(), Value::String(r.status.clone()));
        obj.insert("metadata".into(), Value::Object(r.metadata.clone()));
        Value::Object(obj)
    });
    let mut obj = FlatMap::new();
    obj.insert("test-results".into(), results);
    obj.insert("metadata".into(), Value::Object(suite.metadata.clone()));
    Value::Object(obj)
}
