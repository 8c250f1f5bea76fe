//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Get the shared fixtures directory path.
fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_settings_schema() -> schemars::Schema {
    schema_for!(labelguard_settings::SettingsDocumentV1)
}

fn generate_validation_response_schema() -> schemars::Schema {
    schema_for!(labelguard_types::ValidationResponse)
}

fn generate_settings_validation_response_schema() -> schemars::Schema {
    schema_for!(labelguard_types::SettingsValidationResponse)
}

fn generate_protocol_version_schema() -> schemars::Schema {
    schema_for!(labelguard_types::ProtocolVersionResponse)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "labelguard.settings.v1.json",
            generate: generate_settings_schema,
        },
        SchemaSpec {
            filename: "labelguard.validation-response.v1.json",
            generate: generate_validation_response_schema,
        },
        SchemaSpec {
            filename: "labelguard.settings-validation-response.v1.json",
            generate: generate_settings_validation_response_schema,
        },
        SchemaSpec {
            filename: "labelguard.protocol-version.v1.json",
            generate: generate_protocol_version_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

fn json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Validate the shared fixtures against the generated schemas.
///
/// This checks:
/// 1. every settings fixture matches the settings document schema
/// 2. every case's embedded settings match the settings document schema
/// 3. every case's expected response matches the validation response schema
fn conform() -> anyhow::Result<()> {
    let settings_schema = compile(generate_settings_schema())?;
    let response_schema = compile(generate_validation_response_schema())?;
    println!("✓ schemas compile");

    let mut checked = 0;
    let mut errors = Vec::new();

    for path in json_files(&fixtures_dir().join("settings"))? {
        let value = read_json(&path)?;
        for err in settings_schema.iter_errors(&value) {
            errors.push(format!("{}: {}", path.display(), err));
        }
        checked += 1;
    }

    let cases_dir = fixtures_dir().join("cases");
    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&cases_dir)
        .with_context(|| format!("Failed to read {}", cases_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();

    for case_dir in case_dirs {
        let expected_path = case_dir.join("expected.response.json");
        let expected = read_json(&expected_path)?;
        for err in response_schema.iter_errors(&expected) {
            errors.push(format!("{}: {}", expected_path.display(), err));
        }
        checked += 1;

        // Malformed request fixtures are not JSON by construction.
        let request_path = case_dir.join("request.json");
        let Ok(request) = read_json(&request_path) else {
            continue;
        };
        if let Some(settings) = request.get("settings").filter(|s| !s.is_null()) {
            for err in settings_schema.iter_errors(settings) {
                errors.push(format!("{}: settings: {}", request_path.display(), err));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} fixtures conform", checked);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixtures against the generated schemas");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
