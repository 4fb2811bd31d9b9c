use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swag2js_core::config::{self, CONFIG_FILE_NAME, Swag2JsConfig};
use swag2js_core::ir::ClientSpec;
use swag2js_core::parse::{self, spec::SwaggerSpec};
use swag2js_core::transform::{self, TransformOptions};
use swag2js_core::{CodeGenerator, GeneratedFile};
use swag2js_flow::{FlowClientGenerator, FlowConfig, PackageOptions};

#[derive(Parser)]
#[command(
    name = "swag2js",
    about = "Swagger 2.0 to Flow-typed JavaScript client generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a client package from a Swagger document
    Generate(GenerateArgs),

    /// Validate a Swagger document
    Validate {
        /// Path to the Swagger document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Summarize the definitions and operations of a Swagger document
    Inspect {
        /// Path to the Swagger document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new swag2js configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Flags for `generate`; each one overrides the matching config value.
#[derive(Args, Default)]
struct GenerateArgs {
    /// Path to the Swagger document (YAML or JSON)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package name written to package.json
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Package version written to package.json
    #[arg(short = 'v', long = "package-version")]
    package_version: Option<String>,

    /// Replace the document's basePath
    #[arg(short = 'b', long)]
    base_path: Option<String>,

    /// Replace the scheme://host prefix of every URL
    #[arg(long)]
    base_url: Option<String>,

    /// Remove the output directory if it already exists
    #[arg(short, long)]
    force: bool,
}

impl GenerateArgs {
    fn apply(self, mut cfg: Swag2JsConfig) -> Swag2JsConfig {
        if let Some(input) = self.input {
            cfg.input = input.display().to_string();
        }
        if let Some(output) = self.output {
            cfg.output = output.display().to_string();
        }
        if self.name.is_some() {
            cfg.package.name = self.name;
        }
        if self.package_version.is_some() {
            cfg.package.version = self.package_version;
        }
        if self.base_path.is_some() {
            cfg.base_path = self.base_path;
        }
        if self.base_url.is_some() {
            cfg.base_url = self.base_url;
        }
        cfg.force |= self.force;
        cfg
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => cmd_generate(args),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swag2js", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<Swag2JsConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and parse a document, picking the parser from the file extension.
fn read_document(path: &Path) -> Result<SwaggerSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let spec = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse::from_json(&content)?,
        Some("yaml" | "yml") => parse::from_yaml(&content)?,
        _ => anyhow::bail!(
            "cannot tell the format of {}: expected a .json, .yaml or .yml file",
            path.display()
        ),
    };
    Ok(spec)
}

fn load_client(path: &Path, options: &TransformOptions) -> Result<ClientSpec> {
    let spec = read_document(path)?;
    let client = transform::transform_with_options(&spec, options)
        .with_context(|| format!("failed to convert {}", path.display()))?;
    Ok(client)
}

/// Make sure `dir` exists and is empty. An existing directory is only
/// removed when `force` is set.
fn prepare_output_dir(dir: &Path, force: bool) -> Result<()> {
    if dir.exists() {
        if !force {
            anyhow::bail!(
                "{} already exists. Use --force to overwrite.",
                dir.display()
            );
        }
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove {}", dir.display()))?;
        log::info!("removed existing {}", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let cfg = args.apply(try_load_config()?.unwrap_or_default());
    let input = PathBuf::from(&cfg.input);
    let client = load_client(&input, &cfg.transform_options())?;

    let flow_config = FlowConfig {
        package: Some(PackageOptions {
            name: cfg.package.name.clone(),
            version: cfg.package.version.clone(),
            description: cfg.package.description.clone(),
        }),
    };
    let files = FlowClientGenerator.generate(&client, &flow_config)?;

    let output_dir = PathBuf::from(&cfg.output);
    prepare_output_dir(&output_dir, cfg.force)?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files for {} operations in {}",
        files.len(),
        client.operations.len(),
        output_dir.display()
    );
    if !client.warnings.is_empty() {
        eprintln!("{} warnings, see the log above", client.warnings.len());
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let parsed = read_document(input)?;

    eprintln!(
        "Valid Swagger {} document: {}",
        parsed.swagger, parsed.info.title
    );
    eprintln!("  Version: {}", parsed.info.version);
    eprintln!(
        "  Paths: {}",
        parsed.paths.values().filter(|e| e.item().is_some()).count()
    );
    eprintln!("  Definitions: {}", parsed.definitions.len());

    // Duplicate identifiers and placeholder mismatches only surface here
    let client = transform::transform(&parsed)?;
    eprintln!("  Operations: {}", client.operations.len());
    eprintln!("  Warnings: {}", client.warnings.len());
    for warning in &client.warnings {
        eprintln!("    - {warning}");
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let client = load_client(input, &TransformOptions::default())?;
    let summary = build_inspect_summary(&client);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(client: &ClientSpec) -> serde_json::Value {
    let definitions: Vec<serde_json::Value> = client
        .definitions
        .iter()
        .map(|d| {
            serde_json::json!({
                "name": d.name,
                "imports": d.imports,
            })
        })
        .collect();

    let operations: Vec<serde_json::Value> = client
        .operations
        .iter()
        .map(|op| {
            serde_json::json!({
                "name": op.name,
                "function": op.function_name,
                "method": op.method.as_str(),
                "path": op.path,
                "type_imports": op.type_imports,
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": client.info.title,
            "version": client.info.version,
        },
        "hostname": client.hostname,
        "definitions": definitions,
        "operations": operations,
        "warnings": client.warnings.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"
swagger: "2.0"
info: {title: Todo, version: "1.0"}
host: todo.test
schemes: [https]
paths:
  /todos/{id}:
    get:
      operationId: getTodo
      summary: Fetch one todo
      parameters:
        - {name: id, in: path, required: true, type: integer}
      responses:
        "200":
          description: ok
          schema: {$ref: "#/definitions/Todo"}
definitions:
  Todo:
    type: object
    properties:
      title: {type: string}
"##;

    #[test]
    fn test_cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let args = GenerateArgs {
            output: Some(PathBuf::from("out")),
            name: Some("todo-client".to_string()),
            base_url: Some("http://localhost".to_string()),
            ..GenerateArgs::default()
        };
        let mut cfg = Swag2JsConfig::default();
        cfg.package.version = Some("3.0.0".to_string());
        let cfg = args.apply(cfg);
        assert_eq!(cfg.input, "swagger.yaml");
        assert_eq!(cfg.output, "out");
        assert_eq!(cfg.package.name.as_deref(), Some("todo-client"));
        assert_eq!(cfg.package.version.as_deref(), Some("3.0.0"));
        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost"));
        assert!(!cfg.force);
    }

    #[test]
    fn test_read_document_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("api.yml");
        fs::write(&yaml, DOCUMENT).unwrap();
        assert_eq!(read_document(&yaml).unwrap().info.title, "Todo");

        let json = dir.path().join("api.json");
        fs::write(&json, r#"{"swagger": "2.0", "info": {"title": "J", "version": "1"}}"#).unwrap();
        assert_eq!(read_document(&json).unwrap().info.title, "J");

        let txt = dir.path().join("api.txt");
        fs::write(&txt, DOCUMENT).unwrap();
        assert!(read_document(&txt).is_err());
    }

    #[test]
    fn test_prepare_output_dir_requires_force() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("client");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.js"), "old").unwrap();

        assert!(prepare_output_dir(&out, false).is_err());
        assert!(out.join("stale.js").exists());

        prepare_output_dir(&out, true).unwrap();
        assert!(out.exists());
        assert!(!out.join("stale.js").exists());
    }

    #[test]
    fn test_generated_files_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("todo.yaml");
        fs::write(&input, DOCUMENT).unwrap();

        let client = load_client(&input, &TransformOptions::default()).unwrap();
        let files = FlowClientGenerator
            .generate(
                &client,
                &FlowConfig {
                    package: Some(PackageOptions::default()),
                },
            )
            .unwrap();

        let out = dir.path().join("generated");
        prepare_output_dir(&out, false).unwrap();
        write_files(&out, &files).unwrap();

        let operation = fs::read_to_string(out.join("src/getTodo.js")).unwrap();
        assert!(operation.contains("url: 'https://todo.test' + `/todos/${id}`,"));
        assert!(out.join("types/Todo.js").exists());
        assert!(out.join("helpers/makeFormData.js").exists());
        assert!(out.join("package.json").exists());
        assert!(out.join("index.js").exists());
    }

    #[test]
    fn test_inspect_summary() {
        let spec = parse::from_yaml(DOCUMENT).unwrap();
        let client = transform::transform(&spec).unwrap();
        let summary = build_inspect_summary(&client);
        assert_eq!(summary["info"]["title"], "Todo");
        assert_eq!(summary["hostname"], "https://todo.test");
        assert_eq!(summary["operations"][0]["name"], "getTodo");
        assert_eq!(summary["operations"][0]["method"], "GET");
        assert_eq!(summary["operations"][0]["type_imports"][0], "Todo");
        assert_eq!(summary["definitions"][0]["name"], "Todo");
        assert!(summary["warnings"].as_array().unwrap().is_empty());
    }
}
