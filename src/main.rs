//! vtl-validator CLI
//!
//! Demonstration front end for the vtl-validator library.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use vtl_validator::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("vtl-validator");
    let (config_path, rest) = split_option(&args[1.min(args.len())..], "--config")?;
    let config = match config_path {
        Some(path) => TransformerConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TransformerConfig::default(),
    };

    let Some(command) = rest.first() else {
        print_usage(program);
        return Ok(());
    };

    match command.as_str() {
        "list" => list_validators(),
        "info" => {
            let Some(name) = rest.get(1) else {
                bail!("Please specify a validator type or filter name");
            };
            validator_info(name)?;
        }
        "sdl" => print!("{}", directive_definition()),
        "snippet" => {
            if rest.len() < 3 {
                bail!("Usage: {} snippet <field> <FieldType> name=value...", program);
            }
            print_snippet(&config, &rest[1], &rest[2], &rest[3..])?;
        }
        "apply" => {
            let (out_dir, rest) = split_option(&rest[1..], "--out")?;
            if rest.len() < 2 {
                bail!(
                    "Usage: {} apply <schema.json> <resolvers.json> [--out <dir>]",
                    program
                );
            }
            apply(&config, Path::new(&rest[0]), Path::new(&rest[1]), out_dir.as_deref())?;
        }
        "help" | "--help" | "-h" => print_usage(program),
        other => {
            print_usage(program);
            bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    println!("🛡️  vtl-validator v{}", vtl_validator::VERSION);
    println!();
    println!("Usage: {} [--config <file.toml>] <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  list                                  List validator types and filters");
    println!("  info <name>                           Show details about a type or filter");
    println!("  sdl                                   Print the @validator declaration");
    println!("  snippet <field> <Type> name=value...  Generate the snippet for one field");
    println!("  apply <schema.json> <resolvers.json>  Augment resolvers and print templates");
    println!("  help                                  Show this help message");
    println!();
    println!("Snippet arguments:");
    println!("  type=required                 Scalar argument");
    println!("  arrayString=[asd,123]         List argument");
    println!();
    println!("Apply options:");
    println!("  --out <dir>   Write augmented templates as Mutation.<field>.req.vtl files");
}

/// Remove `name <value>` from an argument list.
fn split_option(args: &[String], name: &str) -> Result<(Option<PathBuf>, Vec<String>)> {
    let mut value = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == name {
            match iter.next() {
                Some(v) => value = Some(PathBuf::from(v)),
                None => bail!("{} requires a value", name),
            }
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((value, rest))
}

fn list_validators() {
    println!("Validator types ({} total):", ValidatorName::all().len());
    for kind in ValidatorName::all() {
        println!("  • {:<10} {}", kind.graphql_name(), kind.description());
    }
    println!();
    println!("Filters ({} total):", FilterName::all().len());
    for filter in FilterName::all() {
        println!("  • {:<10} {}", filter.graphql_name(), filter.description());
    }
}

fn validator_info(name: &str) -> Result<()> {
    let field_types = [FieldType::String, FieldType::Int, FieldType::Float, FieldType::Boolean];

    if let Ok(kind) = name.parse::<ValidatorName>() {
        println!("Validator type: {}", kind);
        println!("  {}", kind.description());
        println!();
        print_supported(kind.supported_field_types());
        for ty in &field_types {
            if let Some(param) = kind.required_parameter(ty) {
                println!("  {} field requires: {}", ty, param);
            }
        }
        return Ok(());
    }

    if let Ok(filter) = name.parse::<FilterName>() {
        println!("Filter: {}", filter);
        println!("  {}", filter.description());
        println!();
        print_supported(filter.supported_field_types());
        for ty in &field_types {
            if let Some(param) = filter.required_parameter(ty) {
                println!("  {} field requires: {}", ty, param);
            }
        }
        return Ok(());
    }

    bail!("Unknown validator type or filter: {} (use 'list' to see them)", name)
}

fn print_supported(types: Option<&[&str]>) {
    match types {
        Some(names) => println!("Field types: {}", names.join(", ")),
        None => println!("Field types: any"),
    }
}

fn print_snippet(config: &TransformerConfig, field: &str, field_type: &str, pairs: &[String]) -> Result<()> {
    let mut args = ValidatorArguments::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Expected name=value, got '{}'", pair);
        };
        args.insert(name, &parse_argument(value));
    }

    let snippet = generate_with_config(field, &FieldType::from(field_type), &args, config)?;
    println!("{}", snippet);
    Ok(())
}

/// `[a,b]` becomes a list of strings; anything else a single string.
fn parse_argument(text: &str) -> ArgumentValue {
    match text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        Some("") => ArgumentValue::List(Vec::new()),
        Some(inner) => ArgumentValue::List(
            inner
                .split(',')
                .map(|member| ArgumentValue::from(member.trim()))
                .collect(),
        ),
        None => ArgumentValue::from(text),
    }
}

fn apply(config: &TransformerConfig, schema_path: &Path, store_path: &Path, out_dir: Option<&Path>) -> Result<()> {
    let json = std::fs::read_to_string(schema_path)
        .with_context(|| format!("reading schema {}", schema_path.display()))?;
    let document = SchemaDocument::from_json(&json)
        .with_context(|| format!("parsing schema {}", schema_path.display()))?;
    let mut store = InMemoryResolverStore::from_file(store_path)
        .with_context(|| format!("loading resolvers {}", store_path.display()))?;

    let transformer = ValidatorTransformer::with_config(config.clone());
    let report = transformer.apply(&document, &mut store)?;

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let ids = ResolverIds::from_config(config);
    for parent in &document.types {
        for &operation in MutationOperation::all() {
            let id = ids.id(operation, &parent.name);
            if !report.augmented.contains(&id) {
                continue;
            }
            let Some(resource) = store.resolver(&id) else {
                continue;
            };

            let file_name = resolver_file_name(operation, &parent.name);
            match out_dir {
                Some(dir) => {
                    let path = dir.join(&file_name);
                    std::fs::write(&path, &resource.request_mapping_template)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("📝 {} -> {}", id, path.display());
                }
                None => {
                    println!("==> {} ({})", file_name, id);
                    println!("{}", resource.request_mapping_template);
                    println!();
                }
            }
        }
    }

    println!(
        "✅ {} template(s) augmented, {} missing resolver(s) skipped",
        report.augmented.len(),
        report.skipped.len()
    );
    Ok(())
}
