use crate::{
    api::Api,
    catalog::{CatalogFilter, CatalogRecord, CatalogService, CatalogSort, slugify},
    error::Error as FretboardError,
    storage::KeyValueStorage,
};
use anyhow::{anyhow, bail};
use clap::{
    Arg, ArgAction, ArgMatches, Command, crate_authors, crate_description, crate_version,
    value_parser,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::sync::Arc;

/// Catalogs that can be passed as `<CATALOG>` argument.
const CATALOGS: [&str; 3] = ["tutors", "courses", "products"];

/// Builds the command line interface definition.
pub fn build_cli() -> Command {
    let catalog_arg = Arg::new("CATALOG")
        .required(true)
        .value_parser(CATALOGS)
        .help("Catalog to work with.");
    let id_arg = Arg::new("ID").required(true).help("Identifier of the record.");
    let payload_arg = Arg::new("PAYLOAD")
        .required(true)
        .help("Record fields as a JSON object.");

    Command::new("Fretboard catalog services")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("CONFIG")
                .env("FRETBOARD_CONFIG")
                .short('c')
                .long("config")
                .global(true)
                .default_value("fretboard.toml")
                .help("Path to the application configuration file."),
        )
        .arg(
            Arg::new("EPHEMERAL")
                .long("ephemeral")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Keeps catalogs in memory only, nothing is persisted between runs."),
        )
        .subcommand(
            Command::new("list")
                .about("Lists catalog records matching the filter.")
                .arg(catalog_arg.clone())
                .arg(
                    Arg::new("SEARCH")
                        .long("search")
                        .help("Case-insensitive text to search for in names and descriptions."),
                )
                .arg(
                    Arg::new("FILTER")
                        .long("filter")
                        .action(ArgAction::Append)
                        .value_name("DIMENSION=VALUE")
                        .help("Keeps records with the value in the dimension, e.g. `category=guitarras`."),
                )
                .arg(
                    Arg::new("FLAG")
                        .long("flag")
                        .action(ArgAction::Append)
                        .help("Keeps records with the flag set, e.g. `featured`."),
                )
                .arg(
                    Arg::new("MIN_PRICE")
                        .long("min-price")
                        .value_parser(value_parser!(f64))
                        .help("Inclusive lower price bound."),
                )
                .arg(
                    Arg::new("MAX_PRICE")
                        .long("max-price")
                        .value_parser(value_parser!(f64))
                        .help("Inclusive upper price bound."),
                )
                .arg(
                    Arg::new("SORT")
                        .long("sort")
                        .value_parser(["price-asc", "price-desc", "rating-asc", "rating-desc"])
                        .help("Sorts records by price or rating."),
                )
                .arg(
                    Arg::new("LIMIT")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Maximum number of records to print."),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Prints a single catalog record.")
                .arg(catalog_arg.clone())
                .arg(
                    Arg::new("ID_OR_SLUG")
                        .required(true)
                        .help("Identifier or slug of the record."),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Creates a catalog record.")
                .arg(catalog_arg.clone())
                .arg(payload_arg.clone()),
        )
        .subcommand(
            Command::new("update")
                .about("Updates fields of a catalog record.")
                .arg(catalog_arg.clone())
                .arg(id_arg.clone())
                .arg(payload_arg),
        )
        .subcommand(
            Command::new("delete")
                .about("Deletes a catalog record.")
                .arg(catalog_arg)
                .arg(id_arg),
        )
        .subcommand(
            Command::new("sync")
                .about("Resolves all catalogs and prints the source each of them was loaded from."),
        )
        .subcommand(
            Command::new("slugify")
                .about("Prints the URL-safe slug for the text.")
                .arg(Arg::new("TEXT").required(true)),
        )
}

/// Executes the parsed command and returns the text to print.
pub async fn execute<S: KeyValueStorage + Clone>(
    api: &Api<S>,
    matches: &ArgMatches,
) -> anyhow::Result<String> {
    let Some((command, args)) = matches.subcommand() else {
        bail!(FretboardError::client("Command is not specified."));
    };

    if command == "slugify" {
        let text = args
            .get_one::<String>("TEXT")
            .ok_or_else(|| anyhow!("<TEXT> argument is not provided."))?;
        return Ok(slugify(text));
    }

    if command == "sync" {
        let (tutors, courses, products) = api.load_all().await;
        return to_json(&json!({ "tutors": tutors, "courses": courses, "products": products }));
    }

    let catalog = args
        .get_one::<String>("CATALOG")
        .ok_or_else(|| anyhow!("<CATALOG> argument is not provided."))?;
    match catalog.as_str() {
        "tutors" => execute_catalog(api.tutors(), command, args).await,
        "courses" => execute_catalog(api.courses(), command, args).await,
        "products" => execute_catalog(api.products(), command, args).await,
        catalog => bail!(FretboardError::client(format!(
            "Unknown catalog ({catalog})."
        ))),
    }
}

async fn execute_catalog<R: CatalogRecord, S: KeyValueStorage>(
    service: &Arc<CatalogService<R, S>>,
    command: &str,
    args: &ArgMatches,
) -> anyhow::Result<String> {
    service.spawn_load().await?;

    match command {
        "list" => {
            service.set_filter(parse_filter(args)?);

            let mut records = service.filtered();
            if let Some(limit) = args.get_one::<usize>("LIMIT") {
                records.truncate(*limit);
            }
            to_json(&records)
        }
        "show" => {
            let id_or_slug = required_arg(args, "ID_OR_SLUG")?;
            let record = service
                .find_by_id(id_or_slug)
                .or_else(|| service.find_by_slug(id_or_slug))
                .ok_or_else(|| not_found::<R>(id_or_slug))?;
            to_json(&record)
        }
        "create" => to_json(&service.create(parse_payload(args)?)?),
        "update" => {
            let id = required_arg(args, "ID")?;
            let record = service
                .update(id, parse_payload(args)?)?
                .ok_or_else(|| not_found::<R>(id))?;
            to_json(&record)
        }
        "delete" => {
            let id = required_arg(args, "ID")?;
            let record = service.delete(id).ok_or_else(|| not_found::<R>(id))?;
            to_json(&record)
        }
        command => bail!(FretboardError::client(format!(
            "Unknown command ({command})."
        ))),
    }
}

fn parse_filter<R: CatalogRecord>(args: &ArgMatches) -> anyhow::Result<CatalogFilter<R>> {
    let mut filter = CatalogFilter::default();

    if let Some(search) = args.get_one::<String>("SEARCH") {
        filter = filter.with_search(search);
    }

    for dimension in args.get_many::<String>("FILTER").into_iter().flatten() {
        let Some((name, value)) = dimension.split_once('=') else {
            bail!(FretboardError::client(format!(
                "Filter should be in DIMENSION=VALUE format, got `{dimension}`."
            )));
        };
        filter = filter.with_dimension(parse_variant::<R::Dimension>("dimension", name)?, value);
    }

    for flag in args.get_many::<String>("FLAG").into_iter().flatten() {
        filter = filter.with_flag(parse_variant::<R::Flag>("flag", flag)?);
    }

    if let Some(min_price) = args.get_one::<f64>("MIN_PRICE") {
        filter = filter.with_min_price(*min_price);
    }

    if let Some(max_price) = args.get_one::<f64>("MAX_PRICE") {
        filter = filter.with_max_price(*max_price);
    }

    if let Some(sort) = args.get_one::<String>("SORT") {
        filter = filter.with_sort(sort.parse::<CatalogSort>()?);
    }

    Ok(filter)
}

/// Parses a camelCase dimension or flag name of the record.
fn parse_variant<T: DeserializeOwned>(label: &str, name: &str) -> anyhow::Result<T> {
    serde_json::from_value(Value::String(name.trim().to_string())).map_err(|_| {
        FretboardError::client(format!("Unknown {label} `{name}`.")).into()
    })
}

fn parse_payload(args: &ArgMatches) -> anyhow::Result<Value> {
    serde_json::from_str(required_arg(args, "PAYLOAD")?).map_err(|err| {
        FretboardError::client_with_root_cause(anyhow!(err).context("Payload isn't a valid JSON."))
            .into()
    })
}

fn required_arg<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("<{name}> argument is not provided."))
}

fn not_found<R: CatalogRecord>(id: &str) -> anyhow::Error {
    FretboardError::not_found(format!("Cannot find {} ({id}).", R::KIND)).into()
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
