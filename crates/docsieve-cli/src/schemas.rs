//! # Schemas Subcommand
//!
//! Lists the catalog schema names accepted by `docsieve validate`.

use anyhow::{Context, Result};
use clap::Args;

use docsieve_api::SchemaCatalog;

/// Arguments for the `docsieve schemas` subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Only list names starting with this prefix (e.g. `auth.`).
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the schemas subcommand.
pub fn run_schemas(args: &SchemasArgs) -> Result<u8> {
    let catalog = SchemaCatalog::builtin().context("failed to build schema catalog")?;
    for name in schema_names(&catalog, args.prefix.as_deref()) {
        println!("{name}");
    }
    Ok(0)
}

/// Catalog names, sorted, optionally filtered by prefix.
pub fn schema_names<'a>(catalog: &'a SchemaCatalog, prefix: Option<&str>) -> Vec<&'a str> {
    catalog
        .names()
        .filter(|name| prefix.map_or(true, |p| name.starts_with(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_names_sorted() {
        let catalog = SchemaCatalog::builtin().unwrap();
        let names = schema_names(&catalog, None);
        assert_eq!(names.len(), catalog.len());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn filters_by_prefix() {
        let catalog = SchemaCatalog::builtin().unwrap();
        let names = schema_names(&catalog, Some("auth."));
        assert_eq!(
            names,
            vec![
                "auth.refresh-token",
                "auth.sign-in",
                "auth.sign-up",
                "auth.verify-registration"
            ]
        );
    }
}
