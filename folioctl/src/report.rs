use anyhow::Result;
use folio_config::ConfigLoad;
use folio_core::catalog::{Catalog, GalleryQuery};
use folio_model::{CategoryFilter, PhotoItem};

fn build_catalog(load: &ConfigLoad) -> Result<Catalog> {
    Ok(Catalog::from_manifest(&load.manifest)?)
}

pub fn catalog(
    load: &ConfigLoad,
    filter: CategoryFilter,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = build_catalog(load)?;
    let query = GalleryQuery::new(filter, search.unwrap_or_default());
    let items: Vec<&PhotoItem> = catalog.filtered(&query).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for item in &items {
        println!(
            "{:>3}  {:<10} {:<40} {}",
            item.id.get(),
            item.category.slug(),
            item.title,
            item.display_meta()
        );
    }
    println!("{} de {} fotos", items.len(), catalog.len());
    Ok(())
}

pub fn categories(load: &ConfigLoad) -> Result<()> {
    let catalog = build_catalog(load)?;
    let query = GalleryQuery::default();
    println!("{:<10} {}", "all", catalog.filtered(&query).count());
    for category in catalog.categories() {
        let query = query.clone().with_filter(CategoryFilter::Only(category));
        println!(
            "{:<10} {:<10} {}",
            category.slug(),
            category.label(),
            catalog.filtered(&query).count()
        );
    }
    Ok(())
}

pub fn check(load: &ConfigLoad) -> Result<()> {
    println!("config:   {}", load.metadata.config_source);
    println!(
        "catalog:  {} ({} photos)",
        load.metadata.manifest_source,
        load.manifest.files.len()
    );
    if load.metadata.env_file_loaded {
        println!("env file: loaded");
    }
    for (surface, settings) in load.config.surfaces() {
        println!(
            "{:<10} transition {} ms, interval {} ms, autoplay {}",
            surface,
            settings.transition_ms,
            settings.interval_ms,
            if settings.autoplay { "on" } else { "off" }
        );
    }

    if load.warnings.is_empty() {
        println!("no warnings");
    } else {
        for warning in load.warnings.iter() {
            println!("warning: {}", warning.message);
            if let Some(hint) = &warning.hint {
                println!("  hint: {hint}");
            }
        }
    }
    Ok(())
}
