//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wellboard_core` linkage.
//! - Walk one catalog screen through the offline fallback path with
//!   deterministic output for quick local sanity checks.

use wellboard_core::{builtin_catalog, pagination_range, Controller, FetchError, PageMarker};

fn main() {
    println!("wellboard_core ping={}", wellboard_core::ping());
    println!("wellboard_core version={}", wellboard_core::core_version());

    let catalog = match builtin_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("catalog failed to load: {err}");
            std::process::exit(1);
        }
    };
    println!("screens={}", catalog.slugs().join(","));

    let screen = match catalog.require("taxonomies") {
        Ok(screen) => screen.clone(),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut controller = match Controller::new(screen) {
        Ok(controller) => controller,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    // No server in a smoke run: complete each fetch as failed and show
    // the synthesized fallback pages.
    let ticket = controller.refresh();
    controller.complete(&ticket, Err(FetchError::Network("offline smoke run".to_string())));
    println!(
        "taxonomies page=1 rows={} total_pages={}",
        controller.state().items.len(),
        controller.state().total_pages
    );

    if let Some(ticket) = controller.page_changed(2) {
        controller.complete(&ticket, Err(FetchError::Network("offline smoke run".to_string())));
        println!(
            "taxonomies page=2 rows={} last_error={}",
            controller.state().items.len(),
            controller.state().last_error.as_deref().unwrap_or("none")
        );
    }

    let strip: Vec<String> = pagination_range(12, 23)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => "...".to_string(),
        })
        .collect();
    println!("range current=12 total=23 -> [{}]", strip.join(", "));
}
