//! Shelf Application Library
//!
//! This library provides the catalog modules that stock the lending library
//! and the bootstrap that assembles them into an inventory.

pub mod modules;

use shelf_catalog::Inventory;
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Re-export commonly used types
pub use modules::*;

/// Build the library inventory from every registered module.
///
/// Each call returns a fresh, independently owned inventory.
pub fn build_library(settings: &Settings) -> anyhow::Result<Inventory> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx { settings };
    registry.init_modules(&ctx)?;

    let mut inventory = Inventory::new();
    registry.stock_inventory(&ctx, &mut inventory)?;

    tracing::info!(
        library = %settings.library.name,
        modules = registry.module_count(),
        titles = inventory.len(),
        "library stocked"
    );
    Ok(inventory)
}
