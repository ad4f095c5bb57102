use anyhow::Context;
use std::sync::Arc;

use shelf_catalog::Inventory;

use crate::module::{InitCtx, Module};

/// Module registry keeping modules in registration order
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// Get the number of registered modules
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Initialize modules in registration order
    pub fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.module_count());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Register every module's stock into `inventory`, module by module
    pub fn stock_inventory(
        &self,
        ctx: &InitCtx<'_>,
        inventory: &mut Inventory,
    ) -> anyhow::Result<()> {
        for module in &self.modules {
            let lines = module
                .stock(ctx)
                .with_context(|| format!("failed to collect stock from module '{}'", module.name()))?;

            tracing::info!(
                module = module.name(),
                lines = lines.len(),
                "stocking inventory"
            );

            for line in lines {
                let title = line.entry.title().to_string();
                inventory.register(line.entry, line.quantity).with_context(|| {
                    format!(
                        "module '{}' failed to register '{}'",
                        module.name(),
                        title
                    )
                })?;
            }
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rust_decimal_macros::dec;
    use shelf_catalog::{CatalogEntry, EntryFields, StockLine};

    struct TestModule {
        name: &'static str,
        lines: Vec<(&'static str, i32)>,
    }

    impl Module for TestModule {
        fn name(&self) -> &'static str {
            self.name
        }

        fn stock(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<Vec<StockLine>> {
            self.lines
                .iter()
                .map(|(title, quantity)| {
                    let entry = CatalogEntry::standard(
                        EntryFields::new(*title, "Test Author")
                            .page_count(10)
                            .base_price(dec!(1.50)),
                    )?;
                    Ok::<_, anyhow::Error>(StockLine::new(entry, *quantity))
                })
                .collect()
        }
    }

    #[test]
    fn test_module_registry_creation() {
        let registry = ModuleRegistry::new();
        assert_eq!(registry.module_count(), 0);
    }

    #[test]
    fn test_module_count_follows_registrations() {
        let mut registry = ModuleRegistry::new();
        for name in ["first", "second"] {
            registry.register(Arc::new(TestModule {
                name,
                lines: vec![],
            }));
        }

        assert_eq!(registry.module_count(), 2);
    }

    #[test]
    fn test_stock_is_registered_in_module_order() {
        let mut registry = ModuleRegistry::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        registry.register(Arc::new(TestModule {
            name: "first",
            lines: vec![("Alpha", 2), ("Beta", 1)],
        }));
        registry.register(Arc::new(TestModule {
            name: "second",
            lines: vec![("Gamma", 4), ("alpha", 3)],
        }));

        registry.init_modules(&ctx).unwrap();

        let mut inventory = Inventory::new();
        // "alpha" from the second module is the same title with a different
        // casing, so it is a different entry and must be refused.
        let err = registry.stock_inventory(&ctx, &mut inventory).unwrap_err();
        assert!(format!("{err:#}").contains("module 'second' failed to register 'alpha'"));

        let titles: Vec<_> = inventory
            .list_all()
            .iter()
            .map(|view| view.entry.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_repeated_entries_accumulate_across_modules() {
        let mut registry = ModuleRegistry::new();
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        registry.register(Arc::new(TestModule {
            name: "first",
            lines: vec![("Alpha", 2)],
        }));
        registry.register(Arc::new(TestModule {
            name: "second",
            lines: vec![("Alpha", 3)],
        }));

        let mut inventory = Inventory::new();
        registry.stock_inventory(&ctx, &mut inventory).unwrap();

        assert_eq!(inventory.copies_on_hand("alpha"), Some(5));
    }
}
