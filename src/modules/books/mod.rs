pub mod collection;

use anyhow::Context;
use shelf_catalog::StockLine;
use shelf_kernel::{InitCtx, Module};

/// Built-in collection the library opens with
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            enabled = ctx.settings.library.builtin_collection,
            "books module initialized"
        );
        Ok(())
    }

    fn stock(&self, ctx: &InitCtx<'_>) -> anyhow::Result<Vec<StockLine>> {
        if !ctx.settings.library.builtin_collection {
            tracing::info!(module = self.name(), "built-in collection disabled");
            return Ok(vec![]);
        }
        collection::collection().context("built-in collection contains an invalid entry")
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shelf_catalog::EntryKind;
    use shelf_kernel::settings::Settings;

    #[test]
    fn collection_matches_opening_stock() {
        let lines = collection::collection().unwrap();
        let stock: Vec<_> = lines
            .iter()
            .map(|line| (line.entry.title(), line.quantity))
            .collect();

        assert_eq!(
            stock,
            vec![
                ("Strach", 5),
                ("Hlbina", 3),
                ("Holly", 3),
                ("Oko za oko", 5),
                ("Program Joshua", 1),
                ("Výkupné", 1),
                ("Encyklopédia zvierat", 3),
                ("Encyklopédia bylín", 4),
            ]
        );
    }

    #[test]
    fn collection_values_follow_kind_rules() {
        let lines = collection::collection().unwrap();
        let value_of = |title: &str| {
            lines
                .iter()
                .find(|line| line.entry.title() == title)
                .map(|line| line.entry.value())
                .unwrap()
        };

        assert_eq!(value_of("Holly"), dec!(21.76));
        assert_eq!(value_of("Oko za oko"), dec!(37.82));
        assert_eq!(value_of("Program Joshua"), dec!(63.51));
        assert_eq!(value_of("Encyklopédia zvierat"), dec!(54.75));
        assert_eq!(value_of("Encyklopédia bylín"), dec!(8.90));
    }

    #[test]
    fn collection_flags_are_preserved() {
        let lines = collection::collection().unwrap();
        assert_eq!(
            lines[5].entry.kind(),
            EntryKind::Collectible {
                signed: false,
                rare: true
            }
        );
    }

    #[test]
    fn disabled_collection_stocks_nothing() {
        let mut settings = Settings::default();
        settings.library.builtin_collection = false;
        let ctx = InitCtx {
            settings: &settings,
        };

        assert!(BooksModule::new().stock(&ctx).unwrap().is_empty());
    }
}
