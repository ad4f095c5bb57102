use shelf_catalog::StockLine;
use shelf_kernel::{InitCtx, Module};

/// Titles declared under `[[library.stock]]` in configuration
pub struct StockModule;

impl StockModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StockModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for StockModule {
    fn name(&self) -> &'static str {
        "stock"
    }

    fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            configured = ctx.settings.library.stock.len(),
            "stock module initialized"
        );
        Ok(())
    }

    fn stock(&self, ctx: &InitCtx<'_>) -> anyhow::Result<Vec<StockLine>> {
        ctx.settings
            .library
            .stock
            .iter()
            .map(|line| line.to_stock_line())
            .collect()
    }
}

/// Create a new instance of the stock module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(StockModule::new())
}
