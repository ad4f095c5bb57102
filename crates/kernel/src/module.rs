use shelf_catalog::StockLine;

/// Context provided to modules during startup
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Startup component that contributes titles to the library
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called before any module is asked for stock
    fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the stock lines this module puts on the shelf
    /// Lines are registered in the order returned
    fn stock(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<Vec<StockLine>> {
        Ok(vec![])
    }
}
