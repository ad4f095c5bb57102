pub mod books;
pub mod stock;

use shelf_kernel::ModuleRegistry;

/// Register all library modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(books::create_module());
    registry.register(stock::create_module());
}
