//! Built-in service registrations.
//!
//! The two recognized commands delegate to external executables configured in
//! the config file; their internals (SDL handling, code generation) are an
//! external contract, not part of this crate.

mod external;

pub use external::ExternalService;

use crate::config::Config;
use crate::service::ServiceRegistry;

/// Root command implemented by the SDL service.
pub const SDL_COMMAND: &str = "sdl";

/// Root command implemented by the actions codegen service.
pub const ACTIONS_CODEGEN_COMMAND: &str = "actions-codegen";

/// Builds the registry of built-in services from the configuration.
pub fn registry_from_config(config: &Config) -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(
        SDL_COMMAND,
        Box::new(ExternalService::new(SDL_COMMAND, config.services.sdl.clone())),
    );
    registry.register(
        ACTIONS_CODEGEN_COMMAND,
        Box::new(ExternalService::new(
            ACTIONS_CODEGEN_COMMAND,
            config.services.actions_codegen.clone(),
        )),
    );
    registry
}
