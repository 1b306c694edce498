mod defaults;
mod io;
mod schema;
mod validate;

#[allow(unused_imports)]
pub use io::{load_config, load_settings};
#[allow(unused_imports)]
pub use schema::{Config, Credentials, Settings};
pub use validate::ConfigError;

#[cfg(test)]
mod tests;
