// Parameter resolution for seed conversion.
// The conversion algorithms themselves live behind the resolved configuration.

#[cfg(feature = "cli")]
pub mod cli;
pub mod compat;
pub mod domain;
pub mod error;
pub mod params;
pub mod ur;

pub use error::{ErrorKind, ParamsError};
pub use params::{RawParameters, ResolvedConfiguration, RngMode, resolve};
