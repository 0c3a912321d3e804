// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod eventlog;
pub mod folio;
pub mod letras;
pub mod pricing;
pub mod quote;
pub mod state;

pub use catalog::*;
pub use eventlog::*;
pub use folio::*;
pub use letras::*;
pub use pricing::*;
pub use quote::*;
pub use state::*;
