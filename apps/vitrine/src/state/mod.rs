//! # State Module
//!
//! Session state for the storefront.
//!
//! ## Separate State Types
//! The cart and the catalog sit behind independent locks, so a catalog
//! fetch can never delay a cart mutation. [`Store`] bundles them with the
//! configuration and the catalog source into one explicitly owned handle.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      run()                                      │   │
//! │  │  let store = Store::new(Arc::new(catalog), ConfigState::..);    │   │
//! │  │  store.init().await;                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ CatalogState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  currency        │              │
//! │  │    Cart      │  │    Catalog   │  │  shipping policy │              │
//! │  │  >>          │  │  >>          │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod store;

pub use cart::CartState;
pub use catalog::{Catalog, CatalogState};
pub use config::ConfigState;
pub use store::{CategoryCount, Store, StoreLookupError};
