//! # Commands Module
//!
//! Everything the presentation layer calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product list, filter, detail, categories, load status
//! ├── cart.rs      ◄─── Cart add / remove / view
//! ├── checkout.rs  ◄─── Checkout summary and payment stub
//! ├── about.rs     ◄─── Store details from configuration
//! └── snapshot.rs  ◄─── Whole-screen state in one DTO
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  user picks "clothes" in the category menu                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::catalog::set_filter(&mut store, "clothes", "")               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store publishes StoreChange { revision, FilterChanged }                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  subscriber re-queries: commands::catalog::list_products(&store)        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Presentation receives: ProductDto[]  or  ApiError { code, message }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands borrow the store; reads take `&Store<S>`, mutations
//! `&mut Store<S>`.

pub mod about;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod snapshot;
