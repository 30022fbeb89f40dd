//! # Cart State
//!
//! Thread-safe wrapper around the shopper's [`Cart`].
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartState Access                                 │
//! │                                                                         │
//! │  with_cart(|c| ...)       read, lock held for the closure only          │
//! │  with_cart_mut(|c| ...)   write, one mutation applies fully or not at all│
//! │                                                                         │
//! │  The cart lock is independent of the catalog lock: a pending catalog    │
//! │  fetch never delays a cart mutation.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Closures passed in must not `.await`; they are plain `FnOnce`.

use std::sync::{Arc, Mutex};

use vitrine_core::Cart;

/// Shared handle to the session's cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.total_items());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Returns a copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }
}
