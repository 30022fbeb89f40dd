//! # Text Renderer
//!
//! Turns command DTOs into the text the shell prints.
//!
//! ## Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog      CatalogResponse  → chips + product rows                  │
//! │  Detail       ProductDto       → title, price, rating, description      │
//! │  Cart         CartResponse     → lines, subtotal, shipping, total       │
//! │  Receipt      CheckoutReceipt  → order id + totals                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write;

use vitrine_core::{CartTotals, Money, Rating};

use crate::commands::cart::CartResponse;
use crate::commands::checkout::CheckoutReceipt;
use crate::commands::product::{CatalogResponse, ProductDto};
use crate::error::ApiError;
use crate::state::{CategoryCount, ConfigState};

const TITLE_WIDTH: usize = 40;

/// Renders DTOs with the configured currency format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    config: &'a ConfigState,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a ConfigState) -> Self {
        Renderer { config }
    }

    fn money(&self, amount: Money) -> String {
        self.config.format_money(amount)
    }

    /// Category chips and the product grid.
    pub fn catalog(&self, response: &CatalogResponse) -> String {
        let mut out = String::new();

        if let Some(error) = &response.error {
            let _ = writeln!(out, "! {}", error);
        }
        if response.loading {
            let _ = writeln!(out, "Loading products...");
        }

        let _ = writeln!(out, "{}", self.categories(&response.categories, &response.filter));

        if response.products.is_empty() {
            let _ = writeln!(out, "  No products in '{}'.", response.filter);
            return out;
        }

        for product in &response.products {
            let _ = writeln!(
                out,
                "  [{:>3}] {:<width$} {:>10}  {}",
                product.id.get(),
                truncate(&product.title, TITLE_WIDTH),
                self.money(product.price),
                stars(&product.rating),
                width = TITLE_WIDTH
            );
        }
        out
    }

    /// Category chips; the active one is bracketed.
    pub fn categories(&self, counts: &[CategoryCount], active: &str) -> String {
        let chips: Vec<String> = counts
            .iter()
            .map(|c| {
                if c.tag == active {
                    format!("[{} {}]", c.tag, c.count)
                } else {
                    format!("{} {}", c.tag, c.count)
                }
            })
            .collect();
        format!("Categories: {}", chips.join(" | "))
    }

    /// Product detail screen.
    pub fn product(&self, dto: &ProductDto) -> String {
        let p = &dto.product;
        let mut out = String::new();
        let _ = writeln!(out, "{}", p.title);
        let _ = writeln!(out, "{}", "─".repeat(p.title.chars().count().min(72)));
        let _ = writeln!(out, "Price:    {}", self.money(p.price));
        let _ = writeln!(out, "Category: {}", p.category);
        let _ = writeln!(out, "Rating:   {}", stars(&p.rating));
        if !p.description.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", p.description);
        }
        let _ = writeln!(out);
        if dto.cart_quantity > 0 {
            let _ = writeln!(out, "In cart: {}", dto.cart_quantity);
        } else {
            let _ = writeln!(out, "Not in cart. 'add {}' to add it.", p.id);
        }
        out
    }

    /// Cart screen.
    pub fn cart(&self, cart: &CartResponse) -> String {
        if cart.items.is_empty() {
            return "Your cart is empty.\n".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "CART{:>width$}", items_label(cart.totals.total_items), width = 60);
        for item in &cart.items {
            let _ = writeln!(
                out,
                "  [{:>3}] {:<width$} x{:<4} {:>10}",
                item.product.id.get(),
                truncate(&item.product.title, TITLE_WIDTH),
                item.quantity,
                self.money(item.line_total()),
                width = TITLE_WIDTH
            );
        }
        out.push_str(&self.totals(&cart.totals));
        out
    }

    fn totals(&self, totals: &CartTotals) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  Subtotal {:>54}", self.money(totals.subtotal));
        let shipping = if totals.shipping.is_zero() {
            "FREE".to_string()
        } else {
            self.money(totals.shipping)
        };
        let _ = writeln!(out, "  Shipping {:>54}", shipping);
        if let Some(remaining) = totals.remaining_for_free_shipping {
            let _ = writeln!(out, "  Add {} more for free shipping", self.money(remaining));
        }
        let _ = writeln!(out, "  TOTAL    {:>54}", self.money(totals.total));
        out
    }

    /// Order confirmation.
    pub fn receipt(&self, receipt: &CheckoutReceipt) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Order placed. Thank you!");
        let _ = writeln!(out, "  Order:  {}", receipt.order_id);
        let _ = writeln!(out, "  Placed: {}", receipt.placed_at);
        let _ = writeln!(out, "  Items:  {}", receipt.totals.total_items);
        out.push_str(&self.totals(&receipt.totals));
        out
    }

    pub fn error(&self, error: &ApiError) -> String {
        format!("! {}\n", error.message)
    }
}

/// Command reference printed by `help`.
pub fn help() -> &'static str {
    "\
Commands:
  list [category]   show products (all, or one category)
  categories        show category counts
  show <id>         product details
  add <id> [qty]    add to cart
  inc <id>          one more
  dec <id>          one fewer (removes at zero)
  rm <id>           remove from cart
  cart              show cart
  clear             empty the cart
  checkout          place the order
  refresh           reload the catalog
  help              this text
  quit              leave
"
}

fn items_label(count: i64) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

fn stars(rating: &Rating) -> String {
    format!("★ {:.1} ({})", rating.rate, rating.count)
}

/// Cuts to `max` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{loaded_store, P1, P2};
    use crate::commands::{cart, checkout, product};
    use vitrine_core::CategoryFilter;

    #[tokio::test]
    async fn test_catalog_screen() {
        let store = loaded_store().await;
        let response = product::get_catalog(&store, &CategoryFilter::from_tag("jewelery"));
        let text = Renderer::new(store.config()).catalog(&response);

        assert!(text.contains("[jewelery 1]"));
        assert!(text.contains("all 3"));
        assert!(text.contains("Silver Dragon Chain"));
        assert!(text.contains("$22.30"));
        assert!(!text.contains("Fjallraven"));
    }

    #[tokio::test]
    async fn test_catalog_screen_shows_error() {
        let store = crate::commands::testing::store_with_products(None).await;
        let response = product::get_catalog(&store, &CategoryFilter::All);
        let text = Renderer::new(store.config()).catalog(&response);

        assert!(text.starts_with(&format!("! {}", vitrine_catalog::FETCH_FAILED_MESSAGE)));
        assert!(text.contains("No products in 'all'"));
    }

    #[tokio::test]
    async fn test_cart_screen() {
        let store = loaded_store().await;
        let renderer = Renderer::new(store.config());
        assert_eq!(renderer.cart(&cart::get_cart(&store)), "Your cart is empty.\n");

        cart::add_to_cart(&store, P2, Some(2)).await.unwrap();
        let text = renderer.cart(&cart::get_cart(&store));
        assert!(text.contains("2 items"));
        assert!(text.contains("$44.60"));
        assert!(text.contains("$5.99"));
        assert!(text.contains("Add $55.40 more for free shipping"));
        assert!(text.contains("$50.59"));

        cart::add_to_cart(&store, P1, None).await.unwrap();
        let text = renderer.cart(&cart::get_cart(&store));
        assert!(text.contains("FREE"));
        assert!(!text.contains("more for free shipping"));
    }

    #[tokio::test]
    async fn test_product_and_receipt() {
        let store = loaded_store().await;
        let renderer = Renderer::new(store.config());

        let dto = product::get_product(&store, P1).await.unwrap();
        assert!(renderer.product(&dto).contains("'add 1'"));

        cart::add_to_cart(&store, P1, None).await.unwrap();
        let dto = product::get_product(&store, P1).await.unwrap();
        assert!(renderer.product(&dto).contains("In cart: 1"));

        let receipt = checkout::checkout(&store).unwrap();
        let text = renderer.receipt(&receipt);
        assert!(text.contains(&receipt.order_id));
        assert!(text.contains("$109.95"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("much longer title", 8), "much lo…");
    }
}
