//! Interactive shell: one parsed line in, one rendered screen out.

use tracing::debug;
use vitrine_core::CategoryFilter;

use super::command::ShellCommand;
use super::render::{help, Renderer};
use crate::commands::{cart, checkout, product};
use crate::state::Store;

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep reading
    Continue(String),
    /// Leave the loop
    Quit,
}

/// View-layer session. Holds the active category selection, nothing else.
pub struct Shell {
    store: Store,
    filter: CategoryFilter,
}

impl Shell {
    pub fn new(store: Store, filter: CategoryFilter) -> Self {
        Shell { store, filter }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Parses and runs one input line.
    pub async fn handle_line(&mut self, line: &str) -> Outcome {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.execute(command).await,
            Ok(None) => Outcome::Continue(String::new()),
            Err(e) => Outcome::Continue(format!("! {}\n", e)),
        }
    }

    /// The catalog screen for the active filter, without fetching.
    pub fn catalog_screen(&self) -> String {
        let response = product::get_catalog(&self.store, &self.filter);
        self.renderer().catalog(&response)
    }

    pub async fn execute(&mut self, command: ShellCommand) -> Outcome {
        debug!(?command, "Shell command");
        let store = &self.store;
        let renderer = Renderer::new(store.config());

        let text = match command {
            ShellCommand::List(filter) => {
                if let Some(filter) = filter {
                    self.filter = filter;
                }
                renderer.catalog(&product::list_products(store, &self.filter).await)
            }
            ShellCommand::Categories => {
                let counts = product::get_categories(store).await;
                format!("{}\n", renderer.categories(&counts, &self.filter.to_string()))
            }
            ShellCommand::Show(id) => match product::get_product(store, id).await {
                Ok(dto) => renderer.product(&dto),
                Err(e) => renderer.error(&e),
            },
            ShellCommand::Add { id, quantity } => {
                match cart::add_to_cart(store, id, quantity).await {
                    Ok(response) => renderer.cart(&response),
                    Err(e) => renderer.error(&e),
                }
            }
            ShellCommand::Increment(id) => renderer.cart(&cart::update_cart_item(store, id, 1)),
            ShellCommand::Decrement(id) => renderer.cart(&cart::update_cart_item(store, id, -1)),
            ShellCommand::Remove(id) => renderer.cart(&cart::remove_from_cart(store, id)),
            ShellCommand::Cart => renderer.cart(&cart::get_cart(store)),
            ShellCommand::Clear => renderer.cart(&cart::clear_cart(store)),
            ShellCommand::Checkout => match checkout::checkout(store) {
                Ok(receipt) => renderer.receipt(&receipt),
                Err(e) => renderer.error(&e),
            },
            ShellCommand::Refresh => {
                renderer.catalog(&product::refresh_catalog(store, &self.filter).await)
            }
            ShellCommand::Help => help().to_string(),
            ShellCommand::Quit => return Outcome::Quit,
        };

        Outcome::Continue(text)
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer::new(self.store.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::loaded_store;

    async fn run(shell: &mut Shell, line: &str) -> String {
        match shell.handle_line(line).await {
            Outcome::Continue(text) => text,
            Outcome::Quit => panic!("unexpected quit on '{}'", line),
        }
    }

    #[tokio::test]
    async fn test_browse_add_checkout_session() {
        let mut shell = Shell::new(loaded_store().await, CategoryFilter::All);

        let text = run(&mut shell, "list men's clothing").await;
        assert!(text.contains("Fjallraven Backpack"));
        assert!(!text.contains("Silver Dragon"));
        assert_eq!(shell.filter(), &CategoryFilter::from_tag("men's clothing"));

        let text = run(&mut shell, "add 1 2").await;
        assert!(text.contains("2 items"));

        let text = run(&mut shell, "dec 1").await;
        assert!(text.contains("1 item"));

        let text = run(&mut shell, "dec 1").await;
        assert_eq!(text, "Your cart is empty.\n");

        run(&mut shell, "add 3").await;
        let text = run(&mut shell, "checkout").await;
        assert!(text.starts_with("Order placed."));

        let text = run(&mut shell, "cart").await;
        assert_eq!(text, "Your cart is empty.\n");

        assert_eq!(shell.handle_line("quit").await, Outcome::Quit);
    }

    #[tokio::test]
    async fn test_errors_are_rendered() {
        let mut shell = Shell::new(loaded_store().await, CategoryFilter::All);

        assert!(run(&mut shell, "frobnicate").await.starts_with("! Unknown command"));
        assert!(run(&mut shell, "show x").await.contains("not a product id"));
        assert!(run(&mut shell, "checkout").await.contains("Your cart is empty"));
        assert!(run(&mut shell, "add 999").await.contains("Product not found: 999"));
        assert_eq!(run(&mut shell, "   ").await, "");
    }

    #[tokio::test]
    async fn test_add_product_shown_from_other_category() {
        let mut shell = Shell::new(loaded_store().await, CategoryFilter::All);

        let text = run(&mut shell, "list jewelery").await;
        assert!(!text.contains("Fjallraven Backpack"));

        let text = run(&mut shell, "show 1").await;
        assert!(text.contains("Fjallraven Backpack"));
        assert!(text.contains("'add 1' to add it"));

        let text = run(&mut shell, "add 1").await;
        assert!(text.contains("Fjallraven Backpack"));
        assert!(text.contains("1 item"));

        // Topping up an item whose category is no longer loaded
        let text = run(&mut shell, "add 1 2").await;
        assert!(text.contains("3 items"));
        assert!(run(&mut shell, "show 1").await.contains("In cart: 3"));
    }

    #[tokio::test]
    async fn test_list_rejects_unsendable_category() {
        let mut shell = Shell::new(loaded_store().await, CategoryFilter::All);
        let text = run(&mut shell, "list shoes/boots").await;
        assert!(text.starts_with("! Invalid category"));
        assert_eq!(shell.filter(), &CategoryFilter::All);
    }

    #[tokio::test]
    async fn test_list_without_argument_keeps_filter() {
        let mut shell = Shell::new(loaded_store().await, CategoryFilter::from_tag("jewelery"));
        let text = run(&mut shell, "list").await;
        assert!(text.contains("[jewelery 1]"));
        assert!(text.contains("Silver Dragon Chain"));
    }
}
