#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use inventory::Product;

/// Product list shown on the home page. Empty until the first fetch lands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
}

impl ProductsState {
    /// Replace the list with a fetched one.
    pub fn replace(&mut self, items: Vec<Product>) {
        self.items = items;
    }

    /// Replace the product with the same id, or append it.
    pub fn upsert(&mut self, product: Product) {
        match self.items.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.items.push(product),
        }
    }

    /// Drop the product with this id, if listed.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|p| p.id != id);
    }
}
