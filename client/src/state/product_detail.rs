#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use inventory::{Component, Product};

/// One product and its components, as shown on the details page.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetailState {
    pub product: Option<Product>,
    /// True only while the initial product fetch is pending.
    pub loading: bool,
    pub components: Vec<Component>,
    /// Component whose chart is open, if any.
    pub graph: Option<Component>,
}

impl Default for ProductDetailState {
    fn default() -> Self {
        Self { product: None, loading: true, components: Vec::new(), graph: None }
    }
}

/// What the details page renders in place of its body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailView {
    Loading,
    NotFound,
    Ready,
}

impl ProductDetailState {
    #[must_use]
    pub fn view(&self) -> DetailView {
        match (&self.product, self.loading) {
            (_, true) => DetailView::Loading,
            (None, false) => DetailView::NotFound,
            (Some(_), false) => DetailView::Ready,
        }
    }

    /// Component section is shown only for active products.
    #[must_use]
    pub fn shows_components(&self) -> bool {
        self.product.as_ref().is_some_and(|p| p.is_active)
    }

    /// Settle the initial product fetch. `None` means it failed.
    pub fn product_loaded(&mut self, product: Option<Product>) {
        self.product = product;
        self.loading = false;
    }

    /// Replace the product with a toggled copy returned by the backend.
    pub fn apply_product(&mut self, product: Product) {
        if self.product.as_ref().is_some_and(|p| p.id == product.id) {
            self.product = Some(product);
        }
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Drop a component, closing its chart if it was open.
    pub fn remove_component(&mut self, id: &str) {
        self.components.retain(|c| c.id != id);
        if self.graph.as_ref().is_some_and(|c| c.id == id) {
            self.graph = None;
        }
    }
}
