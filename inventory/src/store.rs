//! In-memory product/component store.
//!
//! DESIGN
//! ======
//! A `Store` is an ordinary value owned by whoever constructs it: the
//! server keeps one in `AppState`, the browser mock keeps one inside its
//! backend, and tests build as many isolated instances as they need.
//! Products keep insertion order; components are grouped by owning product
//! id so that deleting a product drops its components in one step.
//!
//! [`Store::handle`] executes a typed [`Endpoint`] and is the only entry
//! point the backends use.

use std::collections::HashMap;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::endpoint::{Ack, Endpoint, Reply};
use crate::error::ApiError;
use crate::model::{Component, ComponentDraft, Product, ProductDraft};
use crate::sample::{self, Readings, Sampler};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Clone, Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    components: HashMap<String, Vec<Component>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `products` and no components.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products, components: HashMap::new() }
    }

    /// The demo warehouse: three storage units, three sensor groups, with
    /// histories ending at `now`.
    #[must_use]
    pub fn demo(now: OffsetDateTime) -> Self {
        let mut store = Self::with_products(vec![
            seed_product("p1", "Cold Storage Unit A", "Main cold storage unit for perishable goods", true),
            seed_product("p2", "Dry Storage Area B", "Temperature controlled storage for dry goods", false),
            seed_product("p3", "Freezer Unit C", "Deep freezer storage for frozen products", true),
        ]);
        let stamps = sample::hourly_timestamps(now, sample::SAMPLE_POINTS);

        let seeds = [
            (
                "c1",
                "Section 1 Sensors",
                "Primary monitoring sensors for section 1",
                "p1",
                [2.0, 3.0, 2.5, 2.8, 3.1, 2.9, 2.7],
                [65.0, 67.0, 66.0, 68.0, 67.0, 65.0, 66.0],
                [400.0, 410.0, 405.0, 415.0, 408.0, 402.0, 406.0],
            ),
            (
                "c2",
                "Section 2 Sensors",
                "Secondary monitoring sensors for section 2",
                "p1",
                [3.1, 3.2, 3.0, 3.3, 3.2, 3.1, 3.0],
                [64.0, 65.0, 66.0, 65.0, 64.0, 65.0, 66.0],
                [395.0, 400.0, 398.0, 402.0, 399.0, 397.0, 398.0],
            ),
            (
                "c3",
                "Freezer Sensors",
                "Main freezer monitoring system",
                "p3",
                [-18.0, -17.5, -18.2, -18.1, -17.8, -18.0, -17.9],
                [45.0, 46.0, 44.0, 45.0, 46.0, 45.0, 44.0],
                [380.0, 385.0, 382.0, 384.0, 383.0, 381.0, 382.0],
            ),
        ];

        for (id, name, description, product_id, temperature, humidity, gas_level) in seeds {
            store.components.entry(product_id.to_owned()).or_default().push(Component {
                id: id.to_owned(),
                name: name.to_owned(),
                description: description.to_owned(),
                product_id: product_id.to_owned(),
                temperature: temperature.to_vec(),
                humidity: humidity.to_vec(),
                gas_level: gas_level.to_vec(),
                timestamps: stamps.clone(),
            });
        }
        store
    }

    // =========================================================================
    // PRODUCTS
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no product has this id.
    pub fn product(&self, id: &str) -> Result<&Product, ApiError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_owned()))
    }

    /// Append a new, active product with a fresh id.
    pub fn create_product(&mut self, draft: ProductDraft) -> Product {
        let product = Product { id: fresh_id('p'), name: draft.name, description: draft.description, is_active: true };
        self.products.push(product.clone());
        product
    }

    /// Remove a product and all of its components. Returns whether the
    /// product existed; deleting an unknown id is a no-op.
    pub fn delete_product(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.components.remove(id);
        self.products.len() != before
    }

    /// Flip the active flag and return the updated product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no product has this id.
    pub fn toggle_product(&mut self, id: &str) -> Result<Product, ApiError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_owned()))?;
        product.is_active = !product.is_active;
        Ok(product.clone())
    }

    // =========================================================================
    // COMPONENTS
    // =========================================================================

    /// Components owned by `product_id`; empty for unknown products.
    #[must_use]
    pub fn components(&self, product_id: &str) -> &[Component] {
        self.components.get(product_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Attach a new component with the given history to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the owning product does not exist.
    pub fn create_component(
        &mut self,
        product_id: &str,
        draft: ComponentDraft,
        readings: Readings,
    ) -> Result<Component, ApiError> {
        self.product(product_id)?;
        let component = Component {
            id: fresh_id('c'),
            name: draft.name,
            description: draft.description,
            product_id: product_id.to_owned(),
            temperature: readings.temperature,
            humidity: readings.humidity,
            gas_level: readings.gas_level,
            timestamps: readings.timestamps,
        };
        self.components.entry(product_id.to_owned()).or_default().push(component.clone());
        Ok(component)
    }

    /// Remove one component. Returns whether it existed.
    pub fn delete_component(&mut self, product_id: &str, component_id: &str) -> bool {
        let Some(list) = self.components.get_mut(product_id) else {
            return false;
        };
        let before = list.len();
        list.retain(|c| c.id != component_id);
        list.len() != before
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Execute one endpoint against the store.
    ///
    /// `now` stamps generated component histories; `sampler` draws their
    /// readings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for lookups, toggles, and component
    /// creation on unknown products.
    pub fn handle(
        &mut self,
        endpoint: Endpoint,
        now: OffsetDateTime,
        sampler: &mut dyn Sampler,
    ) -> Result<Reply, ApiError> {
        match endpoint {
            Endpoint::ListProducts => Ok(Reply::Products(self.products.clone())),
            Endpoint::GetProduct { id } => self.product(&id).cloned().map(Reply::Product),
            Endpoint::ListComponents { product_id } => Ok(Reply::Components(self.components(&product_id).to_vec())),
            Endpoint::CreateProduct(draft) => Ok(Reply::Product(self.create_product(draft))),
            Endpoint::DeleteProduct { id } => {
                self.delete_product(&id);
                Ok(Reply::Ack(Ack {}))
            }
            Endpoint::CreateComponent { product_id, draft } => {
                let readings = sample::synthesize(now, sampler);
                self.create_component(&product_id, draft, readings).map(Reply::Component)
            }
            Endpoint::DeleteComponent { product_id, component_id } => {
                self.delete_component(&product_id, &component_id);
                Ok(Reply::Ack(Ack {}))
            }
            Endpoint::ToggleProduct { id } => self.toggle_product(&id).map(Reply::Product),
        }
    }
}

fn seed_product(id: &str, name: &str, description: &str, is_active: bool) -> Product {
    Product { id: id.to_owned(), name: name.to_owned(), description: description.to_owned(), is_active }
}

fn fresh_id(prefix: char) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
