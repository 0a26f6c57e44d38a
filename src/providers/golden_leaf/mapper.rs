//! Golden Leaf to Domain Model Mapper

use crate::domain::Product;
use super::models::PartialProduct;

/// Mapper for Golden Leaf API records
pub struct GoldenLeafMapper;

impl GoldenLeafMapper {
    /// Map a wire record to a product
    pub fn map_product(partial: PartialProduct) -> Product {
        Product::new(partial.id, partial.description, partial.unit_cost)
    }

    /// Map every record, keeping order and count
    pub fn map_products(partials: Vec<PartialProduct>) -> Vec<Product> {
        partials.into_iter().map(Self::map_product).collect()
    }
}
