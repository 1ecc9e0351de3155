//! Restaurant repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use rewards_core::{PersistenceError, PersistenceResult, Restaurant, RestaurantRepository};

/// Restaurants keyed by merchant number.
#[derive(Debug, Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: DashMap<String, Restaurant>,
}

impl InMemoryRestaurantRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a restaurant under its merchant number.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the merchant number is taken.
    pub fn insert(&self, restaurant: Restaurant) -> PersistenceResult<Restaurant> {
        match self
            .restaurants
            .entry(restaurant.merchant_number().to_string())
        {
            Entry::Occupied(_) => Err(PersistenceError::Conflict(format!(
                "merchant number {} already exists",
                restaurant.merchant_number()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(restaurant.clone());
                Ok(restaurant)
            }
        }
    }

    /// Number of stored restaurants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Whether no restaurant is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn find_by_merchant_number(
        &self,
        merchant_number: &str,
    ) -> PersistenceResult<Option<Restaurant>> {
        Ok(self
            .restaurants
            .get(merchant_number)
            .map(|restaurant| restaurant.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use rewards_core::BenefitAvailabilityPolicy;
    use rewards_shared::Percentage;

    use super::*;

    fn applebees() -> Restaurant {
        Restaurant::new("1234567890", "AppleBees", Percentage::value_of("8%").unwrap())
    }

    #[tokio::test]
    async fn test_find_by_merchant_number() {
        let repo = InMemoryRestaurantRepository::new();
        let stored = repo
            .insert(applebees().with_availability_policy(BenefitAvailabilityPolicy::Never))
            .unwrap();

        let found = repo
            .find_by_merchant_number("1234567890")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, stored);
        assert_eq!(
            found.benefit_availability_policy(),
            BenefitAvailabilityPolicy::Never
        );
        assert!(repo.find_by_merchant_number("0").await.unwrap().is_none());
    }

    #[test]
    fn test_duplicate_merchant_number() {
        let repo = InMemoryRestaurantRepository::new();
        repo.insert(applebees()).unwrap();
        assert!(matches!(
            repo.insert(applebees()),
            Err(PersistenceError::Conflict(_))
        ));
        assert_eq!(repo.len(), 1);
    }
}
