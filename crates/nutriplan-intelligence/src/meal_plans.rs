// ABOUTME: Static catalog of sample daily meal plans keyed by diet category
// ABOUTME: Lookups for categories without an entry fall back to the balanced plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{DietCategory, MealPlan};
use std::collections::HashMap;

/// Meal plans per diet category with a mandatory balanced entry
#[derive(Debug, Clone)]
pub struct MealPlanCatalog {
    balanced: MealPlan,
    plans: HashMap<DietCategory, MealPlan>,
}

impl MealPlanCatalog {
    /// Catalog containing only the balanced plan
    #[must_use]
    pub fn new(balanced: MealPlan) -> Self {
        Self {
            balanced,
            plans: HashMap::new(),
        }
    }

    /// Add or replace the plan for a category
    #[must_use]
    pub fn with_plan(mut self, category: DietCategory, plan: MealPlan) -> Self {
        if category == DietCategory::Balanced {
            self.balanced = plan;
        } else {
            self.plans.insert(category, plan);
        }
        self
    }

    /// Plan for a category, or the balanced plan if none is registered
    #[must_use]
    pub fn lookup(&self, category: DietCategory) -> &MealPlan {
        self.plans.get(&category).unwrap_or(&self.balanced)
    }

    /// Whether a dedicated plan exists for the category
    #[must_use]
    pub fn has_plan(&self, category: DietCategory) -> bool {
        category == DietCategory::Balanced || self.plans.contains_key(&category)
    }
}

impl Default for MealPlanCatalog {
    fn default() -> Self {
        Self::new(MealPlan::new(
            "Oatmeal with berries, Greek yogurt and a handful of walnuts",
            "Grilled chicken breast, quinoa and mixed green salad with olive oil",
            "Baked salmon, brown rice and steamed broccoli",
            "Apple slices with almond butter",
        ))
        .with_plan(
            DietCategory::LowCarb,
            MealPlan::new(
                "Spinach and feta omelette with avocado",
                "Tuna salad on leafy greens with olive oil and seeds",
                "Grilled steak with roasted cauliflower and green beans",
                "Celery sticks with cream cheese or a boiled egg",
            ),
        )
        .with_plan(
            DietCategory::LowSodium,
            MealPlan::new(
                "Unsalted oatmeal with banana and cinnamon",
                "Homemade chicken and vegetable soup without added salt",
                "Herb-roasted turkey with sweet potato and fresh vegetables",
                "Unsalted almonds and fresh fruit",
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_covers_every_category() {
        let catalog = MealPlanCatalog::default();
        for category in DietCategory::ALL {
            assert!(catalog.has_plan(category));
        }
        assert_ne!(
            catalog.lookup(DietCategory::LowCarb),
            catalog.lookup(DietCategory::Balanced)
        );
    }

    #[test]
    fn test_missing_category_falls_back_to_balanced() {
        let balanced = MealPlan::new("a", "b", "c", "d");
        let catalog = MealPlanCatalog::new(balanced.clone());
        assert_eq!(catalog.lookup(DietCategory::LowSodium), &balanced);
        assert!(!catalog.has_plan(DietCategory::LowSodium));
    }
}
