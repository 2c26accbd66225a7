// ABOUTME: Criterion benchmarks for the allergen safety evaluators
// ABOUTME: Measures ingredient matching, recipe checks, suggestion ranking and grocery generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SafePlate

//! Criterion benchmarks for the allergen safety evaluators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use safeplate::catalog::seed_recipes;
use safeplate::intelligence::{
    check_recipe_safety, check_safety, generate_grocery_list, is_safe, suggest_recipes,
};
use safeplate::models::{Allergy, FoodItem, Recipe, Severity, UserProfile};

const INGREDIENTS: &[&str] = &[
    "2 cups flour",
    "1 cup whole milk",
    "3 eggs",
    "200 g dark chocolate",
    "1 tbsp sesame oil",
    "salt to taste",
    "2 salmon fillets",
    "1 can chickpeas",
];

fn allergic_profile() -> UserProfile {
    ["Milk", "Eggs", "Peanuts", "Tree Nuts", "Sesame", "Shellfish"]
        .iter()
        .fold(UserProfile::new("Bench"), |profile, name| {
            profile.with_allergy(Allergy::new(*name, Severity::Moderate))
        })
        .with_dietary_preference("vegetarian")
        .with_favorite_cuisine("Italian")
}

fn generate_recipes(count: usize) -> Vec<Recipe> {
    let catalog = seed_recipes();
    (0..count)
        .map(|index| {
            let base = &catalog[index % catalog.len()];
            base.clone().with_id(format!("bench-{index}"))
        })
        .collect()
}

fn bench_ingredient_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingredient_matching");
    let profile = allergic_profile();

    group.throughput(Throughput::Elements(INGREDIENTS.len() as u64));
    group.bench_function("is_safe", |b| {
        b.iter(|| {
            INGREDIENTS
                .iter()
                .filter(|text| is_safe(black_box(text), Some(&profile)))
                .count()
        });
    });
    group.bench_function("check_safety", |b| {
        b.iter(|| {
            INGREDIENTS
                .iter()
                .map(|text| check_safety(black_box(*text), Some(&profile)))
                .filter(|result| result.safe)
                .count()
        });
    });
    group.finish();
}

fn bench_recipe_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipes");
    let profile = allergic_profile();
    let inventory = vec![
        FoodItem::new("flour", 2.0, "kg"),
        FoodItem::new("rice", 1.0, "kg"),
        FoodItem::new("tomatoes", 6.0, "unit"),
    ];

    for count in [10_usize, 100, 1000] {
        let recipes = generate_recipes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("check_recipe_safety", count),
            &recipes,
            |b, recipes| {
                b.iter(|| {
                    recipes
                        .iter()
                        .filter(|recipe| check_recipe_safety(black_box(recipe), Some(&profile)).safe)
                        .count()
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("suggest_recipes", count),
            &recipes,
            |b, recipes| {
                b.iter(|| suggest_recipes(black_box(&inventory), black_box(recipes), Some(&profile)).len());
            },
        );
    }
    group.finish();
}

fn bench_grocery_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grocery");
    let inventory = vec![
        FoodItem::new("flour", 1.0, "cups"),
        FoodItem::new("eggs", 2.0, "unit"),
        FoodItem::new("olive oil", 10.0, "tbsp"),
    ];

    for count in [10_usize, 100, 1000] {
        let recipes = generate_recipes(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_grocery_list", count),
            &recipes,
            |b, recipes| {
                b.iter(|| generate_grocery_list(black_box(recipes), black_box(&inventory)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_ingredient_matching,
    bench_recipe_evaluation,
    bench_grocery_generation
);
criterion_main!(benches);
