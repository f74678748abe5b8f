//! # Seed Data Generator
//!
//! Fills a local SQLite catalog with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./nutrio_dev.db
//! cargo run -p nutrio-db --bin seed
//!
//! # Specify database path
//! cargo run -p nutrio-db --bin seed -- --db ./data/nutrio.db
//! ```
//!
//! Products are spread over a handful of categories and carry nutrition
//! values per 100 g. Some fields are left empty on purpose so the front end
//! sees nulls.

use nutrio_core::{Product, ProductFilter};
use nutrio_db::migrations::migration_status;
use nutrio_db::seed::insert_products;
use nutrio_db::{Database, DbConfig};
use std::env;
use uuid::Uuid;

/// (category, name, kcal, proteins, fats, carbs, ingredients, harmful, contraindications)
type Row = (
    &'static str,
    &'static str,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
);

const PRODUCTS: &[Row] = &[
    ("Молочные продукты", "Молоко 3,2%", Some(58.0), Some(2.9), Some(3.2), Some(4.7), Some("Молоко нормализованное"), None, Some("Непереносимость лактозы")),
    ("Молочные продукты", "Кефир 1%", Some(40.0), Some(3.0), Some(1.0), Some(4.0), Some("Молоко, закваска"), None, Some("Непереносимость лактозы")),
    ("Молочные продукты", "Творог 5%", Some(121.0), Some(17.2), Some(5.0), Some(1.8), None, None, None),
    ("Молочные продукты", "Сыр Российский", Some(364.0), Some(23.0), Some(30.0), Some(0.0), Some("Молоко, соль, сычужный фермент"), Some("Много соли"), Some("Гипертония")),
    ("Напитки", "Миндальное молоко", Some(24.0), Some(0.5), Some(1.1), Some(3.0), Some("Вода, миндаль"), None, Some("Аллергия на орехи")),
    ("Напитки", "Апельсиновый сок", Some(45.0), Some(0.7), Some(0.2), Some(10.4), None, Some("Высокое содержание сахара"), Some("Гастрит")),
    ("Напитки", "Cola", Some(42.0), Some(0.0), Some(0.0), Some(10.6), Some("Вода, сахар, E150d, E338"), Some("Фосфорная кислота, сахар"), Some("Сахарный диабет")),
    ("Бакалея", "Гречка", Some(313.0), Some(12.6), Some(3.3), Some(62.1), None, None, None),
    ("Бакалея", "Овсяные хлопья", Some(352.0), Some(12.3), Some(6.1), Some(59.5), None, None, Some("Целиакия")),
    ("Бакалея", "Рис 100% цельнозерновой", Some(337.0), Some(7.4), Some(1.8), Some(72.9), None, None, None),
    ("Сладости", "Шоколад молочный", Some(550.0), Some(6.9), Some(35.7), Some(54.4), Some("Сахар, какао-масло, сухое молоко"), Some("Много сахара и жира"), Some("Сахарный диабет")),
    ("Сладости", "Зефир", Some(304.0), Some(0.8), Some(0.0), Some(79.8), None, Some("Много сахара"), None),
    ("Овощи", "Морковь", Some(35.0), Some(1.3), Some(0.1), Some(6.9), None, None, None),
    ("Овощи", "Брокколи", Some(34.0), Some(2.8), Some(0.4), Some(6.6), None, None, None),
    ("Снеки", "Чипсы картофельные", Some(536.0), Some(6.6), Some(34.6), Some(52.9), Some("Картофель, масло, соль, усилитель вкуса"), Some("Трансжиры, соль"), Some("Гипертония, ожирение")),
    ("Снеки", "Протеиновый батончик", None, None, None, None, None, None, None),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./nutrio_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Nutrio Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./nutrio_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Nutrio Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    let (total, applied) = migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let products: Vec<Product> = PRODUCTS.iter().map(to_product).collect();
    let inserted = insert_products(db.pool(), &products).await?;
    println!("✓ Inserted {} products", inserted);

    println!();
    println!("Verifying catalog...");
    let results = db
        .products()
        .fetch_products(Some(&ProductFilter::search("молоко")))
        .await?;
    println!("  Search 'молоко': {} results", results.len());

    let results = db
        .products()
        .fetch_products(Some(&ProductFilter::category("Напитки")))
        .await?;
    println!("  Category 'Напитки': {} results", results.len());

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

fn to_product(row: &Row) -> Product {
    let (category, name, calories, proteins, fats, carbs, ingredients, harmful, contraindications) =
        *row;

    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        category: category.to_string(),
        calories,
        proteins,
        fats,
        carbs,
        ingredients: ingredients.map(str::to_string),
        harmful: harmful.map(str::to_string),
        contraindications: contraindications.map(str::to_string),
    }
}
