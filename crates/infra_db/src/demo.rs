//! Demo data seeding
//!
//! Builds a month of synthetic trading history for the fixed demo tenant so
//! a fresh install has a dashboard worth looking at. The plan is generated
//! from an explicit seed and anchor date, so the same inputs always produce
//! the same fixture; re-seeding replaces all prior demo ledger entries.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::temporal::{is_weekday, Timezone};
use core_kernel::{Currency, SaleId, UserId};
use domain_identity::{hash_password, Company, Role};

use crate::error::DatabaseError;

/// Name of the demo tenant
pub const DEMO_COMPANY_NAME: &str = "Demo Tech Store";

/// Login name of the demo cashier
pub const DEMO_USERNAME: &str = "demo";

struct DemoProductSpec {
    name: &'static str,
    sku: &'static str,
    price_retail: Decimal,
    price_wholesale: Decimal,
    stock: i32,
    stock_min: i32,
}

fn demo_products() -> [DemoProductSpec; 4] {
    [
        DemoProductSpec {
            name: "iPhone 15 Pro",
            sku: "IPH-15P",
            price_retail: dec!(1200.0),
            price_wholesale: dec!(900.0),
            stock: 50,
            stock_min: 5,
        },
        DemoProductSpec {
            name: "MacBook M3",
            sku: "MAC-M3",
            price_retail: dec!(1850.0),
            price_wholesale: dec!(1400.0),
            stock: 20,
            stock_min: 2,
        },
        DemoProductSpec {
            name: "AirPods Max",
            sku: "AIR-MAX",
            price_retail: dec!(540.0),
            price_wholesale: dec!(380.0),
            stock: 40,
            stock_min: 5,
        },
        DemoProductSpec {
            name: "Apple Watch",
            sku: "WATCH-S9",
            price_retail: dec!(450.0),
            price_wholesale: dec!(310.0),
            stock: 60,
            stock_min: 10,
        },
    ]
}

/// One synthetic sale in the plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSale {
    pub date: NaiveDate,
    pub hour: u32,
    pub product_index: usize,
    pub quantity: u32,
}

/// One synthetic expense in the plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExpense {
    pub date: NaiveDate,
    pub hour: u32,
    pub description: String,
    pub category: String,
    pub amount: Decimal,
}

/// A deterministic month of demo trading
///
/// Weekdays see 5-12 sales, weekends 2-5; each sale picks a random product
/// and 1-2 units. Rent lands on the 5th of any month in the window, and each
/// day has a 20% chance of a marketing spend in [100, 400).
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPlan {
    pub anchor: NaiveDate,
    pub sales: Vec<PlannedSale>,
    pub expenses: Vec<PlannedExpense>,
}

impl DemoPlan {
    /// Number of products the plan draws from
    pub const PRODUCT_COUNT: usize = 4;

    /// Generates the 31-day plan (anchor minus 30 through anchor)
    pub fn generate(seed: u64, anchor: NaiveDate) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sales = Vec::new();
        let mut expenses = Vec::new();

        for offset in (0..=30).rev() {
            let date = anchor - Duration::days(offset);

            let sale_count = if is_weekday(date) {
                rng.gen_range(5..=12)
            } else {
                rng.gen_range(2..=5)
            };
            for _ in 0..sale_count {
                sales.push(PlannedSale {
                    date,
                    hour: rng.gen_range(8..20),
                    product_index: rng.gen_range(0..Self::PRODUCT_COUNT),
                    quantity: rng.gen_range(1..=2),
                });
            }

            if date.day() == 5 {
                expenses.push(PlannedExpense {
                    date,
                    hour: 9,
                    description: "Monthly rent".to_string(),
                    category: "Rent".to_string(),
                    amount: dec!(2800.0),
                });
            }

            if rng.gen_bool(0.2) {
                let cents: i64 = rng.gen_range(10_000..40_000);
                expenses.push(PlannedExpense {
                    date,
                    hour: 15,
                    description: "Marketing/Ads".to_string(),
                    category: "Marketing".to_string(),
                    amount: Decimal::new(cents, 2),
                });
            }
        }

        Self {
            anchor,
            sales,
            expenses,
        }
    }
}

/// Writes a demo plan into the database for the fixed demo tenant
#[derive(Debug, Clone)]
pub struct DemoDataSeeder {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct DemoProductRow {
    product_id: Uuid,
    price_retail: Decimal,
    currency: String,
}

impl DemoDataSeeder {
    /// Creates a new DemoDataSeeder with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds the demo tenant from the plan
    ///
    /// Ensures the demo company, cashier, and catalog exist, then purges and
    /// regenerates the tenant's sales and expenses in one transaction.
    /// Re-running replaces prior demo ledger data entirely.
    pub async fn setup_demo_data(
        &self,
        plan: &DemoPlan,
        currency: Currency,
    ) -> Result<(), DatabaseError> {
        let tz = Timezone::default();
        let demo_company = Company::demo_id();
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO companies (company_id, name, license_key, is_active, created_at)
            VALUES ($1, $2, $3, TRUE, $4)
            ON CONFLICT (company_id) DO NOTHING
            "#,
        )
        .bind(demo_company.as_uuid())
        .bind(DEMO_COMPANY_NAME)
        .bind("DEMO-2026")
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let password_hash = hash_password("demo123")
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        sqlx::query(
            r#"
            INSERT INTO users (user_id, username, password_hash, role, company_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(UserId::well_known(99).as_uuid())
        .bind(DEMO_USERNAME)
        .bind(&password_hash)
        .bind(Role::Admin.as_str())
        .bind(demo_company.as_uuid())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        let cashier: Uuid = sqlx::query_scalar(
            r#"
            SELECT user_id FROM users WHERE username = $1
            "#,
        )
        .bind(DEMO_USERNAME)
        .fetch_one(&mut *tx)
        .await?;

        let product_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products WHERE company_id = $1
            "#,
        )
        .bind(demo_company.as_uuid())
        .fetch_one(&mut *tx)
        .await?;

        if product_count == 0 {
            for spec in demo_products() {
                sqlx::query(
                    r#"
                    INSERT INTO products (
                        product_id, sku, name, category, price_retail, price_wholesale,
                        currency, stock, stock_min, company_id, created_at
                    ) VALUES ($1, $2, $3, 'general', $4, $5, $6, $7, $8, $9, $10)
                    "#,
                )
                .bind(Uuid::now_v7())
                .bind(spec.sku)
                .bind(spec.name)
                .bind(spec.price_retail)
                .bind(spec.price_wholesale)
                .bind(currency.code())
                .bind(spec.stock)
                .bind(spec.stock_min)
                .bind(demo_company.as_uuid())
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
            }
        }

        // Purge old demo ledger entries before regenerating.
        sqlx::query("DELETE FROM sales WHERE company_id = $1")
            .bind(demo_company.as_uuid())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM expenses WHERE company_id = $1")
            .bind(demo_company.as_uuid())
            .execute(&mut *tx)
            .await?;

        let products = sqlx::query_as::<_, DemoProductRow>(
            r#"
            SELECT product_id, price_retail, currency
            FROM products
            WHERE company_id = $1
            ORDER BY sku
            "#,
        )
        .bind(demo_company.as_uuid())
        .fetch_all(&mut *tx)
        .await?;

        if products.is_empty() {
            return Err(DatabaseError::ConstraintViolation(
                "demo tenant has no products to sell".to_string(),
            ));
        }

        for sale in &plan.sales {
            let product = &products[sale.product_index % products.len()];
            let occurred_at = tz.start_of_day(sale.date) + Duration::hours(sale.hour as i64);

            sqlx::query(
                r#"
                INSERT INTO sales (
                    sale_id, product_id, quantity, price, currency, kind,
                    occurred_at, user_id, company_id
                ) VALUES ($1, $2, $3, $4, $5, 'varejo', $6, $7, $8)
                "#,
            )
            .bind(SaleId::new_v7().as_uuid())
            .bind(product.product_id)
            .bind(sale.quantity as i32)
            .bind(product.price_retail)
            .bind(&product.currency)
            .bind(occurred_at)
            .bind(cashier)
            .bind(demo_company.as_uuid())
            .execute(&mut *tx)
            .await?;
        }

        for expense in &plan.expenses {
            let occurred_at = tz.start_of_day(expense.date) + Duration::hours(expense.hour as i64);

            sqlx::query(
                r#"
                INSERT INTO expenses (
                    expense_id, description, amount, currency, category,
                    occurred_at, company_id
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(&expense.description)
            .bind(expense.amount)
            .bind(currency.code())
            .bind(&expense.category)
            .bind(occurred_at)
            .bind(demo_company.as_uuid())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tracing::info!(
            sales = plan.sales.len(),
            expenses = plan.expenses.len(),
            "Demo data regenerated"
        );
        Ok(())
    }
}
