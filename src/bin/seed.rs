//! Seed script for development — populates a fresh database with two tenants
//! and sample asset data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env).

use assetdesk::models::user::UserRole;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SEED_PASSWORD: &str = "Test123!";

/// (name, value in cents, leasable) per category.
type SeedAsset = (&'static str, i64, bool);

struct SeedTenant {
    name: &'static str,
    slug: &'static str,
    asset_module_enabled: bool,
    categories: &'static [(&'static str, &'static [SeedAsset])],
    members: &'static [&'static str],
}

const TENANTS: &[SeedTenant] = &[
    SeedTenant {
        name: "Acme Library",
        slug: "acme",
        asset_module_enabled: true,
        categories: &[
            (
                "Laptops",
                &[
                    ("ThinkPad X1 #1", 149_900, true),
                    ("ThinkPad X1 #2", 149_900, true),
                    ("MacBook Air", 119_900, false),
                ],
            ),
            (
                "AV Equipment",
                &[("Projector", 64_950, true), ("PA Speaker", 38_000, true)],
            ),
            ("Vehicles", &[]),
        ],
        members: &["Ada Lovelace", "Grace Hopper"],
    },
    SeedTenant {
        name: "Globex Tool Share",
        slug: "globex",
        asset_module_enabled: false,
        categories: &[("Power Tools", &[("Cordless Drill", 12_999, true)])],
        members: &["Hank Scorpio"],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")?;
    let pool = assetdesk::db::create_pool(&db_url, 5).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== AssetDesk Seed Script ===");

    for tenant in TENANTS {
        seed_tenant(&pool, tenant).await?;
    }

    println!("\n=== Seed complete! ===");
    println!("Logins: acme_admin, acme_staff, globex_admin / {SEED_PASSWORD}");

    Ok(())
}

async fn seed_tenant(pool: &PgPool, seed: &SeedTenant) -> anyhow::Result<()> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tenants WHERE slug = $1)")
        .bind(seed.slug)
        .fetch_one(pool)
        .await?;
    if exists {
        println!("[skip] Tenant '{}' already exists", seed.slug);
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    let tenant_id = Uuid::now_v7();
    sqlx::query(
        "INSERT INTO tenants (id, name, slug, asset_module_enabled) VALUES ($1, $2, $3, $4)",
    )
    .bind(tenant_id)
    .bind(seed.name)
    .bind(seed.slug)
    .bind(seed.asset_module_enabled)
    .execute(&mut *tx)
    .await?;

    let hash = assetdesk::services::auth::hash_password(SEED_PASSWORD)?;
    for (suffix, role) in [("admin", UserRole::TenantAdmin), ("staff", UserRole::Staff)] {
        let username = format!("{}_{suffix}", seed.slug);
        sqlx::query(
            "INSERT INTO users (id, tenant_id, username, email, password_hash, display_name, role)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::now_v7())
        .bind(tenant_id)
        .bind(&username)
        .bind(format!("{username}@{}.local", seed.slug))
        .bind(&hash)
        .bind(format!("{} {suffix}", seed.name))
        .bind(role)
        .execute(&mut *tx)
        .await?;
    }

    let mut member_ids = Vec::new();
    for name in seed.members {
        let id = Uuid::now_v7();
        sqlx::query("INSERT INTO members (id, tenant_id, name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(tenant_id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
        member_ids.push(id);
    }

    let mut asset_count = 0;
    let mut leasable_ids = Vec::new();
    for (category_name, assets) in seed.categories {
        let category_id = Uuid::now_v7();
        sqlx::query("INSERT INTO asset_categories (id, tenant_id, name) VALUES ($1, $2, $3)")
            .bind(category_id)
            .bind(tenant_id)
            .bind(category_name)
            .execute(&mut *tx)
            .await?;

        for (name, cents, leasable) in assets.iter() {
            let asset_id = Uuid::now_v7();
            asset_count += 1;
            sqlx::query(
                "INSERT INTO assets (id, tenant_id, category_id, name, asset_tag, current_value, is_leasable)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(asset_id)
            .bind(tenant_id)
            .bind(category_id)
            .bind(name)
            .bind(format!("{}-{asset_count:04}", seed.slug.to_uppercase()))
            .bind(Decimal::new(*cents, 2))
            .bind(leasable)
            .execute(&mut *tx)
            .await?;

            if *leasable {
                leasable_ids.push(asset_id);
            }
        }
    }

    // First leasable asset goes out on an active lease; the second has a
    // finished lease and a scheduled maintenance visit.
    if let (Some(&asset_id), Some(&member_id)) = (leasable_ids.first(), member_ids.first()) {
        sqlx::query(
            "INSERT INTO asset_leases (id, tenant_id, asset_id, member_id, status)
             VALUES ($1, $2, $3, $4, 'active')",
        )
        .bind(Uuid::now_v7())
        .bind(tenant_id)
        .bind(asset_id)
        .bind(member_id)
        .execute(&mut *tx)
        .await?;
    }
    if let (Some(&asset_id), Some(&member_id)) = (leasable_ids.get(1), member_ids.last()) {
        sqlx::query(
            "INSERT INTO asset_leases (id, tenant_id, asset_id, member_id, status, ends_at)
             VALUES ($1, $2, $3, $4, 'inactive', NOW())",
        )
        .bind(Uuid::now_v7())
        .bind(tenant_id)
        .bind(asset_id)
        .bind(member_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO asset_maintenances (id, tenant_id, asset_id, status, scheduled_for)
             VALUES ($1, $2, $3, 'scheduled', NOW() + INTERVAL '7 days')",
        )
        .bind(Uuid::now_v7())
        .bind(tenant_id)
        .bind(asset_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    println!(
        "[done] Tenant '{}': {} categories, {asset_count} assets",
        seed.slug,
        seed.categories.len()
    );
    Ok(())
}
