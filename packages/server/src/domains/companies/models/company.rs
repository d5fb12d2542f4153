use anyhow::Result;
use ats_client::AtsProvider;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::CompanyId;

/// Company - an employer whose job board we track
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub slug: String,

    // ATS board coordinates
    pub ats_provider: String, // 'greenhouse', 'lever', 'ashby', 'pinpoint', 'careerpuck', 'workday'
    pub ats_id: String,

    // Enrichment
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,

    pub stage: Option<String>, // 'pre-seed', 'seed', 'series-a', ..., 'unicorn', 'public'
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Funding stage enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompanyStage {
    #[serde(rename = "pre-seed")]
    PreSeed,
    #[serde(rename = "seed")]
    Seed,
    #[serde(rename = "series-a")]
    SeriesA,
    #[serde(rename = "series-b")]
    SeriesB,
    #[serde(rename = "series-c")]
    SeriesC,
    #[serde(rename = "series-d+")]
    SeriesDPlus,
    #[serde(rename = "unicorn")]
    Unicorn,
    #[serde(rename = "public")]
    Public,
}

impl std::fmt::Display for CompanyStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanyStage::PreSeed => write!(f, "pre-seed"),
            CompanyStage::Seed => write!(f, "seed"),
            CompanyStage::SeriesA => write!(f, "series-a"),
            CompanyStage::SeriesB => write!(f, "series-b"),
            CompanyStage::SeriesC => write!(f, "series-c"),
            CompanyStage::SeriesDPlus => write!(f, "series-d+"),
            CompanyStage::Unicorn => write!(f, "unicorn"),
            CompanyStage::Public => write!(f, "public"),
        }
    }
}

impl std::str::FromStr for CompanyStage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pre-seed" => Ok(CompanyStage::PreSeed),
            "seed" => Ok(CompanyStage::Seed),
            "series-a" => Ok(CompanyStage::SeriesA),
            "series-b" => Ok(CompanyStage::SeriesB),
            "series-c" => Ok(CompanyStage::SeriesC),
            "series-d+" => Ok(CompanyStage::SeriesDPlus),
            "unicorn" => Ok(CompanyStage::Unicorn),
            "public" => Ok(CompanyStage::Public),
            _ => Err(anyhow::anyhow!("Invalid company stage: {}", s)),
        }
    }
}

impl Company {
    /// Parse the stored ATS provider tag.
    ///
    /// Kept as a string column so one company with a bad tag fails its own
    /// sync unit instead of breaking the whole company fetch.
    pub fn provider(&self) -> Result<AtsProvider> {
        Ok(self.ats_provider.parse()?)
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Company {
    /// Find company by ID
    pub async fn find_by_id(id: CompanyId, pool: &PgPool) -> Result<Option<Self>> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(company)
    }

    /// Find company by slug
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await?;
        Ok(company)
    }

    /// Find all active companies, in stable name order
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies
             WHERE is_active = true
             ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(companies)
    }

    /// Update company logo URL
    pub async fn set_logo(id: CompanyId, logo_url: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "UPDATE companies
             SET logo_url = $2, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(logo_url)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Update company description
    pub async fn set_description(id: CompanyId, description: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "UPDATE companies
             SET description = $2, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(description)
        .execute(pool)
        .await?;
        Ok(())
    }
}
