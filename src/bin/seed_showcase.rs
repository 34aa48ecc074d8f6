// 🏠 SHOWCASE SEEDING TOOL
// Inserts the launch portfolio projects and client testimonials into an empty database
// Usage: cargo run --bin seed_showcase --release

use std::sync::Arc;

use anyhow::{Context, Result};
use uuid::Uuid;

use bl_interiors::config::DatabaseConfig;
use bl_interiors::models::{
    PortfolioProjectInput, ProjectType, PublicationStatus, TestimonialInput,
};
use bl_interiors::repositories::{PgSiteStore, SiteStore};
use bl_interiors::services::ShowcaseService;

struct SeedProject {
    title: &'static str,
    category: ProjectType,
    client: &'static str,
    description: &'static str,
    featured: bool,
}

struct SeedTestimonial {
    name: &'static str,
    position: &'static str,
    company: &'static str,
    content: &'static str,
    /// Title of the project this testimonial is about, if any.
    project: Option<&'static str>,
}

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Maruti Suzuki Showroom",
        category: ProjectType::Showroom,
        client: "Maruti Suzuki",
        description: "Modern automotive showroom with premium display areas and customer experience zones.",
        featured: true,
    },
    SeedProject {
        title: "Taco Bell Restaurant",
        category: ProjectType::Hospitality,
        client: "Taco Bell",
        description: "Vibrant restaurant interior design with contemporary dining experience.",
        featured: true,
    },
    SeedProject {
        title: "Luxury Residence",
        category: ProjectType::Residential,
        client: "Private Client",
        description: "Elegant residential interior with premium finishes and sophisticated design.",
        featured: true,
    },
    SeedProject {
        title: "Future Group Store",
        category: ProjectType::Commercial,
        client: "Future Group",
        description: "Retail space design focused on customer flow and product showcase.",
        featured: false,
    },
    SeedProject {
        title: "Corporate Office",
        category: ProjectType::Commercial,
        client: "Wind World",
        description: "Professional office interior with modern workspaces and collaboration areas.",
        featured: false,
    },
    SeedProject {
        title: "Hotel Suite",
        category: ProjectType::Hospitality,
        client: "Burman Hospitality",
        description: "Luxurious hotel suite design with comfort and elegance at its core.",
        featured: false,
    },
];

const TESTIMONIALS: &[SeedTestimonial] = &[
    SeedTestimonial {
        name: "Rajesh Kumar",
        position: "Operations Manager",
        company: "Future Group",
        content: "BL Interiors transformed our retail spaces beyond expectations. Their attention to detail and understanding of customer flow dynamics resulted in increased footfall and sales.",
        project: Some("Future Group Store"),
    },
    SeedTestimonial {
        name: "Priya Sharma",
        position: "Facility Head",
        company: "Maruti Suzuki",
        content: "Working with BL Interiors on our showroom project was exceptional. They delivered a premium experience space that perfectly represents our brand values.",
        project: Some("Maruti Suzuki Showroom"),
    },
    SeedTestimonial {
        name: "Amit Patel",
        position: "Restaurant Manager",
        company: "Taco Bell",
        content: "The team at BL Interiors created a vibrant and functional restaurant space that enhances our customers' dining experience. Highly professional and creative.",
        project: Some("Taco Bell Restaurant"),
    },
    SeedTestimonial {
        name: "Sarah Johnson",
        position: "Regional Director",
        company: "Burman Hospitality",
        content: "Their expertise in hospitality design is unmatched. Every project delivered on time with superior quality and attention to guest experience.",
        project: Some("Hotel Suite"),
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("🏠 BL Interiors Showcase Seeding Tool");
    tracing::info!("=====================================");

    dotenvy::dotenv().ok();

    let database = DatabaseConfig::from_env().context("reading DATABASE_* settings")?;
    tracing::info!("Connecting to database {}...", database.database);
    let pool = database.connect().await.context("connecting to the database")?;

    let store = Arc::new(PgSiteStore::new(pool));
    let existing_projects = store.list_portfolio_projects().await?.len();
    let existing_testimonials = store.list_testimonials().await?.len();

    if existing_projects > 0 || existing_testimonials > 0 {
        tracing::warn!(
            "⚠️  Showcase already has {} projects and {} testimonials, nothing seeded",
            existing_projects,
            existing_testimonials
        );
        return Ok(());
    }

    let service = ShowcaseService::new(store);
    let seeder = Uuid::nil();

    let mut project_ids = Vec::with_capacity(PROJECTS.len());
    for project in PROJECTS {
        let created = service
            .create_project(
                PortfolioProjectInput {
                    title: project.title.to_string(),
                    description: Some(project.description.to_string()),
                    category: project.category,
                    client_name: Some(project.client.to_string()),
                    location: None,
                    completion_date: None,
                    project_size: None,
                    image_url: None,
                    gallery_images: Vec::new(),
                    featured: project.featured,
                    status: PublicationStatus::Active,
                },
                seeder,
            )
            .await?;
        project_ids.push((project.title, created.id));
    }
    tracing::info!("✅ Seeded {} portfolio projects", project_ids.len());

    for testimonial in TESTIMONIALS {
        let project_id = testimonial.project.and_then(|title| {
            project_ids
                .iter()
                .find(|(seeded, _)| *seeded == title)
                .map(|(_, id)| *id)
        });

        service
            .create_testimonial(
                TestimonialInput {
                    client_name: testimonial.name.to_string(),
                    client_title: Some(testimonial.position.to_string()),
                    company_name: Some(testimonial.company.to_string()),
                    testimonial_text: testimonial.content.to_string(),
                    rating: Some(5),
                    project_id,
                    image_url: None,
                    featured: true,
                    status: PublicationStatus::Active,
                },
                seeder,
            )
            .await?;
    }
    tracing::info!("✅ Seeded {} testimonials", TESTIMONIALS.len());

    Ok(())
}
