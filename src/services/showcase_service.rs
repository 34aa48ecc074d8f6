use uuid::Uuid;

use crate::models::{PortfolioProject, PortfolioProjectInput, Testimonial, TestimonialInput};
use crate::repositories::{DynSiteStore, StoreError};
use crate::utils::log_sanitizer::sanitize_for_log;

/// Admin edits to the public showcase: portfolio projects and testimonials.
#[derive(Clone)]
pub struct ShowcaseService {
    store: DynSiteStore,
}

impl ShowcaseService {
    pub fn new(store: DynSiteStore) -> Self {
        Self { store }
    }

    pub async fn create_project(&self, input: PortfolioProjectInput, editor: Uuid) -> Result<PortfolioProject, StoreError> {
        let title = sanitize_for_log(&input.title);
        let project = self.store.create_portfolio_project(input).await?;
        tracing::info!(project_id = %project.id, editor = %editor, "Portfolio project created: {}", title);
        Ok(project)
    }

    pub async fn replace_project(&self, id: Uuid, input: PortfolioProjectInput, editor: Uuid) -> Result<PortfolioProject, StoreError> {
        let project = self.store.replace_portfolio_project(id, input).await?;
        tracing::info!(project_id = %id, editor = %editor, status = ?project.status, "Portfolio project updated");
        Ok(project)
    }

    pub async fn delete_project(&self, id: Uuid, editor: Uuid) -> Result<(), StoreError> {
        self.store.delete_portfolio_project(id).await?;
        tracing::info!(project_id = %id, editor = %editor, "Portfolio project deleted");
        Ok(())
    }

    pub async fn create_testimonial(&self, input: TestimonialInput, editor: Uuid) -> Result<Testimonial, StoreError> {
        let client = sanitize_for_log(&input.client_name);
        let testimonial = self.store.create_testimonial(input).await?;
        tracing::info!(testimonial_id = %testimonial.id, editor = %editor, "Testimonial created for {}", client);
        Ok(testimonial)
    }

    pub async fn replace_testimonial(&self, id: Uuid, input: TestimonialInput, editor: Uuid) -> Result<Testimonial, StoreError> {
        let testimonial = self.store.replace_testimonial(id, input).await?;
        tracing::info!(testimonial_id = %id, editor = %editor, status = ?testimonial.status, "Testimonial updated");
        Ok(testimonial)
    }

    pub async fn delete_testimonial(&self, id: Uuid, editor: Uuid) -> Result<(), StoreError> {
        self.store.delete_testimonial(id).await?;
        tracing::info!(testimonial_id = %id, editor = %editor, "Testimonial deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectType, PublicationStatus};
    use crate::repositories::{MemoryStore, SiteStore};
    use std::sync::Arc;

    fn project_input(title: &str, status: PublicationStatus) -> PortfolioProjectInput {
        PortfolioProjectInput {
            title: title.to_string(),
            description: None,
            category: ProjectType::Residential,
            client_name: None,
            location: Some("Pune".to_string()),
            completion_date: None,
            project_size: None,
            image_url: None,
            gallery_images: Vec::new(),
            featured: false,
            status,
        }
    }

    #[tokio::test]
    async fn test_published_project_appears_in_active_list() {
        let store = MemoryStore::new();
        let service = ShowcaseService::new(Arc::new(store.clone()));
        let editor = Uuid::new_v4();

        let draft = service
            .create_project(project_input("Villa", PublicationStatus::Draft), editor)
            .await
            .unwrap();
        assert!(store.list_active_portfolio_projects().await.unwrap().is_empty());

        service
            .replace_project(draft.id, project_input("Villa", PublicationStatus::Active), editor)
            .await
            .unwrap();
        let active = store.list_active_portfolio_projects().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, draft.id);
    }

    #[tokio::test]
    async fn test_delete_testimonial_twice_is_not_found() {
        let store = MemoryStore::new();
        let service = ShowcaseService::new(Arc::new(store.clone()));
        let editor = Uuid::new_v4();

        let testimonial = service
            .create_testimonial(
                TestimonialInput {
                    client_name: "Anita Desai".to_string(),
                    client_title: Some("Homeowner".to_string()),
                    company_name: None,
                    testimonial_text: "Our home feels brand new.".to_string(),
                    rating: Some(5),
                    project_id: None,
                    image_url: None,
                    featured: true,
                    status: PublicationStatus::Active,
                },
                editor,
            )
            .await
            .unwrap();

        service.delete_testimonial(testimonial.id, editor).await.unwrap();
        let again = service.delete_testimonial(testimonial.id, editor).await;
        assert!(matches!(again, Err(StoreError::NotFound)));
    }
}
