use tracing::warn;

use crate::{
    content::{
        application::ports::incoming::{CollectionUseCase, SingletonUseCase},
        domain::{Resource, SingletonResource},
    },
    site::domain::HomePage,
    AppState,
};

async fn collection_section<R: Resource>(use_case: &dyn CollectionUseCase<R>) -> Vec<R> {
    match use_case.list().await {
        Ok(items) => items,
        Err(err) => {
            warn!(section = R::COLLECTION, error = %err, "rendering empty section");
            Vec::new()
        }
    }
}

async fn singleton_section<R: SingletonResource>(use_case: &dyn SingletonUseCase<R>) -> Option<R> {
    match use_case.get().await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(section = R::COLLECTION, error = %err, "rendering empty section");
            None
        }
    }
}

/// Reads every section concurrently. Never fails.
pub async fn load_home_page(state: &AppState) -> HomePage {
    let (about, skills, experiences, educations, projects, contact, social_media) = futures::join!(
        singleton_section(state.about_me.as_ref()),
        collection_section(state.skills.manage.as_ref()),
        collection_section(state.experiences.manage.as_ref()),
        collection_section(state.educations.manage.as_ref()),
        collection_section(state.projects.manage.as_ref()),
        singleton_section(state.contact.as_ref()),
        collection_section(state.social_media.manage.as_ref()),
    );

    HomePage {
        about,
        skills,
        experiences,
        educations,
        projects,
        contact,
        social_media,
    }
}
