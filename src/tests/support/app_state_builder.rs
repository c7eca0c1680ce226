use actix_web::web;
use std::sync::Arc;

use crate::{
    about_me::domain::entities::AboutMe,
    contact::domain::entities::Contact,
    content::{
        application::{
            ports::incoming::SingletonUseCase,
            services::{CollectionService, OrderedCollectionService, SingletonService},
            CollectionUseCases,
        },
        domain::{OrderedResource, Resource, SingletonResource},
    },
    education::domain::entities::Education,
    experience::domain::entities::Experience,
    media::{
        application::ports::outgoing::{image_store::MockImageStore, ImageStore},
        domain::UploadPolicy,
    },
    project::domain::entities::Project,
    skill::domain::entities::Skill,
    social_media::domain::entities::SocialMedia,
    tests::support::in_memory::{InMemoryCollection, InMemorySingleton},
    AppState,
};

/// Ordered use cases (create with next order, reorder) over an in-memory repository.
pub fn ordered<R: OrderedResource>(repo: InMemoryCollection<R>) -> CollectionUseCases<R> {
    CollectionUseCases::ordered(Arc::new(OrderedCollectionService::new(repo)))
}

pub fn unordered<R: Resource>(repo: InMemoryCollection<R>) -> CollectionUseCases<R> {
    CollectionUseCases::unordered(Arc::new(CollectionService::new(repo)))
}

fn singleton<R: SingletonResource>(repo: InMemorySingleton<R>) -> Arc<dyn SingletonUseCase<R>> {
    Arc::new(SingletonService::new(repo))
}

/// Every collection starts empty and in memory; the image store accepts no
/// calls unless one is supplied.
pub struct TestAppStateBuilder {
    about_me: Arc<dyn SingletonUseCase<AboutMe>>,
    contact: Arc<dyn SingletonUseCase<Contact>>,
    skills: CollectionUseCases<Skill>,
    experiences: CollectionUseCases<Experience>,
    educations: CollectionUseCases<Education>,
    projects: CollectionUseCases<Project>,
    social_media: CollectionUseCases<SocialMedia>,
    image_store: Arc<dyn ImageStore>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            about_me: singleton(InMemorySingleton::empty()),
            contact: singleton(InMemorySingleton::empty()),
            skills: ordered(InMemoryCollection::new()),
            experiences: unordered(InMemoryCollection::new()),
            educations: unordered(InMemoryCollection::new()),
            projects: ordered(InMemoryCollection::new()),
            social_media: ordered(InMemoryCollection::new()),
            image_store: Arc::new(MockImageStore::new()),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_about_me(mut self, repo: InMemorySingleton<AboutMe>) -> Self {
        self.about_me = singleton(repo);
        self
    }

    pub fn with_contact(mut self, repo: InMemorySingleton<Contact>) -> Self {
        self.contact = singleton(repo);
        self
    }

    pub fn with_skills(mut self, uc: CollectionUseCases<Skill>) -> Self {
        self.skills = uc;
        self
    }

    pub fn with_experiences(mut self, uc: CollectionUseCases<Experience>) -> Self {
        self.experiences = uc;
        self
    }

    pub fn with_educations(mut self, uc: CollectionUseCases<Education>) -> Self {
        self.educations = uc;
        self
    }

    pub fn with_projects(mut self, uc: CollectionUseCases<Project>) -> Self {
        self.projects = uc;
        self
    }

    pub fn with_social_media(mut self, uc: CollectionUseCases<SocialMedia>) -> Self {
        self.social_media = uc;
        self
    }

    pub fn with_image_store(mut self, store: impl ImageStore + 'static) -> Self {
        self.image_store = Arc::new(store);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            about_me: self.about_me,
            contact: self.contact,
            skills: self.skills,
            experiences: self.experiences,
            educations: self.educations,
            projects: self.projects,
            social_media: self.social_media,
            image_store: self.image_store,
            upload_policy: self.upload_policy,
        })
    }
}
