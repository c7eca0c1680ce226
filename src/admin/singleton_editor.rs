use tokio::sync::Mutex;

use super::{
    client::SingletonClient,
    manager::{LoadState, SubmitOutcome},
    notifications::{Notification, Notifications},
};
use crate::content::domain::SingletonResource;

struct EditorState<R: SingletonResource> {
    load: LoadState,
    current: Option<R>,
    form: R::Payload,
    submitting: bool,
    notifications: Notifications,
}

/// Form behind the AboutMe and Contact admin pages.
pub struct SingletonEditor<R: SingletonResource, C: SingletonClient<R>> {
    client: C,
    state: Mutex<EditorState<R>>,
}

impl<R: SingletonResource, C: SingletonClient<R>> SingletonEditor<R, C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(EditorState {
                load: LoadState::Loading,
                current: None,
                form: R::Payload::default(),
                submitting: false,
                notifications: Notifications::default(),
            }),
        }
    }

    pub async fn load(&self) {
        self.state.lock().await.load = LoadState::Loading;

        let result = self.client.fetch().await;

        let mut state = self.state.lock().await;
        match result {
            Ok(doc) => {
                state.form = doc.as_ref().map(R::to_payload).unwrap_or_default();
                state.current = doc;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.load = LoadState::Failed;
                state
                    .notifications
                    .error(format!("Failed to load {}: {}", R::NAME, err));
            }
        }
    }

    pub async fn edit_form<F>(&self, edit: F)
    where
        F: FnOnce(&mut R::Payload) + Send,
    {
        edit(&mut self.state.lock().await.form);
    }

    /// Upserts the form. The first save must be a complete document.
    pub async fn save(&self) -> SubmitOutcome<R> {
        let form = {
            let mut state = self.state.lock().await;
            if state.submitting {
                return SubmitOutcome::Busy;
            }

            let local_check = if state.current.is_some() {
                R::validate_changes(state.form.clone()).err()
            } else {
                R::validate_draft(state.form.clone()).err()
            };
            if let Some(err) = local_check {
                state.notifications.error(err.message());
                return SubmitOutcome::Rejected;
            }

            state.submitting = true;
            state.form.clone()
        };

        let result = self.client.save(&form).await;

        let mut state = self.state.lock().await;
        state.submitting = false;
        match result {
            Ok(saved) => {
                state.form = saved.to_payload();
                state.current = Some(saved.clone());
                state.notifications.success(format!("{} saved", R::NAME));
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                state.notifications.error(err.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    pub async fn current(&self) -> Option<R> {
        self.state.lock().await.current.clone()
    }

    pub async fn form(&self) -> R::Payload {
        self.state.lock().await.form.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.lock().await.load
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.state.lock().await.notifications.drain()
    }
}
