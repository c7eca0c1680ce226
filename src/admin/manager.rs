use std::collections::HashSet;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{
    client::ResourceClient,
    notifications::{Notification, Notifications},
};
use crate::content::domain::{resequence, OrderedResource, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Skeleton placeholder.
    Loading,
    Ready,
    /// Empty state; the cause went out as a notification.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    Saved(R),
    /// Rejected locally or by the server; the message was queued.
    Rejected,
    /// A previous submit is still in flight.
    Busy,
}

struct ManagerState<R: Resource> {
    load: LoadState,
    items: Vec<R>,
    form_open: bool,
    mode: FormMode,
    form: R::Payload,
    submitting: bool,
    pending_deletes: HashSet<Uuid>,
    notifications: Notifications,
}

/// View model behind one admin collection page: the item list, a single
/// collapsible add/edit form, per-row deletes and drag reordering.
///
/// The lock is never held across a client call, so a delete on one row does
/// not wait for a delete on another.
pub struct AdminManager<R: Resource, C: ResourceClient<R>> {
    client: C,
    state: Mutex<ManagerState<R>>,
}

impl<R: Resource, C: ResourceClient<R>> AdminManager<R, C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: Mutex::new(ManagerState {
                load: LoadState::Loading,
                items: Vec::new(),
                form_open: false,
                mode: FormMode::Adding,
                form: R::Payload::default(),
                submitting: false,
                pending_deletes: HashSet::new(),
                notifications: Notifications::default(),
            }),
        }
    }

    pub async fn load(&self) {
        self.state.lock().await.load = LoadState::Loading;

        let result = self.client.list().await;

        let mut state = self.state.lock().await;
        match result {
            Ok(items) => {
                state.items = items;
                state.load = LoadState::Ready;
            }
            Err(err) => {
                state.items.clear();
                state.load = LoadState::Failed;
                state
                    .notifications
                    .error(format!("Failed to load {}: {}", R::COLLECTION, err));
            }
        }
    }

    // ─── Form ────────────────────────────────────────────────

    pub async fn open_add_form(&self) {
        let mut state = self.state.lock().await;
        state.mode = FormMode::Adding;
        state.form = R::Payload::default();
        state.form_open = true;
    }

    /// Loads an existing item into the form. `false` if the id is not listed.
    pub async fn start_edit(&self, id: Uuid) -> bool {
        let mut state = self.state.lock().await;
        let Some(form) = state.items.iter().find(|i| i.id() == id).map(R::to_payload) else {
            return false;
        };
        state.form = form;
        state.mode = FormMode::Editing(id);
        state.form_open = true;
        true
    }

    pub async fn edit_form<F>(&self, edit: F)
    where
        F: FnOnce(&mut R::Payload) + Send,
    {
        edit(&mut self.state.lock().await.form);
    }

    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        state.mode = FormMode::Adding;
        state.form = R::Payload::default();
        state.form_open = false;
    }

    pub async fn submit(&self) -> SubmitOutcome<R> {
        let (mode, form) = {
            let mut state = self.state.lock().await;
            if state.submitting {
                return SubmitOutcome::Busy;
            }

            let local_check = match state.mode {
                FormMode::Adding => R::validate_draft(state.form.clone()).err(),
                FormMode::Editing(_) => R::validate_changes(state.form.clone()).err(),
            };
            if let Some(err) = local_check {
                state.notifications.error(err.message());
                return SubmitOutcome::Rejected;
            }

            state.submitting = true;
            (state.mode, state.form.clone())
        };

        let result = match mode {
            FormMode::Adding => self.client.create(&form).await,
            FormMode::Editing(id) => self.client.update(id, &form).await,
        };

        let mut state = self.state.lock().await;
        state.submitting = false;

        match result {
            Ok(saved) => {
                match mode {
                    FormMode::Adding => {
                        state.items.push(saved.clone());
                        R::arrange(&mut state.items);
                        state.notifications.success(format!("{} added", R::NAME));
                    }
                    FormMode::Editing(id) => {
                        if let Some(slot) = state.items.iter_mut().find(|i| i.id() == id) {
                            *slot = saved.clone();
                        }
                        R::arrange(&mut state.items);
                        state.notifications.success(format!("{} updated", R::NAME));
                    }
                }
                state.mode = FormMode::Adding;
                state.form = R::Payload::default();
                state.form_open = false;
                SubmitOutcome::Saved(saved)
            }
            Err(err) => {
                // Server messages are shown verbatim.
                state.notifications.error(err.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    // ─── Rows ────────────────────────────────────────────────

    /// `false` if a delete for this row is already pending or it failed.
    pub async fn delete(&self, id: Uuid) -> bool {
        if !self.state.lock().await.pending_deletes.insert(id) {
            return false;
        }

        let result = self.client.remove(id).await;

        let mut state = self.state.lock().await;
        state.pending_deletes.remove(&id);
        match result {
            Ok(_) => {
                state.items.retain(|i| i.id() != id);
                state.notifications.success(format!("{} deleted", R::NAME));
                true
            }
            Err(err) => {
                state.notifications.error(err.to_string());
                false
            }
        }
    }

    // ─── Accessors ───────────────────────────────────────────

    pub async fn items(&self) -> Vec<R> {
        self.state.lock().await.items.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.lock().await.load
    }

    pub async fn mode(&self) -> FormMode {
        self.state.lock().await.mode
    }

    pub async fn form(&self) -> R::Payload {
        self.state.lock().await.form.clone()
    }

    pub async fn is_form_open(&self) -> bool {
        self.state.lock().await.form_open
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.lock().await.submitting
    }

    pub async fn is_deleting(&self, id: Uuid) -> bool {
        self.state.lock().await.pending_deletes.contains(&id)
    }

    pub async fn take_notifications(&self) -> Vec<Notification> {
        self.state.lock().await.notifications.drain()
    }
}

impl<R: OrderedResource, C: ResourceClient<R>> AdminManager<R, C> {
    /// Drag and drop: moves one row, renumbers every row by position and
    /// sends the whole sequence in one request. Reverts on failure.
    pub async fn move_item(&self, from: usize, to: usize) -> bool {
        let (previous, batch) = {
            let mut state = self.state.lock().await;
            let len = state.items.len();
            if from >= len || to >= len || from == to {
                return false;
            }

            let previous = state.items.clone();
            let moved = state.items.remove(from);
            state.items.insert(to, moved);

            let batch = resequence(&mut state.items);
            (previous, batch)
        };

        let result = self.client.reorder(&batch).await;

        let mut state = self.state.lock().await;
        match result {
            Ok(items) => {
                state.items = items;
                true
            }
            Err(err) => {
                state.items = previous;
                state
                    .notifications
                    .error(format!("Failed to update order: {err}"));
                false
            }
        }
    }
}
