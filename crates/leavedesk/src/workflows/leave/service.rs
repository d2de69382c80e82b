use std::sync::Arc;

use serde_json::Value;

use super::domain::{
    Actor, LeaveDecision, LeaveDraft, LeaveRequest, LeaveSubmission, Role, SubmissionError,
    TransitionError,
};
use super::intake::ValidationError;
use super::store::LeaveRequestStore;
use super::views;

/// Session collaborator resolving actor ids to identity snapshots.
pub trait ActorDirectory: Send + Sync {
    fn lookup(&self, actor_id: &str) -> Option<Actor>;
}

/// Role-gated facade over the leave request store.
///
/// Students submit on their own behalf; faculty and warden accounts decide
/// requests and run bulk imports.
pub struct LeaveDeskService<D> {
    directory: Arc<D>,
    store: LeaveRequestStore,
}

impl<D> LeaveDeskService<D>
where
    D: ActorDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self::with_store(directory, LeaveRequestStore::new())
    }

    pub fn with_store(directory: Arc<D>, store: LeaveRequestStore) -> Self {
        Self { directory, store }
    }

    /// Submits a new request on behalf of the authenticated student; the
    /// record's identity fields come from the directory, not the draft.
    pub fn submit(
        &mut self,
        actor_id: &str,
        draft: LeaveDraft,
    ) -> Result<LeaveRequest, LeaveDeskError> {
        let actor = self.authenticate(actor_id)?;
        if actor.role != Role::Student {
            return Err(LeaveDeskError::NotPermitted {
                role: actor.role,
                action: "submit leave requests",
            });
        }

        let submission = LeaveSubmission::from_draft(&actor, draft);
        let request = self.store.create(submission)?;
        Ok(request)
    }

    /// Approves or rejects a request on behalf of a staff actor.
    pub fn decide(
        &mut self,
        actor_id: &str,
        request_id: &str,
        decision: LeaveDecision,
    ) -> Result<LeaveRequest, LeaveDeskError> {
        let actor = self.authenticate(actor_id)?;
        if !actor.role.is_staff() {
            return Err(LeaveDeskError::NotPermitted {
                role: actor.role,
                action: "decide leave requests",
            });
        }

        let request = self.store.transition(request_id, decision)?;
        Ok(request)
    }

    /// Replaces the collection from a raw import payload (staff only).
    pub fn import(&mut self, actor_id: &str, raw: &Value) -> Result<usize, LeaveDeskError> {
        let actor = self.authenticate(actor_id)?;
        if !actor.role.is_staff() {
            return Err(LeaveDeskError::NotPermitted {
                role: actor.role,
                action: "import leave requests",
            });
        }

        let accepted = self.store.replace_all(raw)?;
        Ok(accepted)
    }

    /// Requests the actor may see: own submissions for students, the whole
    /// collection for staff.
    pub fn requests_for(&self, actor_id: &str) -> Result<Vec<LeaveRequest>, LeaveDeskError> {
        let actor = self.authenticate(actor_id)?;
        let all = self.store.list();
        let scoped = if actor.role.is_staff() {
            all.to_vec()
        } else {
            views::by_student(all, &actor.id)
        };
        Ok(scoped)
    }

    pub fn store(&self) -> &LeaveRequestStore {
        &self.store
    }

    fn authenticate(&self, actor_id: &str) -> Result<Actor, LeaveDeskError> {
        self.directory
            .lookup(actor_id)
            .ok_or_else(|| LeaveDeskError::UnknownActor(actor_id.to_owned()))
    }
}

/// Errors surfaced by the desk facade.
#[derive(Debug, thiserror::Error)]
pub enum LeaveDeskError {
    #[error("no account found for actor {0}")]
    UnknownActor(String),
    #[error("{role} accounts cannot {action}")]
    NotPermitted { role: Role, action: &'static str },
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
