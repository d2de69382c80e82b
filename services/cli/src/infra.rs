use std::collections::HashMap;

use leavedesk::workflows::leave::domain::Actor;
use leavedesk::workflows::leave::ActorDirectory;

/// Fixed account roster backing CLI session lookups.
#[derive(Default, Clone)]
pub(crate) struct RosterDirectory {
    accounts: HashMap<String, Actor>,
}

impl RosterDirectory {
    pub(crate) fn with_accounts(accounts: Vec<Actor>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|actor| (actor.id.clone(), actor))
            .collect();
        Self { accounts }
    }
}

impl ActorDirectory for RosterDirectory {
    fn lookup(&self, actor_id: &str) -> Option<Actor> {
        self.accounts.get(actor_id).cloned()
    }
}
