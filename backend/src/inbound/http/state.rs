//! Driving ports handed to every handler through `web::Data`.

use std::sync::Arc;

use crate::domain::ports::{PunchCommand, PunchQuery, UsersCommand, UsersQuery};

#[derive(Clone)]
pub struct HttpState {
    pub punches: Arc<dyn PunchCommand>,
    pub punches_query: Arc<dyn PunchQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use timecard::domain::{PunchService, UserDirectoryService};
    /// use timecard::inbound::http::state::HttpState;
    /// use timecard::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let punches = Arc::new(PunchService::new(store.clone(), Arc::new(DefaultClock)));
    /// let users = Arc::new(UserDirectoryService::new(store));
    /// let _state = HttpState::new(punches.clone(), punches, users.clone(), users);
    /// ```
    pub fn new(
        punches: Arc<dyn PunchCommand>,
        punches_query: Arc<dyn PunchQuery>,
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
    ) -> Self {
        Self {
            punches,
            punches_query,
            users,
            users_query,
        }
    }
}
