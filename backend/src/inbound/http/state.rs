//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only ever see the driving ports.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the user directory.
    pub users: Arc<dyn UsersQuery>,
    /// Write side of the user directory.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from separate port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster_backend::domain::UserDirectoryService;
    /// use roster_backend::inbound::http::state::HttpState;
    /// use roster_backend::outbound::persistence::InMemoryUserRepository;
    ///
    /// let service = UserDirectoryService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self {
            users: service.clone(),
            users_command: service,
        }
    }
}
