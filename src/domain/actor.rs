use super::{Role, UserId};

/// The authenticated identity behind a request.
///
/// Every policy decision receives one of these explicitly; nothing in the
/// domain layer reads the current user from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is(&self, user_id: &UserId) -> bool {
        &self.id == user_id
    }
}
