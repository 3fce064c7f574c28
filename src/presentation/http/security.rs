use crate::{
    application::services::identity::IdentityResolver,
    domain::{errors::DomainError, models::User},
    presentation::http::errors::ApiError,
};

/// Value of the `username` identity header, absent when the client sent none.
pub struct UsernameHeader(pub Option<String>);

impl UsernameHeader {
    /// A missing header names nobody, so it fails the same way an unknown
    /// username does.
    pub async fn into_user(self, resolver: &dyn IdentityResolver) -> Result<User, ApiError> {
        let username = self.0.ok_or(DomainError::UnknownUser(String::new()))?;
        Ok(resolver.resolve(&username).await?)
    }
}
