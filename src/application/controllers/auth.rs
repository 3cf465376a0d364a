//! AuthController - login, sign-up and account maintenance.
//!
//! Login and sign-up are public: a 401 from `/auth/login` means wrong
//! credentials, not an expired session, so it is never redirected. Profile
//! changes require a session and are guarded.

use std::sync::Arc;

use crate::application::{ApiClient, SessionGuard};
use crate::domain::auth::{LoginRequest, SignUpRequest, UpdateUserRequest, User};
use crate::domain::foundation::UserId;
use crate::domain::ApiResult;
use crate::ports::ApiRequest;

#[derive(Clone)]
pub struct AuthController {
    client: Arc<ApiClient>,
    guard: SessionGuard,
}

impl AuthController {
    pub fn new(client: Arc<ApiClient>, guard: SessionGuard) -> Self {
        Self { client, guard }
    }

    /// `POST /auth/login`. On success the backend sets the session cookie.
    pub async fn login(&self, payload: &LoginRequest) -> ApiResult<()> {
        self.client
            .send_unit(ApiRequest::post("/auth/login").json(payload))
            .await
    }

    /// `POST /auth/signup`. Returns the new user's id.
    pub async fn signup(&self, payload: &SignUpRequest) -> ApiResult<UserId> {
        self.client
            .send(ApiRequest::post("/auth/signup").json(payload))
            .await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: UserId, payload: &UpdateUserRequest) -> ApiResult<User> {
        let result = self
            .client
            .send(ApiRequest::put(format!("/users/{id}")).json(payload))
            .await;
        self.guard.guard(result)
    }

    /// `DELETE /users/{id}`
    pub async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let result = self
            .client
            .send_unit(ApiRequest::delete(format!("/users/{id}")))
            .await;
        self.guard.guard(result)
    }
}
