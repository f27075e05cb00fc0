//! REST API helpers for communicating with the remote portfolio service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying an
//! `Authorization` header computed from the caller's session snapshot.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs. The service's JSON `message` field
//! is surfaced verbatim when present; otherwise a status-code fallback is
//! used. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AccountSummary, Contact, Education, NewContact, NewEducation, NewProject, Project, Role,
    SignInResponse,
};
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use super::authorize;

#[cfg(any(test, feature = "hydrate"))]
fn contact_endpoint(id: &str) -> String {
    format!("/api/contacts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn education_endpoint(id: &str) -> String {
    format!("/api/educations/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(id: &str) -> String {
    format!("/api/portfolio/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn account_role_endpoint(id: &str) -> String {
    format!("/api/users/{id}/role")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Extract the service's own error message from a response body, falling back
/// to the status-derived message for non-JSON bodies.
#[cfg(any(test, feature = "hydrate"))]
fn service_message(body: &str, fallback: String) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or(fallback)
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, action: &str) -> String {
    let fallback = request_failed_message(action, resp.status());
    match resp.text().await {
        Ok(body) => service_message(&body, fallback),
        Err(_) => fallback,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    session: &SessionState,
    action: &str,
) -> Result<T, String> {
    let resp = authorize::apply(gloo_net::http::Request::get(path), session)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failure(resp, action).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    path: &str,
    session: &SessionState,
    body: &B,
    action: &str,
) -> Result<(), String> {
    let resp = authorize::apply(gloo_net::http::Request::post(path), session)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failure(resp, action).await);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn delete(path: &str, session: &SessionState, action: &str) -> Result<(), String> {
    let resp = authorize::apply(gloo_net::http::Request::delete(path), session)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(failure(resp, action).await);
    }
    Ok(())
}

/// Authenticate via `POST /auth/signin`.
///
/// Sent without an `Authorization` header — this is the call that earns one.
///
/// # Errors
///
/// The service's rejection message, or a transport/status description.
pub async fn sign_in(email: &str, password: &str) -> Result<SignInResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/auth/signin")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "sign in").await);
        }
        resp.json::<SignInResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /auth/signup`. The response body is not
/// consumed; a 2xx status is the entire success signal.
///
/// # Errors
///
/// The service's rejection message, or a transport/status description.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "sign up").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch all contact messages.
pub async fn fetch_contacts(session: &SessionState) -> Result<Vec<Contact>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/contacts", session, "load contacts").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err("not available on server".to_owned())
    }
}

/// Create a contact message.
pub async fn create_contact(session: &SessionState, contact: &NewContact) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/contacts", session, contact, "save contact").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contact);
        Err("not available on server".to_owned())
    }
}

/// Delete a contact message by id.
pub async fn delete_contact(session: &SessionState, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&contact_endpoint(id), session, "delete contact").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch all education entries.
pub async fn fetch_educations(session: &SessionState) -> Result<Vec<Education>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/educations", session, "load educations").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err("not available on server".to_owned())
    }
}

/// Create an education entry.
pub async fn create_education(
    session: &SessionState,
    education: &NewEducation,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/educations", session, education, "save education").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, education);
        Err("not available on server".to_owned())
    }
}

/// Delete an education entry by id.
pub async fn delete_education(session: &SessionState, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&education_endpoint(id), session, "delete education").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch all projects. The service keeps projects under its historical
/// `/api/portfolio` paths.
pub async fn fetch_projects(session: &SessionState) -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/portfolio", session, "load projects").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err("not available on server".to_owned())
    }
}

/// Create a project entry.
pub async fn create_project(session: &SessionState, project: &NewProject) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/portfolio", session, project, "save project").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, project);
        Err("not available on server".to_owned())
    }
}

/// Delete a project by id.
pub async fn delete_project(session: &SessionState, id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&project_endpoint(id), session, "delete project").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch all accounts for the admin user-management view.
pub async fn fetch_accounts(session: &SessionState) -> Result<Vec<AccountSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/users", session, "load users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err("not available on server".to_owned())
    }
}

/// Change an account's role via `PUT /api/users/{id}/role`.
pub async fn update_account_role(
    session: &SessionState,
    id: &str,
    role: Role,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "role": role.as_str() });
        let resp = authorize::apply(
            gloo_net::http::Request::put(&account_role_endpoint(id)),
            session,
        )
        .json(&payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "update role").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id, role);
        Err("not available on server".to_owned())
    }
}
