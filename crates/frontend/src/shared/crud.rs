//! Generic list/create/update/delete over one REST collection.
//!
//! Every mutation is followed by a fresh `GET` of the collection; pages
//! never patch their lists locally.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_client::{ApiClient, ApiError, HttpMethod};

/// One REST collection, e.g. `/api/neighborhoods`.
pub trait Resource: 'static {
    type Item: DeserializeOwned + Clone;
    type Form: Serialize;

    /// Collection path; items live at `<PATH>/<id>`.
    const PATH: &'static str;

    /// Human name for logs.
    const NAME: &'static str;

    /// Where new items are POSTed.
    fn create_path() -> &'static str {
        Self::PATH
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation<'a, F> {
    Create(&'a F),
    Update(&'a str, &'a F),
    Delete(&'a str),
}

pub struct CrudService<R: Resource> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self::new(self.client.clone())
    }
}

impl<R: Resource> CrudService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<R::Item>, ApiError> {
        self.client.get(R::PATH).await
    }

    /// Runs the mutation, then reloads the collection.
    ///
    /// `Ok(None)` means the mutation went through but the reload failed.
    pub async fn apply(&self, mutation: Mutation<'_, R::Form>) -> Result<Option<Vec<R::Item>>, ApiError> {
        match mutation {
            Mutation::Create(form) => {
                self.client
                    .send(HttpMethod::Post, R::create_path(), Some(form))
                    .await?
            }
            Mutation::Update(id, form) => {
                self.client
                    .send(HttpMethod::Put, &item_path(R::PATH, id), Some(form))
                    .await?
            }
            Mutation::Delete(id) => {
                self.client
                    .send::<()>(HttpMethod::Delete, &item_path(R::PATH, id), None)
                    .await?
            }
        }

        match self.list().await {
            Ok(items) => Ok(Some(items)),
            Err(e) => {
                log::error!("Failed to reload {} after mutation: {}", R::NAME, e);
                Ok(None)
            }
        }
    }
}

pub fn item_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

/// Page-side state of a loaded collection.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl<T> ListState<T> {
    /// Stores a fetch result. On error the list is left as is.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>, what: &str) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => log::error!("{}", fetch_error_line(what, &e)),
        }
        self.loading = false;
    }

    /// Stores the reload that follows a mutation.
    pub fn finish_mutation(&mut self, reloaded: Option<Vec<T>>) {
        if let Some(items) = reloaded {
            self.items = items;
        }
        self.loading = false;
    }
}

fn fetch_error_line(what: &str, e: &ApiError) -> String {
    match e.status() {
        Some(status) => format!("Error fetching {} (HTTP {}): {}", what, status, e),
        None => format!("Error fetching {}: {}", what, e),
    }
}
