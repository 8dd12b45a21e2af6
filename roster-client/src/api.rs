//! Remote API boundary
//!
//! The employee REST endpoints consumed by the record store, behind a
//! trait so the store can be driven by a test double.

use async_trait::async_trait;

use shared::models::{Department, Employee, EmployeeDraft, EmployeePage, Stats};

use crate::{ClientResult, HttpClient};

/// Remote employee API consumed by [`RecordStore`](crate::RecordStore)
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /employees?page={n}`
    async fn fetch_page(&self, page: u32) -> ClientResult<EmployeePage>;

    /// `POST /employees` (multipart, photo required)
    async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee>;

    /// `PUT /employees/{id}` (multipart, photo optional)
    async fn update(&self, id: u64, draft: &EmployeeDraft) -> ClientResult<Employee>;

    /// `DELETE /employees/{id}`
    async fn delete(&self, id: u64) -> ClientResult<()>;

    /// `GET /employees/departments`
    async fn departments(&self) -> ClientResult<Vec<Department>>;

    /// `GET /stats`
    async fn stats(&self) -> ClientResult<Stats>;
}

#[async_trait]
impl EmployeeApi for HttpClient {
    async fn fetch_page(&self, page: u32) -> ClientResult<EmployeePage> {
        self.get(&format!("employees?page={page}")).await
    }

    async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.post_multipart("employees", draft).await
    }

    async fn update(&self, id: u64, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.put_multipart(&format!("employees/{id}"), draft).await
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        HttpClient::delete(self, &format!("employees/{id}")).await
    }

    async fn departments(&self) -> ClientResult<Vec<Department>> {
        self.get("employees/departments").await
    }

    async fn stats(&self) -> ClientResult<Stats> {
        self.get("stats").await
    }
}
