// Data-plane client: table-level CRUD against /rest/v1.
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{Supabase, SupabaseError};

impl Supabase {
    /// All rows of a table.
    pub async fn select<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, SupabaseError> {
        self.select_query(table, &[("select", "*".to_string())]).await
    }

    /// Rows matching an equality filter on one column.
    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: i64,
    ) -> Result<Vec<T>, SupabaseError> {
        self.select_query(
            table,
            &[("select", "*".to_string()), (column, format!("eq.{}", value))],
        )
        .await
    }

    /// Single row by primary key; `None` when the id does not exist.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<Option<T>, SupabaseError> {
        let mut rows = self.select_eq(table, "id", id).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Rows under an explicit select expression, e.g. `*,user_profiles(*)`
    /// for embedded resources.
    pub async fn select_with<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
    ) -> Result<Vec<T>, SupabaseError> {
        self.select_query(table, &[("select", select.to_string())]).await
    }

    /// Insert one row and return its stored representation.
    pub async fn insert<T, B>(&self, table: &str, row: &B) -> Result<T, SupabaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .rest(self.http.post(self.endpoint(&format!("rest/v1/{}", table))))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let mut rows: Vec<T> = Self::json_rows(response).await?;
        if rows.is_empty() {
            return Err(SupabaseError::MissingRepresentation);
        }
        Ok(rows.remove(0))
    }

    /// Update one row by primary key; `None` when no row matched.
    pub async fn update<T, B>(&self, table: &str, id: i64, row: &B) -> Result<Option<T>, SupabaseError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .rest(self.http.patch(self.endpoint(&format!("rest/v1/{}", table))))
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))])
            .json(row)
            .send()
            .await?;

        let mut rows: Vec<T> = Self::json_rows(response).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }

    /// Delete one row by primary key. The data plane does not report whether
    /// a row matched.
    pub async fn delete(&self, table: &str, id: i64) -> Result<(), SupabaseError> {
        let response = self
            .rest(self.http.delete(self.endpoint(&format!("rest/v1/{}", table))))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Reachability probe of the data plane.
    pub async fn health(&self) -> Result<(), SupabaseError> {
        let response = self.rest(self.http.get(self.endpoint("rest/v1"))).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn select_query<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, SupabaseError> {
        let response = self
            .rest(self.http.get(self.endpoint(&format!("rest/v1/{}", table))))
            .query(query)
            .send()
            .await?;

        Self::json_rows(response).await
    }

    fn rest(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("apikey", &self.anon_key).bearer_auth(&self.anon_key)
    }

    async fn json_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, SupabaseError> {
        let response = Self::check_status(response).await?;
        Ok(response.json::<Vec<T>>().await?)
    }

    pub(super) async fn check_status(response: Response) -> Result<Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(SupabaseError::Rest {
            status: status.as_u16(),
            message: Self::upstream_message(response).await,
        })
    }

    /// PostgREST and GoTrue report errors as `{"message": "..."}`; fall back
    /// to the raw body when the shape differs.
    pub(super) async fn upstream_message(response: Response) -> String {
        let body = response.text().await.unwrap_or_default();
        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body)
    }
}
