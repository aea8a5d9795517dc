//! Lists and subscribers endpoints (offset pagination)

use super::types::{ImportResult, List, ListInput, OffsetPage, PageParams, Subscriber};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::{Method, StringMap};
use reqwest::multipart::{Form, Part};

/// Collection path of lists
pub const LISTS_PATH: &str = "/api/lists";

/// Typed access to `/api/lists`
#[derive(Debug, Clone)]
pub struct ListsApi {
    http: HttpClient,
}

fn paged(params: PageParams) -> RequestConfig {
    params
        .query()
        .into_iter()
        .fold(RequestConfig::new(), |config, (k, v)| config.query(k, v))
}

fn list_form(input: &ListInput) -> StringMap {
    StringMap::from([("name".to_string(), input.name.clone())])
}

impl ListsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn item_path(id: i64) -> String {
        format!("{LISTS_PATH}/{id}")
    }

    fn subscribers_path(list_id: i64) -> String {
        format!("{LISTS_PATH}/{list_id}/subscribers")
    }

    pub async fn all(&self, params: PageParams) -> Result<OffsetPage<List>> {
        self.http
            .get_json_with_config(LISTS_PATH, paged(params))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<List> {
        self.http.get_json(&Self::item_path(id)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&Self::item_path(id)).await
    }

    pub async fn create(&self, input: &ListInput) -> Result<List> {
        self.http
            .request_json(
                Method::POST,
                LISTS_PATH,
                RequestConfig::new().form(list_form(input)),
            )
            .await
    }

    pub async fn update(&self, id: i64, input: &ListInput) -> Result<()> {
        self.http
            .request(
                Method::PUT,
                &Self::item_path(id),
                RequestConfig::new().form(list_form(input)),
            )
            .await?;
        Ok(())
    }

    /// Subscribers of list `list_id`
    pub async fn subscribers(
        &self,
        list_id: i64,
        params: PageParams,
    ) -> Result<OffsetPage<Subscriber>> {
        self.http
            .get_json_with_config(&Self::subscribers_path(list_id), paged(params))
            .await
    }

    /// Upload a subscribers file (CSV) into list `list_id`
    pub async fn create_subscribers(
        &self,
        list_id: i64,
        file_name: impl Into<String>,
        contents: Vec<u8>,
    ) -> Result<ImportResult> {
        let form = Form::new()
            .part("subscribers", Part::bytes(contents).file_name(file_name.into()))
            .text("list_id", list_id.to_string());

        self.http
            .post_multipart(&Self::subscribers_path(list_id), form)
            .await
    }

    pub async fn delete_subscriber(&self, list_id: i64, id: i64) -> Result<()> {
        self.http
            .delete(&format!("{}/{id}", Self::subscribers_path(list_id)))
            .await
    }
}
