//! Chat Session - API functions

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{decode_body, file_url};
use contracts::domain::a002_context_file::ProcessingStatus;
use contracts::usecases::u501_ask_question::{self, AskQuestionAccepted, AskQuestionRequest};
use contracts::usecases::u502_list_files::{self, FileListResponse};
use contracts::usecases::u503_file_status::{generation, ingestion};
use contracts::usecases::u503_file_status::{GenerationStatusResponse, IngestionStatus};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Backend client bound to one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatApi {
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Отправить вопрос по активному документу
    pub async fn ask_question(
        &self,
        request: &AskQuestionRequest,
    ) -> Result<AskQuestionAccepted, ApiError> {
        let response = Request::post(&self.url(u501_ask_question::ENDPOINT))
            .json(request)?
            .send()
            .await?;
        read_body(response).await
    }

    /// Получить список загруженных файлов
    pub async fn list_files(&self) -> Result<FileListResponse, ApiError> {
        let response = Request::get(&self.url(u502_list_files::ENDPOINT))
            .send()
            .await?;
        read_body(response).await
    }

    pub async fn fetch_ingestion_status(
        &self,
        file_name: &str,
    ) -> Result<ProcessingStatus, ApiError> {
        let url = file_url(&self.base_url, ingestion::ENDPOINT, file_name);
        let response = Request::get(&url).send().await?;
        let status: IngestionStatus = read_body(response).await?;
        Ok(status.status())
    }

    pub async fn fetch_generation_status(
        &self,
        file_name: &str,
    ) -> Result<GenerationStatusResponse, ApiError> {
        let url = file_url(&self.base_url, generation::ENDPOINT, file_name);
        let response = Request::get(&url).send().await?;
        read_body(response).await
    }
}

pub(crate) async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    decode_body(status, &text)
}
