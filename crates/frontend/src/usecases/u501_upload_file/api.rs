use crate::domain::a001_chat_session::api::ChatApi;
use crate::shared::api_error::ApiError;
use contracts::usecases::u504_upload_file::{ENDPOINT, FIELD_NAME};
use gloo_net::http::Request;
use web_sys::FormData;

/// Загрузить файл на сервер
pub async fn upload_file(api: &ChatApi, file: &web_sys::File) -> Result<(), ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename(FIELD_NAME, file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let response = Request::post(&api.url(ENDPOINT))
        .body(form_data)?
        .send()
        .await?;

    if response.status() != 200 {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
