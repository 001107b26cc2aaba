use axum::extract::multipart::Field;
use axum::extract::Multipart;
use std::collections::HashMap;

use super::error::{ApiError, ApiResult};
use crate::models::upload::UploadTarget;

/// Multipart form split into photos (in submission order) and text fields.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub photos: Vec<(String, UploadTarget)>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Read the whole form. Parts with a filename are photos and must be
    /// recognisable images; everything else is a text field.
    pub async fn read(mut multipart: Multipart) -> ApiResult<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let photo = read_photo(field, file_name).await?;
                    form.photos.push((name, photo));
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// All photos submitted under `name`, in order.
    pub fn take_photos(&mut self, name: &str) -> Vec<UploadTarget> {
        let (taken, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.photos)
            .into_iter()
            .partition(|(field, _)| field == name);
        self.photos = rest;
        taken.into_iter().map(|(_, photo)| photo).collect()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

async fn read_photo(field: Field<'_>, file_name: String) -> ApiResult<UploadTarget> {
    let data = field.bytes().await?;

    image::guess_format(&data).map_err(|_| {
        ApiError::UnsupportedMedia(format!("{file_name} is not a supported image"))
    })?;

    Ok(UploadTarget::from_buffer(data.to_vec(), file_name))
}
