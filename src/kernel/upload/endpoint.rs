use super::UploadError;
use reqwest::Url;

/// Upload endpoint for the page being edited: the first occurrence of
/// `edit_segment` in the page URL becomes `upload_segment`.
pub fn upload_endpoint(
    page_url: &str,
    edit_segment: &str,
    upload_segment: &str,
) -> Result<Url, UploadError> {
    if edit_segment.is_empty() || !page_url.contains(edit_segment) {
        return Err(UploadError::Endpoint {
            page: page_url.to_string(),
            segment: edit_segment.to_string(),
        });
    }

    let rewritten = page_url.replacen(edit_segment, upload_segment, 1);
    Url::parse(&rewritten).map_err(|e| UploadError::InvalidUrl {
        url: rewritten,
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/upload/endpoint.rs"]
mod tests;
