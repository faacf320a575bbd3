use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

// No request timeout is set; a write hangs or fails on the transport's own
// terms.
pub fn new_client() -> Result<Client, KeyLightClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum KeyLightClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_client_sets_the_content_type_header() -> Result<(), KeyLightClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("content-type", "application/json")
            .create_async()
            .await;

        let client = new_client()?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the header is set
        mock.assert();

        Ok(())
    }
}
