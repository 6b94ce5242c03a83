use crate::cli::{print_version, Cli};
use crate::config::{resolve_config, Config, ConfigSources};
use crate::error::{AiImgError, Result};
use crate::images::{build_image_request, ImageApiResponse, ImageRequestBody};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use std::{
    fs::OpenOptions,
    future::Future,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Version,
    Written(PathBuf),
}

pub fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template(&format!("{{spinner:.{}}} {{msg}}", color))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message);

    spinner
}

pub async fn process_image_response(response: reqwest::Response) -> Result<ImageApiResponse> {
    let status = response.status();
    let response_body = response.text().await?;
    if !status.is_success() {
        return Err(AiImgError::Api {
            status: status.as_u16(),
            message: response_body,
        });
    }

    let api_response: ImageApiResponse = serde_json::from_str(&response_body)?;
    log::debug!(
        "received {} image(s), created {:?}",
        api_response.data.len(),
        api_response.created
    );
    Ok(api_response)
}

/// Sends the request once. Resolves to `Cancelled` if `cancel` completes
/// before the API answers.
pub async fn make_image_request<C>(
    client: &Client,
    config: &Config,
    request_body: &ImageRequestBody,
    cancel: C,
) -> Result<ImageApiResponse>
where
    C: Future<Output = ()>,
{
    let headers = build_headers(&config.api_key)?;
    log::info!(
        "requesting {} image of size {} from {}",
        request_body.n,
        request_body.size,
        config.api_url
    );

    let spinner = create_spinner("red", "Generating image...".to_string());
    let call = async {
        let response = client
            .post(&config.api_url)
            .headers(headers)
            .json(request_body)
            .send()
            .await?;
        process_image_response(response).await
    };

    let result = tokio::select! {
        result = call => result,
        _ = cancel => Err(AiImgError::Cancelled),
    };
    spinner.finish_and_clear();

    result
}

pub fn decode_image(api_response: &ImageApiResponse) -> Result<Vec<u8>> {
    let encoded = api_response
        .data
        .first()
        .and_then(|image| image.b64_json.as_deref())
        .ok_or(AiImgError::EmptyResponse)?;
    Ok(base64::decode(encoded)?)
}

pub fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source| AiImgError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Build, call, decode, write. Decoding happens before the output file is
/// opened, so a bad payload leaves nothing on disk.
pub async fn generate_image<C>(client: &Client, config: &Config, cancel: C) -> Result<PathBuf>
where
    C: Future<Output = ()>,
{
    let request_body = build_image_request(config);
    let api_response = make_image_request(client, config, &request_body, cancel).await?;
    let bytes = decode_image(&api_response)?;
    write_image(&config.output_path, &bytes)?;
    Ok(config.output_path.clone())
}

pub async fn process_command<C>(cli: &Cli, sources: &ConfigSources, cancel: C) -> Result<RunOutcome>
where
    C: Future<Output = ()>,
{
    if cli.version {
        print_version();
        return Ok(RunOutcome::Version);
    }

    let config = resolve_config(cli, sources)?;
    let client = Client::builder().build()?;

    generate_image(&client, &config, cancel)
        .await
        .map(RunOutcome::Written)
}
