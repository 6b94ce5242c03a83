pub const IMAGES_API_URL: &str = "https://api.openai.com/v1/images/generations";

pub const ENV_API_KEY: &str = "AIIMG_API_KEY";
pub const ENV_PROMPT: &str = "AIIMG_PROMPT";
pub const ENV_SIZE: &str = "AIIMG_SIZE";
pub const ENV_OUTFILE: &str = "AIIMG_OUTFILE";
pub const ENV_API_URL: &str = "AIIMG_API_URL";

pub const CONFIG_FILE_NAMES: [&str; 2] = [".aiimg.yaml", ".aiimg.yml"];

pub const DEFAULT_PROMPT: &str = "A chicken with it's head cut off";
pub const DEFAULT_SIZE: &str = "512x512";
pub const DEFAULT_OUTFILE: &str = "img.png";

pub const IMAGE_COUNT: u8 = 1;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMMIT: &str = match option_env!("AIIMG_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};
