use serde::Deserialize;

/// Default client identification sent with every request.
///
/// Matches what the archive serves full pages to; a bare library UA tends
/// to get the "please use the API" interstitial instead.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default search listing: works tagged with the Chinese language filter
const DEFAULT_SEARCH_URL: &str =
    "https://archiveofourown.org/works/search?work_search%5Blanguage_id%5D=zh&commit=Search";

/// Main configuration structure for ao3-fetch
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub search: SearchConfig,
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Connection-establishment timeout in seconds
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: 60,
            connect_timeout: 10,
        }
    }
}

/// Search-page walking configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search/listing URL to extract work ids from
    pub url: String,

    /// Maximum number of result pages to walk
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Delay between result pages (seconds)
    #[serde(rename = "page-delay")]
    pub page_delay: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SEARCH_URL.to_string(),
            max_pages: 2,
            page_delay: 2,
        }
    }
}

/// Batch driver configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Politeness delay between works (seconds)
    pub delay: u64,

    /// Path to the identifier list file, one id per line
    #[serde(rename = "id-list")]
    pub id_list: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay: 3,
            id_list: "work_ids.txt".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory record files are written into
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}
