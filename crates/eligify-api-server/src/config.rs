//! Server configuration from command-line flags and environment variables

use clap::Parser;
use eligify_extract::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::path::PathBuf;

/// Upload limit for PDF bodies (20 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "eligify-api-server")]
#[command(about = "Dental benefits extraction and treatment cost API", version)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "ELIGIFY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// API key for the extraction model
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Chat model used for extraction
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub openai_model: String,

    /// API root of an OpenAI-compatible service
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Directory holding the web frontend (default: ../frontend, else ./frontend)
    #[arg(long, env = "FRONTEND_DIR")]
    pub frontend_dir: Option<PathBuf>,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "ELIGIFY_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// `host:port` to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Explicit frontend directory, or `../frontend` when present, else `./frontend`
    #[must_use]
    pub fn resolve_frontend_dir(&self) -> PathBuf {
        if let Some(dir) = &self.frontend_dir {
            return dir.clone();
        }
        let sibling = PathBuf::from("../frontend");
        if sibling.exists() {
            sibling
        } else {
            PathBuf::from("./frontend")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_flags() {
        let config = ServerConfig::try_parse_from([
            "eligify-api-server",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--openai-api-key",
            "sk-test",
            "--openai-model",
            "gpt-4o",
            "--openai-base-url",
            "http://localhost:4000/v1",
            "--frontend-dir",
            "/srv/eligify/frontend",
            "--max-upload-bytes",
            "1048576",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.openai_base_url, "http://localhost:4000/v1");
        assert_eq!(config.max_upload_bytes, 1_048_576);
        assert_eq!(
            config.resolve_frontend_dir(),
            PathBuf::from("/srv/eligify/frontend")
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = ServerConfig::try_parse_from([
            "eligify-api-server",
            "--openai-api-key",
            "sk-test",
            "--port",
            "not-a-port",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_clap_definition() {
        use clap::CommandFactory;
        ServerConfig::command().debug_assert();
    }
}
