use clap::{Args, Parser, Subcommand};
use postforge_types::models::config::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_PORT};
use postforge_types::{GeminiConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "postforge",
    about = "PostForge Server - quota-limited LinkedIn post generation",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub settings: Settings,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(about = "Start the HTTP server (default if no command specified)")]
    Serve,

    #[command(about = "Print the effective configuration")]
    Config {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct Settings {
    #[arg(long, env = "POSTFORGE_HOST", default_value = "127.0.0.1", global = true)]
    pub host: String,

    #[arg(short, long, env = "POSTFORGE_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    #[arg(
        long,
        env = "POSTFORGE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        global = true,
        help = "Comma-separated browser origins allowed cross-origin. Must be same-site with \
                the API (e.g. another port or subdomain): the quota cookie is SameSite=Strict"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long,
        env = "POSTFORGE_STATIC_DIR",
        global = true,
        help = "Serve a built frontend from this directory"
    )]
    pub static_dir: Option<String>,

    #[arg(
        long,
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true,
        global = true
    )]
    pub api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL, global = true)]
    pub model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL, global = true)]
    pub base_url: String,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 120, global = true)]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            allowed_origins: self
                .allowed_origins
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            static_dir: self.static_dir.filter(|d| !d.trim().is_empty()),
            gemini: GeminiConfig {
                api_key: self.api_key,
                model: self.model,
                base_url: self.base_url,
                request_timeout_secs: self.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "postforge",
            "--port",
            "8080",
            "--allowed-origins",
            "http://localhost:5173, https://posts.example.com",
            "--model",
            "gemini-2.0-flash-lite",
            "serve",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Commands::Serve));
        let config = cli.settings.into_config();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:5173".to_string(), "https://posts.example.com".to_string()]
        );
        assert_eq!(config.gemini.model, "gemini-2.0-flash-lite");
    }

    #[test]
    fn test_allowed_origins_help_requires_same_site() {
        use clap::CommandFactory;

        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == "allowed_origins")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("same-site"), "{}", help);
        assert!(help.contains("SameSite=Strict"), "{}", help);
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["postforge", "config", "--json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config { json: true }));
    }
}
