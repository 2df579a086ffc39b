use clap::{Parser, ValueEnum};
use course_library_core::domain::{
    common::{CourseLibraryConfig, DatabaseConfig, StorageBackend},
    query::paging::DEFAULT_MAX_PAGE_SIZE,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "course-library-api", version, about = "Course Library HTTP API")]
pub struct Args {
    #[arg(long, env = "ENV", value_enum, default_value_t = Environment::Development)]
    pub env: Environment,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Upper bound for the `pageSize` query parameter.
    #[arg(long, env = "MAX_PAGE_SIZE", default_value_t = DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            server: ServerArgs::default(),
            db: DatabaseArgs::default(),
            log: LogArgs::default(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3333,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Storage {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "STORAGE", value_enum, default_value_t = Storage::Postgres)]
    pub storage: Storage,

    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "course_library")]
    pub name: String,

    /// Drop every table and re-apply the migrations on startup.
    #[arg(long, env = "RESET_DATABASE", default_value_t = false)]
    pub reset_database: bool,
}

impl Default for DatabaseArgs {
    fn default() -> Self {
        Self {
            storage: Storage::Postgres,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "course_library".to_string(),
            reset_database: false,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl From<Args> for CourseLibraryConfig {
    fn from(args: Args) -> Self {
        CourseLibraryConfig {
            storage: match args.db.storage {
                Storage::Postgres => StorageBackend::Postgres,
                Storage::Memory => StorageBackend::InMemory,
            },
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            reset_database: args.db.reset_database,
        }
    }
}
