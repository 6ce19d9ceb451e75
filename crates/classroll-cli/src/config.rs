use clap::{Parser, Subcommand};
use std::sync::LazyLock;

use classroll_core::auth::DEFAULT_COST;

static VERSION_INFO: LazyLock<String> = LazyLock::new(|| {
    let version = env!("CARGO_PKG_VERSION");
    let built = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"); // YYYY-MM-DD
    let target = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");
    let rustc = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");

    format!("{version}\nbuilt: {built}\ntarget: {target}\nrustc: {rustc}")
});

pub fn version_info() -> &'static str {
    &VERSION_INFO
}

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "classroll")]
#[command(
    author,
    version = version_info(),
    about = "Operator tools for the classroll teacher portal"
)]
#[command(after_help = "Examples:
  classroll hash-password 's3cret'
  classroll set-password --email rivera@school.test --password 's3cret'
  classroll upgrade-passwords --dry-run
  classroll init-db")]
pub struct Config {
    /// PostgreSQL database connection URL (required by database commands)
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// bcrypt work factor for new hashes
    #[arg(
        long,
        env = "BCRYPT_COST",
        default_value_t = DEFAULT_COST,
        value_parser = clap::value_parser!(u32).range(4..=31),
        global = true
    )]
    pub bcrypt_cost: u32,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a bcrypt hash for a password
    HashPassword {
        /// Plaintext password to hash
        password: String,
    },
    /// Set a teacher's password, looked up by email
    SetPassword {
        /// Teacher email address
        #[arg(short, long)]
        email: String,
        /// New plaintext password
        #[arg(short, long)]
        password: String,
    },
    /// Replace plaintext stored passwords with bcrypt hashes
    #[command(after_help = "Rows that already hold a bcrypt hash are left untouched.")]
    UpgradePasswords {
        /// Report which teachers would be upgraded without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Create any missing tables and indexes
    InitDb,
}
