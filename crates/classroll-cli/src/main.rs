use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use classroll_cli::{Command, Config};
use classroll_core::{AppError, DbConfig, hash_password, is_password_hash};
use classroll_db::{TeacherRepository, apply_schema};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::parse();

    if let Err(e) = run(config).await {
        match e.downcast_ref::<AppError>() {
            Some(app_err) => eprintln!("\nError: {}\n", app_err.user_message()),
            None => eprintln!("\nError: {:#}\n", e),
        }
        std::process::exit(1);
    }
    Ok(())
}

async fn run(config: Config) -> anyhow::Result<()> {
    let database_url = config.database_url.as_deref();

    match config.command {
        Command::HashPassword { password } => {
            println!("{}", hash_password(&password, config.bcrypt_cost)?);
        }
        Command::SetPassword { email, password } => {
            let repo = TeacherRepository::new(connect(database_url).await?);
            set_password(&repo, &email, &password, config.bcrypt_cost).await?;
        }
        Command::UpgradePasswords { dry_run } => {
            let repo = TeacherRepository::new(connect(database_url).await?);
            upgrade_passwords(&repo, dry_run, config.bcrypt_cost).await?;
        }
        Command::InitDb => {
            apply_schema(&connect(database_url).await?).await?;
            println!("Schema is up to date.");
        }
    }

    Ok(())
}

async fn connect(database_url: Option<&str>) -> anyhow::Result<PgPool> {
    let database_url = database_url.context("DATABASE_URL is required for this command")?;

    info!("Connecting to database...");
    let db_config = DbConfig::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .connect(database_url)
        .await
        .map_err(AppError::DatabaseError)?;
    Ok(pool)
}

async fn set_password(
    repo: &TeacherRepository,
    email: &str,
    password: &str,
    cost: u32,
) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    let teacher = repo
        .find_by_email(email.trim())
        .await?
        .with_context(|| format!("No teacher with email {}", email.trim()))?;

    let hash = hash_password(password, cost)?;
    repo.update_password_hash(teacher.teacher_id, &hash).await?;

    info!("Password updated for teacher {}", teacher.teacher_id);
    println!("Password updated for {} <{}>.", teacher.name, teacher.email);
    Ok(())
}

async fn upgrade_passwords(
    repo: &TeacherRepository,
    dry_run: bool,
    cost: u32,
) -> anyhow::Result<()> {
    let teachers = repo.list_credentials().await?;
    let legacy: Vec<_> = teachers
        .into_iter()
        .filter(|t| !is_password_hash(&t.password_hash))
        .collect();

    if legacy.is_empty() {
        println!("All stored passwords are already hashed.");
        return Ok(());
    }

    let mut upgraded = 0;
    for teacher in &legacy {
        if dry_run {
            println!("Would upgrade {} <{}>", teacher.name, teacher.email);
            continue;
        }

        let hash = hash_password(&teacher.password_hash, cost)?;
        if repo
            .update_password_hash(teacher.teacher_id, &hash)
            .await?
        {
            upgraded += 1;
        } else {
            warn!("Teacher {} disappeared during upgrade", teacher.teacher_id);
        }
    }

    if dry_run {
        println!("\n{} teacher(s) would be upgraded (dry run).", legacy.len());
    } else {
        println!("Upgraded {} of {} plaintext password(s).", upgraded, legacy.len());
    }
    Ok(())
}
