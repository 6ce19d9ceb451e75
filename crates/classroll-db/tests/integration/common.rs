//! Test utilities for integration tests.
//!
//! Provides helper functions to set up isolated PostgreSQL containers and
//! seed timetable fixtures for each test.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

/// Sets up a PostgreSQL container with the classroll schema applied.
///
/// The container is removed when the returned `ContainerAsync` is dropped,
/// so keep it alive for the test duration.
pub async fn setup_test_db() -> (PgPool, ContainerAsync<GenericImage>) {
    let container = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let connection_string = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

    // The server restarts once after initdb, so early connects may fail
    const MAX_RETRIES: u32 = 30;
    let mut retries = 0;
    let pool = loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&connection_string)
            .await
        {
            Ok(pool) => break pool,
            Err(e) => {
                retries += 1;
                if retries >= MAX_RETRIES {
                    panic!(
                        "Failed to connect to database after {} retries: {}",
                        MAX_RETRIES, e
                    );
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    };

    classroll_db::apply_schema(&pool)
        .await
        .expect("Failed to apply schema");

    (pool, container)
}

pub async fn insert_teacher(pool: &PgPool, name: &str, email: &str, password_hash: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO teachers (name, email, password_hash) VALUES ($1, $2, $3) RETURNING teacher_id",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .expect("insert teacher")
}

pub async fn insert_class(pool: &PgPool, class_name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO classes (class_name) VALUES ($1) RETURNING class_id")
        .bind(class_name)
        .fetch_one(pool)
        .await
        .expect("insert class")
}

pub async fn insert_subject(pool: &PgPool, subject_name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO subjects (subject_name) VALUES ($1) RETURNING subject_id")
        .bind(subject_name)
        .fetch_one(pool)
        .await
        .expect("insert subject")
}

/// Inserts a schedule row. Times are `HH:MM` strings.
#[allow(clippy::too_many_arguments)]
pub async fn insert_schedule(
    pool: &PgPool,
    teacher_id: i32,
    class_id: i32,
    subject_id: i32,
    day: &str,
    start: &str,
    end: &str,
    batch: &str,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO schedules (teacher_id, class_id, subject_id, day_of_week, start_time, end_time, batch)
        VALUES ($1, $2, $3, $4, $5::time, $6::time, $7)
        RETURNING schedule_id
        "#,
    )
    .bind(teacher_id)
    .bind(class_id)
    .bind(subject_id)
    .bind(day)
    .bind(start)
    .bind(end)
    .bind(batch)
    .fetch_one(pool)
    .await
    .expect("insert schedule")
}

pub async fn insert_student(pool: &PgPool, name: &str, email: &str, batch: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO students (name, email, batch) VALUES ($1, $2, $3) RETURNING student_id",
    )
    .bind(name)
    .bind(email)
    .bind(batch)
    .fetch_one(pool)
    .await
    .expect("insert student")
}

/// Ids produced by [`seed_timetable`].
pub struct Seeded {
    pub teacher_id: i32,
    pub monday_math: i32,
    pub monday_early: i32,
    pub wednesday_physics: i32,
    pub alice: i32,
    pub bob: i32,
    pub carol: i32,
}

/// One teacher with three schedules over two batches.
///
/// Batch `B1` holds Alice and Bob, batch `B2` holds Carol.
pub async fn seed_timetable(pool: &PgPool) -> Seeded {
    let teacher_id = insert_teacher(pool, "Ms. Rivera", "rivera@school.test", "unused").await;
    let class_10a = insert_class(pool, "10A").await;
    let class_11b = insert_class(pool, "11B").await;
    let math = insert_subject(pool, "Mathematics").await;
    let physics = insert_subject(pool, "Physics").await;

    // Inserted out of order so the queries have to sort
    let wednesday_physics = insert_schedule(
        pool, teacher_id, class_11b, physics, "Wednesday", "11:00", "12:00", "B2",
    )
    .await;
    let monday_math = insert_schedule(
        pool, teacher_id, class_10a, math, "Monday", "10:00", "11:00", "B1",
    )
    .await;
    let monday_early = insert_schedule(
        pool, teacher_id, class_11b, physics, "Monday", "08:30", "09:30", "B2",
    )
    .await;

    let bob = insert_student(pool, "Bob", "bob@school.test", "B1").await;
    let alice = insert_student(pool, "Alice", "alice@school.test", "B1").await;
    let carol = insert_student(pool, "Carol", "carol@school.test", "B2").await;

    Seeded {
        teacher_id,
        monday_math,
        monday_early,
        wednesday_physics,
        alice,
        bob,
        carol,
    }
}
