//! Member Repository

use super::{MemberRepository, RepoResult};
use async_trait::async_trait;
use shared::models::{Member, NewMember};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str =
    "SELECT id, full_name, email, phone_number, date_of_birth, status FROM member";

/// SQLite-backed [`MemberRepository`]
#[derive(Clone, Debug)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let sql = format!("{MEMBER_SELECT} ORDER BY id");
        let rows = sqlx::query_as::<_, Member>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let sql = format!("{MEMBER_SELECT} WHERE id = ?");
        let row = sqlx::query_as::<_, Member>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: i64) -> RepoResult<bool> {
        let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM member WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(found)
    }

    async fn create(&self, data: &NewMember) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO member (full_name, email, phone_number, date_of_birth, status) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(data.date_of_birth)
        .bind(&data.status)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(&self, member: &Member) -> RepoResult<bool> {
        let result = sqlx::query(
            "UPDATE member SET full_name = ?1, email = ?2, phone_number = ?3, date_of_birth = ?4, status = ?5 WHERE id = ?6",
        )
        .bind(&member.full_name)
        .bind(&member.email)
        .bind(&member.phone_number)
        .bind(member.date_of_birth)
        .bind(&member.status)
        .bind(member.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM member WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
