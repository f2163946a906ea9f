//! Member Service
//!
//! 会员业务逻辑: 写操作前的存在性检查, 并把仓储结果转换为实体/布尔值

use std::sync::Arc;

use shared::models::{Member, NewMember};

use crate::db::repository::{MemberRepository, RepoResult};

/// 会员服务
///
/// 持有 `Arc<dyn MemberRepository>`, 克隆开销很小, 可直接放入 `ServerState`
#[derive(Clone)]
pub struct MemberService {
    repo: Arc<dyn MemberRepository>,
}

impl std::fmt::Debug for MemberService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberService").finish_non_exhaustive()
    }
}

impl MemberService {
    pub fn new(repo: Arc<dyn MemberRepository>) -> Self {
        Self { repo }
    }

    /// 获取所有会员
    pub async fn get_all(&self) -> RepoResult<Vec<Member>> {
        self.repo.find_all().await
    }

    /// 按 id 获取会员
    pub async fn get_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        self.repo.find_by_id(id).await
    }

    pub async fn exists(&self, id: i64) -> RepoResult<bool> {
        self.repo.exists(id).await
    }

    /// 整体覆盖会员
    ///
    /// 以路径中的 `id` 为准, 忽略 `data.id`。记录不存在时不写入并返回 `false`。
    pub async fn update(&self, id: i64, mut data: Member) -> RepoResult<bool> {
        data.id = id;
        let updated = self.repo.update(&data).await?;
        if updated {
            tracing::info!(member_id = id, "Member updated");
        } else {
            tracing::debug!(member_id = id, "Update skipped, member does not exist");
        }
        Ok(updated)
    }

    /// 创建会员, 返回带有新 id 的实体
    pub async fn create(&self, data: NewMember) -> RepoResult<Member> {
        let id = self.repo.create(&data).await?;
        tracing::info!(member_id = id, "Member created");
        Ok(data.into_member(id))
    }

    /// 删除会员; 记录不存在时返回 `false`
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!(member_id = id, "Member deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use parking_lot::Mutex;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FindAll,
        FindById(i64),
        Exists(i64),
        Create(String),
        Update(Member),
        Delete(i64),
    }

    /// 内存仓储: 记录每次调用, 可选择让所有调用失败
    #[derive(Default)]
    struct FakeRepo {
        rows: Mutex<BTreeMap<i64, Member>>,
        next_id: Mutex<i64>,
        calls: Mutex<Vec<Call>>,
        fail: bool,
    }

    impl FakeRepo {
        fn with(members: Vec<Member>) -> Arc<Self> {
            let next = members.iter().map(|m| m.id).max().unwrap_or(0);
            Arc::new(Self {
                rows: Mutex::new(members.into_iter().map(|m| (m.id, m)).collect()),
                next_id: Mutex::new(next),
                ..Default::default()
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                ..Default::default()
            })
        }

        fn record(&self, call: Call) -> RepoResult<()> {
            self.calls.lock().push(call);
            if self.fail {
                return Err(RepoError::Database("disk I/O error".into()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl MemberRepository for FakeRepo {
        async fn find_all(&self) -> RepoResult<Vec<Member>> {
            self.record(Call::FindAll)?;
            Ok(self.rows.lock().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
            self.record(Call::FindById(id))?;
            Ok(self.rows.lock().get(&id).cloned())
        }

        async fn exists(&self, id: i64) -> RepoResult<bool> {
            self.record(Call::Exists(id))?;
            Ok(self.rows.lock().contains_key(&id))
        }

        async fn create(&self, data: &NewMember) -> RepoResult<i64> {
            self.record(Call::Create(data.full_name.clone()))?;
            let mut next = self.next_id.lock();
            *next += 1;
            let id = *next;
            self.rows.lock().insert(id, data.clone().into_member(id));
            Ok(id)
        }

        async fn update(&self, member: &Member) -> RepoResult<bool> {
            self.record(Call::Update(member.clone()))?;
            let mut rows = self.rows.lock();
            match rows.get_mut(&member.id) {
                Some(row) => {
                    *row = member.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i64) -> RepoResult<bool> {
            self.record(Call::Delete(id))?;
            Ok(self.rows.lock().remove(&id).is_some())
        }
    }

    fn member(id: i64, name: &str) -> Member {
        Member {
            id,
            full_name: name.to_string(),
            email: "alice@example.com".to_string(),
            phone_number: None,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            status: "Active".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_returns_member_when_exists() {
        let repo = FakeRepo::with(vec![member(1, "Alice")]);
        let service = MemberService::new(repo.clone());

        let result = service.get_by_id(1).await.unwrap();
        assert_eq!(result.unwrap().full_name, "Alice");
        assert_eq!(repo.calls(), vec![Call::FindById(1)]);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let service = MemberService::new(FakeRepo::with(vec![]));
        assert!(service.get_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_and_exists() {
        let repo = FakeRepo::with(vec![member(1, "Alice"), member(2, "Bob")]);
        let service = MemberService::new(repo.clone());

        assert_eq!(service.get_all().await.unwrap().len(), 2);
        assert!(service.exists(2).await.unwrap());
        assert!(!service.exists(3).await.unwrap());
        assert_eq!(
            repo.calls(),
            vec![Call::FindAll, Call::Exists(2), Call::Exists(3)]
        );
    }

    #[tokio::test]
    async fn test_update_returns_false_when_member_does_not_exist() {
        let repo = FakeRepo::with(vec![]);
        let service = MemberService::new(repo.clone());

        let updated = service.update(1, member(1, "Updated")).await.unwrap();
        assert!(!updated);
        assert!(repo.rows.lock().is_empty());
    }

    #[tokio::test]
    async fn test_update_writes_once_and_returns_true_when_member_exists() {
        let repo = FakeRepo::with(vec![member(1, "Alice")]);
        let service = MemberService::new(repo.clone());

        let updated = service.update(1, member(1, "Updated")).await.unwrap();
        assert!(updated);
        assert_eq!(repo.calls(), vec![Call::Update(member(1, "Updated"))]);
    }

    #[tokio::test]
    async fn test_update_forces_path_id() {
        let repo = FakeRepo::with(vec![member(1, "Alice"), member(2, "Bob")]);
        let service = MemberService::new(repo.clone());

        // 请求体中的 id 被忽略
        assert!(service.update(1, member(2, "Updated")).await.unwrap());
        let rows = repo.rows.lock();
        assert_eq!(rows[&1].full_name, "Updated");
        assert_eq!(rows[&2].full_name, "Bob");
    }

    #[tokio::test]
    async fn test_create_returns_entity_with_assigned_id() {
        let repo = FakeRepo::with(vec![member(4, "Existing")]);
        let service = MemberService::new(repo.clone());

        let data = NewMember {
            full_name: "Carol".into(),
            email: "carol@example.com".into(),
            phone_number: Some("555-0100".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 12, 1).unwrap(),
            status: "Active".into(),
        };
        let created = service.create(data.clone()).await.unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created, data.into_member(5));
        assert_eq!(service.get_by_id(5).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_delete_returns_false_when_member_does_not_exist() {
        let service = MemberService::new(FakeRepo::with(vec![]));
        assert!(!service.delete(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_calls_repository_once_when_member_exists() {
        let repo = FakeRepo::with(vec![member(3, "Dave")]);
        let service = MemberService::new(repo.clone());

        assert!(service.delete(3).await.unwrap());
        assert_eq!(repo.calls(), vec![Call::Delete(3)]);
        assert!(!service.delete(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let service = MemberService::new(FakeRepo::failing());
        assert!(matches!(
            service.get_all().await,
            Err(RepoError::Database(_))
        ));
        assert!(service.delete(1).await.is_err());
    }
}
