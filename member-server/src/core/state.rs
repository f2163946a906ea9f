use std::sync::Arc;

use crate::core::Config;
use crate::core::Result;
use crate::db::DbService;
use crate::db::repository::SqliteMemberRepository;
use crate::services::MemberService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段克隆成本极低 (连接池和服务内部均为 Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | members | MemberService | 会员服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub members: MemberService,
}

impl ServerState {
    /// 打开数据库 (含迁移) 并组装服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::with_db(config.clone(), db))
    }

    /// 使用已打开的数据库组装状态
    pub fn with_db(config: Config, db: DbService) -> Self {
        let repo = SqliteMemberRepository::new(db.pool.clone());
        Self {
            config: Arc::new(config),
            db,
            members: MemberService::new(Arc::new(repo)),
        }
    }
}
